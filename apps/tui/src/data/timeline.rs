use crate::domain::{CardSize, Stat, TimelineEntry};
use ratatui::style::Color;

pub const MONTH_COUNT: usize = 12;

/// Angular span the months are spread over, in tick units.
pub const TIMELINE_SPAN: usize = 180;

/// Evenly spreads `index` over `0..=span` and rounds to the nearest tick.
pub const fn spread_angle(index: usize, count: usize, span: usize) -> u16 {
    if count < 2 {
        return 0;
    }
    let steps = count - 1;
    ((index * span * 2 + steps) / (steps * 2)) as u16
}

pub const fn month_angle(index: usize) -> u16 {
    spread_angle(index, MONTH_COUNT, TIMELINE_SPAN)
}

const MONTH_COLORS: [Color; 5] = [
    Color::Rgb(0x17, 0x6B, 0xE5), // Neptune blue
    Color::Rgb(0x7F, 0xD1, 0xFE), // Light blue nova
    Color::Rgb(0xEF, 0x91, 0xF7), // Pink nebula
    Color::Rgb(0xFF, 0x82, 0x4D), // Saturn orange
    Color::Rgb(0xFF, 0xD2, 0xE1), // Pink moon
];

pub const fn month_color(index: usize) -> Color {
    MONTH_COLORS[index % MONTH_COLORS.len()]
}

pub static TIMELINE: [TimelineEntry; MONTH_COUNT] = [
    TimelineEntry {
        id: "jan",
        display_month: "January",
        short_label: "Jan",
        angle_degree: month_angle(0),
        card_size: CardSize::Large,
        title: "Fresh Start",
        description: "You kicked off the year with Super searches.",
        stats: &[
            Stat {
                label: "Questions",
                value: "52",
            },
            Stat {
                label: "Saved",
                value: "6h",
            },
        ],
        emoji: Some("🚀"),
    },
    TimelineEntry {
        id: "feb",
        display_month: "February",
        short_label: "Feb",
        angle_degree: month_angle(1),
        card_size: CardSize::Medium,
        title: "Building Momentum",
        description: "Finding answers faster across your tools.",
        stats: &[
            Stat {
                label: "Questions",
                value: "61",
            },
            Stat {
                label: "Sources",
                value: "5",
            },
        ],
        emoji: Some("📈"),
    },
    TimelineEntry {
        id: "mar",
        display_month: "March",
        short_label: "Mar",
        angle_degree: month_angle(2),
        card_size: CardSize::Large,
        title: "Super User",
        description: "You connected 2 new sources to Super this month.",
        stats: &[
            Stat {
                label: "Questions",
                value: "78",
            },
            Stat {
                label: "New sources",
                value: "2",
            },
        ],
        emoji: Some("⚡"),
    },
    TimelineEntry {
        id: "apr",
        display_month: "April",
        short_label: "Apr",
        angle_degree: month_angle(3),
        card_size: CardSize::Medium,
        title: "Slack Champion",
        description: "Most of your questions came from Slack this month.",
        stats: &[
            Stat {
                label: "Questions",
                value: "65",
            },
            Stat {
                label: "Via Slack",
                value: "78%",
            },
        ],
        emoji: Some("💬"),
    },
    TimelineEntry {
        id: "may",
        display_month: "May",
        short_label: "May",
        angle_degree: month_angle(4),
        card_size: CardSize::Medium,
        title: "Workflow Wizard",
        description: "You discovered custom assistants and workflows.",
        stats: &[
            Stat {
                label: "Questions",
                value: "72",
            },
            Stat {
                label: "Workflows",
                value: "12",
            },
        ],
        emoji: Some("🤖"),
    },
    TimelineEntry {
        id: "jun",
        display_month: "June",
        short_label: "Jun",
        angle_degree: month_angle(5),
        card_size: CardSize::Large,
        title: "Team Player",
        description: "Your searches helped 5 teammates find answers.",
        stats: &[
            Stat {
                label: "Questions",
                value: "84",
            },
            Stat {
                label: "Helped",
                value: "5",
            },
        ],
        emoji: Some("🤝"),
    },
    TimelineEntry {
        id: "jul",
        display_month: "July",
        short_label: "Jul",
        angle_degree: month_angle(6),
        card_size: CardSize::Medium,
        title: "Summer Surge",
        description: "Steady searching through the summer months.",
        stats: &[
            Stat {
                label: "Questions",
                value: "71",
            },
            Stat {
                label: "Saved",
                value: "8h",
            },
        ],
        emoji: Some("☀️"),
    },
    TimelineEntry {
        id: "aug",
        display_month: "August",
        short_label: "Aug",
        angle_degree: month_angle(7),
        card_size: CardSize::Medium,
        title: "Extension Explorer",
        description: "You started using the Chrome extension more.",
        stats: &[
            Stat {
                label: "Questions",
                value: "89",
            },
            Stat {
                label: "Extension",
                value: "45%",
            },
        ],
        emoji: Some("🌐"),
    },
    TimelineEntry {
        id: "sep",
        display_month: "September",
        short_label: "Sep",
        angle_degree: month_angle(8),
        card_size: CardSize::Large,
        title: "Peak Performance",
        description: "Your busiest month with Super all year!",
        stats: &[
            Stat {
                label: "Questions",
                value: "102",
            },
            Stat {
                label: "Accuracy",
                value: "98%",
            },
        ],
        emoji: Some("🔥"),
    },
    TimelineEntry {
        id: "oct",
        display_month: "October",
        short_label: "Oct",
        angle_degree: month_angle(9),
        card_size: CardSize::Large,
        title: "Streak Master",
        description: "23 consecutive days of using Super.",
        stats: &[
            Stat {
                label: "Questions",
                value: "88",
            },
            Stat {
                label: "Streak",
                value: "23d",
            },
        ],
        emoji: Some("📅"),
    },
    TimelineEntry {
        id: "nov",
        display_month: "November",
        short_label: "Nov",
        angle_degree: month_angle(10),
        card_size: CardSize::Medium,
        title: "Knowledge Seeker",
        description: "Notion became your most-searched source.",
        stats: &[
            Stat {
                label: "Questions",
                value: "56",
            },
            Stat {
                label: "Top source",
                value: "Notion",
            },
        ],
        emoji: Some("📝"),
    },
    TimelineEntry {
        id: "dec",
        display_month: "December",
        short_label: "Dec",
        angle_degree: month_angle(11),
        card_size: CardSize::Large,
        title: "Year in Review",
        description: "What a year of finding answers with Super!",
        stats: &[
            Stat {
                label: "Total",
                value: "847",
            },
            Stat {
                label: "Saved",
                value: "94h",
            },
        ],
        emoji: Some("🎉"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_match_rounded_even_spread() {
        for (index, entry) in TIMELINE.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = (index as f64 * 180.0 / 11.0).round() as u16;
            assert_eq!(entry.angle_degree, expected, "month {index}");
        }
    }

    #[test]
    fn angles_are_strictly_increasing_and_span_the_half_turn() {
        let angles: Vec<u16> = TIMELINE.iter().map(|entry| entry.angle_degree).collect();
        assert_eq!(
            angles,
            vec![0, 16, 33, 49, 65, 82, 98, 115, 131, 147, 164, 180]
        );
    }

    #[test]
    fn degenerate_spread_stays_at_zero() {
        assert_eq!(spread_angle(0, 1, 180), 0);
        assert_eq!(spread_angle(0, 0, 180), 0);
    }

    #[test]
    fn palette_cycles_every_five_months() {
        assert_eq!(month_color(0), month_color(5));
        assert_eq!(month_color(1), month_color(11));
        assert_ne!(month_color(0), month_color(1));
    }
}
