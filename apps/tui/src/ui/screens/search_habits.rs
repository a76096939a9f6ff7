use crate::data::stats::format_count;
use crate::data::USER_STATS;
use crate::reveal::RevealGate;
use crate::ui::widgets::charts::surface_lines;
use crate::ui::widgets::popup::centered_fixed;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::{card_block, heading, muted, stat_row};

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 14;

/// Clickable card; a click flips it.
pub fn card_area(body: Rect) -> Rect {
    centered_fixed(CARD_WIDTH, CARD_HEIGHT, body)
}

pub fn render_search_habits(gate: RevealGate, f: &mut Frame<'_>, area: Rect) {
    let card = card_area(area);
    let title = if gate.is_revealed() {
        "Where You Search"
    } else {
        "When You Search"
    };

    if card.y > area.y {
        f.render_widget(
            Paragraph::new(heading(title)).alignment(Alignment::Center),
            Rect {
                y: card.y - 1,
                height: 1,
                ..area
            },
        );
    }

    let inner_width = usize::from(card.width.saturating_sub(4));
    let lines = if gate.is_revealed() {
        back_side(inner_width)
    } else {
        front_side(inner_width)
    };

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(card_block(&USER_STATS.year.to_string()))
            .wrap(Wrap { trim: false }),
        card,
    );
}

fn front_side(width: usize) -> Vec<TextLine<'static>> {
    vec![
        TextLine::default(),
        stat_row("Peak day", USER_STATS.peak_usage_day, width),
        stat_row("Peak hour", USER_STATS.peak_usage_hour, width),
        stat_row("Most active month", USER_STATS.most_active_month, width),
        stat_row(
            "Longest streak",
            format!("{} days", USER_STATS.longest_streak),
            width,
        ),
        TextLine::default(),
        muted("  press f or click the card to flip"),
    ]
}

fn back_side(width: usize) -> Vec<TextLine<'static>> {
    let mut lines = vec![TextLine::default()];
    lines.extend(surface_lines(&USER_STATS, width.saturating_sub(34).max(4)));
    lines.push(TextLine::default());
    lines.push(stat_row(
        "Total questions",
        format_count(USER_STATS.total_questions),
        width,
    ));
    lines
}
