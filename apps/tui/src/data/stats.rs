use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Assistant {
    pub name: &'static str,
    pub runs: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthlyCount {
    pub month: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub traits: [&'static str; 3],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserStats {
    pub name: &'static str,
    pub year: u16,
    pub total_questions: u64,
    pub questions_answered: u64,
    pub time_saved_hours: u64,
    pub search_accuracy: u8,
    pub peak_usage_day: &'static str,
    pub peak_usage_hour: &'static str,
    pub most_active_month: &'static str,
    pub longest_streak: u32,
    pub connected_sources: u32,
    pub favorite_source: &'static str,
    pub sources_searched: &'static [&'static str],
    pub slack_questions: u64,
    pub chrome_extension_questions: u64,
    pub web_app_questions: u64,
    pub workflows_run: u64,
    pub top_assistants: &'static [Assistant],
    pub questions_deflected: u64,
    pub colleagues_helped: u32,
    pub archetype: Archetype,
    pub monthly_questions: &'static [MonthlyCount],
}

impl UserStats {
    /// Share of all questions asked from `count`, in percent.
    pub fn share_of_total(&self, count: u64) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let share = count as f64 / self.total_questions as f64 * 100.0;
        share
    }

    pub fn busiest_assistant(&self) -> Option<&Assistant> {
        self.top_assistants
            .iter()
            .max_by_key(|assistant| assistant.runs)
    }
}

pub static USER_STATS: UserStats = UserStats {
    name: "Alex",
    year: 2025,
    total_questions: 12_847,
    questions_answered: 12_634,
    time_saved_hours: 847,
    search_accuracy: 99,
    peak_usage_day: "Tuesday",
    peak_usage_hour: "10 AM",
    most_active_month: "September",
    longest_streak: 147,
    connected_sources: 14,
    favorite_source: "Notion",
    sources_searched: &[
        "Notion",
        "Slack",
        "Google Drive",
        "Confluence",
        "GitHub",
        "Linear",
        "Intercom",
        "Figma",
        "Jira",
        "Asana",
        "Dropbox",
        "Salesforce",
        "HubSpot",
        "Zendesk",
    ],
    slack_questions: 6847,
    chrome_extension_questions: 4123,
    web_app_questions: 1877,
    workflows_run: 2341,
    top_assistants: &[
        Assistant {
            name: "Weekly Digest",
            runs: 487,
        },
        Assistant {
            name: "Summarize feedback",
            runs: 342,
        },
        Assistant {
            name: "Create changelog",
            runs: 289,
        },
        Assistant {
            name: "Top customers",
            runs: 234,
        },
        Assistant {
            name: "Competitor analysis",
            runs: 198,
        },
        Assistant {
            name: "Meeting notes",
            runs: 156,
        },
    ],
    questions_deflected: 4521,
    colleagues_helped: 147,
    archetype: Archetype {
        name: "The Knowledge Architect",
        emoji: "🏛️",
        description: "You don't just find answers, you build systems. Your mastery of Super has transformed how your entire team accesses knowledge.",
        traits: ["Visionary", "Systematic", "Influential"],
    },
    monthly_questions: &[
        MonthlyCount {
            month: "Jan",
            count: 847,
        },
        MonthlyCount {
            month: "Feb",
            count: 923,
        },
        MonthlyCount {
            month: "Mar",
            count: 1156,
        },
        MonthlyCount {
            month: "Apr",
            count: 1089,
        },
        MonthlyCount {
            month: "May",
            count: 1234,
        },
        MonthlyCount {
            month: "Jun",
            count: 1456,
        },
        MonthlyCount {
            month: "Jul",
            count: 1123,
        },
        MonthlyCount {
            month: "Aug",
            count: 1347,
        },
        MonthlyCount {
            month: "Sep",
            count: 1567,
        },
        MonthlyCount {
            month: "Oct",
            count: 1289,
        },
        MonthlyCount {
            month: "Nov",
            count: 956,
        },
        MonthlyCount {
            month: "Dec",
            count: 860,
        },
    ],
};

/// Groups thousands with commas: 12847 -> "12,847".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The line offered for sharing on the outro slide.
pub fn share_text(stats: &UserStats) -> String {
    format!(
        "My {} Super Wrapped: {} questions asked, {} hours saved! #SuperWrapped",
        stats.year,
        format_count(stats.total_questions),
        stats.time_saved_hours
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12_847), "12,847");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn share_text_mentions_year_and_totals() {
        assert_eq!(
            share_text(&USER_STATS),
            "My 2025 Super Wrapped: 12,847 questions asked, 847 hours saved! #SuperWrapped"
        );
    }

    #[test]
    fn surface_shares_cover_all_questions() {
        let total = USER_STATS.share_of_total(USER_STATS.slack_questions)
            + USER_STATS.share_of_total(USER_STATS.chrome_extension_questions)
            + USER_STATS.share_of_total(USER_STATS.web_app_questions);
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn busiest_assistant_is_weekly_digest() {
        let busiest = USER_STATS.busiest_assistant();
        assert_eq!(busiest.map(|found| found.name), Some("Weekly Digest"));
    }

    #[test]
    fn monthly_counts_cover_the_year() {
        assert_eq!(USER_STATS.monthly_questions.len(), 12);
    }
}
