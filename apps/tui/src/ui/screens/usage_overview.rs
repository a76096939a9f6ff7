use crate::data::stats::format_count;
use crate::data::USER_STATS;
use crate::ui::widgets::charts::render_monthly_barchart;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{card_block, heading, muted, stat_row};

const TOP_SOURCES: usize = 3;

pub fn render_usage_overview(f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(7),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Text::from(vec![
            heading("Usage Overview"),
            muted("Top 0.001% · super.work/2025"),
        ]))
        .alignment(Alignment::Center),
        rows[0],
    );

    render_monthly_barchart(&USER_STATS, f, rows[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let sources = USER_STATS
        .sources_searched
        .iter()
        .take(TOP_SOURCES)
        .enumerate()
        .map(|(rank, name)| format!(" {}. {name}", rank + 1))
        .map(TextLine::from)
        .collect::<Vec<_>>();
    f.render_widget(
        Paragraph::new(Text::from(sources)).block(card_block("Top Sources")),
        columns[0],
    );

    let width = usize::from(columns[1].width.saturating_sub(2));
    let saved = format!("{}h", USER_STATS.time_saved_hours);
    let year = vec![
        stat_row("Questions", format_count(USER_STATS.total_questions), width),
        stat_row("Workflows", format_count(USER_STATS.workflows_run), width),
        stat_row("Time Saved", saved, width),
        stat_row("Streak", format!("{}d", USER_STATS.longest_streak), width),
    ];
    f.render_widget(
        Paragraph::new(Text::from(year)).block(card_block("Your Year")),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::test_support::draw;

    #[test]
    fn shows_top_three_sources_and_year_totals() {
        let text = draw(100, 30, |f| render_usage_overview(f, f.area()));
        assert!(text.contains("1. Notion"));
        assert!(text.contains("3. Google Drive"));
        assert!(!text.contains("4. Confluence"));
        assert!(text.contains("147d"));
    }
}
