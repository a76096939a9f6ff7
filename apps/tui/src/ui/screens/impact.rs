use crate::data::stats::format_count;
use crate::data::USER_STATS;
use crate::ui::widgets::popup::centered_fixed;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{card_block, heading, BRIGHT, MUTED};

pub fn impact_cards() -> [(&'static str, String); 4] {
    [
        ("Time Saved", format!("{}h", USER_STATS.time_saved_hours)),
        ("Accuracy", format!("{}%", USER_STATS.search_accuracy)),
        (
            "Questions Deflected",
            format_count(USER_STATS.questions_deflected),
        ),
        ("Total Questions", format_count(USER_STATS.total_questions)),
    ]
}

pub fn render_impact(f: &mut Frame<'_>, area: Rect) {
    let column = centered_fixed(40, 18, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(column);

    f.render_widget(
        Paragraph::new(heading("Your Impact")).alignment(Alignment::Center),
        rows[0],
    );

    for (index, (label, value)) in impact_cards().into_iter().enumerate() {
        let lines = vec![
            TextLine::from(Span::styled(label, Style::default().fg(MUTED))),
            TextLine::from(Span::styled(
                value,
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(card_block(""))
                .alignment(Alignment::Center),
            rows[index + 1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::test_support::draw;

    #[test]
    fn lists_four_impact_figures() {
        let text = draw(60, 24, |f| render_impact(f, f.area()));
        assert!(text.contains("847h"));
        assert!(text.contains("99%"));
        assert!(text.contains("4,521"));
        assert!(text.contains("12,847"));
    }
}
