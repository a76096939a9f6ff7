use crate::app::App;
use crate::data::stats::format_count;
use crate::data::{share_text, USER_STATS};
use crate::ui::widgets::popup::centered_fixed;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::{card_block, heading, muted, BRIGHT, MUTED};

fn figure(value: String, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!("{value} "),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{label}    "), Style::default().fg(MUTED)),
    ]
}

pub fn render_outro(app: &App, f: &mut Frame<'_>, area: Rect) {
    let figures = [
        figure(format_count(USER_STATS.total_questions), "Questions"),
        figure(format!("{}h", USER_STATS.time_saved_hours), "Saved"),
        figure(USER_STATS.connected_sources.to_string(), "Sources"),
    ]
    .concat();

    let mut lines = vec![
        heading(format!("That's a wrap on {}", USER_STATS.year)),
        muted(format!(
            "Here's to finding even more answers in {}",
            USER_STATS.year + 1
        )),
        TextLine::default(),
        TextLine::from(figures),
        TextLine::default(),
        TextLine::styled(share_text(&USER_STATS), Style::default().fg(Color::Gray)),
        TextLine::default(),
        muted("r restart · q quit"),
    ];

    if !app.status_message.is_empty() {
        lines.push(muted(app.status_message.clone()));
    }

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(card_block(""))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered_fixed(72, 13, area),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ui::screens::test_support::draw;

    #[test]
    fn offers_the_share_line_and_restart() {
        let app = App::new(AppConfig::default());
        let text = draw(90, 20, |f| render_outro(&app, f, f.area()));
        assert!(text.contains("That's a wrap on 2025"));
        assert!(text.contains("#SuperWrapped"));
        assert!(text.contains("r restart"));
    }

    #[test]
    fn shows_the_end_of_deck_notice() {
        let mut app = App::new(AppConfig::default());
        app.status_message = "That was the last slide".to_string();
        let text = draw(90, 20, |f| render_outro(&app, f, f.area()));
        assert!(text.contains("That was the last slide"));
    }
}
