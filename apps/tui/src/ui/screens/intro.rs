use crate::data::{month_color, USER_STATS};
use crate::ui::widgets::popup::centered_fixed;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{heading, muted, BRIGHT};

/// Big year figure, one digit per palette color.
fn year_line(year: u16) -> TextLine<'static> {
    let spans = year
        .to_string()
        .chars()
        .enumerate()
        .map(|(index, digit)| {
            Span::styled(
                format!("{digit} "),
                Style::default()
                    .fg(month_color(index))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect::<Vec<_>>();
    TextLine::from(spans)
}

pub fn render_intro(f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::styled("✦ Super Wrapped", Style::default().fg(BRIGHT)),
        TextLine::default(),
        year_line(USER_STATS.year),
        TextLine::default(),
        heading(format!("Hey {},", USER_STATS.name)),
        muted("let's explore your year with Super."),
        TextLine::default(),
        TextLine::default(),
        muted("Powered by Super"),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
        centered_fixed(48, 9, area),
    );
}
