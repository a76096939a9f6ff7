use crate::data::{month_color, USER_STATS};
use crate::ui::widgets::popup::centered_fixed;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{heading, muted, ACCENT};

pub fn render_landing(f: &mut Frame<'_>, area: Rect) {
    let swatches = (0..5)
        .map(|index| Style::default().fg(month_color(index)))
        .map(|style| Span::styled("● ", style))
        .collect::<Vec<_>>();

    let lines = vec![
        TextLine::from(swatches),
        TextLine::default(),
        heading(format!("Your {} Wrapped is ready", USER_STATS.year)),
        TextLine::default(),
        muted("A look back at your year of questions and time saved."),
        TextLine::default(),
        TextLine::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("View your Wrapped", Style::default().fg(Color::Gray)),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(paragraph, centered_fixed(64, 10, area));

    let hint = Paragraph::new(muted("q quit · F1 help")).alignment(Alignment::Center);
    f.render_widget(
        hint,
        Rect {
            y: area.bottom().saturating_sub(1),
            height: 1.min(area.height),
            ..area
        },
    );
}
