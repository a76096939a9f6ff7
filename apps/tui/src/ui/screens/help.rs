use crate::app::App;
use crate::cli::CliArgs;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const KEYS: [(&str, &str); 10] = [
    ("Enter / Space", "start, or next slide"),
    ("← / →", "previous / next slide"),
    ("scroll", "zoom into the timeline, then browse months"),
    ("↓ / ↑", "next / previous month while zoomed"),
    ("n / p", "timeline next / previous buttons"),
    ("click", "open a month on the ring, flip a card"),
    ("Esc", "zoom out of the timeline, close help"),
    ("f", "flip the search habits card"),
    ("r", "restart from the outro"),
    ("q", "quit"),
];

pub fn render_help(app: &App, f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(70, 70, area);

    let mut lines = KEYS
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{key:>14}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(*action),
            ])
        })
        .collect::<Vec<_>>();

    let config = &app.config;
    let motion = if config.reduced_motion { "reduced" } else { "full" };
    let settings = format!(
        "{} fps · wheel step {} · motion {motion}",
        config.frame_rate, config.wheel_step
    );
    lines.push(TextLine::default());
    lines.push(TextLine::styled(settings, Style::default().fg(Color::DarkGray)));
    lines.push(TextLine::default());
    let usage_style = Style::default().fg(Color::Gray);
    for line in CliArgs::help_text().lines() {
        lines.push(TextLine::from(Span::styled(line.to_string(), usage_style)));
    }

    let block = Block::default()
        .title(" Help (F1 / Esc to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
