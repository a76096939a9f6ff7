use crate::app::App;
use crate::domain::SlideId;
use crate::timeline::TimelineView;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Context-sensitive key hints for the current slide.
pub fn hints(app: &App) -> &'static str {
    let deck = &app.deck;
    match deck.current() {
        SlideId::Journey => match deck.timeline().view() {
            TimelineView::Overview => "scroll to zoom · click a month · ←/→ slides · q quit",
            TimelineView::MonthBrowser => "scroll or ↓/↑ months · n/p · Esc zoom out · q quit",
        },
        SlideId::SearchHabits if !deck.gate().is_revealed() => {
            "f flip · → reveal · ← back · q quit"
        }
        SlideId::Outro => "r restart · ← back · q quit",
        _ => "→ next · ← back · F1 help · q quit",
    }
}

pub fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let position = format!(
        "{}/{} {}",
        app.deck.index() + 1,
        app.deck.len(),
        app.deck.current().label()
    );
    let line = TextLine::from(vec![
        Span::styled(position, Style::default().fg(Color::Rgb(0xa1, 0xa1, 0xa1))),
        Span::raw("   "),
        Span::styled(hints(app), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
