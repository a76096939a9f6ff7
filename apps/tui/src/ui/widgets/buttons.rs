use crate::app::App;
use crate::domain::SlideId;
use crate::ui::ViewLayout;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Which side strips are live for the current slide, as `(prev, next)`.
///
/// The journey hands its strips to the timeline while a month is open;
/// elsewhere they follow the deck, minus the ends.
pub fn active_buttons(app: &App) -> (bool, bool) {
    let deck = &app.deck;
    if deck.current() == SlideId::Journey {
        let zoomed = deck.timeline().is_zoomed();
        return (zoomed, zoomed);
    }
    (!deck.is_first(), !deck.is_last())
}

pub fn render_nav_buttons(app: &App, f: &mut Frame<'_>, layout: &ViewLayout) {
    let (prev, next) = active_buttons(app);
    if prev {
        render_button(f, layout.prev, "‹");
    }
    if next {
        render_button(f, layout.next, "›");
    }
}

fn render_button(f: &mut Frame<'_>, area: Rect, glyph: &'static str) {
    if area.height == 0 {
        return;
    }
    let mut lines = vec![TextLine::default(); usize::from(area.height / 2)];
    lines.push(TextLine::from(glyph));
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Rgb(0xa1, 0xa1, 0xa1))),
        area,
    );
}
