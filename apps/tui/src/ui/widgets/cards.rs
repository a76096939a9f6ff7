use crate::app::App;
use crate::data::TIMELINE;
use crate::timeline::cards::{self, CardPlacement};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::fade;
use super::ring::CELL_HEIGHT;

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 13;
const CARD_BACKGROUND: Color = Color::Rgb(0x14, 0x14, 0x14);

/// Area of the front card, centred in `area` and clipped to it.
pub fn card_area(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_card_stack(app: &App, f: &mut Frame<'_>, area: Rect) {
    let active = app.deck.timeline().active_month();
    let front = card_area(area);

    for placement in cards::stack(TIMELINE.len(), active) {
        if placement.opacity <= 0.0 {
            continue;
        }
        let (y, scale) = app
            .motion
            .card(placement.entry)
            .unwrap_or((placement.y, placement.scale));
        let rect = shifted(front, area, y, scale);
        if rect.width < 6 || rect.height < 3 {
            continue;
        }
        render_card(f, rect, &placement, placement.entry == active);
    }
}

/// Moves the front card by `y` virtual pixels and shrinks it by `scale`.
fn shifted(front: Rect, bounds: Rect, y: f64, scale: f64) -> Rect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let width = (f64::from(front.width) * scale).round().max(0.0) as u16;
    #[allow(clippy::cast_possible_truncation)]
    let rise = (y / CELL_HEIGHT).round() as i32;
    let x = front.x + (front.width.saturating_sub(width)) / 2;
    let top = (i32::from(front.y) + rise).max(i32::from(bounds.y));
    let top = u16::try_from(top).unwrap_or(bounds.y);
    Rect {
        x,
        y: top,
        width,
        height: front.height.min(bounds.bottom().saturating_sub(top)),
    }
}

fn render_card(f: &mut Frame<'_>, rect: Rect, placement: &CardPlacement, is_active: bool) {
    let entry = &TIMELINE[placement.entry];
    let dim = if placement.offset > 0 {
        1.0 - f64::from(placement.offset) * 0.2
    } else {
        1.0
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(fade(Color::Rgb(0x3a, 0x3a, 0x3a), dim)))
        .style(Style::default().bg(CARD_BACKGROUND));

    let mut lines = vec![
        TextLine::from(entry.emoji.unwrap_or("")),
        TextLine::from(Span::styled(
            entry.title,
            Style::default()
                .fg(fade(Color::Rgb(0xfa, 0xfa, 0xfa), dim))
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            format!("{} 2025", entry.display_month),
            Style::default().fg(Color::Rgb(0x6b, 0x6b, 0x6b)),
        )),
        TextLine::default(),
        TextLine::from(Span::styled(
            entry.description,
            Style::default().fg(fade(Color::Rgb(0xa1, 0xa1, 0xa1), dim)),
        )),
        TextLine::default(),
    ];

    let mut values = Vec::new();
    let mut labels = Vec::new();
    for stat in entry.stats {
        let width = stat.label.len().max(stat.value.len()) + 4;
        values.push(Span::styled(
            format!("{:^width$}", stat.value),
            Style::default()
                .fg(Color::Rgb(0xfa, 0xfa, 0xfa))
                .add_modifier(Modifier::BOLD),
        ));
        labels.push(Span::styled(
            format!("{:^width$}", stat.label.to_uppercase()),
            Style::default().fg(Color::Rgb(0x6b, 0x6b, 0x6b)),
        ));
    }
    if !values.is_empty() {
        lines.push(TextLine::from(values));
        lines.push(TextLine::from(labels));
    }

    if is_active {
        lines.push(TextLine::default());
        lines.push(progress_dots(placement.entry));
    }

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn progress_dots(active: usize) -> TextLine<'static> {
    let spans = (0..TIMELINE.len())
        .map(|index| {
            if index == active {
                Span::styled("━━ ", Style::default().fg(Color::Rgb(0xfa, 0xfa, 0xfa)))
            } else {
                Span::styled("• ", Style::default().fg(Color::Rgb(0x2a, 0x2a, 0x2a)))
            }
        })
        .collect::<Vec<_>>();
    TextLine::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_card_is_centred() {
        let rect = card_area(Rect::new(0, 0, 100, 33));
        assert_eq!(rect, Rect::new(28, 10, CARD_WIDTH, CARD_HEIGHT));
    }

    #[test]
    fn cards_behind_rise_and_shrink() {
        let bounds = Rect::new(0, 0, 100, 33);
        let front = card_area(bounds);
        let behind = shifted(front, bounds, -60.0, 0.84);
        assert!(behind.y < front.y);
        assert!(behind.width < front.width);
        assert!(behind.x > front.x);
    }

    #[test]
    fn shifted_cards_stay_inside_bounds() {
        let bounds = Rect::new(0, 2, 40, 10);
        let front = card_area(bounds);
        let rect = shifted(front, bounds, -400.0, 1.0);
        assert_eq!(rect.y, bounds.y);
        assert!(rect.bottom() <= bounds.bottom());
    }
}
