pub mod archetype;
pub mod footer;
pub mod fun_stats;
pub mod help;
pub mod impact;
pub mod intro;
pub mod journey;
pub mod landing;
pub mod outro;
pub mod search_habits;
pub mod usage_overview;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, BorderType, Borders};

pub const CARD_BACKGROUND: Color = Color::Rgb(0x14, 0x14, 0x14);
pub const MUTED: Color = Color::Rgb(0x6b, 0x6b, 0x6b);
pub const BRIGHT: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
pub const ACCENT: Color = Color::Rgb(0x17, 0x6B, 0xE5);

/// Rounded dark card most slides sit on.
pub fn card_block(title: &str) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(0x2a, 0x2a, 0x2a)))
        .style(Style::default().bg(CARD_BACKGROUND));
    if title.is_empty() {
        return block;
    }
    block
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(MUTED))
}

pub fn heading(text: impl Into<String>) -> TextLine<'static> {
    TextLine::from(Span::styled(
        text.into(),
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
    ))
}

pub fn muted(text: impl Into<String>) -> TextLine<'static> {
    TextLine::from(Span::styled(text.into(), Style::default().fg(MUTED)))
}

/// `label ........ value` row.
pub fn stat_row(label: &str, value: impl Into<String>, width: usize) -> TextLine<'static> {
    let value = value.into();
    let fill = width.saturating_sub(label.chars().count() + value.chars().count() + 2);
    let dots = Style::default().fg(Color::Rgb(0x2a, 0x2a, 0x2a));
    let strong = Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD);
    TextLine::from(vec![
        Span::styled(label.to_string(), Style::default().fg(MUTED)),
        Span::styled(format!(" {} ", "·".repeat(fill)), dots),
        Span::styled(value, strong),
    ])
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_row_pads_to_width() {
        let row = stat_row("Streak", "147 days", 30);
        assert_eq!(row.width(), 30);
    }
}
