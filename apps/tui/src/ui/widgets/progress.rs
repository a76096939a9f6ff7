use crate::sequencer::SlideDeck;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FILLED: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
const EMPTY: Color = Color::Rgb(0x2a, 0x2a, 0x2a);

/// Segment widths for `count` slides across `width` cells, one cell gap
/// between segments; leftover cells go to the first segments.
pub fn segment_widths(count: usize, width: u16) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let gaps = u16::try_from(count - 1).unwrap_or(u16::MAX);
    let usable = width.saturating_sub(gaps);
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let base = usable / count;
    let extra = usable % count;
    (0..count)
        .map(|index| base + u16::from(index < extra))
        .collect()
}

pub fn render_progress(deck: &SlideDeck, f: &mut Frame<'_>, area: Rect) {
    let progress = deck.progress();
    let widths = segment_widths(progress.len(), area.width);

    let mut spans = Vec::with_capacity(progress.len() * 2);
    for (index, (filled, width)) in progress.iter().zip(widths).enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let color = if *filled { FILLED } else { EMPTY };
        let bar = "━".repeat(usize::from(width));
        spans.push(Span::styled(bar, Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_fill_the_row() {
        let widths = segment_widths(8, 80);
        assert_eq!(widths.len(), 8);
        assert_eq!(widths.iter().sum::<u16>() + 7, 80);
        let spread = widths.iter().max().unwrap_or(&0) - widths.iter().min().unwrap_or(&0);
        assert!(spread <= 1);
    }

    #[test]
    fn narrow_rows_do_not_underflow() {
        assert_eq!(segment_widths(8, 3), vec![0; 8]);
        assert!(segment_widths(0, 10).is_empty());
    }
}
