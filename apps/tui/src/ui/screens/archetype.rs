use crate::data::USER_STATS;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::{card_block, heading, muted, BRIGHT};

const CHART_COLUMNS: u16 = 73;
const CHART_ROWS: f64 = 40.0;

const SOURCE_COLORS: [(&str, Color); 8] = [
    ("Notion", Color::Rgb(207, 45, 86)),
    ("Slack", Color::Rgb(219, 112, 75)),
    ("Google Drive", Color::Rgb(161, 105, 0)),
    ("Confluence", Color::Rgb(85, 165, 131)),
    ("GitHub", Color::Rgb(30, 85, 99)),
    ("Linear", Color::Rgb(98, 153, 195)),
    ("Jira", Color::Rgb(208, 107, 166)),
    ("Intercom", Color::Rgb(0, 114, 81)),
];

/// Wave of `(column, row)` points tracing one source's usage over the year.
pub fn signature_wave(source: usize) -> Vec<(f64, f64)> {
    #[allow(clippy::cast_precision_loss)]
    let index = source as f64;
    let base_row = index.mul_add(3.0, 8.0);
    let slow = index.mul_add(0.4, 2.0);
    let fast = index.mul_add(0.3, 4.0);
    let phase = index * 0.9;
    let direction = if source % 2 == 0 { 1.0 } else { -1.0 };

    (0..CHART_COLUMNS)
        .map(|column| {
            let x = f64::from(column) / f64::from(CHART_COLUMNS);
            let wave = (x * std::f64::consts::PI).mul_add(slow, phase).sin() * 8.0
                + (x * std::f64::consts::PI).mul_add(fast, phase * 1.5).sin() * 4.0;
            let trend = (x - 0.5) * 6.0 * direction;
            let row = (base_row + wave + trend)
                .clamp(2.0, CHART_ROWS - 2.0)
                .round();
            (f64::from(column), row)
        })
        .collect()
}

pub fn render_archetype(f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_profile(f, columns[0]);
    render_signature(f, columns[1]);
}

fn render_profile(f: &mut Frame<'_>, area: Rect) {
    let archetype = &USER_STATS.archetype;
    let traits = archetype
        .traits
        .iter()
        .flat_map(|name| {
            [
                Span::styled(
                    format!(" {name} "),
                    Style::default().fg(Color::Black).bg(BRIGHT),
                ),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();

    let lines = vec![
        TextLine::default(),
        TextLine::from(archetype.emoji),
        heading(archetype.name),
        TextLine::default(),
        muted(archetype.description),
        TextLine::default(),
        TextLine::from(traits),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(card_block("Your Super Signature"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_signature(f: &mut Frame<'_>, area: Rect) {
    let block = card_block("Source Usage");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(2)])
        .split(inner);

    let waves = (0..SOURCE_COLORS.len())
        .map(signature_wave)
        .collect::<Vec<_>>();
    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for (wave, (_, color)) in waves.iter().zip(SOURCE_COLORS) {
                    ctx.draw(&Points {
                        coords: wave,
                        color,
                    });
                }
            })
            .x_bounds([0.0, f64::from(CHART_COLUMNS)])
            .y_bounds([0.0, CHART_ROWS]),
        rows[0],
    );

    let legend = SOURCE_COLORS
        .iter()
        .flat_map(|(name, color)| {
            [
                Span::styled("■ ", Style::default().fg(*color)),
                Span::styled(
                    format!("{name}  "),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                ),
            ]
        })
        .collect::<Vec<_>>();
    f.render_widget(
        Paragraph::new(TextLine::from(legend)).wrap(Wrap { trim: true }),
        rows[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::test_support::draw;

    #[test]
    fn waves_span_the_year_inside_the_chart() {
        for source in 0..SOURCE_COLORS.len() {
            let wave = signature_wave(source);
            assert_eq!(wave.len(), usize::from(CHART_COLUMNS));
            assert!(wave
                .iter()
                .all(|(_, row)| (2.0..=CHART_ROWS - 2.0).contains(row)));
        }
    }

    #[test]
    fn waves_differ_between_sources() {
        assert_ne!(signature_wave(0), signature_wave(1));
    }

    #[test]
    fn shows_archetype_and_traits() {
        let text = draw(100, 24, |f| render_archetype(f, f.area()));
        assert!(text.contains("The Knowledge Architect"));
        assert!(text.contains("Visionary"));
    }
}
