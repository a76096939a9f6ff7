use crate::data::month_color;
use crate::data::stats::{format_count, UserStats};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

const ACCENT: Color = Color::Rgb(0x17, 0x6B, 0xE5);

pub fn render_monthly_barchart(stats: &UserStats, f: &mut Frame<'_>, area: Rect) {
    if stats.monthly_questions.is_empty() {
        let paragraph = Paragraph::new("No monthly data")
            .block(chart_block("Questions per month"))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let peak = stats
        .monthly_questions
        .iter()
        .map(|month| month.count)
        .max()
        .unwrap_or(0);

    let bars: Vec<Bar<'_>> = stats
        .monthly_questions
        .iter()
        .map(|month| {
            let color = if month.count == peak {
                ACCENT
            } else {
                Color::Rgb(0x3a, 0x3a, 0x3a)
            };
            Bar::default()
                .value(month.count)
                .label(TextLine::from(month.month))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::White).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block("Questions per month"))
        .data(BarGroup::default().bars(&bars))
        .max(peak.max(1))
        .bar_gap(1)
        .bar_width(4);

    f.render_widget(chart, area);
}

pub fn render_assistants_barchart(stats: &UserStats, f: &mut Frame<'_>, area: Rect) {
    if stats.top_assistants.is_empty() {
        let paragraph = Paragraph::new("No assistants run yet")
            .block(chart_block("Top assistants"))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar<'_>> = stats
        .top_assistants
        .iter()
        .enumerate()
        .map(|(index, assistant)| {
            Bar::default()
                .value(assistant.runs)
                .label(TextLine::from(assistant.name))
                .text_value(format!("{} runs", format_count(assistant.runs)))
                .style(Style::default().fg(month_color(index)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(month_color(index))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = stats
        .top_assistants
        .iter()
        .map(|assistant| assistant.runs)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(chart_block("Top assistants"))
        .direction(ratatui::layout::Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(0)
        .bar_width(1);

    f.render_widget(chart, area);
}

/// One row per surface: name, share bar and count.
pub fn surface_lines(stats: &UserStats, bar_width: usize) -> Vec<TextLine<'static>> {
    let surfaces = [
        ("Slack", stats.slack_questions, ACCENT),
        (
            "Chrome extension",
            stats.chrome_extension_questions,
            month_color(2),
        ),
        ("Web app", stats.web_app_questions, month_color(3)),
    ];

    surfaces
        .iter()
        .map(|(name, count, color)| {
            let share = stats.share_of_total(*count);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let filled = ((share / 100.0 * bar_width as f64).round() as usize).min(bar_width);
            TextLine::from(vec![
                Span::styled(format!("{name:<18}"), Style::default().fg(Color::Gray)),
                Span::styled("█".repeat(filled), Style::default().fg(*color)),
                Span::styled(
                    "░".repeat(bar_width - filled),
                    Style::default().fg(Color::Rgb(0x2a, 0x2a, 0x2a)),
                ),
                Span::styled(
                    format!(" {:>6}  {share:>3.0}%", format_count(*count)),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect()
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(0x2a, 0x2a, 0x2a)))
        .title_style(Style::default().fg(Color::Gray))
}
