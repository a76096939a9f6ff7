use crate::data::stats::format_count;
use crate::data::USER_STATS;
use crate::ui::widgets::charts::render_assistants_barchart;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{card_block, heading, stat_row};

pub fn render_fun_stats(f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(heading("Your Favorites")).alignment(Alignment::Center),
        rows[0],
    );

    render_assistants_barchart(&USER_STATS, f, rows[1]);

    let width = usize::from(rows[2].width.saturating_sub(2));
    let top = USER_STATS
        .busiest_assistant()
        .map_or("none yet", |assistant| assistant.name);
    let lines = vec![
        stat_row("Top assistant", top, width),
        stat_row("Total runs", format_count(USER_STATS.workflows_run), width),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(card_block("")),
        rows[2],
    );
}
