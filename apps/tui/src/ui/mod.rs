// UI module for year-wrapped
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::{App, Stage};
use crate::domain::SlideId;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

/// Width of the clickable prev/next strips at the sides of a slide.
pub const BUTTON_WIDTH: u16 = 5;

/// Regions of the viewing stage. Shared by the renderer and the mouse
/// handler so clicks land where things are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub progress: Rect,
    pub body: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub footer: Rect,
}

pub fn view_layout(area: Rect) -> ViewLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(rows[1]);

    ViewLayout {
        progress: rows[0],
        body: columns[1],
        prev: columns[0],
        next: columns[2],
        footer: rows[2],
    }
}

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    match app.stage {
        Stage::Landing => screens::landing::render_landing(f, area),
        Stage::Viewing => render_viewing(app, f, area),
    }

    if let Ok(mut effect) = app.slide_fx.lock() {
        if let Some(fx) = effect.as_mut() {
            f.buffer_mut().render_effect(fx, area, app.last_tick);
            if fx.done() {
                *effect = None;
            }
        }
    }

    if app.show_help {
        screens::help::render_help(app, f, area);
    }
}

fn render_viewing(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = view_layout(area);

    widgets::progress::render_progress(&app.deck, f, layout.progress);

    match app.deck.current() {
        SlideId::Intro => screens::intro::render_intro(f, layout.body),
        SlideId::Journey => screens::journey::render_journey(app, f, layout.body),
        SlideId::SearchHabits => {
            screens::search_habits::render_search_habits(app.deck.gate(), f, layout.body);
        }
        SlideId::Impact => screens::impact::render_impact(f, layout.body),
        SlideId::FunStats => screens::fun_stats::render_fun_stats(f, layout.body),
        SlideId::Archetype => screens::archetype::render_archetype(f, layout.body),
        SlideId::UsageOverview => screens::usage_overview::render_usage_overview(f, layout.body),
        SlideId::Outro => screens::outro::render_outro(app, f, layout.body),
    }

    widgets::buttons::render_nav_buttons(app, f, &layout);
    screens::footer::render_footer(app, f, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_reserves_progress_footer_and_side_strips() {
        let layout = view_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.progress, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.footer, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.prev, Rect::new(0, 1, BUTTON_WIDTH, 28));
        assert_eq!(layout.next, Rect::new(95, 1, BUTTON_WIDTH, 28));
        assert_eq!(layout.body, Rect::new(5, 1, 90, 28));
    }
}
