use crate::app::state::{App, Stage};
use crate::domain::SlideId;
use crossterm::event::{KeyCode, MouseEvent};

use super::helpers::{gesture, Gesture};

mod deck;
mod help;
mod journey;
mod landing;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if key == KeyCode::Char('q') {
        app.quit();
        return;
    }

    let before = slide_position(app);
    match app.current_slide() {
        None => landing::handle_landing_input(app, key),
        Some(SlideId::Journey) => journey::handle_journey_input(app, key),
        Some(slide) => deck::handle_deck_input(app, slide, key),
    }
    notice_slide_change(app, before);
}

pub fn dispatch_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        return;
    }
    let Some(gesture) = gesture(mouse, app.config.wheel_step) else {
        return;
    };

    let before = slide_position(app);
    match (app.current_slide(), gesture) {
        (None, Gesture::Click { .. }) => landing::start(app),
        (None, Gesture::Wheel(_)) => {}
        (Some(SlideId::Journey), gesture) => journey::handle_journey_gesture(app, gesture),
        (Some(slide), gesture) => deck::handle_deck_gesture(app, slide, gesture),
    }
    notice_slide_change(app, before);
}

fn slide_position(app: &App) -> (Stage, usize) {
    (app.stage, app.deck.index())
}

/// Handlers move the deck directly; the app rebuilds slide state after.
fn notice_slide_change(app: &mut App, before: (Stage, usize)) {
    if slide_position(app) != before {
        app.slide_changed();
    }
}
