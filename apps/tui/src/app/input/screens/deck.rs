use crate::app::input::helpers::{region, Gesture, Region};
use crate::app::state::App;
use crate::domain::SlideId;
use crate::ui::screens::search_habits;
use crate::ui::view_layout;
use crossterm::event::KeyCode;
use ratatui::layout::Position;

const END_OF_DECK: &str = "That was the last slide · r to restart";

pub fn handle_deck_input(app: &mut App, slide: SlideId, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => next(app, slide),
        KeyCode::Left => {
            app.deck.go_to_prev();
        }
        KeyCode::Char('f') if slide == SlideId::SearchHabits => app.deck.toggle_gate(),
        KeyCode::Char('r') if slide == SlideId::Outro => app.restart(),
        _ => {}
    }
}

/// The wheel has no meaning off the journey; clicks hit the side strips or
/// the search habits card.
pub fn handle_deck_gesture(app: &mut App, slide: SlideId, gesture: Gesture) {
    let Gesture::Click { column, row } = gesture else {
        return;
    };
    let layout = view_layout(app.area);
    match region(&layout, column, row) {
        Region::Prev => {
            app.deck.go_to_prev();
        }
        Region::Next => next(app, slide),
        Region::Body if slide == SlideId::SearchHabits => {
            if search_habits::card_area(layout.body).contains(Position::new(column, row)) {
                app.deck.toggle_gate();
            }
        }
        _ => {}
    }
}

fn next(app: &mut App, slide: SlideId) {
    if !app.deck.go_to_next() && slide == SlideId::Outro {
        app.status_message = END_OF_DECK.to_string();
    }
}
