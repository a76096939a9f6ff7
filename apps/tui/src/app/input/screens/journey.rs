use crate::app::input::helpers::{region, Gesture, Region};
use crate::app::state::App;
use crate::timeline::{TimelineInput, TimelineResponse};
use crate::ui::view_layout;
use crate::ui::widgets::ring;
use crossterm::event::KeyCode;
use tracing::debug;

/// On the journey only Left/Right reach the deck; the rest drives the
/// timeline.
pub fn handle_journey_input(app: &mut App, key: KeyCode) {
    let input = match key {
        KeyCode::Left => {
            app.deck.go_to_prev();
            return;
        }
        KeyCode::Right => {
            app.deck.go_to_next();
            return;
        }
        KeyCode::Esc => TimelineInput::Escape,
        KeyCode::Down => TimelineInput::ArrowDown,
        KeyCode::Up => TimelineInput::ArrowUp,
        KeyCode::Char('n') => TimelineInput::NextButton,
        KeyCode::Char('p') => TimelineInput::PrevButton,
        _ => return,
    };
    drive_timeline(app, input);
}

pub fn handle_journey_gesture(app: &mut App, gesture: Gesture) {
    let input = match gesture {
        Gesture::Wheel(delta) => TimelineInput::Wheel(delta),
        Gesture::Click { column, row } => {
            let layout = view_layout(app.area);
            let zoomed = app.deck.timeline().is_zoomed();
            match region(&layout, column, row) {
                Region::Prev if zoomed => TimelineInput::PrevButton,
                Region::Next if zoomed => TimelineInput::NextButton,
                Region::Body => {
                    let Some(month) = ring::month_at(app, layout.body, column, row) else {
                        return;
                    };
                    debug!(month, column, row, "ring segment clicked");
                    TimelineInput::SegmentClick(month)
                }
                _ => return,
            }
        }
    };
    drive_timeline(app, input);
}

/// The deck has already moved on by the time `Complete` comes back.
fn drive_timeline(app: &mut App, input: TimelineInput) {
    match app.deck.handle_timeline(input) {
        TimelineResponse::Complete => debug!("journey complete"),
        TimelineResponse::Ignored => debug!(?input, "timeline ignored input"),
        TimelineResponse::Handled => {}
    }
}
