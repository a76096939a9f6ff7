use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_landing_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
        start(app);
    }
}

pub fn start(app: &mut App) {
    app.start();
}
