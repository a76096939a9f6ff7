use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::app::{handle_input, handle_mouse, App};
use crate::ui;

/// How long the reader blocks before checking whether the loop is gone.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Forwards terminal events until the receiving side is dropped.
fn spawn_reader(tx: UnboundedSender<Event>) {
    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }
        match event::poll(EVENT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("terminal read failed: {e}");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                warn!("terminal poll failed: {e}");
                break;
            }
        }
    });
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Applies one terminal event to the app.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if is_interrupt(&key) {
                app.quit();
            } else {
                handle_input(app, key.code);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => app.resize(width, height),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
    }
}

fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App) -> Result<()> {
    terminal
        .draw(|f| ui::ui(app, f))
        .map(|_| ())
        .map_err(|e| eyre!("Terminal draw error: {e}"))
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let (tx, mut rx): (UnboundedSender<Event>, UnboundedReceiver<Event>) =
        mpsc::unbounded_channel();
    spawn_reader(tx);

    let size = terminal.size().wrap_err("reading terminal size")?;
    app.resize(size.width, size.height);

    let mut frames = interval(app.config.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(fps = app.config.frame_rate, "event loop started");

    while app.running {
        tokio::select! {
            _ = frames.tick() => {
                app.update();
                draw(terminal, app)?;
            }
            event = rx.recv() => {
                let Some(event) = event else {
                    debug!("input channel closed");
                    break;
                };
                handle_event(app, event);
            }
        }
    }

    info!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::SlideId;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new(AppConfig::default());
        let ctrl_c = key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        handle_event(&mut app, ctrl_c);
        assert!(!app.running);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = App::new(AppConfig::default());
        handle_event(
            &mut app,
            key(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release),
        );
        assert_eq!(app.current_slide(), None);
        handle_event(
            &mut app,
            key(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press),
        );
        assert_eq!(app.current_slide(), Some(SlideId::Intro));
    }

    #[test]
    fn resize_updates_the_hit_area() {
        let mut app = App::new(AppConfig::default());
        handle_event(&mut app, Event::Resize(120, 40));
        assert_eq!(app.area.width, 120);
        assert_eq!(app.area.height, 40);
    }

    #[test]
    fn mouse_events_reach_the_timeline() {
        let mut app = App::new(AppConfig::default());
        app.open_slide(SlideId::Journey);
        for _ in 0..3 {
            handle_event(
                &mut app,
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::ScrollDown,
                    column: 10,
                    row: 10,
                    modifiers: KeyModifiers::NONE,
                }),
            );
        }
        assert!(app.deck.timeline().is_zoomed());
    }
}
