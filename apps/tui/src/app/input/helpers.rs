use crate::ui::ViewLayout;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Pointer gesture after translating raw crossterm mouse events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Positive scrolls forward.
    Wheel(f64),
    Click { column: u16, row: u16 },
}

pub fn gesture(mouse: MouseEvent, wheel_step: f64) -> Option<Gesture> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Gesture::Wheel(wheel_step)),
        MouseEventKind::ScrollUp => Some(Gesture::Wheel(-wheel_step)),
        MouseEventKind::Down(MouseButton::Left) => Some(Gesture::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Prev,
    Next,
    Body,
    Outside,
}

pub fn region(layout: &ViewLayout, column: u16, row: u16) -> Region {
    let position = Position::new(column, row);
    let hit = |rect: Rect| rect.contains(position);
    if hit(layout.prev) {
        Region::Prev
    } else if hit(layout.next) {
        Region::Next
    } else if hit(layout.body) {
        Region::Body
    } else {
        Region::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view_layout;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn wheel_direction_follows_scroll() {
        assert_eq!(
            gesture(mouse(MouseEventKind::ScrollDown, 0, 0), 50.0),
            Some(Gesture::Wheel(50.0))
        );
        assert_eq!(
            gesture(mouse(MouseEventKind::ScrollUp, 0, 0), 50.0),
            Some(Gesture::Wheel(-50.0))
        );
    }

    #[test]
    fn only_left_presses_click() {
        assert_eq!(
            gesture(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), 50.0),
            Some(Gesture::Click { column: 3, row: 4 })
        );
        assert_eq!(
            gesture(mouse(MouseEventKind::Up(MouseButton::Left), 3, 4), 50.0),
            None
        );
        assert_eq!(gesture(mouse(MouseEventKind::Moved, 3, 4), 50.0), None);
    }

    #[test]
    fn regions_match_the_layout() {
        let layout = view_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(region(&layout, 0, 10), Region::Prev);
        assert_eq!(region(&layout, 99, 10), Region::Next);
        assert_eq!(region(&layout, 50, 10), Region::Body);
        assert_eq!(region(&layout, 50, 0), Region::Outside);
        assert_eq!(region(&layout, 50, 29), Region::Outside);
    }
}
