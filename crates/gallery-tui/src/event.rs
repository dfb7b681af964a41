use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use gallery_core::PointerKind;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Faster tick rate while a settle transition is on screen
    animation_tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, animation_tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            animation_tick_rate,
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll at animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Map a raw terminal event onto an application event
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Only handle key press events, ignore release events
        // (crossterm 0.27+ sends release events on some systems)
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => pointer(mouse),
        // Losing focus mid-gesture means the button release will never arrive.
        Event::FocusLost => Some(AppEvent::Pointer {
            kind: PointerKind::Cancel,
            column: 0,
            row: 0,
        }),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

fn pointer(mouse: MouseEvent) -> Option<AppEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        _ => return None,
    };
    Some(AppEvent::Pointer {
        kind,
        column: mouse.column,
        row: mouse.row,
    })
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Left mouse button pressed, dragged or released at a terminal cell
    Pointer {
        kind: PointerKind,
        column: u16,
        row: u16,
    },
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_button_maps_to_pointer() {
        let cases = [
            (MouseEventKind::Down(MouseButton::Left), PointerKind::Down),
            (MouseEventKind::Drag(MouseButton::Left), PointerKind::Move),
            (MouseEventKind::Up(MouseButton::Left), PointerKind::Up),
        ];
        for (raw, expected) in cases {
            match translate(mouse(raw, 12)) {
                Some(AppEvent::Pointer { kind, column, row }) => {
                    assert_eq!(kind, expected);
                    assert_eq!(column, 12);
                    assert_eq!(row, 3);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 1)).is_none());
        assert!(translate(mouse(MouseEventKind::Moved, 1)).is_none());
        assert!(translate(mouse(MouseEventKind::ScrollDown, 1)).is_none());
    }

    #[test]
    fn test_focus_lost_cancels() {
        assert!(matches!(
            translate(Event::FocusLost),
            Some(AppEvent::Pointer {
                kind: PointerKind::Cancel,
                ..
            })
        ));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(translate(Event::Key(key)), Some(AppEvent::Key(_))));
        key.kind = KeyEventKind::Release;
        assert!(translate(Event::Key(key)).is_none());
    }
}
