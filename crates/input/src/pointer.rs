use glam::Vec2;

use crate::action::Action;

/// Pointer buttons the tracker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// Tracks cursor position and button state between window events.
///
/// A primary press produces one `Action::Pick` at the last known cursor
/// position; holding the button does not repeat it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
    primary_down: bool,
    secondary_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move, in physical pixels.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// The cursor left the window.
    pub fn left(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Whether the look button is held.
    pub fn looking(&self) -> bool {
        self.secondary_down
    }

    /// Record a button transition and return the resulting action.
    pub fn button(&mut self, button: PointerButton, pressed: bool) -> Action {
        match button {
            PointerButton::Primary => {
                let was_down = std::mem::replace(&mut self.primary_down, pressed);
                match (pressed, was_down, self.position) {
                    (true, false, Some(p)) => {
                        tracing::trace!(x = p.x, y = p.y, "pick requested");
                        Action::Pick { x: p.x, y: p.y }
                    }
                    _ => Action::Noop,
                }
            }
            PointerButton::Secondary => {
                self.secondary_down = pressed;
                Action::Noop
            }
            PointerButton::Other => Action::Noop,
        }
    }
}
