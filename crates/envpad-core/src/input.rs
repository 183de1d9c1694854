//! Host-neutral pointer event model.
//!
//! The shell translates whatever the window system delivers (mouse buttons,
//! touch contacts) into these events; the controls only see pointer identity
//! and position.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Identifies one pointer: the mouse cursor or a single touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The mouse cursor. Touch contacts use ids offset away from this.
    pub const MOUSE: PointerId = PointerId(0);
}

/// A pointer event as delivered by the host window system.
///
/// Positions are in the same coordinate space as widget bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer pressed: mouse button down or touch began.
    Down { pointer: PointerId, position: Point },
    /// Pointer moved.
    Moved { pointer: PointerId, position: Point },
    /// Pointer released.
    Up { pointer: PointerId, position: Point },
    /// The host cancelled this pointer's gesture; no final position applies.
    Cancelled { pointer: PointerId },
}

impl PointerEvent {
    /// The pointer this event belongs to.
    pub fn pointer(&self) -> PointerId {
        match *self {
            PointerEvent::Down { pointer, .. }
            | PointerEvent::Moved { pointer, .. }
            | PointerEvent::Up { pointer, .. }
            | PointerEvent::Cancelled { pointer } => pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_accessor() {
        let id = PointerId(3);
        let ev = PointerEvent::Down {
            pointer: id,
            position: Point::new(1.0, 2.0),
        };
        assert_eq!(ev.pointer(), id);
        assert_eq!(PointerEvent::Cancelled { pointer: id }.pointer(), id);
    }

    #[test]
    fn test_mouse_id_is_reserved() {
        assert_eq!(PointerId::MOUSE, PointerId(0));
        assert_ne!(PointerId::MOUSE, PointerId(1));
    }
}
