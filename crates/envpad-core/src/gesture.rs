//! Exclusive pointer-grab tracking for drag gestures.

use serde::{Deserialize, Serialize};

use crate::input::PointerId;

/// Tracks which pointer, if any, owns the current drag on a control.
///
/// While a grab is held, only events carrying the owning pointer's id may
/// advance or end the gesture; events from other pointers are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grab {
    owner: Option<PointerId>,
}

impl Grab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.owner.is_some()
    }

    /// The pointer that owns the current drag, if any.
    pub fn owner(&self) -> Option<PointerId> {
        self.owner
    }

    /// Whether `pointer` owns the current drag.
    pub fn owns(&self, pointer: PointerId) -> bool {
        self.owner == Some(pointer)
    }

    /// Claim the grab for `pointer`.
    pub fn take(&mut self, pointer: PointerId) {
        self.owner = Some(pointer);
    }

    /// Release the grab.
    pub fn release(&mut self) {
        self.owner = None;
    }
}
