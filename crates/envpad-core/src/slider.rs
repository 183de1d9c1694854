//! The legacy single-axis slider the value area generalizes.
//!
//! Same range math, padding inset and gesture rules as
//! [`ValueArea`](crate::area::ValueArea), with one axis selected by
//! orientation: horizontal consumes the pointer's x coordinate against the
//! width, vertical consumes y against the height.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::area::DEFAULT_PADDING;
use crate::axis::{Axis, AxisRange};
use crate::gesture::Grab;
use crate::input::{PointerEvent, PointerId};

/// Which window axis drives the slider's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A one-dimensional slider.
#[derive(Debug, Clone)]
pub struct Slider {
    /// Range and current value.
    pub axis: Axis,
    /// Which pointer coordinate drives the value.
    pub orientation: Orientation,
    /// Interactive inset applied on both ends of the oriented span.
    pub padding: f64,
    /// A disabled slider ignores pointer-down events.
    pub enabled: bool,
    bounds: Rect,
    grab: Grab,
}

impl Slider {
    /// Create a slider with the given range and orientation.
    pub fn new(range: AxisRange, orientation: Orientation) -> Self {
        Self {
            axis: Axis::new(range),
            orientation,
            padding: DEFAULT_PADDING,
            enabled: true,
            bounds: Rect::ZERO,
            grab: Grab::new(),
        }
    }

    /// Set the interactive inset.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Bounding box, as last supplied by the host layout.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Layout input: called by the host on every layout pass.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Whether `position` falls inside the bounding box.
    pub fn contains(&self, position: Point) -> bool {
        self.bounds.contains(position)
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.axis.value()
    }

    /// Map a pointer position into `[0, 1]` along the oriented span,
    /// clamping to the padded interactive range first. A non-positive span
    /// maps to `0`.
    pub fn to_normalized(&self, position: Point) -> f64 {
        let b = self.bounds;
        match self.orientation {
            Orientation::Horizontal => {
                let x = (b.x1 - self.padding).min(position.x.max(b.x0 + self.padding));
                let span = b.width() - 2.0 * self.padding;
                if span <= 0.0 {
                    return 0.0;
                }
                (x - b.x0 - self.padding) / span
            }
            Orientation::Vertical => {
                let y = (b.y1 - self.padding).min(position.y.max(b.y0 + self.padding));
                let span = b.height() - 2.0 * self.padding;
                if span <= 0.0 {
                    return 0.0;
                }
                (y - b.y0 - self.padding) / span
            }
        }
    }

    /// Cursor position derived from the current value and geometry. The
    /// unoriented coordinate is the bounds origin.
    pub fn value_pos(&self) -> Point {
        let b = self.bounds;
        let norm = self.axis.normalized();
        match self.orientation {
            Orientation::Horizontal => Point::new(
                b.x0 + self.padding + norm * (b.width() - 2.0 * self.padding),
                b.y0,
            ),
            Orientation::Vertical => Point::new(
                b.x0,
                b.y0 + self.padding + norm * (b.height() - 2.0 * self.padding),
            ),
        }
    }

    /// Set the value from a pointer position.
    pub fn set_value_pos(&mut self, position: Point) {
        let norm = self.to_normalized(position);
        self.axis.set_normalized(norm);
    }

    /// The pointer dragging the cursor, if any.
    pub fn grab_owner(&self) -> Option<PointerId> {
        self.grab.owner()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.grab.is_active()
    }

    /// Same press → drag → release machine as the value area, driving the
    /// single oriented axis. Returns whether the event was consumed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::Down { pointer, position } => {
                if !self.enabled || self.grab.is_active() || !self.contains(position) {
                    return false;
                }
                self.grab.take(pointer);
                self.set_value_pos(position);
                log::debug!("slider grabbed by {:?}", pointer);
                true
            }
            PointerEvent::Moved { pointer, position } => {
                if !self.grab.owns(pointer) {
                    return false;
                }
                self.set_value_pos(position);
                true
            }
            PointerEvent::Up { pointer, position } => {
                if !self.grab.owns(pointer) {
                    return false;
                }
                self.set_value_pos(position);
                self.grab.release();
                log::debug!("slider released by {:?}", pointer);
                true
            }
            PointerEvent::Cancelled { pointer } => {
                if !self.grab.owns(pointer) {
                    return false;
                }
                self.grab.release();
                true
            }
        }
    }
}
