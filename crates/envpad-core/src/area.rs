//! The two-dimensional value area control.
//!
//! A pad that maps a dragged pointer position independently along the
//! horizontal and vertical axes into two numeric values. The host layout
//! owns the bounding box; the control reads it on every conversion.

use kurbo::{Point, Rect};

use crate::axis::{Axis, AxisRange};
use crate::gesture::Grab;
use crate::input::{PointerEvent, PointerId};

/// Default interactive inset in pixels, leaving room for a 20px cursor.
pub const DEFAULT_PADDING: f64 = 10.0;

/// A two-dimensional value area.
///
/// `padding` insets the interactive span on both ends of each axis so the
/// cursor can be drawn without leaving the bounding box. Values are written
/// through normalized space, so clamping to the span and step quantization
/// happen as one atomic operation per event.
#[derive(Debug, Clone)]
pub struct ValueArea {
    /// Horizontal axis (range + current value).
    pub x_axis: Axis,
    /// Vertical axis (range + current value).
    pub y_axis: Axis,
    /// Interactive inset applied on both ends of each axis's span.
    pub padding: f64,
    /// A disabled area ignores pointer-down events.
    pub enabled: bool,
    bounds: Rect,
    grab: Grab,
}

impl ValueArea {
    /// Create a value area with the given per-axis ranges.
    pub fn new(x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            x_axis: Axis::new(x_range),
            y_axis: Axis::new(y_range),
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

    /// Current horizontal value.
    pub fn x_value(&self) -> f64 {
        self.x_axis.value()
    }

    /// Current vertical value.
    pub fn y_value(&self) -> f64 {
        self.y_axis.value()
    }

    /// Map a pixel x coordinate into `[0, 1]` across the interactive span.
    ///
    /// The input is clamped to `[x0 + padding, x1 - padding]` first; a
    /// non-positive span maps to `0` rather than dividing by zero.
    pub fn x_to_normalized(&self, px: f64) -> f64 {
        let b = self.bounds;
        let x = (b.x1 - self.padding).min(px.max(b.x0 + self.padding));
        let span = b.width() - 2.0 * self.padding;
        if span <= 0.0 {
            return 0.0;
        }
        (x - b.x0 - self.padding) / span
    }

    /// Map a pixel y coordinate into `[0, 1]`, symmetric with the x case.
    pub fn y_to_normalized(&self, py: f64) -> f64 {
        let b = self.bounds;
        let y = (b.y1 - self.padding).min(py.max(b.y0 + self.padding));
        let span = b.height() - 2.0 * self.padding;
        if span <= 0.0 {
            return 0.0;
        }
        (y - b.y0 - self.padding) / span
    }

    /// Inverse of [`x_to_normalized`](Self::x_to_normalized).
    pub fn x_from_normalized(&self, norm: f64) -> f64 {
        self.bounds.x0 + self.padding + norm * (self.bounds.width() - 2.0 * self.padding)
    }

    /// Inverse of [`y_to_normalized`](Self::y_to_normalized).
    pub fn y_from_normalized(&self, norm: f64) -> f64 {
        self.bounds.y0 + self.padding + norm * (self.bounds.height() - 2.0 * self.padding)
    }

    /// Cursor position derived from the current values and geometry.
    pub fn value_pos(&self) -> Point {
        Point::new(
            self.x_from_normalized(self.x_axis.normalized()),
            self.y_from_normalized(self.y_axis.normalized()),
        )
    }

    /// Set both axis values from a pointer position.
    pub fn set_value_pos(&mut self, position: Point) {
        self.set_x_value_pos(position.x);
        self.set_y_value_pos(position.y);
    }

    /// Set the horizontal value from a pixel x coordinate.
    pub fn set_x_value_pos(&mut self, px: f64) {
        self.x_axis.set_normalized(self.x_to_normalized(px));
    }

    /// Set the vertical value from a pixel y coordinate.
    pub fn set_y_value_pos(&mut self, py: f64) {
        self.y_axis.set_normalized(self.y_to_normalized(py));
    }

    /// The pointer dragging the cursor, if any.
    pub fn grab_owner(&self) -> Option<PointerId> {
        self.grab.owner()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.grab.is_active()
    }

    /// Feed a host pointer event through the press → drag → release state
    /// machine. Returns whether the event was consumed.
    ///
    /// A down inside the bounds grabs the pointer and immediately sets both
    /// values; moves and the final up only apply while the grab is held by
    /// the same pointer. A second pointer cannot steal an active drag.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::Down { pointer, position } => {
                if !self.enabled || self.grab.is_active() || !self.contains(position) {
                    return false;
                }
                self.grab.take(pointer);
                self.set_value_pos(position);
                log::debug!("value area grabbed by {:?}", pointer);
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
                log::debug!("value area released by {:?}", pointer);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> ValueArea {
        // 0..100 on both axes, 10px padding, 210px square: the interactive
        // span runs from pixel 10 to pixel 200.
        let mut area = ValueArea::new(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 100.0));
        area.set_bounds(Rect::new(0.0, 0.0, 210.0, 210.0));
        area
    }

    fn down(id: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            pointer: PointerId(id),
            position: Point::new(x, y),
        }
    }

    fn moved(id: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Moved {
            pointer: PointerId(id),
            position: Point::new(x, y),
        }
    }

    fn up(id: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            pointer: PointerId(id),
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_pixel_to_normalized_span() {
        let area = test_area();
        assert!((area.x_to_normalized(10.0)).abs() < f64::EPSILON);
        assert!((area.x_to_normalized(105.0) - 0.5).abs() < f64::EPSILON);
        assert!((area.x_to_normalized(200.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pixel_to_normalized_clamps_outside_span() {
        let area = test_area();
        assert!((area.x_to_normalized(-50.0)).abs() < f64::EPSILON);
        assert!((area.x_to_normalized(220.0) - 1.0).abs() < f64::EPSILON);
        assert!((area.y_to_normalized(300.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_width_never_divides() {
        let mut area = test_area();
        area.set_bounds(Rect::new(0.0, 0.0, 0.0, 210.0));
        assert_eq!(area.x_to_normalized(50.0), 0.0);
        // Padding larger than half the span is the same degenerate case.
        area.set_bounds(Rect::new(0.0, 0.0, 15.0, 210.0));
        assert_eq!(area.x_to_normalized(7.0), 0.0);
    }

    #[test]
    fn test_set_value_pos_maps_both_axes() {
        let mut area = test_area();
        area.set_value_pos(Point::new(105.0, 200.0));
        assert!((area.x_value() - 50.0).abs() < f64::EPSILON);
        assert!((area.y_value() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_pos_roundtrip() {
        let mut area = test_area();
        area.set_value_pos(Point::new(57.0, 143.0));
        let pos = area.value_pos();
        assert!((pos.x - 57.0).abs() < 1e-10);
        assert!((pos.y - 143.0).abs() < 1e-10);
    }

    #[test]
    fn test_beyond_right_edge_clamps_to_max() {
        let mut area = test_area();
        area.set_value_pos(Point::new(220.0, 105.0));
        assert!((area.x_value() - 100.0).abs() < f64::EPSILON);
        assert!((area.y_value() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_down_inside_grabs_and_sets_values() {
        let mut area = test_area();
        assert!(area.handle_pointer_event(&down(1, 105.0, 10.0)));
        assert!(area.is_dragging());
        assert_eq!(area.grab_owner(), Some(PointerId(1)));
        assert!((area.x_value() - 50.0).abs() < f64::EPSILON);
        assert!((area.y_value()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_down_outside_is_ignored() {
        let mut area = test_area();
        assert!(!area.handle_pointer_event(&down(1, 300.0, 300.0)));
        assert!(!area.is_dragging());
        assert!((area.x_value()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_down_while_disabled_is_ignored() {
        let mut area = test_area();
        area.enabled = false;
        assert!(!area.handle_pointer_event(&down(1, 110.0, 110.0)));
        assert!(!area.is_dragging());
    }

    #[test]
    fn test_moves_from_other_pointer_are_ignored() {
        let mut area = test_area();
        area.handle_pointer_event(&down(1, 50.0, 50.0));
        let x_before = area.x_value();
        let y_before = area.y_value();

        assert!(!area.handle_pointer_event(&moved(2, 200.0, 200.0)));
        assert!((area.x_value() - x_before).abs() < f64::EPSILON);
        assert!((area.y_value() - y_before).abs() < f64::EPSILON);
        assert_eq!(area.grab_owner(), Some(PointerId(1)));
    }

    #[test]
    fn test_second_down_cannot_steal_grab() {
        let mut area = test_area();
        area.handle_pointer_event(&down(1, 50.0, 50.0));
        assert!(!area.handle_pointer_event(&down(2, 110.0, 110.0)));
        assert_eq!(area.grab_owner(), Some(PointerId(1)));
    }

    #[test]
    fn test_up_applies_final_position_and_releases() {
        let mut area = test_area();
        area.handle_pointer_event(&down(1, 50.0, 50.0));
        area.handle_pointer_event(&moved(1, 110.0, 110.0));
        assert!(area.handle_pointer_event(&up(1, 200.0, 10.0)));

        assert!(!area.is_dragging());
        assert!((area.x_value() - 100.0).abs() < f64::EPSILON);
        assert!((area.y_value()).abs() < f64::EPSILON);

        // Released: further moves do nothing.
        assert!(!area.handle_pointer_event(&moved(1, 110.0, 110.0)));
        assert!((area.x_value() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_up_from_other_pointer_keeps_dragging() {
        let mut area = test_area();
        area.handle_pointer_event(&down(1, 50.0, 50.0));
        assert!(!area.handle_pointer_event(&up(2, 200.0, 200.0)));
        assert!(area.is_dragging());
    }

    #[test]
    fn test_cancel_releases_without_update() {
        let mut area = test_area();
        area.handle_pointer_event(&down(1, 110.0, 110.0));
        let x_before = area.x_value();

        assert!(area.handle_pointer_event(&PointerEvent::Cancelled {
            pointer: PointerId(1)
        }));
        assert!(!area.is_dragging());
        assert!((area.x_value() - x_before).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_quantization_through_pixel_path() {
        let mut area = ValueArea::new(
            AxisRange::new(0.0, 10.0).with_step(2.0),
            AxisRange::new(0.0, 10.0),
        );
        area.set_bounds(Rect::new(0.0, 0.0, 210.0, 210.0));

        // Pixel 114.5 of the 10..200 span is norm 0.55 -> 5.5 -> snaps to 6.
        area.set_x_value_pos(114.5);
        assert!((area.x_value() - 6.0).abs() < f64::EPSILON);
    }
}
