//! EnvPad Core Library
//!
//! Platform-agnostic control logic for the EnvPad value-area and slider
//! widgets: axis range math, pixel mapping and the drag gesture state machine.

pub mod area;
pub mod axis;
pub mod gesture;
pub mod input;
pub mod slider;

pub use area::ValueArea;
pub use axis::{Axis, AxisRange};
pub use gesture::Grab;
pub use input::{PointerEvent, PointerId};
pub use slider::{Orientation, Slider};
