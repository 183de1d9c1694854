//! Axis range math: normalization, denormalization and step quantization.

use serde::{Deserialize, Serialize};

/// Value range and quantization step for one axis of a control.
///
/// `step == 0.0` means the axis is continuous. A non-zero step snaps values
/// to multiples of `step` counted from `min`; if the range is not evenly
/// divisible by `step`, the last interval is capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Minimum value of the axis.
    pub min: f64,
    /// Maximum value of the axis.
    pub max: f64,
    /// Quantization step; `0.0` disables snapping.
    pub step: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 0.0,
        }
    }
}

impl AxisRange {
    /// Create a continuous range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, step: 0.0 }
    }

    /// Set the quantization step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Rescale `raw` into `[0, 1]` relative to `[min, max]`.
    ///
    /// Returns `0.0` for a degenerate range (`max == min`). No clamping is
    /// applied: a `raw` outside the range yields a result outside `[0, 1]`.
    pub fn normalize(&self, raw: f64) -> f64 {
        let d = self.max - self.min;
        if d == 0.0 {
            return 0.0;
        }
        (raw - self.min) / d
    }

    /// Map a normalized value back to a raw value, snapping to `step`.
    ///
    /// With `step == 0` the result is the plain affine image of `norm`.
    /// Otherwise the value snaps to the nearest multiple of `step` above
    /// `min`, capped at `max` so an uneven final interval cannot overshoot.
    /// The cap is one-sided; callers are expected to pass `norm` in `[0, 1]`.
    pub fn denormalize(&self, norm: f64) -> f64 {
        let val = norm * (self.max - self.min) + self.min;
        if self.step == 0.0 {
            val
        } else {
            (((val - self.min) / self.step).round() * self.step + self.min).min(self.max)
        }
    }
}

/// One axis of a control: a range plus the current raw value.
///
/// The raw value is the source of truth. The normalized form is derived on
/// read and inverted (with clamping and quantization) on write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Range and step configuration; takes effect on the next conversion.
    pub range: AxisRange,
    value: f64,
}

impl Axis {
    /// Create an axis resting at the bottom of its range.
    pub fn new(range: AxisRange) -> Self {
        Self {
            range,
            value: range.min,
        }
    }

    /// Current raw value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the raw value directly, bypassing quantization.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Current value rescaled to `[0, 1]`.
    pub fn normalized(&self) -> f64 {
        self.range.normalize(self.value)
    }

    /// Write the value through normalized space, applying quantization.
    pub fn set_normalized(&mut self, norm: f64) {
        self.value = self.range.denormalize(norm);
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(AxisRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_midpoint() {
        let range = AxisRange::new(0.0, 100.0);
        assert!((range.normalize(50.0) - 0.5).abs() < f64::EPSILON);
        assert!((range.normalize(0.0)).abs() < f64::EPSILON);
        assert!((range.normalize(100.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_does_not_clamp() {
        let range = AxisRange::new(0.0, 100.0);
        assert!((range.normalize(150.0) - 1.5).abs() < f64::EPSILON);
        assert!((range.normalize(-50.0) + 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_degenerate_range() {
        let range = AxisRange::new(42.0, 42.0);
        assert_eq!(range.normalize(42.0), 0.0);
        assert_eq!(range.normalize(-7.0), 0.0);
    }

    #[test]
    fn test_denormalize_continuous() {
        let range = AxisRange::new(-100.0, 100.0);
        assert!((range.denormalize(0.5)).abs() < f64::EPSILON);
        assert!((range.denormalize(0.0) + 100.0).abs() < f64::EPSILON);
        assert!((range.denormalize(1.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_continuous() {
        let range = AxisRange::new(10.0, 80.0);
        for raw in [10.0, 23.5, 45.0, 80.0] {
            let back = range.denormalize(range.normalize(raw));
            assert!((back - raw).abs() < 1e-10);
        }
    }

    #[test]
    fn test_quantize_to_nearest_step() {
        // norm 0.55 over [0, 10] is 5.5, which snaps up to 6.
        let range = AxisRange::new(0.0, 10.0).with_step(2.0);
        assert!((range.denormalize(0.55) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quantize_capped_at_max() {
        // 11 / 4 rounds to 3 steps = 12, which the cap pulls back to max.
        let range = AxisRange::new(0.0, 11.0).with_step(4.0);
        assert!((range.denormalize(1.0) - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quantize_cap_is_one_sided() {
        // Out-of-range input below min is not floored; in-repo callers
        // always pre-clamp norm to [0, 1].
        let range = AxisRange::new(0.0, 10.0).with_step(2.0);
        assert!((range.denormalize(-0.4) + 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quantized_roundtrip_stays_within_step() {
        let range = AxisRange::new(0.0, 100.0).with_step(7.0);
        for raw in [0.0, 13.0, 50.0, 96.0, 100.0] {
            let back = range.denormalize(range.normalize(raw));
            assert!((back - raw).abs() <= 7.0);
            // The result is itself a valid quantization point (or the cap).
            let steps = (back - range.min) / 7.0;
            assert!((steps - steps.round()).abs() < 1e-10 || (back - range.max).abs() < 1e-10);
        }
    }

    #[test]
    fn test_axis_set_normalized_quantizes() {
        let mut axis = Axis::new(AxisRange::new(0.0, 10.0).with_step(2.0));
        axis.set_normalized(0.55);
        assert!((axis.value() - 6.0).abs() < f64::EPSILON);
        assert!((axis.normalized() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_axis_range_change_clamps_on_next_write() {
        let mut axis = Axis::new(AxisRange::new(0.0, 100.0));
        axis.set_normalized(1.0);
        assert!((axis.value() - 100.0).abs() < f64::EPSILON);

        // Shrinking the range does not retroactively move the value.
        axis.range.max = 50.0;
        assert!((axis.value() - 100.0).abs() < f64::EPSILON);

        // The next normalized-space write lands in the new range.
        axis.set_normalized(1.0);
        assert!((axis.value() - 50.0).abs() < f64::EPSILON);
    }
}
