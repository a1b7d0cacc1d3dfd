//! Conversion between normalized track positions and domain values.
//!
//! Positions are in [0, 1] along the track. Values live in
//! `[minimum, maximum]` and, when a step is set, on the grid
//! `minimum + k * step`.

use horizon_seek_core::logging::targets;

use super::config::{SeekBarConfig, SnapRounding};

/// Distance from the midpoint between two steps, in steps, still treated as a tie.
const TIE_TOLERANCE: f64 = 1e-9;

/// Maps positions to values and back, clamping and snapping as configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    minimum: f64,
    maximum: f64,
    step: f64,
    rounding: SnapRounding,
}

impl ValueMapper {
    /// Create a mapper over an already validated range.
    ///
    /// A reversed range is treated as empty, and a negative or non-finite step
    /// as continuous.
    pub fn new(minimum: f64, maximum: f64, step: f64, rounding: SnapRounding) -> Self {
        Self {
            minimum,
            maximum: maximum.max(minimum),
            step: if step.is_finite() && step > 0.0 { step } else { 0.0 },
            rounding,
        }
    }

    /// Create a mapper from a configuration.
    pub fn from_config(config: &SeekBarConfig) -> Self {
        Self::new(config.minimum, config.maximum, config.step, config.snap_rounding)
    }

    /// Lower bound.
    #[inline]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound.
    #[inline]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Step size (0 = continuous).
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Width of the range.
    #[inline]
    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Clamp a value into the range. NaN maps to the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            tracing::debug!(target: targets::VALUE, "NaN value clamped to minimum");
            return self.minimum;
        }
        let clamped = value.clamp(self.minimum, self.maximum);
        if clamped != value {
            tracing::debug!(
                target: targets::VALUE,
                value,
                clamped,
                "value outside range clamped"
            );
        }
        clamped
    }

    /// Clamp, then move to the nearest step if a step is set.
    pub fn snap(&self, value: f64) -> f64 {
        let value = self.clamp(value);
        if self.step <= 0.0 {
            return value;
        }

        let steps = (value - self.minimum) / self.step;
        let last = (self.range() / self.step + TIE_TOLERANCE).floor();
        let lower = steps.floor();
        let fraction = steps - lower;

        let k = if (fraction - 0.5).abs() <= TIE_TOLERANCE {
            match self.rounding {
                SnapRounding::HalfToEven if lower % 2.0 == 0.0 => lower,
                SnapRounding::HalfToEven | SnapRounding::HalfUp => lower + 1.0,
                SnapRounding::HalfDown => lower,
            }
        } else if fraction < 0.5 {
            lower
        } else {
            lower + 1.0
        };

        (self.minimum + k.clamp(0.0, last) * self.step).min(self.maximum)
    }

    /// Convert a normalized position to a value. Out-of-range positions are clamped.
    pub fn position_to_value(&self, position: f64) -> f64 {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        self.snap(self.minimum + position * self.range())
    }

    /// Convert a value to a normalized position. Out-of-range values are clamped.
    pub fn value_to_position(&self, value: f64) -> f64 {
        let range = self.range();
        if range <= 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.minimum) / range).clamp(0.0, 1.0)
    }

    /// Index of the step a snapped value sits on, if stepped.
    pub fn step_index(&self, value: f64) -> Option<u64> {
        if self.step <= 0.0 {
            return None;
        }
        let k = ((self.snap(value) - self.minimum) / self.step).round();
        Some(k as u64)
    }
}
