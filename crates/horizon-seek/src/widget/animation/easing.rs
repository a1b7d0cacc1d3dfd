//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations.

use std::f32::consts::PI;

/// Overshoot amount used by [`Easing::EaseOutBack`].
const BACK_OVERSHOOT: f32 = 1.701_58;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    EaseInCubic,
    /// Cubic ease-out (more pronounced than quadratic).
    #[default]
    EaseOutCubic,
    /// Cubic ease-in-out (more pronounced than quadratic).
    EaseInOutCubic,
    /// Sinusoidal ease-in.
    EaseInSine,
    /// Sinusoidal ease-out.
    EaseOutSine,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
    /// Ease-out that passes the target slightly before settling on it.
    EaseOutBack,
}

impl Easing {
    /// Whether the curve leaves the [0, 1] range before settling.
    ///
    /// Only overshooting curves may carry an animated value past its target.
    #[inline]
    pub fn overshoots(self) -> bool {
        matches!(self, Easing::EaseOutBack)
    }
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Returns
///
/// The eased value. It is exactly 0.0 at `t = 0` and 1.0 at `t = 1`; only
/// [`Easing::EaseOutBack`] leaves the 0.0 to 1.0 range in between.
///
/// # Example
///
/// ```
/// use horizon_seek::widget::animation::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
///
/// // Ease-out: slower at end
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // NaN progress counts as finished
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };

    if t >= 1.0 {
        return 1.0;
    }

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => ease_in_quad(t),
        Easing::EaseOut => ease_out_quad(t),
        Easing::EaseInOut => ease_in_out_quad(t),
        Easing::EaseInCubic => ease_in_cubic(t),
        Easing::EaseOutCubic => ease_out_cubic(t),
        Easing::EaseInOutCubic => ease_in_out_cubic(t),
        Easing::EaseInSine => ease_in_sine(t),
        Easing::EaseOutSine => ease_out_sine(t),
        Easing::EaseInOutSine => ease_in_out_sine(t),
        Easing::EaseOutBack => ease_out_back(t),
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}

// =============================================================================
// Quadratic Easing
// =============================================================================

#[inline]
fn ease_in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// =============================================================================
// Cubic Easing
// =============================================================================

#[inline]
fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[inline]
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

// =============================================================================
// Sinusoidal Easing
// =============================================================================

#[inline]
fn ease_in_sine(t: f32) -> f32 {
    1.0 - ((t * PI) / 2.0).cos()
}

#[inline]
fn ease_out_sine(t: f32) -> f32 {
    ((t * PI) / 2.0).sin()
}

#[inline]
fn ease_in_out_sine(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

// =============================================================================
// Back Easing
// =============================================================================

#[inline]
fn ease_out_back(t: f32) -> f32 {
    let c3 = BACK_OVERSHOOT + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
}
