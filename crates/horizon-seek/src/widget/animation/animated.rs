//! Elapsed-time driven value animation.
//!
//! An [`AnimatedValue`] interpolates one scalar from where it currently is to
//! a target. Time only moves when the host calls [`AnimatedValue::tick`], so
//! frame pacing is entirely up to the host and tests stay deterministic.

use std::time::Duration;

use horizon_seek_core::logging::targets;

use super::easing::{Easing, lerp_eased};

/// How value changes are animated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    /// When false every change jumps straight to its target.
    pub enabled: bool,
    /// Duration of one transition.
    pub duration: Duration,
    /// Easing curve of a transition.
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: Duration::from_millis(200),
            easing: Easing::EaseOutCubic,
        }
    }
}

impl AnimationConfig {
    /// A configuration that never animates.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the transition duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Whether a change would actually be interpolated.
    #[inline]
    pub fn animates(&self) -> bool {
        self.enabled && !self.duration.is_zero()
    }
}

/// A scalar that eases toward a target over elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    /// Value as of the last tick.
    current: f32,
    /// Value the running transition started from.
    start: f32,
    /// Value the transition ends on.
    target: f32,
    /// Time spent in the running transition.
    elapsed: Duration,
    /// Total length of the running transition.
    duration: Duration,
    /// Curve of the running transition.
    easing: Easing,
    /// Whether a transition is in progress.
    running: bool,
}

impl AnimatedValue {
    /// Create a settled value.
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            start: value,
            target: value,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
            running: false,
        }
    }

    /// The value to draw this frame.
    #[inline]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// The value the animation is heading to.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether a transition is in progress.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Linear progress of the running transition in [0, 1]; 1 when settled.
    pub fn progress(&self) -> f32 {
        if !self.running || self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Move to `target` and settle there immediately.
    pub fn jump_to(&mut self, target: f32) {
        self.current = target;
        self.start = target;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.running = false;
    }

    /// Start easing toward `target` from the current (possibly partial) value.
    ///
    /// Retargeting to the target already being approached keeps the running
    /// transition. Jumps when `config` does not animate.
    pub fn set_target(&mut self, target: f32, config: &AnimationConfig) {
        if !config.animates() {
            self.jump_to(target);
            return;
        }
        if target == self.target && (self.running || self.current == target) {
            return;
        }

        tracing::trace!(
            target: targets::ANIMATION,
            from = self.current,
            to = target,
            "animation retargeted"
        );
        self.start = self.current;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.duration = config.duration;
        self.easing = config.easing;
        self.running = true;
    }

    /// Advance by `dt`. Returns whether the value is still animating.
    ///
    /// A zero `dt` is allowed and changes nothing.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.current = self.target;
            self.start = self.target;
            self.running = false;
            return false;
        }

        self.current = lerp_eased(self.easing, self.start, self.target, self.progress());
        true
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
