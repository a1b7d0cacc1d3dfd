//! Animated visual state of a seek bar.
//!
//! [`SeekVisuals`] lags behind the committed value: the control sets targets,
//! the host advances time with [`SeekVisuals::tick`], and the painter reads
//! the current values.

use std::time::Duration;

use horizon_seek_core::logging::targets;

use super::theme;
use crate::widget::animation::{AnimatedValue, AnimationConfig, Easing};

/// Per-tick inputs that come from the control rather than the visuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualsTick {
    /// Idle time before collapsing, if auto-hide is on.
    pub auto_hide_after: Option<Duration>,
    /// Length of the collapse animation.
    pub fade: Duration,
    /// A gesture is active; the idle timer does not run.
    pub hold: bool,
    /// The loading sweep is shown.
    pub loading: bool,
}

/// All animated parameters of one seek bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekVisuals {
    /// Normalized thumb position.
    thumb: AnimatedValue,
    /// Normalized end of the fill.
    fill: AnimatedValue,
    /// Thumb radius multiplier.
    press_scale: AnimatedValue,
    /// 1 when revealed, 0 when collapsed.
    visibility: AnimatedValue,
    /// Loading sweep phase in [0, 1).
    loading_phase: f32,
    /// Time since the last interaction.
    idle: Duration,
}

impl SeekVisuals {
    /// Settled, revealed visuals at a normalized position.
    pub fn new(position: f32) -> Self {
        Self {
            thumb: AnimatedValue::new(position),
            fill: AnimatedValue::new(position),
            press_scale: AnimatedValue::new(1.0),
            visibility: AnimatedValue::new(1.0),
            loading_phase: 0.0,
            idle: Duration::ZERO,
        }
    }

    /// Settle every animation, putting thumb and fill at `position`.
    pub fn reset(&mut self, position: f32) {
        self.thumb.jump_to(position);
        self.fill.jump_to(position);
        self.press_scale.jump_to(self.press_scale.target());
        self.visibility.jump_to(self.visibility.target());
    }

    /// Put thumb and fill directly under the pointer.
    pub fn follow(&mut self, position: f32) {
        self.thumb.jump_to(position);
        self.fill.jump_to(position);
    }

    /// Ease thumb and fill toward `position`.
    pub fn animate_to(&mut self, position: f32, config: &AnimationConfig) {
        self.thumb.set_target(position, config);
        self.fill.set_target(position, config);
    }

    /// Grow the thumb to `scale` while pressed, shrink it back otherwise.
    pub fn set_pressed(&mut self, pressed: bool, scale: f32, config: &AnimationConfig) {
        let target = if pressed { scale } else { 1.0 };
        self.press_scale.set_target(target, config);
    }

    /// Fade in and restart the idle timer.
    pub fn reveal(&mut self, fade: Duration) {
        self.idle = Duration::ZERO;
        if self.visibility.target() < 1.0 {
            tracing::trace!(target: targets::ANIMATION, "revealing");
            self.visibility.set_target(1.0, &fade_config(fade));
        }
    }

    /// Hide immediately.
    pub fn collapse(&mut self) {
        self.visibility.jump_to(0.0);
    }

    /// Advance all animations by `dt`. Returns whether anything is still moving.
    pub fn tick(&mut self, dt: Duration, input: &VisualsTick) -> bool {
        let mut moving = false;
        moving |= self.thumb.tick(dt);
        moving |= self.fill.tick(dt);
        moving |= self.press_scale.tick(dt);
        moving |= self.visibility.tick(dt);

        if input.hold {
            self.idle = Duration::ZERO;
        } else {
            self.idle = self.idle.saturating_add(dt);
            if let Some(after) = input.auto_hide_after {
                if self.idle >= after && self.visibility.target() > 0.0 {
                    tracing::debug!(target: targets::ANIMATION, idle = ?self.idle, "auto-hiding");
                    self.visibility.set_target(0.0, &fade_config(input.fade));
                    moving |= self.visibility.is_animating();
                }
            }
        }

        if input.loading {
            let advance = dt.as_secs_f32() * theme::LOADING_CYCLES_PER_SECOND;
            self.loading_phase = (self.loading_phase + advance).fract();
            moving = true;
        } else {
            self.loading_phase = 0.0;
        }

        moving
    }

    /// Thumb position to draw.
    #[inline]
    pub fn thumb_position(&self) -> f32 {
        self.thumb.value()
    }

    /// Fill end to draw.
    #[inline]
    pub fn fill_position(&self) -> f32 {
        self.fill.value()
    }

    /// Thumb radius multiplier to draw.
    #[inline]
    pub fn press_scale(&self) -> f32 {
        self.press_scale.value()
    }

    /// Visibility to draw, 0 collapsed to 1 revealed.
    #[inline]
    pub fn visibility(&self) -> f32 {
        self.visibility.value().clamp(0.0, 1.0)
    }

    /// Loading sweep phase.
    #[inline]
    pub fn loading_phase(&self) -> f32 {
        self.loading_phase
    }

    /// Time since the last interaction.
    #[inline]
    pub fn idle_time(&self) -> Duration {
        self.idle
    }

    /// Whether any animation is running.
    pub fn is_animating(&self) -> bool {
        self.thumb.is_animating()
            || self.fill.is_animating()
            || self.press_scale.is_animating()
            || self.visibility.is_animating()
    }
}

impl Default for SeekVisuals {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn fade_config(fade: Duration) -> AnimationConfig {
    AnimationConfig::default()
        .with_duration(fade)
        .with_easing(Easing::EaseInOutSine)
}
