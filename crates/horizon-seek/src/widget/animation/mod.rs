//! Animation support for Horizon Seek.
//!
//! This module provides easing functions and the elapsed-time driven
//! [`AnimatedValue`] used for every animated visual of the seek bar.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_seek::widget::animation::{AnimatedValue, AnimationConfig};
//!
//! let mut thumb = AnimatedValue::new(0.0);
//! thumb.set_target(1.0, &AnimationConfig::default());
//! while thumb.tick(Duration::from_millis(16)) {}
//! assert_eq!(thumb.value(), 1.0);
//! ```

mod animated;
mod easing;

pub use animated::{AnimatedValue, AnimationConfig};
pub use easing::{Easing, ease, lerp_eased};
