//! Widgets provided by Horizon Seek.
//!
//! - [`seek_bar`]: the seek bar control and its building blocks
//! - [`animation`]: easing curves and elapsed-time animated values

pub mod animation;
pub mod seek_bar;

/// Drag axis of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Bottom to top.
    Vertical,
}

impl Orientation {
    /// Get the cross (perpendicular) orientation.
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}
