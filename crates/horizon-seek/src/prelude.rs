//! Prelude module for Horizon Seek.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_seek::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Graphics
// ============================================================================

pub use crate::render::{
    Color, GraphicsConfig, GraphicsContext, Point, Rect, RecordingRenderer, Renderer, Size,
};

// ============================================================================
// Seek Bar
// ============================================================================

pub use crate::host::HostAdapter;
pub use crate::widget::Orientation;
pub use crate::widget::animation::{AnimationConfig, Easing};
pub use crate::widget::seek_bar::{
    Chapter, LabelConfig, LabelFormatter, LabelVisibility, LayoutMode, PointerEvent, PointerId,
    PointerPhase, SeekBar, SeekBarConfig, SnapRounding, VisibilityConfig,
};
pub use crate::{GeometryError, GeometryResult};
