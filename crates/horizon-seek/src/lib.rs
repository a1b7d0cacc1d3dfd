//! Horizon Seek - a natively painted seek bar engine.
//!
//! This is the main crate: it re-exports the core and render crates and
//! provides the seek bar control itself.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_seek::prelude::*;
//!
//! let context = GraphicsContext::init(GraphicsConfig::default().with_dpi_scale(2.0)).unwrap();
//! let mut bar = SeekBar::new(&context, SeekBarConfig::media(300.0));
//! bar.set_value(90.0);
//!
//! let mut surface = RecordingRenderer::new();
//! while bar.tick(Duration::from_millis(16)) {}
//! bar.render(&mut surface, Rect::new(0.0, 0.0, 720.0, 96.0)).unwrap();
//! assert_eq!(bar.visuals().thumb_position(), 0.3);
//! ```

pub use horizon_seek_core::*;

/// Graphics types and the paint surface.
pub mod render {
    pub use horizon_seek_render::*;
}

mod error;
pub mod host;
pub mod prelude;
pub mod widget;

pub use error::{GeometryError, GeometryResult};
