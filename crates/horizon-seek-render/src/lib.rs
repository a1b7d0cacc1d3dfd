//! Paint surface abstraction for Horizon Seek.
//!
//! This crate provides the drawing vocabulary the seek-bar engine paints with:
//! geometry and color types, the [`Renderer`] trait hosts implement on top of
//! their own canvas, and the [`GraphicsContext`] handle carrying display
//! density and text defaults.
//!
//! # Getting Started
//!
//! Initialize a [`GraphicsContext`] once at host startup:
//!
//! ```
//! use horizon_seek_render::{GraphicsContext, GraphicsConfig};
//!
//! let ctx = GraphicsContext::init(GraphicsConfig::default().with_dpi_scale(2.0))
//!     .expect("Failed to initialize graphics");
//! assert!(ctx.is_active());
//! ```
//!
//! # Using the Renderer
//!
//! [`RecordingRenderer`] implements [`Renderer`] by recording draw calls, which
//! makes painting deterministic and easy to inspect:
//!
//! ```
//! use horizon_seek_render::{Color, DrawCommand, Point, RecordingRenderer, Renderer};
//!
//! let mut renderer = RecordingRenderer::new();
//!
//! renderer.save();
//! renderer.set_opacity(0.5);
//! renderer.fill_circle(Point::new(40.0, 12.0), 6.0, Color::WHITE);
//! renderer.restore();
//!
//! assert_eq!(
//!     renderer.commands()[0],
//!     DrawCommand::FillEllipse {
//!         center: Point::new(40.0, 12.0),
//!         radius_x: 6.0,
//!         radius_y: 6.0,
//!         color: Color::WHITE.multiply_alpha(0.5),
//!     }
//! );
//! ```

mod context;
mod error;
mod paint;
mod recording;
mod renderer;
mod types;

// Core infrastructure
pub use context::{GraphicsConfig, GraphicsContext};
pub use error::{RenderError, RenderResult};

// Renderer API
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{RenderState, RenderStateStack, Renderer};

// Drawing types
pub use paint::{TextStyle, TypefaceId};
pub use types::{Color, CornerRadii, Point, Rect, RoundedRect, Size};
