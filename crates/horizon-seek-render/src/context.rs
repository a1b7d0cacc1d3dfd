//! Graphics context shared by every control drawn on one host surface.
//!
//! The [`GraphicsContext`] carries the display density and text defaults the
//! host resolved at startup. It is an explicit, cheaply clonable handle: the
//! host creates it once with [`GraphicsContext::init`], hands a clone to each
//! control, and tears it down with [`GraphicsContext::shutdown`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::{debug, info};

use crate::error::{RenderError, RenderResult};
use crate::paint::{TextStyle, TypefaceId};
use crate::types::Color;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Configuration options for graphics context initialization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphicsConfig {
    /// Physical pixels per density-independent pixel.
    pub dpi_scale: f32,
    /// Label font size in density-independent pixels.
    pub label_font_size: f32,
    /// Typeface for labels; `None` uses the surface default.
    pub typeface: Option<TypefaceId>,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            dpi_scale: 1.0,
            label_font_size: 14.0,
            typeface: None,
        }
    }
}

impl GraphicsConfig {
    /// Set the DPI scale.
    pub fn with_dpi_scale(mut self, dpi_scale: f32) -> Self {
        self.dpi_scale = dpi_scale;
        self
    }

    /// Set the label font size.
    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.label_font_size = size;
        self
    }

    /// Set the label typeface.
    pub fn with_typeface(mut self, typeface: TypefaceId) -> Self {
        self.typeface = Some(typeface);
        self
    }
}

#[derive(Debug)]
struct ContextInner {
    id: u64,
    config: GraphicsConfig,
    active: AtomicBool,
}

/// Handle to the host's graphics resources.
///
/// Clones share the same underlying state, so shutting down one clone shuts
/// down all of them.
///
/// # Example
///
/// ```
/// use horizon_seek_render::{GraphicsConfig, GraphicsContext};
///
/// let ctx = GraphicsContext::init(GraphicsConfig::default().with_dpi_scale(2.0)).unwrap();
/// assert_eq!(ctx.dp(8.0), 16.0);
/// ctx.shutdown();
/// assert!(!ctx.is_active());
/// ```
#[derive(Debug, Clone)]
pub struct GraphicsContext {
    inner: Arc<ContextInner>,
}

impl GraphicsContext {
    /// Initialize a graphics context.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The DPI scale is not a positive finite number
    /// - The label font size is not a positive finite number
    pub fn init(config: GraphicsConfig) -> RenderResult<Self> {
        if !(config.dpi_scale.is_finite() && config.dpi_scale > 0.0) {
            return Err(RenderError::InvalidDpiScale(config.dpi_scale));
        }
        if !(config.label_font_size.is_finite() && config.label_font_size > 0.0) {
            return Err(RenderError::InvalidFontSize(config.label_font_size));
        }

        let id = NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed);
        info!(
            target: "horizon_seek_render::context",
            id,
            dpi_scale = config.dpi_scale,
            label_font_size = config.label_font_size,
            "graphics context initialized"
        );

        Ok(Self {
            inner: Arc::new(ContextInner {
                id,
                config,
                active: AtomicBool::new(true),
            }),
        })
    }

    /// Unique id of this context (shared by its clones).
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Get the configuration used to create this context.
    pub fn config(&self) -> &GraphicsConfig {
        &self.inner.config
    }

    /// Physical pixels per density-independent pixel.
    pub fn dpi_scale(&self) -> f32 {
        self.inner.config.dpi_scale
    }

    /// Convert density-independent pixels to physical pixels.
    #[inline]
    pub fn dp(&self, value: f32) -> f32 {
        value * self.inner.config.dpi_scale
    }

    /// Text style for value labels, already scaled to physical pixels.
    pub fn label_style(&self, color: Color) -> TextStyle {
        TextStyle::new(self.dp(self.inner.config.label_font_size), color)
            .with_typeface(self.inner.config.typeface)
    }

    /// Whether the context is still usable.
    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::Acquire)
    }

    /// Return an error if the context has been shut down.
    pub fn ensure_active(&self) -> RenderResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(RenderError::ContextShutDown)
        }
    }

    /// Tear the context down. Idempotent.
    ///
    /// Controls holding a clone stop painting once the context is inactive.
    pub fn shutdown(&self) {
        if self.inner.active.swap(false, Ordering::AcqRel) {
            info!(target: "horizon_seek_render::context", id = self.inner.id, "graphics context shut down");
        } else {
            debug!(target: "horizon_seek_render::context", id = self.inner.id, "graphics context already shut down");
        }
    }
}
