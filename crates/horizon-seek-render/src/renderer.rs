//! Core renderer trait defining the 2D drawing interface.
//!
//! This module defines the [`Renderer`] trait, the paint surface every control
//! draws through. Hosts implement it on top of whatever 2D backend they own
//! (a canvas, a GPU batcher, a software rasterizer); the crate ships
//! [`RecordingRenderer`](crate::RecordingRenderer) for tests and replay.

use crate::paint::TextStyle;
use crate::types::{Color, Point, RoundedRect, Size};

/// The core 2D rendering trait.
///
/// Coordinates are surface pixels. The trait covers exactly what a seek bar
/// paints: pill-shaped track segments, the round thumb and a text label.
///
/// # State Stack
///
/// The renderer maintains an opacity that can be saved and restored:
///
/// ```ignore
/// renderer.save();
/// renderer.set_opacity(0.5);
/// renderer.fill_circle(center, 6.0, Color::RED);
/// renderer.restore();
/// ```
pub trait Renderer {
    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state.
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Set the global opacity for subsequent drawing operations.
    ///
    /// This is multiplied with paint colors.
    fn set_opacity(&mut self, opacity: f32);

    /// Get the current global opacity.
    fn opacity(&self) -> f32;

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rounded rectangle with a solid color.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Fill an ellipse.
    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, color: Color);

    /// Fill a circle (convenience method for fill_ellipse).
    #[inline]
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.fill_ellipse(center, radius, radius, color);
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Measure the size a single line of text would occupy.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size;

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

/// Saved renderer state for save/restore operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Opacity at this state.
    pub opacity: f32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self { opacity: 1.0 }
    }
}

/// Common state management for renderers.
///
/// This struct provides a reusable implementation of save/restore that
/// renderer implementations can use.
#[derive(Debug, Clone, Default)]
pub struct RenderStateStack {
    /// Stack of saved states.
    stack: Vec<RenderState>,
    /// Current state.
    current: RenderState,
}

impl RenderStateStack {
    /// Create a new state stack with default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    #[inline]
    pub fn current(&self) -> &RenderState {
        &self.current
    }

    /// Save the current state.
    pub fn save(&mut self) {
        self.stack.push(self.current);
    }

    /// Restore the previously saved state.
    ///
    /// An unbalanced restore leaves the current state untouched.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.current = state;
        }
    }

    /// Reset to default state and clear the stack.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.current = RenderState::default();
    }

    /// Set the opacity, clamped to [0, 1].
    #[inline]
    pub fn set_opacity(&mut self, opacity: f32) {
        self.current.opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    /// Get the current opacity.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.current.opacity
    }

    /// Get the stack depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
