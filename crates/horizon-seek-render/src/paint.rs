//! Text styles.
//!
//! Fills take a plain [`Color`]; text carries a little more state.

use crate::types::Color;

/// Identifier of a typeface registered with the host's text backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypefaceId(pub u32);

/// Style used for [`Renderer::draw_text`](crate::Renderer::draw_text).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// Text color.
    pub color: Color,
    /// Typeface to use; `None` selects the surface default.
    pub typeface: Option<TypefaceId>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::WHITE,
            typeface: None,
        }
    }
}

impl TextStyle {
    /// Create a text style with the given size and color.
    #[inline]
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            typeface: None,
        }
    }

    /// Set the typeface.
    #[inline]
    pub fn with_typeface(mut self, typeface: Option<TypefaceId>) -> Self {
        self.typeface = typeface;
        self
    }
}
