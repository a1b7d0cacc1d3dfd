//! A renderer that records draw calls instead of rasterizing them.
//!
//! [`RecordingRenderer`] is the deterministic paint surface used by tests and by
//! hosts that replay draw lists onto their own canvas. Commands are stored with
//! the current opacity already folded into their colors.

use crate::paint::TextStyle;
use crate::renderer::{RenderStateStack, Renderer};
use crate::types::{Color, Point, RoundedRect, Size};

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f32 = 0.55;
/// Line height as a fraction of the font size.
const LINE_HEIGHT: f32 = 1.2;

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rounded rectangle.
    FillRoundedRect { rect: RoundedRect, color: Color },
    /// A filled ellipse.
    FillEllipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        color: Color,
    },
    /// A line of text.
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

impl DrawCommand {
    /// The fill color of this command.
    pub fn color(&self) -> Color {
        match self {
            Self::FillRoundedRect { color, .. } | Self::FillEllipse { color, .. } => *color,
            Self::Text { style, .. } => style.color,
        }
    }
}

/// Renderer that appends every draw call to an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    state: RenderStateStack,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drop recorded commands and reset the state stack.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.state.reset();
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current save/restore depth.
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    fn tint(&self, color: Color) -> Color {
        color.multiply_alpha(self.state.opacity())
    }
}

impl Renderer for RecordingRenderer {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.set_opacity(opacity);
    }

    fn opacity(&self) -> f32 {
        self.state.opacity()
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        let color = self.tint(color);
        self.commands.push(DrawCommand::FillRoundedRect { rect, color });
    }

    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, color: Color) {
        let color = self.tint(color);
        self.commands.push(DrawCommand::FillEllipse {
            center,
            radius_x,
            radius_y,
            color,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        let glyphs = text.chars().count() as f32;
        Size::new(
            glyphs * style.size * GLYPH_ADVANCE,
            style.size * LINE_HEIGHT,
        )
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let style = TextStyle {
            color: self.tint(style.color),
            ..*style
        };
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            style,
        });
    }
}
