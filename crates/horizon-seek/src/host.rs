//! The seam between the engine and the embedding application.
//!
//! A host owns the window or view, the input queue and the drawing surface.
//! The engine only ever sees the [`Rect`] it should occupy, the
//! [`PointerEvent`]s aimed at it and a [`Renderer`] to paint on. Everything
//! toolkit-specific (view lifecycle, native canvas, touch dispatch) stays on
//! the host side of this trait.

use horizon_seek_render::{Rect, Renderer};

use crate::widget::seek_bar::PointerEvent;

/// Host application services used by [`SeekBar::drive_frame`](crate::widget::seek_bar::SeekBar::drive_frame).
pub trait HostAdapter {
    /// The drawing surface the host hands out each frame.
    type Surface: Renderer;

    /// Bounds of the control in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Next pending pointer event, oldest first.
    fn next_pointer_event(&mut self) -> Option<PointerEvent>;

    /// Surface to paint this frame on.
    fn surface(&mut self) -> &mut Self::Surface;

    /// Ask the host to schedule another frame.
    fn request_repaint(&mut self);
}
