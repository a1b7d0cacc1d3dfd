//! Pointer input delivered by the host.

use horizon_seek_render::Point;

use super::geometry::SeekGeometry;

/// Identifies one pointer (finger, mouse, pen) for the duration of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// Stage of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Contact started.
    Down,
    /// Contact moved.
    Move,
    /// Contact lifted.
    Up,
    /// The host aborted the interaction (focus loss, system gesture, ...).
    Cancel,
}

/// Where a pointer is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPosition {
    /// Surface coordinates in physical pixels.
    Pixels(Point),
    /// A normalized position along the track, for hosts that map input themselves.
    Normalized(f32),
}

impl PointerPosition {
    /// Resolve to surface coordinates. Normalized positions land on the track's center line.
    pub fn resolve(self, geometry: &SeekGeometry) -> Point {
        match self {
            PointerPosition::Pixels(point) => point,
            PointerPosition::Normalized(position) => geometry.thumb_center(position),
        }
    }
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer that produced the event.
    pub pointer: PointerId,
    /// Interaction stage.
    pub phase: PointerPhase,
    /// Pointer location.
    pub position: PointerPosition,
}

impl PointerEvent {
    /// Create an event at a pixel position.
    pub fn new(pointer: PointerId, phase: PointerPhase, point: Point) -> Self {
        Self {
            pointer,
            phase,
            position: PointerPosition::Pixels(point),
        }
    }

    /// Pointer down at a pixel position.
    pub fn down(pointer: PointerId, point: Point) -> Self {
        Self::new(pointer, PointerPhase::Down, point)
    }

    /// Pointer move to a pixel position.
    pub fn moved(pointer: PointerId, point: Point) -> Self {
        Self::new(pointer, PointerPhase::Move, point)
    }

    /// Pointer up at a pixel position.
    pub fn up(pointer: PointerId, point: Point) -> Self {
        Self::new(pointer, PointerPhase::Up, point)
    }

    /// Interaction cancelled by the host.
    pub fn cancel(pointer: PointerId) -> Self {
        Self::new(pointer, PointerPhase::Cancel, Point::ZERO)
    }

    /// An event at a normalized track position.
    pub fn normalized(pointer: PointerId, phase: PointerPhase, position: f32) -> Self {
        Self {
            pointer,
            phase,
            position: PointerPosition::Normalized(position),
        }
    }
}
