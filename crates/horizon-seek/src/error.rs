//! Error types for the seek bar engine.

use thiserror::Error;

/// Bounds that cannot host a seek bar.
///
/// Callers treat this as "not renderable yet": nothing is drawn and pointer
/// input is ignored until usable bounds arrive.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// The bounds have no area, or no length is left once the thumb insets are removed.
    #[error("degenerate bounds {width}x{height} (usable length {usable_length})")]
    Degenerate {
        width: f32,
        height: f32,
        usable_length: f32,
    },
}

/// Result type for geometry resolution.
pub type GeometryResult<T> = Result<T, GeometryError>;
