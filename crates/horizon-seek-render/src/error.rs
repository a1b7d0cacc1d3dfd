//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur during graphics operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The DPI scale is zero, negative or not finite.
    #[error("invalid dpi scale: {0}")]
    InvalidDpiScale(f32),

    /// The label font size is zero, negative or not finite.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),

    /// The graphics context was shut down.
    #[error("graphics context has been shut down")]
    ContextShutDown,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
