//! Logging facilities for Horizon Seek.
//!
//! Horizon Seek uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_seek::gesture=trace,horizon_seek=debug")
//!         .init();
//! }
//! ```
//!
//! Level conventions: `trace` for per-frame and per-event detail, `debug` for
//! boundary events (clamping, ignored input, degenerate bounds), `info` for
//! context lifecycle, `warn` for corrected configuration, `error` for failing
//! listeners.

/// Span names used throughout Horizon Seek for tracing.
pub mod span_names {
    /// One host frame: drain input, advance animations, paint.
    pub const FRAME: &str = "horizon_seek::frame";
    /// A single paint pass.
    pub const PAINT: &str = "horizon_seek::paint";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Control facade target.
    pub const SEEK_BAR: &str = "horizon_seek::seek_bar";
    /// Gesture state machine target.
    pub const GESTURE: &str = "horizon_seek::gesture";
    /// Value mapping and clamping target.
    pub const VALUE: &str = "horizon_seek::value";
    /// Configuration validation target.
    pub const CONFIG: &str = "horizon_seek::config";
    /// Animation engine target.
    pub const ANIMATION: &str = "horizon_seek::animation";
    /// Painter target.
    pub const PAINT: &str = "horizon_seek::paint";
    /// Host adapter target.
    pub const HOST: &str = "horizon_seek::host";
    /// Signal system target.
    pub const SIGNAL: &str = "horizon_seek_core::signal";
    /// Graphics context target.
    pub const CONTEXT: &str = "horizon_seek_render::context";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span at `trace` level.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_seek::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
