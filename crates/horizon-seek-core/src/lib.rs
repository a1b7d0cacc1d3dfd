//! Core systems for Horizon Seek.
//!
//! This crate provides the foundational pieces shared by the seek-bar engine:
//!
//! - **Signal System**: Type-safe listener registration and notification
//! - **Logging**: `tracing` target and span names for filtering
//!
//! # Signal Example
//!
//! ```
//! use horizon_seek_core::Signal;
//!
//! let value_changed = Signal::<f64>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(0.5);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
