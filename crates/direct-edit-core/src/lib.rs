//! Core systems for direct editing.
//!
//! This crate provides the foundations the direct editing widgets build on:
//!
//! - **Signal/Slot System**: Type-safe notification channel to the host
//! - **Geometry**: Points, sizes, rectangles, size constraints and colors
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use direct_edit_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod geometry;
pub mod logging;
pub mod signal;

pub use error::{CoreError, Result};
pub use geometry::{Color, Point, Rect, Size, SizeConstraints};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
