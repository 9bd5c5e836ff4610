//! Logging facilities for direct editing.
//!
//! Direct editing uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("direct_edit=debug")
//!         .init();
//! }
//! ```
//!
//! Every subsystem logs under one of the [`targets`], so hosts can filter
//! session lifecycle logs separately from per-keystroke surface logs.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "direct_edit_core::signal";
    /// Editing session lifecycle target.
    pub const SESSION: &str = "direct_edit::session";
    /// Editable surface target.
    pub const SURFACE: &str = "direct_edit::surface";
    /// Clipboard access target.
    pub const CLIPBOARD: &str = "direct_edit::clipboard";
    /// Performance spans target.
    pub const PERF: &str = "direct_edit::perf";
}

/// Span names used for tracing.
pub mod span_names {
    /// Provider lookup during activation.
    pub const PROVIDER_LOOKUP: &str = "provider_lookup";
    /// Autosize measurement pass.
    pub const AUTOSIZE: &str = "autosize";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "direct_edit::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
