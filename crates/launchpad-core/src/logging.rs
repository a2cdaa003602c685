//! Logging facilities for Launchpad.
//!
//! Launchpad uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("launchpad::drop_target=debug")
//!     .init();
//! ```
//!
//! The constants in [`targets`] are the stable target names used by every
//! crate in the workspace, so filters keep working as modules move around.

/// Span names used throughout Launchpad for tracing.
pub mod span_names {
    /// Drop target initialization span.
    pub const DROP_TARGET_INIT: &str = "launchpad::drop_target::init";
    /// Starting a drag: listener notification and the first hit test.
    pub const DRAG_START: &str = "launchpad::drag::start";
    /// Theme loading span.
    pub const THEME_LOAD: &str = "launchpad::theme::load";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "launchpad_core::signal";
    /// Drag controller and drag session target.
    pub const DRAG: &str = "launchpad::drag";
    /// Drop target widgets target.
    pub const DROP_TARGET: &str = "launchpad::drop_target";
    /// Property animation target.
    pub const ANIMATION: &str = "launchpad::animation";
    /// Theme and color lookup target.
    pub const THEME: &str = "launchpad::theme";
    /// Host navigation requests target.
    pub const HOST: &str = "launchpad::host";
    /// Launcher configuration loading target.
    pub const CONFIG: &str = "launchpad::config";
}

/// A guard that keeps a tracing span entered until dropped.
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
        let span = tracing::info_span!(target: "launchpad::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
