//! Core primitives for Launchpad.
//!
//! This crate provides the small reactive layer the launcher widgets are built on:
//!
//! - **Signal/Slot System**: Observers for widget state changes
//! - **Property System**: Values with change detection
//! - **Logging**: Target names, span names and `PerfSpan`
//!
//! # Example
//!
//! ```
//! use launchpad_core::{Property, Signal};
//!
//! struct Target {
//!     armed: Property<bool>,
//!     armed_changed: Signal<bool>,
//! }
//!
//! let target = Target {
//!     armed: Property::new(false),
//!     armed_changed: Signal::new(),
//! };
//!
//! target.armed_changed.connect(|armed| println!("armed: {armed}"));
//! if target.armed.set(true) {
//!     target.armed_changed.emit(true);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
