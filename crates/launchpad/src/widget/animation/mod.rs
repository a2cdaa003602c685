//! Animation support for launcher widgets.
//!
//! Widgets animate scalar properties (background alpha, mostly) through an
//! [`AnimationSet`]. The host drives it by calling `tick` once per frame.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use launchpad::widget::animation::{AnimationSet, Easing, PropertyAnimation};
//!
//! let mut set = AnimationSet::new();
//! set.animate(
//!     "alpha",
//!     PropertyAnimation::new(0.0, 255.0, Duration::from_millis(100), Easing::Linear),
//! );
//!
//! let start = Instant::now();
//! set.tick(start);
//! let values = set.tick(start + Duration::from_millis(100));
//! assert_eq!(values, vec![("alpha", 255.0)]);
//! ```

mod easing;
mod property;

pub use easing::{Easing, ease, lerp_eased};
pub use property::{AnimationSet, PropertyAnimation};
