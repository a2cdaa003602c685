//! Geometry, color and paint primitives for Launchpad.
//!
//! The launcher does not own a pixel pipeline; this crate only describes
//! *what* should be drawn: colors (premultiplied RGBA), rectangles used for
//! hit-testing drop targets, and the [`Paint`] a widget hands to whichever
//! renderer the host uses.
//!
//! ```
//! use launchpad_render::{BlendMode, Color, ColorFilter, Paint};
//!
//! let tint = Color::from_argb(0xDA0099CC);
//! let paint = Paint::new().with_color_filter(ColorFilter::new(tint, BlendMode::SourceAtop));
//! assert_eq!(paint.color_filter().map(|f| f.mode), Some(BlendMode::SourceAtop));
//! ```

mod paint;
mod types;

pub use paint::{BlendMode, ColorFilter, Paint};
pub use types::{Color, Point, Rect, Size};
