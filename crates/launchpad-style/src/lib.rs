//! Themes and color tokens for Launchpad.
//!
//! Widgets never hard-code colors: they ask a [`ColorProvider`] for a named
//! token once, at initialization, and fail loudly when the token is missing.
//!
//! # Example
//!
//! ```
//! use launchpad_style::prelude::*;
//!
//! let theme = Theme::light();
//! let tint = theme.color_for(tokens::INFO_TARGET_HOVER_TINT)?;
//! assert_eq!(tint.alpha8(), 0xDA);
//! # Ok::<(), launchpad_style::Error>(())
//! ```

pub mod theme;

mod error;

pub use error::{Error, Result};
pub use theme::{ColorOverrides, ColorPalette, ColorProvider, Theme, ThemeMode, ThemeVariables, tokens};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::theme::{ColorOverrides, ColorPalette, ColorProvider, Theme, ThemeMode, ThemeVariables, tokens};
}
