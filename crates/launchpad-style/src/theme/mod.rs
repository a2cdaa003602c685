//! Theme system with built-in themes.

mod builtin;
mod overrides;
mod palette;
mod variables;

pub use builtin::{ColorProvider, Theme, ThemeMode};
pub use overrides::ColorOverrides;
pub use palette::ColorPalette;
pub use variables::ThemeVariables;

/// Color token names understood by the built-in themes.
pub mod tokens {
    /// Tint applied while an item hovers over the app-info drop target.
    pub const INFO_TARGET_HOVER_TINT: &str = "info-target-hover-tint";
    /// Tint applied while an item hovers over the delete drop target.
    pub const DELETE_TARGET_HOVER_TINT: &str = "delete-target-hover-tint";
    pub const PRIMARY: &str = "primary-color";
    pub const BACKGROUND: &str = "background";
    pub const SURFACE: &str = "surface";
    pub const TEXT_PRIMARY: &str = "text-primary";
}
