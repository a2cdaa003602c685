//! Built-in themes.

use launchpad_core::logging::targets;
use launchpad_render::Color;

use super::{ColorOverrides, ColorPalette, ThemeVariables};
use crate::{Error, Result};

/// Read-only color lookup by token.
///
/// This is the only way widgets obtain colors. Implementations must not
/// substitute a default for an unknown token.
pub trait ColorProvider {
    /// Resolve a color token.
    fn color_for(&self, token: &str) -> Result<Color>;
}

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// A complete theme: palette plus the token table derived from it.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Color palette.
    pub palette: ColorPalette,
    /// Token table.
    pub variables: ThemeVariables,
}

impl Theme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self::custom(ThemeMode::Light, ColorPalette::light())
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::custom(ThemeMode::Dark, ColorPalette::dark())
    }

    /// Create a high-contrast theme.
    pub fn high_contrast() -> Self {
        Self::custom(ThemeMode::HighContrast, ColorPalette::high_contrast())
    }

    /// Create a custom theme from a palette.
    pub fn custom(mode: ThemeMode, palette: ColorPalette) -> Self {
        let variables = ThemeVariables::from_palette(&palette);
        Self {
            mode,
            palette,
            variables,
        }
    }

    /// Apply color overrides on top of the built-in tokens.
    ///
    /// Every override is validated before any of them is applied, so a bad
    /// value leaves the theme untouched.
    pub fn apply_overrides(&mut self, overrides: &ColorOverrides) -> Result<()> {
        for (token, value) in overrides.iter() {
            if Color::from_hex(value).is_none() {
                return Err(Error::invalid_color(token, value));
            }
        }
        for (token, value) in overrides.iter() {
            tracing::debug!(target: targets::THEME, token, value, "overriding theme color");
            self.variables.set(token, value);
        }
        Ok(())
    }

    /// Builder form of [`apply_overrides`](Self::apply_overrides).
    pub fn with_overrides(mut self, overrides: &ColorOverrides) -> Result<Self> {
        self.apply_overrides(overrides)?;
        Ok(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorProvider for Theme {
    fn color_for(&self, token: &str) -> Result<Color> {
        let Some(value) = self.variables.get(token) else {
            tracing::warn!(target: targets::THEME, token, "missing color token");
            return Err(Error::missing_token(token));
        };
        Color::from_hex(value).ok_or_else(|| {
            tracing::warn!(target: targets::THEME, token, value, "color token is not a color");
            Error::invalid_color(token, value)
        })
    }
}
