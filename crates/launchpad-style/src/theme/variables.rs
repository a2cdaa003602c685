//! Named theme variables (color tokens).

use std::collections::HashMap;

use launchpad_render::Color;

use super::{ColorPalette, tokens};

/// Named theme variables.
///
/// Values are stored as strings, the same form they take in theme files;
/// names may be given with or without a leading `--`.
#[derive(Debug, Clone, Default)]
pub struct ThemeVariables {
    variables: HashMap<String, String>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create variables from a color palette.
    pub fn from_palette(palette: &ColorPalette) -> Self {
        let mut vars = Self::new();

        vars.set(tokens::PRIMARY, color_to_hex(&palette.primary));
        vars.set(tokens::BACKGROUND, color_to_hex(&palette.background));
        vars.set(tokens::SURFACE, color_to_hex(&palette.surface));
        vars.set(tokens::TEXT_PRIMARY, color_to_hex(&palette.text_primary));

        vars.set(
            tokens::INFO_TARGET_HOVER_TINT,
            color_to_hex(&palette.info_target_hover_tint),
        );
        vars.set(
            tokens::DELETE_TARGET_HOVER_TINT,
            color_to_hex(&palette.delete_target_hover_tint),
        );

        vars
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.variables.insert(name, value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.get(name).map(|s| s.as_str())
    }

    /// Remove a variable, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.remove(name)
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.contains_key(name)
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Format a premultiplied color as straight-alpha `#RRGGBB[AA]`.
pub(crate) fn color_to_hex(color: &Color) -> String {
    let unpremultiply = |c: f32| {
        if color.a > 0.0 {
            ((c / color.a).clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            0
        }
    };
    let r = unpremultiply(color.r);
    let g = unpremultiply(color.g);
    let b = unpremultiply(color.b);
    let a = color.alpha8();

    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}
