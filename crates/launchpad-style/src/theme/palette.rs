//! Color palette definitions.

use launchpad_render::Color;

/// A color palette for theming.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Main brand color.
    pub primary: Color,
    /// Main background color.
    pub background: Color,
    /// Surface/card background color.
    pub surface: Color,
    /// Primary text color.
    pub text_primary: Color,

    // Drop target feedback
    /// Tint for the app-info drop target while an item hovers over it.
    pub info_target_hover_tint: Color,
    /// Tint for the delete drop target while an item hovers over it.
    pub delete_target_hover_tint: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub fn light() -> Self {
        Self {
            primary: Color::from_argb(0xFF007AFF),
            background: Color::from_argb(0xFFFFFFFF),
            surface: Color::from_argb(0xFFF8F9FA),
            text_primary: Color::from_argb(0xFF212529),

            info_target_hover_tint: Color::from_argb(0xDA0099CC),
            delete_target_hover_tint: Color::from_argb(0xDAFA0000),
        }
    }

    /// Create a dark theme palette.
    pub fn dark() -> Self {
        Self {
            primary: Color::from_argb(0xFF0A84FF),
            background: Color::from_argb(0xFF1C1C1E),
            surface: Color::from_argb(0xFF2C2C2E),
            text_primary: Color::from_argb(0xFFFFFFFF),

            // Same tints as light: they are drawn over the wallpaper, not the surface
            info_target_hover_tint: Color::from_argb(0xDA0099CC),
            delete_target_hover_tint: Color::from_argb(0xDAFA0000),
        }
    }

    /// Create a high-contrast palette.
    pub fn high_contrast() -> Self {
        Self {
            primary: Color::from_argb(0xFF0000FF),
            background: Color::WHITE,
            surface: Color::WHITE,
            text_primary: Color::BLACK,

            info_target_hover_tint: Color::from_argb(0xFF0000FF),
            delete_target_hover_tint: Color::from_argb(0xFFCC0000),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}
