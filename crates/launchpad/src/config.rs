//! Launcher configuration.
//!
//! Configuration is plain TOML. Every field has a default, so an empty
//! document is a valid configuration:
//!
//! ```toml
//! [drop_target]
//! transition_duration_ms = 150
//! hover_tint_token = "info-target-hover-tint"
//! easing = "decelerate"
//!
//! [colors]
//! info-target-hover-tint = "#33B5E5DA"
//! ```

use std::path::Path;
use std::time::Duration;

use launchpad_core::logging::{span_names, targets};
use launchpad_core::PerfSpan;
use launchpad_style::{ColorOverrides, Theme, tokens};
use serde::Deserialize;

use crate::error::{ConfigResult, ConfigurationError};
use crate::widget::animation::Easing;

/// Settings shared by the button-style drop targets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropTargetConfig {
    /// Length of the hover tint fade, in milliseconds.
    pub transition_duration_ms: u64,
    /// Theme token holding the hover tint.
    pub hover_tint_token: String,
    /// Curve of the hover tint fade.
    pub easing: Easing,
}

impl DropTargetConfig {
    pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 100;

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Set the fade length (builder pattern).
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the hover tint token (builder pattern).
    pub fn with_hover_tint_token(mut self, token: impl Into<String>) -> Self {
        self.hover_tint_token = token.into();
        self
    }

    /// Set the fade curve (builder pattern).
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.hover_tint_token.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfig(
                "drop_target.hover_tint_token must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DropTargetConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: Self::DEFAULT_TRANSITION_DURATION_MS,
            hover_tint_token: tokens::INFO_TARGET_HOVER_TINT.to_string(),
            easing: Easing::default(),
        }
    }
}

/// The launcher configuration document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    pub drop_target: DropTargetConfig,
    /// Theme color overrides, `token = "#RRGGBB[AA]"`.
    pub colors: ColorOverrides,
}

impl LauncherConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| {
            tracing::warn!(target: targets::CONFIG, error = %e, "malformed launcher configuration");
            ConfigurationError::InvalidConfig(e.to_string())
        })?;
        config.drop_target.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// `base` with this configuration's color overrides applied.
    pub fn theme(&self, base: Theme) -> ConfigResult<Theme> {
        let _span = PerfSpan::new(span_names::THEME_LOAD);
        Ok(base.with_overrides(&self.colors)?)
    }
}
