//! Error types for launcher widgets.

use std::path::PathBuf;

/// Errors raised while setting up a drop target.
///
/// These are fatal to widget construction: a widget that fails to resolve
/// its configuration is never created, so it can never render with a
/// made-up color.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The theme has no value for a required color token.
    #[error("theme token '{token}' is not defined")]
    MissingToken { token: String },

    /// The theme token exists but is not a color.
    #[error("theme token '{token}' has invalid color value '{value}'")]
    InvalidColor { token: String, value: String },

    /// The configuration document is malformed or has out-of-range values.
    #[error("invalid launcher configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<launchpad_style::Error> for ConfigurationError {
    fn from(err: launchpad_style::Error) -> Self {
        match err {
            launchpad_style::Error::MissingToken { token } => Self::MissingToken { token },
            launchpad_style::Error::InvalidColor { token, value } => {
                Self::InvalidColor { token, value }
            }
            launchpad_style::Error::Parse { message } => Self::InvalidConfig(message),
            launchpad_style::Error::Io { path, source } => Self::Io { path, source },
        }
    }
}

/// Result type for widget configuration.
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;
