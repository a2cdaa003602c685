//! Error types for the styling system.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The theme has no value for a color token.
    #[error("Theme has no color for token '{token}'")]
    MissingToken { token: String },

    /// A token exists but its value is not a color.
    #[error("Invalid color '{value}' for token '{token}'")]
    InvalidColor { token: String, value: String },

    /// TOML parsing error.
    #[error("Theme parse error: {message}")]
    Parse { message: String },

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a missing-token error.
    pub fn missing_token(token: impl Into<String>) -> Self {
        Self::MissingToken {
            token: token.into(),
        }
    }

    /// Create an invalid-color error.
    pub fn invalid_color(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
            value: value.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
