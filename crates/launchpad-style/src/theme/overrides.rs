//! Theme color overrides loaded from TOML.
//!
//! A theme file only lists the tokens it changes:
//!
//! ```toml
//! [colors]
//! info-target-hover-tint = "#0099CCDA"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A set of `token = "#RRGGBB[AA]"` overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorOverrides {
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct ThemeFile {
    #[serde(default)]
    colors: ColorOverrides,
}

impl ColorOverrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create overrides from `(token, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            colors: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse the `[colors]` table of a theme document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(source).map_err(|e| Error::parse(e.to_string()))?;
        Ok(file.colors)
    }

    /// Read and parse a theme file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Add or replace one override.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.colors.insert(token.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Iterate over overrides in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
