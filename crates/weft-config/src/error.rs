//! Error types for configuration loading.

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a Weft configuration.
///
/// Loading is all-or-nothing: the first violation aborts the load, and no
/// partially applied configuration is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or does not match the expected shape.
    #[error("Malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color token value that is neither a color literal nor a reference.
    #[error("Invalid color for token '{token}': '{value}'")]
    InvalidColor { token: String, value: String },

    /// A size value that does not parse as a unit-bearing length.
    #[error("Invalid size for '{property}': '{value}'")]
    InvalidSize { property: String, value: String },

    /// An empty content glob pattern.
    #[error("Content pattern at index {index} is empty")]
    EmptyPattern { index: usize },

    /// A font family declared with no fallback entries.
    #[error("Font family '{family}' declares an empty stack")]
    EmptyFontStack { family: String },

    /// An empty plugin reference.
    #[error("Plugin reference at index {index} is empty")]
    EmptyPluginRef { index: usize },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-color error.
    pub fn invalid_color(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
            value: value.into(),
        }
    }

    /// Create an invalid-size error.
    pub fn invalid_size(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSize {
            property: property.into(),
            value: value.into(),
        }
    }
}
