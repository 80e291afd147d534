//! Typed theme configuration for the Weft utility-CSS generator.
//!
//! Weft scans source files for class usage and emits a stylesheet at build
//! time. This crate owns the configuration record the generator consumes:
//!
//! - **Content patterns**: which files the scanner inspects
//! - **Design tokens**: color palette extensions and font stacks
//! - **Container settings**: centering, padding, per-breakpoint widths
//! - **Dark mode**: media-query or class-toggle variant strategy
//! - **Plugins**: generator extension hooks
//!
//! The record is immutable once built and validated all-or-nothing: a
//! malformed value fails the load, never the point of use. Token values
//! keep their source text exactly as authored, so the emitted CSS contains
//! what the author wrote.
//!
//! # Example
//!
//! ```
//! use weft_config::ThemeConfig;
//!
//! // The authored configuration shipped with the generator.
//! let config = ThemeConfig::load();
//! assert!(config.container.center);
//!
//! // Or load one from a TOML document.
//! let config = ThemeConfig::from_toml(r##"
//!     content = ["./index.html"]
//!
//!     [theme.extend.colors]
//!     brand = "#2363eb"
//! "##).unwrap();
//! assert_eq!(config.content.len(), 1);
//! assert_eq!(config.colors.get("brand").unwrap().as_str(), "#2363eb");
//! ```

pub mod config;
pub mod types;

mod error;
mod loader;

pub use config::{
    ColorTokens, ContainerSettings, ContentGlobs, DarkMode, FontFamilies, FontStack, GlobPattern,
    PluginList, ThemeConfig, CANONICAL_BREAKPOINTS,
};
pub use error::{Error, Result};
pub use types::{Color, ColorValue, Length, SizeLiteral};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{
        ColorTokens, ContainerSettings, ContentGlobs, DarkMode, FontFamilies, FontStack,
        GlobPattern, PluginList, ThemeConfig,
    };
    pub use crate::types::{Color, ColorValue, Length, SizeLiteral};
    pub use crate::{Error, Result};
}
