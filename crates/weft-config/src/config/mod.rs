//! The typed configuration record.

mod builtin;
mod colors;
mod container;
mod content;
mod fonts;

pub use colors::ColorTokens;
pub use container::{ContainerSettings, CANONICAL_BREAKPOINTS};
pub use content::{ContentGlobs, GlobPattern};
pub use fonts::{FontFamilies, FontStack};

use serde::Deserialize;

/// Strategy for generating dark-variant rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow the `prefers-color-scheme` media query.
    Media,
    /// Toggle via a `dark` class on an ancestor element.
    Class,
}

/// References to generator plugins, applied in order.
///
/// Empty is the common case; the core utilities need no plugins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginList(Vec<String>);

impl PluginList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin reference.
    pub fn push(&mut self, reference: impl Into<String>) {
        self.0.push(reference.into());
    }

    /// The number of references.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over references in application order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

/// The complete configuration record consumed by the Weft generator.
///
/// Built once, either from the authored builtin via [`ThemeConfig::load`]
/// or from a document via [`ThemeConfig::from_toml`] /
/// [`ThemeConfig::from_file`], then treated as immutable shared data. All
/// fields are owned, so the record is freely shared across threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeConfig {
    /// Source files scanned for class usage.
    pub content: ContentGlobs,
    /// Dark-variant strategy; `None` disables dark variants.
    pub dark_mode: Option<DarkMode>,
    /// Color tokens added to the builtin palette.
    pub colors: ColorTokens,
    /// Font stacks added to the builtin set.
    pub font_families: FontFamilies,
    /// Container utility settings.
    pub container: ContainerSettings,
    /// Generator plugins.
    pub plugins: PluginList,
}
