//! Configuration loading and validation.
//!
//! Deserializes the on-disk TOML document into a raw shape mirroring the
//! file format, then validates every value into the typed record. Loading
//! is all-or-nothing: the first violation aborts with the offending
//! key and value, and nothing is applied.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::{
    ColorTokens, ContainerSettings, ContentGlobs, DarkMode, FontFamilies, FontStack, GlobPattern,
    PluginList, ThemeConfig,
};
use crate::types::{ColorValue, SizeLiteral};
use crate::{Error, Result};

/// Raw document shape. Field names follow the file format, not Rust
/// conventions.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    content: RawContent,
    #[serde(rename = "darkMode")]
    dark_mode: Option<DarkMode>,
    #[serde(default)]
    theme: RawTheme,
    #[serde(default)]
    plugins: Vec<String>,
}

/// Both authoring conventions for `content`: a bare pattern list, or a
/// table with a `files` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContent {
    Patterns(Vec<String>),
    Files { files: Vec<String> },
}

impl Default for RawContent {
    fn default() -> Self {
        Self::Patterns(vec![])
    }
}

impl RawContent {
    fn into_patterns(self) -> Vec<String> {
        match self {
            Self::Patterns(patterns) => patterns,
            Self::Files { files } => files,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTheme {
    #[serde(default)]
    extend: RawExtend,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawExtend {
    #[serde(default)]
    colors: IndexMap<String, String>,
    #[serde(rename = "fontFamily", default)]
    font_family: IndexMap<String, Vec<String>>,
    #[serde(default)]
    container: RawContainer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContainer {
    #[serde(default)]
    center: bool,
    padding: Option<String>,
    #[serde(default)]
    screens: IndexMap<String, String>,
}

impl ThemeConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let config = Self::from_toml(&document)?;
        tracing::debug!("loaded configuration from '{}'", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(document: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(document)?;
        validate(raw)
    }
}

/// Convert the raw shape into the typed record, validating every value.
fn validate(raw: RawConfig) -> Result<ThemeConfig> {
    let mut content = ContentGlobs::new();
    for (index, pattern) in raw.content.into_patterns().into_iter().enumerate() {
        let pattern = GlobPattern::new(pattern).ok_or(Error::EmptyPattern { index })?;
        content.push(pattern);
    }

    let mut colors = ColorTokens::new();
    for (name, value) in raw.theme.extend.colors {
        let parsed =
            ColorValue::parse(&value).ok_or_else(|| Error::invalid_color(&name, &value))?;
        colors.insert(name, parsed);
    }

    let mut font_families = FontFamilies::new();
    for (name, stack) in raw.theme.extend.font_family {
        let stack = FontStack::new(stack).ok_or_else(|| Error::EmptyFontStack {
            family: name.clone(),
        })?;
        font_families.insert(name, stack);
    }

    let container = validate_container(raw.theme.extend.container)?;
    container.check_monotonic();

    let mut plugins = PluginList::new();
    for (index, reference) in raw.plugins.into_iter().enumerate() {
        if reference.is_empty() {
            return Err(Error::EmptyPluginRef { index });
        }
        plugins.push(reference);
    }

    tracing::debug!(
        "validated configuration: {} color tokens, {} font stacks, {} content patterns",
        colors.len(),
        font_families.len(),
        content.len()
    );

    Ok(ThemeConfig {
        content,
        dark_mode: raw.dark_mode,
        colors,
        font_families,
        container,
        plugins,
    })
}

fn validate_container(raw: RawContainer) -> Result<ContainerSettings> {
    let padding = match raw.padding {
        Some(value) => Some(
            SizeLiteral::parse(&value)
                .ok_or_else(|| Error::invalid_size("container.padding", &value))?,
        ),
        None => None,
    };

    let mut screens = IndexMap::new();
    for (name, value) in raw.screens {
        let literal = SizeLiteral::parse(&value).ok_or_else(|| {
            Error::invalid_size(format!("container.screens.{}", name), &value)
        })?;
        screens.insert(name, literal);
    }

    Ok(ContainerSettings {
        center: raw.center,
        padding,
        screens,
    })
}
