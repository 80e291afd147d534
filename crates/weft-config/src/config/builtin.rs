//! The authored configuration shipped with the generator.

use std::sync::OnceLock;

use indexmap::IndexMap;

use super::{
    ColorTokens, ContainerSettings, ContentGlobs, FontFamilies, FontStack, GlobPattern,
    PluginList, ThemeConfig,
};
use crate::types::{ColorValue, SizeLiteral};

impl ThemeConfig {
    /// The statically authored configuration.
    ///
    /// Deterministic: every call in a process returns the same reference,
    /// and building the value involves no I/O and no environment lookups.
    pub fn load() -> &'static ThemeConfig {
        static CONFIG: OnceLock<ThemeConfig> = OnceLock::new();
        CONFIG.get_or_init(builtin_config)
    }
}

/// Build the authored record. Values are literals, so the parses cannot
/// fail.
fn builtin_config() -> ThemeConfig {
    let mut content = ContentGlobs::new();
    content.push(GlobPattern::new("./index.html").unwrap());
    content.push(GlobPattern::new("./src/**/*.{rs,html}").unwrap());

    let mut colors = ColorTokens::new();
    for (name, value) in [
        ("ct-dark-600", "#222"),
        ("ct-dark-200", "#e5e7eb"),
        ("ct-dark-100", "#f5f6f7"),
        ("ct-blue-600", "#2363eb"),
        ("ct-yellow-600", "#f9d13e"),
        ("ct-red-500", "#ef4444"),
    ] {
        colors.insert(name, ColorValue::parse(value).unwrap());
    }

    let mut font_families = FontFamilies::new();
    font_families.insert(
        "Poppins",
        FontStack::new(vec!["Poppins, sans-serif".to_string()]).unwrap(),
    );

    let mut screens = IndexMap::new();
    for name in ["lg", "xl", "2xl"] {
        screens.insert(name.to_string(), SizeLiteral::parse("1125px").unwrap());
    }

    ThemeConfig {
        content,
        dark_mode: None,
        colors,
        font_families,
        container: ContainerSettings {
            center: true,
            padding: Some(SizeLiteral::parse("1rem").unwrap()),
            screens,
        },
        plugins: PluginList::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_referentially_stable() {
        assert!(std::ptr::eq(ThemeConfig::load(), ThemeConfig::load()));
    }

    #[test]
    fn authored_values() {
        let config = ThemeConfig::load();

        assert_eq!(config.content.len(), 2);
        assert_eq!(config.content.get(0).unwrap().as_str(), "./index.html");

        assert_eq!(config.colors.len(), 6);
        assert_eq!(config.colors.get("ct-dark-600").unwrap().as_str(), "#222");

        let poppins = config.font_families.get("Poppins").unwrap();
        assert_eq!(poppins.primary(), "Poppins, sans-serif");

        assert!(config.container.center);
        assert_eq!(config.container.padding.as_ref().unwrap().as_str(), "1rem");
        assert_eq!(config.container.screen("lg").unwrap().as_str(), "1125px");
        assert_eq!(config.container.screen("2xl").unwrap().as_str(), "1125px");

        assert!(config.dark_mode.is_none());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn every_builtin_color_is_a_literal() {
        for (name, value) in ThemeConfig::load().colors.iter() {
            assert!(value.color().is_some(), "token '{}' is not a literal", name);
        }
    }
}
