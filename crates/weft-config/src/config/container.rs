//! Container utility settings.

use indexmap::IndexMap;

use crate::types::SizeLiteral;

/// Canonical breakpoint ladder, narrowest first.
pub const CANONICAL_BREAKPOINTS: [&str; 5] = ["sm", "md", "lg", "xl", "2xl"];

/// Root font size used when comparing breakpoint widths across units.
const REM_BASE: f32 = 16.0;

/// Settings for the generated `container` utility.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerSettings {
    /// Whether container classes auto-center with horizontal auto margins.
    pub center: bool,
    /// Default horizontal padding; `None` leaves the generator default.
    pub padding: Option<SizeLiteral>,
    /// Per-breakpoint container widths, overriding the generator defaults.
    pub screens: IndexMap<String, SizeLiteral>,
}

impl ContainerSettings {
    /// Get the width override for a breakpoint.
    pub fn screen(&self, name: &str) -> Option<&SizeLiteral> {
        self.screens.get(name)
    }

    /// Warn when canonical breakpoints are declared with decreasing widths.
    ///
    /// Not an error: repeating one width across breakpoints is a common way
    /// to cap container growth, and custom breakpoint names are skipped
    /// entirely.
    pub(crate) fn check_monotonic(&self) {
        let mut last: Option<(&str, f32)> = None;
        for name in CANONICAL_BREAKPOINTS {
            let Some(px) = self.screens.get(name).and_then(|s| s.to_px(REM_BASE)) else {
                continue;
            };
            if let Some((prev_name, prev_px)) = last {
                if px < prev_px {
                    tracing::warn!(
                        "container screen '{}' ({}px) is narrower than '{}' ({}px)",
                        name,
                        px,
                        prev_name,
                        prev_px
                    );
                }
            }
            last = Some((name, px));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screens(entries: &[(&str, &str)]) -> IndexMap<String, SizeLiteral> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), SizeLiteral::parse(value).unwrap()))
            .collect()
    }

    #[test]
    fn screen_lookup() {
        let container = ContainerSettings {
            center: true,
            padding: Some(SizeLiteral::parse("1rem").unwrap()),
            screens: screens(&[("lg", "1125px")]),
        };

        assert_eq!(container.screen("lg").unwrap().as_str(), "1125px");
        assert!(container.screen("md").is_none());
    }

    #[test]
    fn monotonic_check_tolerates_repeats() {
        // The shipped default pins lg/xl/2xl to one width; must not panic
        // or error.
        let container = ContainerSettings {
            center: true,
            padding: None,
            screens: screens(&[("lg", "1125px"), ("xl", "1125px"), ("2xl", "1125px")]),
        };
        container.check_monotonic();
    }

    #[test]
    fn monotonic_check_is_non_fatal() {
        let container = ContainerSettings {
            center: false,
            padding: None,
            screens: screens(&[("sm", "1200px"), ("md", "600px")]),
        };
        // Only a warning is emitted.
        container.check_monotonic();
    }
}
