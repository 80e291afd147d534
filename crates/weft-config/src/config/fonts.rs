//! Font stack tokens.

use indexmap::IndexMap;

/// An ordered list of font family fallbacks, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStack(Vec<String>);

impl FontStack {
    /// Create a stack. Returns `None` when the fallback list is empty.
    pub fn new(families: Vec<String>) -> Option<Self> {
        if families.is_empty() {
            None
        } else {
            Some(Self(families))
        }
    }

    /// The most preferred family.
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    /// The number of fallback entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over families in preference order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

/// Named font stacks added to the generator's `font-*` utilities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontFamilies {
    families: IndexMap<String, FontStack>,
}

impl FontFamilies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stack, replacing any previous one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, stack: FontStack) {
        self.families.insert(name.into(), stack);
    }

    /// Get a stack by name.
    pub fn get(&self, name: &str) -> Option<&FontStack> {
        self.families.get(name)
    }

    /// The number of named stacks.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Iterate over stacks in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FontStack)> {
        self.families.iter().map(|(k, v)| (k.as_str(), v))
    }
}
