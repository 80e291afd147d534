//! Color token table.

use indexmap::IndexMap;

use crate::types::ColorValue;

/// Named color tokens added to the generator's builtin palette.
///
/// Tokens extend the palette without replacing it. Iteration order is
/// declaration order, which is also the order the generator emits the
/// corresponding utilities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorTokens {
    tokens: IndexMap<String, ColorValue>,
}

impl ColorTokens {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: ColorValue) {
        self.tokens.insert(name.into(), value);
    }

    /// Get a token value by name.
    pub fn get(&self, name: &str) -> Option<&ColorValue> {
        self.tokens.get(name)
    }

    /// Check if a token exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }
}
