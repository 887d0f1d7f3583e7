//! Ignore patterns.

use footprint_types::{FootprintError, Result};
use regex::Regex;

/// Ordered list of patterns excluding resources by name.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    patterns: Vec<Regex>,
}

impl IgnoreList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compiles a list from pattern sources.
    ///
    /// # Errors
    ///
    /// Returns an error for the first pattern that fails to compile.
    pub fn from_patterns<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        patterns
            .into_iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| FootprintError::invalid_pattern(pattern, e))
            })
            .collect()
    }

    /// Appends a pattern. Duplicates are kept.
    pub fn push(&mut self, pattern: Regex) {
        self.patterns.push(pattern);
    }

    /// Returns true if `name` matches any pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    /// Returns the patterns in insertion order.
    #[must_use]
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Returns the number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if there are no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl FromIterator<Regex> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = Regex>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}
