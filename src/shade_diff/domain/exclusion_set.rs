use super::Coordinate;
use std::collections::BTreeSet;
use std::fmt;

/// ExclusionSet - deduplicated `group:name:*` patterns, always iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the pattern for `coordinate`, returning `false` if it was already present
    pub fn insert(&mut self, coordinate: &Coordinate) -> bool {
        self.patterns.insert(coordinate.exclusion_pattern())
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Comma-joined form handed to the packaging step
    pub fn render(&self) -> String {
        self.patterns().collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
