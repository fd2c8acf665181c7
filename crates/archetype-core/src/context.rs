//! Context model: turns a flow's raw categories into an ordered path.
//!
//! Generic rule: `(compartment)` → `[compartment]`,
//! `(compartment, subcompartment)` → `[compartment] + subcompartment.split(',')`.
//! Whitespace around the pieces is preserved. Categories whose subcompartment
//! contains a comma that is not a level separator are listed in an exception
//! table, consulted before the generic rule.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::ContextConfig;
use crate::errors::InputError;

/// Ordered classification path, coarse to fine. Its length is the CF level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextPath(SmallVec<[String; 4]>);

impl ContextPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn level(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The first `len` segments (the whole path if `len` exceeds it).
    pub fn prefix(&self, len: usize) -> ContextPath {
        Self(self.0.iter().take(len).cloned().collect())
    }

    /// `self` is a strict, leading sub-path of `other`.
    pub fn is_proper_prefix_of(&self, other: &ContextPath) -> bool {
        self.level() < other.level() && other.0[..self.level()] == self.0[..]
    }
}

impl From<Vec<String>> for ContextPath {
    fn from(segments: Vec<String>) -> Self {
        Self(SmallVec::from_vec(segments))
    }
}

impl fmt::Display for ContextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment:?}")?;
        }
        f.write_str("]")
    }
}

/// Applies the generic split rule, without consulting any exception.
pub fn split_categories(categories: &[String]) -> Result<ContextPath, InputError> {
    match categories {
        [compartment] => Ok(ContextPath::new([compartment.as_str()])),
        [compartment, subcompartment] => Ok(ContextPath::new(
            std::iter::once(compartment.as_str()).chain(subcompartment.split(',')),
        )),
        _ => Err(InputError::InvalidCategories {
            categories: categories.to_vec(),
            len: categories.len(),
        }),
    }
}

/// Normalizes categories, exceptions first.
#[derive(Debug, Clone)]
pub struct ContextResolver {
    exceptions: FxHashMap<Vec<String>, ContextPath>,
}

impl ContextResolver {
    /// A resolver with no exceptions: the generic rule only.
    pub fn generic() -> Self {
        Self {
            exceptions: FxHashMap::default(),
        }
    }

    pub fn from_config(config: &ContextConfig) -> Self {
        let mut resolver = Self::generic();
        for exception in &config.exceptions {
            resolver = resolver.with_exception(exception.category.clone(), exception.path.clone());
        }
        resolver
    }

    /// Add (or replace) one exception.
    pub fn with_exception(mut self, category: Vec<String>, path: Vec<String>) -> Self {
        self.exceptions.insert(category, ContextPath::from(path));
        self
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    pub fn normalize(&self, categories: &[String]) -> Result<ContextPath, InputError> {
        if let Some(path) = self.exceptions.get(categories) {
            return Ok(path.clone());
        }
        split_categories(categories)
    }
}

impl Default for ContextResolver {
    fn default() -> Self {
        Self::from_config(&ContextConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generic_rule_keeps_whitespace() {
        let path = split_categories(&cats(&["air", "low population density, long-term"])).unwrap();
        assert_eq!(
            path.as_slice(),
            &cats(&["air", "low population density", " long-term"])[..]
        );
        assert_eq!(path.level(), 3);
    }

    #[test]
    fn test_exception_bypasses_split() {
        let resolver = ContextResolver::default();
        let path = resolver.normalize(&cats(&["water", "ground-, long-term"])).unwrap();
        assert_eq!(path.as_slice(), &cats(&["water", "ground-, long-term"])[..]);
    }

    #[test]
    fn test_proper_prefix() {
        let air = ContextPath::new(["air"]);
        let urban = ContextPath::new(["air", "urban"]);
        assert!(air.is_proper_prefix_of(&urban));
        assert!(!urban.is_proper_prefix_of(&air));
        assert!(!air.is_proper_prefix_of(&air));
    }
}
