//! Context exception table.

use serde::{Deserialize, Serialize};

/// One raw category tuple mapped to an explicit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextException {
    pub category: Vec<String>,
    pub path: Vec<String>,
}

impl ContextException {
    pub fn new<S: Into<String>>(
        category: impl IntoIterator<Item = S>,
        path: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            category: category.into_iter().map(Into::into).collect(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration of the context model.
///
/// A `[context]` table that lists `exceptions` replaces the built-in list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub exceptions: Vec<ContextException>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            exceptions: default_exceptions(),
        }
    }
}

/// Subcompartments whose comma belongs to the name.
pub fn default_exceptions() -> Vec<ContextException> {
    vec![ContextException::new(
        ["water", "ground-, long-term"],
        ["water", "ground-, long-term"],
    )]
}
