//! Elementary-flow identity and metadata as delivered by collaborators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an elementary flow: `(database, code)`.
///
/// Serializes as a two-element array, the shape LCA data stores use for keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct FlowKey {
    pub database: String,
    pub code: String,
}

impl FlowKey {
    pub fn new(database: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            code: code.into(),
        }
    }
}

impl From<(String, String)> for FlowKey {
    fn from((database, code): (String, String)) -> Self {
        Self { database, code }
    }
}

impl From<FlowKey> for (String, String) {
    fn from(key: FlowKey) -> Self {
        (key.database, key.code)
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.database, self.code)
    }
}

/// Flow-type tag. Two CFs are only related when their directionality matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Directionality {
    Emission,
    NaturalResource,
    Economic,
    InventoryIndicator,
    Social,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl Directionality {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Emission => "emission",
            Self::NaturalResource => "natural resource",
            Self::Economic => "economic",
            Self::InventoryIndicator => "inventory indicator",
            Self::Social => "social",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for Directionality {
    fn from(tag: &str) -> Self {
        match tag {
            "emission" => Self::Emission,
            "natural resource" => Self::NaturalResource,
            "economic" => Self::Economic,
            "inventory indicator" => Self::InventoryIndicator,
            "social" => Self::Social,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Directionality {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<Directionality> for String {
    fn from(d: Directionality) -> Self {
        d.as_str().to_string()
    }
}

impl fmt::Display for Directionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flow metadata resolved by a [`crate::traits::FlowDirectory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub name: String,
    pub unit: String,
    #[serde(rename = "type")]
    pub flow_type: Directionality,
    /// Raw classification: `(compartment)` or `(compartment, subcompartment)`.
    pub categories: Vec<String>,
}

/// A CF value as stored by the method source.
///
/// Only `Plain` values can be synthesized; a `Structured` value already
/// carries an uncertainty distribution and is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCfValue {
    Plain(f64),
    Structured(serde_json::Value),
}

impl From<f64> for RawCfValue {
    fn from(value: f64) -> Self {
        Self::Plain(value)
    }
}
