//! The characterisation factor entity, node type of the implicit hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CfPayload, Directionality, FlowKey, FlowRecord, UncertaintyParams};
use crate::context::ContextPath;

/// One candidate value of an archetype and its relative frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PossibleValue {
    pub value: f64,
    pub frequency: f64,
}

impl PossibleValue {
    pub fn new(value: f64, frequency: f64) -> Self {
        Self { value, frequency }
    }
}

/// A characterisation factor of an LCIA method.
///
/// `level` is not stored: it is always the length of `context`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterisationFactor {
    pub key: FlowKey,
    pub name: String,
    pub unit: String,
    pub directionality: Directionality,
    pub context: ContextPath,
    /// Deterministic characterisation value.
    pub value: f64,
    /// Empty until a synthesis pass fills it.
    #[serde(default)]
    pub values_possible: Vec<PossibleValue>,
    /// `None` means deterministic: export `value` directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty_param: Option<UncertaintyParams>,
}

impl CharacterisationFactor {
    /// Build a deterministic CF from a flow record and its normalized context.
    pub fn new(key: FlowKey, record: &FlowRecord, context: ContextPath, value: f64) -> Self {
        Self {
            key,
            name: record.name.clone(),
            unit: record.unit.clone(),
            directionality: record.flow_type.clone(),
            context,
            value,
            values_possible: Vec::new(),
            uncertainty_param: None,
        }
    }

    pub fn database(&self) -> &str {
        &self.key.database
    }

    pub fn code(&self) -> &str {
        &self.key.code
    }

    /// Depth of the context path.
    pub fn level(&self) -> usize {
        self.context.level()
    }

    pub fn is_deterministic(&self) -> bool {
        self.uncertainty_param.is_none()
    }

    /// Same substance and same flow direction.
    pub fn same_lineage(&self, other: &Self) -> bool {
        self.name == other.name && self.directionality == other.directionality
    }

    /// `self` is a more specific version of `ancestor`, at any depth.
    pub fn is_descendant_of(&self, ancestor: &Self) -> bool {
        self.same_lineage(ancestor) && ancestor.context.is_proper_prefix_of(&self.context)
    }

    /// `self` is exactly one level below `parent`.
    pub fn is_child_of(&self, parent: &Self) -> bool {
        self.level() == parent.level() + 1 && self.is_descendant_of(parent)
    }

    /// Export form: the bare value or the full parameter mapping.
    pub fn payload(&self) -> CfPayload {
        match &self.uncertainty_param {
            Some(params) => CfPayload::Uncertain(params.clone()),
            None => CfPayload::Deterministic(self.value),
        }
    }
}

impl fmt::Display for CharacterisationFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.context, self.value)
    }
}
