//! MethodSource: yields the raw `(flow_key, value)` records of an LCIA method.

use crate::errors::ArchetypeResult;
use crate::models::{FlowKey, RawCfValue};

/// Source of an LCIA method's raw characterisation records.
pub trait MethodSource {
    /// Load every `(flow_key, value)` pair of the method.
    fn load(&self) -> ArchetypeResult<Vec<(FlowKey, RawCfValue)>>;
}

/// A method whose records are already materialized in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticMethodSource {
    records: Vec<(FlowKey, RawCfValue)>,
}

impl StaticMethodSource {
    pub fn new(records: Vec<(FlowKey, RawCfValue)>) -> Self {
        Self { records }
    }

    /// Build from plain deterministic values.
    pub fn from_values(values: impl IntoIterator<Item = (FlowKey, f64)>) -> Self {
        Self {
            records: values
                .into_iter()
                .map(|(key, value)| (key, RawCfValue::Plain(value)))
                .collect(),
        }
    }
}

impl MethodSource for StaticMethodSource {
    fn load(&self) -> ArchetypeResult<Vec<(FlowKey, RawCfValue)>> {
        Ok(self.records.clone())
    }
}
