//! FlowDirectory: resolves a flow key to its metadata.

use rustc_hash::FxHashMap;

use crate::models::{FlowKey, FlowRecord};

/// Lookup of elementary-flow metadata.
pub trait FlowDirectory {
    /// `None` when the flow is unknown.
    fn get_activity(&self, key: &FlowKey) -> Option<FlowRecord>;

    fn contains(&self, key: &FlowKey) -> bool {
        self.get_activity(key).is_some()
    }
}

/// Flow metadata held in a hash map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlowDirectory {
    flows: FxHashMap<FlowKey, FlowRecord>,
}

impl InMemoryFlowDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FlowKey, record: FlowRecord) -> Option<FlowRecord> {
        self.flows.insert(key, record)
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

impl FromIterator<(FlowKey, FlowRecord)> for InMemoryFlowDirectory {
    fn from_iter<I: IntoIterator<Item = (FlowKey, FlowRecord)>>(iter: I) -> Self {
        Self {
            flows: iter.into_iter().collect(),
        }
    }
}

impl FlowDirectory for InMemoryFlowDirectory {
    fn get_activity(&self, key: &FlowKey) -> Option<FlowRecord> {
        self.flows.get(key).cloned()
    }

    fn contains(&self, key: &FlowKey) -> bool {
        self.flows.contains_key(key)
    }
}
