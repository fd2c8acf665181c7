//! Cleanup of raw method records before they are characterised.
//!
//! Imported methods often carry zero-valued CFs and CFs for flows the
//! current flow directory no longer knows. Both are dropped. A flow that
//! appears twice is an error: it would yield two CFs with one identity.

use archetype_core::errors::{ArchetypeResult, InputError};
use archetype_core::traits::{FlowDirectory, MethodSource};
use archetype_core::{FlowKey, RawCfValue};
use rustc_hash::FxHashSet;
use tracing::info;

/// Records that survived [`prepare_records`], plus what was dropped.
#[derive(Debug, Clone, Default)]
pub struct PreparedRecords {
    pub records: Vec<(FlowKey, RawCfValue)>,
    pub dropped_zero: usize,
    pub dropped_unknown: usize,
}

impl MethodSource for PreparedRecords {
    fn load(&self) -> ArchetypeResult<Vec<(FlowKey, RawCfValue)>> {
        Ok(self.records.clone())
    }
}

/// Drop zero-valued and unknown-flow records, reject duplicated flows.
pub fn prepare_records(
    records: Vec<(FlowKey, RawCfValue)>,
    flows: &dyn FlowDirectory,
) -> Result<PreparedRecords, InputError> {
    let mut prepared = PreparedRecords::default();
    let mut seen = FxHashSet::default();

    for (key, value) in records {
        if value == RawCfValue::Plain(0.0) {
            prepared.dropped_zero += 1;
            continue;
        }
        if !flows.contains(&key) {
            prepared.dropped_unknown += 1;
            continue;
        }
        if !seen.insert(key.clone()) {
            return Err(InputError::DuplicateFlow { key });
        }
        prepared.records.push((key, value));
    }

    info!(
        kept = prepared.records.len(),
        dropped_zero = prepared.dropped_zero,
        dropped_unknown = prepared.dropped_unknown,
        "prepared method records"
    );
    Ok(prepared)
}
