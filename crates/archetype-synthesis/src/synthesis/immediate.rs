//! Immediate-children aggregation.
//!
//! For every CF with at least one immediate child, the children's
//! deterministic values are deduplicated and summarized as
//! `minimum`/`maximum`/`loc` (plain mean). `amount` stays the CF's own value.
//! CFs without children are left deterministic.

use archetype_core::config::SynthesisConfig;
use archetype_core::{CharacterisationFactor, PossibleValue, UncertaintyParams};
use statrs::statistics::Statistics;
use tracing::{debug, info};

use super::SynthesisPass;
use crate::dedup::dedup;
use crate::hierarchy::{deepest_first, HierarchyIndex};

/// Run the pass over `cfs` in place. Returns the number of CFs synthesized.
pub fn synthesize_immediate(cfs: &mut [CharacterisationFactor], config: &SynthesisConfig) -> usize {
    let _span = archetype_core::synthesis_span!(SynthesisPass::Immediate, cfs.len()).entered();

    let rel_tol = config.effective_dedup_rel_tol();
    let uncertainty_type = config.effective_uncertainty_type();
    let index = HierarchyIndex::build(cfs);
    let mut synthesized = 0;

    for i in deepest_first(cfs) {
        let children = index.children(i);
        if children.is_empty() {
            continue;
        }

        let child_values: Vec<f64> = children.iter().map(|&c| cfs[c].value).collect();
        let possible = dedup(&child_values, rel_tol);
        let frequency = 1.0 / possible.len() as f64;

        let params = UncertaintyParams {
            uncertainty_type,
            amount: cfs[i].value,
            loc: Statistics::mean(&possible),
            scale: None,
            minimum: Statistics::min(&possible),
            maximum: Statistics::max(&possible),
        };

        let cf = &mut cfs[i];
        debug!(
            key = %cf.key,
            children = children.len(),
            distinct = possible.len(),
            loc = params.loc,
            "synthesized from immediate children"
        );
        cf.values_possible = possible
            .into_iter()
            .map(|value| PossibleValue::new(value, frequency))
            .collect();
        cf.uncertainty_param = Some(params);
        synthesized += 1;
    }

    info!(synthesized, total = cfs.len(), "immediate-children pass complete");
    synthesized
}
