//! Frequency-weighted, full-descendant aggregation.
//!
//! Two passes:
//! 1. [`aggregate_possible_values`] walks the CFs deepest first and gives
//!    every CF with descendants a `values_possible` list built from its
//!    aggregation children (immediate children, or the nearest descendants
//!    when a level is missing). A child without possible values counts as a
//!    point mass at its own value; otherwise its list is pulled up with its
//!    frequencies scaled by the child's weight.
//! 2. [`synthesize_from_possible_values`] turns each list into weighted
//!    moments. Single values and equal-valued pairs stay deterministic.

use archetype_core::config::SynthesisConfig;
use archetype_core::errors::SynthesisError;
use archetype_core::{CharacterisationFactor, FlowKey, PossibleValue, UncertaintyParams};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::stats;
use super::SynthesisPass;
use crate::hierarchy::{deepest_first, HierarchyIndex};

/// How sibling aggregation children share their parent's probability mass.
#[derive(Debug, Clone, Default)]
pub enum FrequencyWeighting {
    /// Each of `n` children gets `1/n`.
    #[default]
    Uniform,
    /// Children weighted by total inventory amount per flow (absolute value),
    /// normalized over the siblings. Missing flows count as zero.
    ByAmount(FxHashMap<FlowKey, f64>),
}

impl FrequencyWeighting {
    /// Weights for `members`, summing to 1.
    fn weights(&self, cfs: &[CharacterisationFactor], members: &[usize]) -> Vec<f64> {
        let uniform = || vec![1.0 / members.len() as f64; members.len()];
        match self {
            Self::Uniform => uniform(),
            Self::ByAmount(totals) => {
                let amounts: Vec<f64> = members
                    .iter()
                    .map(|&m| totals.get(&cfs[m].key).copied().unwrap_or(0.0).abs())
                    .collect();
                let total: f64 = amounts.iter().sum();
                if total > 0.0 && total.is_finite() {
                    amounts.into_iter().map(|a| a / total).collect()
                } else {
                    warn!(
                        siblings = members.len(),
                        "no usable amounts for siblings, falling back to uniform frequencies"
                    );
                    uniform()
                }
            }
        }
    }
}

/// Fill `values_possible` on every CF that has descendants.
/// Returns the number of CFs that received a list.
pub fn aggregate_possible_values(
    cfs: &mut [CharacterisationFactor],
    weighting: &FrequencyWeighting,
) -> usize {
    let _span = archetype_core::synthesis_span!(SynthesisPass::Aggregate, cfs.len()).entered();

    let index = HierarchyIndex::build(cfs);
    let mut aggregated = 0;

    for i in deepest_first(cfs) {
        if index.descendants(i).is_empty() {
            continue;
        }

        let members = index.nearest_descendants(i);
        let weights = weighting.weights(cfs, &members);

        let mut possible = Vec::new();
        for (&m, weight) in members.iter().zip(weights) {
            let child = &cfs[m];
            if child.values_possible.is_empty() {
                possible.push(PossibleValue::new(child.value, weight));
            } else {
                possible.extend(
                    child
                        .values_possible
                        .iter()
                        .map(|pv| PossibleValue::new(pv.value, pv.frequency * weight)),
                );
            }
        }

        debug!(
            key = %cfs[i].key,
            members = members.len(),
            values = possible.len(),
            "aggregated possible values"
        );
        cfs[i].values_possible = possible;
        aggregated += 1;
    }

    info!(aggregated, total = cfs.len(), "possible-value aggregation complete");
    aggregated
}

/// Whether a possible-value list describes a single certain value.
fn is_certain(values: &[PossibleValue]) -> bool {
    match values {
        [] | [_] => true,
        [a, b] => a.value == b.value,
        _ => false,
    }
}

/// Reduce every non-trivial `values_possible` list to weighted moments.
///
/// All lists are checked before any CF is touched: a frequency sum off by
/// more than the configured tolerance fails the whole pass and leaves the
/// CFs unchanged. Returns the number of CFs synthesized.
pub fn synthesize_from_possible_values(
    cfs: &mut [CharacterisationFactor],
    config: &SynthesisConfig,
) -> Result<usize, SynthesisError> {
    let _span =
        archetype_core::synthesis_span!(SynthesisPass::FromPossibleValues, cfs.len()).entered();

    let tolerance = config.effective_frequency_tolerance();
    let uncertainty_type = config.effective_uncertainty_type();

    let mut updates = Vec::new();
    for (i, cf) in cfs.iter().enumerate() {
        if is_certain(&cf.values_possible) {
            continue;
        }

        let sum = stats::frequency_sum(&cf.values_possible);
        if !((sum - 1.0).abs() <= tolerance) {
            return Err(SynthesisError::FrequencyInvariantViolation {
                key: cf.key.clone(),
                sum,
                tolerance,
            });
        }

        let (minimum, maximum) = stats::value_range(&cf.values_possible);
        updates.push((
            i,
            UncertaintyParams {
                uncertainty_type,
                amount: cf.value,
                loc: stats::weighted_mean(&cf.values_possible),
                scale: Some(stats::weighted_std_dev(&cf.values_possible)),
                minimum,
                maximum,
            },
        ));
    }

    let synthesized = updates.len();
    for (i, params) in updates {
        debug!(
            key = %cfs[i].key,
            loc = params.loc,
            scale = ?params.scale,
            "synthesized from possible values"
        );
        cfs[i].uncertainty_param = Some(params);
    }

    info!(synthesized, total = cfs.len(), "possible-value synthesis complete");
    Ok(synthesized)
}

/// Both weighted passes in sequence.
pub fn synthesize_weighted(
    cfs: &mut [CharacterisationFactor],
    config: &SynthesisConfig,
    weighting: &FrequencyWeighting,
) -> Result<usize, SynthesisError> {
    aggregate_possible_values(cfs, weighting);
    synthesize_from_possible_values(cfs, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_certain() {
        assert!(is_certain(&[]));
        assert!(is_certain(&[PossibleValue::new(3.0, 1.0)]));
        assert!(is_certain(&[
            PossibleValue::new(3.0, 0.5),
            PossibleValue::new(3.0, 0.5)
        ]));
        assert!(!is_certain(&[
            PossibleValue::new(3.0, 0.5),
            PossibleValue::new(4.0, 0.5)
        ]));
        assert!(!is_certain(&[
            PossibleValue::new(3.0, 0.4),
            PossibleValue::new(3.0, 0.3),
            PossibleValue::new(3.0, 0.3)
        ]));
    }
}
