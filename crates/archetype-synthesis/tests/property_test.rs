//! Property tests for deduplication and frequency propagation.

use archetype_core::config::SynthesisConfig;
use archetype_core::context::ContextPath;
use archetype_core::{CharacterisationFactor, Directionality, FlowKey, FlowRecord};
use archetype_synthesis::synthesis::{aggregate_possible_values, synthesize_from_possible_values};
use archetype_synthesis::{dedup, is_close, FrequencyWeighting};
use proptest::prelude::*;

fn cf(i: usize, context: Vec<&str>, value: f64) -> CharacterisationFactor {
    let record = FlowRecord {
        name: "Zinc II".to_string(),
        unit: "kilogram".to_string(),
        flow_type: Directionality::Emission,
        categories: vec![],
    };
    CharacterisationFactor::new(
        FlowKey::new("biosphere3", i.to_string()),
        &record,
        ContextPath::new(context),
        value,
    )
}

/// Random trees over the segments `a`/`b`, up to four levels deep.
fn arb_tree() -> impl Strategy<Value = Vec<CharacterisationFactor>> {
    prop::collection::vec(
        (prop::collection::vec(0usize..2, 1..5), 0.1f64..100.0),
        1..16,
    )
    .prop_map(|nodes| {
        const SEGMENTS: [&str; 2] = ["a", "b"];
        nodes
            .into_iter()
            .enumerate()
            .map(|(i, (path, value))| cf(i, path.iter().map(|&s| SEGMENTS[s]).collect(), value))
            .collect()
    })
}

proptest! {
    #[test]
    fn dedup_output_is_sorted_subset(values in prop::collection::vec(-1e6f64..1e6, 0..20)) {
        let out = dedup(&values, 1e-5);
        prop_assert!(out.len() <= values.len());
        prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
        for v in &out {
            prop_assert!(values.contains(v));
        }
        if !values.is_empty() {
            prop_assert!(!out.is_empty());
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(out.last().copied(), Some(max));
        }
    }

    #[test]
    fn dedup_survivors_not_close_to_next(values in prop::collection::vec(-1e3f64..1e3, 0..20)) {
        let out = dedup(&values, 1e-2);
        // An element whose sorted successor is not close to it always survives.
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        for w in sorted.windows(2) {
            if !is_close(w[0], w[1], 1e-2) {
                prop_assert!(out.contains(&w[0]));
            }
        }
    }

    #[test]
    fn is_close_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6, tol in 0.0f64..0.5) {
        prop_assert_eq!(is_close(a, b, tol), is_close(b, a, tol));
        prop_assert!(is_close(a, a, tol));
    }

    #[test]
    fn aggregated_frequencies_sum_to_one(mut cfs in arb_tree()) {
        aggregate_possible_values(&mut cfs, &FrequencyWeighting::Uniform);
        for cf in &cfs {
            if !cf.values_possible.is_empty() {
                let total: f64 = cf.values_possible.iter().map(|pv| pv.frequency).sum();
                prop_assert!((total - 1.0).abs() < 1e-9, "sum {} for {}", total, cf.key);
            }
        }
        prop_assert!(synthesize_from_possible_values(&mut cfs, &SynthesisConfig::default()).is_ok());
    }

    #[test]
    fn synthesized_loc_lies_within_range(mut cfs in arb_tree()) {
        aggregate_possible_values(&mut cfs, &FrequencyWeighting::Uniform);
        synthesize_from_possible_values(&mut cfs, &SynthesisConfig::default()).unwrap();
        for params in cfs.iter().filter_map(|cf| cf.uncertainty_param.as_ref()) {
            prop_assert!(params.minimum <= params.maximum);
            prop_assert!(params.loc >= params.minimum - 1e-9);
            prop_assert!(params.loc <= params.maximum + 1e-9);
            prop_assert!(params.scale.unwrap() >= 0.0);
        }
    }
}
