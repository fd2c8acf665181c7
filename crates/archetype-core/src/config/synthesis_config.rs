//! Synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which aggregation pass `LciaMethod::transform` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisVariant {
    /// Deduplicated values of the immediate children, unweighted.
    #[default]
    ImmediateChildren,
    /// Frequency-weighted possible values propagated from all descendants.
    WeightedDescendants,
}

impl std::str::FromStr for SynthesisVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate_children" => Ok(Self::ImmediateChildren),
            "weighted_descendants" => Ok(Self::WeightedDescendants),
            other => Err(format!("unknown synthesis variant: {other}")),
        }
    }
}

/// Configuration for the aggregation passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Relative tolerance for collapsing near-duplicate values. Default: 1e-5.
    pub dedup_rel_tol: Option<f64>,
    /// Allowed deviation of a frequency sum from 1. Default: 1e-9.
    pub frequency_tolerance: Option<f64>,
    /// Distribution-family code for synthesized CFs. Default: 1.
    pub default_uncertainty_type: Option<i64>,
    /// Aggregation variant. Default: immediate_children.
    pub variant: Option<SynthesisVariant>,
}

impl SynthesisConfig {
    pub fn effective_dedup_rel_tol(&self) -> f64 {
        self.dedup_rel_tol
            .unwrap_or(constants::DEFAULT_DEDUP_REL_TOL)
    }

    pub fn effective_frequency_tolerance(&self) -> f64 {
        self.frequency_tolerance
            .unwrap_or(constants::DEFAULT_FREQUENCY_TOLERANCE)
    }

    pub fn effective_uncertainty_type(&self) -> i64 {
        self.default_uncertainty_type
            .unwrap_or(constants::DEFAULT_UNCERTAINTY_TYPE)
    }

    pub fn effective_variant(&self) -> SynthesisVariant {
        self.variant.unwrap_or_default()
    }
}
