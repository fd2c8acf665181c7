//! Uncertainty synthesis passes.
//!
//! Immediate: deduplicated values of the immediate children, unweighted.
//! Weighted: possible values propagated up from the descendants with
//! frequencies, then reduced to weighted moments.

pub mod immediate;
pub mod stats;
pub mod weighted;

use std::fmt;

pub use immediate::synthesize_immediate;
pub use weighted::{
    aggregate_possible_values, synthesize_from_possible_values, synthesize_weighted,
    FrequencyWeighting,
};

/// Names of the passes, used for spans and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisPass {
    Immediate,
    Aggregate,
    FromPossibleValues,
}

impl fmt::Display for SynthesisPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Immediate => "immediate_children",
            Self::Aggregate => "aggregate_possible_values",
            Self::FromPossibleValues => "from_possible_values",
        })
    }
}
