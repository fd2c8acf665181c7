//! # archetype-synthesis
//!
//! Bottom-up synthesis of archetype characterisation factors.
//! The hierarchy is implicit: it is recovered from context-path prefixes
//! and name/directionality equality. Parents are processed after all of
//! their descendants, deepest level first.

pub mod dedup;
pub mod hierarchy;
pub mod ingest;
pub mod method;
pub mod synthesis;

pub use dedup::{dedup, is_close};
pub use hierarchy::{children_of, deepest_first, descendants_of, HierarchyIndex};
pub use ingest::{prepare_records, PreparedRecords};
pub use method::LciaMethod;
pub use synthesis::{FrequencyWeighting, SynthesisPass};
