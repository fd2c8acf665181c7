//! Collaborator interfaces. Implemented by the LCA data/method store.

pub mod flow_directory;
pub mod method_source;

pub use flow_directory::{FlowDirectory, InMemoryFlowDirectory};
pub use method_source::{MethodSource, StaticMethodSource};
