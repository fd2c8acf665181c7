//! Implicit CF hierarchy.
//!
//! `cf2` descends from `cf1` iff both share name and directionality,
//! `cf2.level > cf1.level`, and `cf1.context` is a prefix of `cf2.context`.
//! An immediate child is exactly one level deeper. No tree pointers are
//! stored on the CFs: relations are either scanned ([`resolver`]) or read
//! from an index built once per pass ([`index`]).

pub mod index;
pub mod order;
pub mod resolver;

pub use index::HierarchyIndex;
pub use order::deepest_first;
pub use resolver::{children_of, descendants_of};
