//! Prebuilt adjacency for the implicit hierarchy.
//!
//! Keyed by `(name, directionality, context-prefix)`. Built in one pass over
//! the collection, then answers the same queries as the scan resolver
//! without rescanning. Results are indices into the slice it was built from.

use archetype_core::{CharacterisationFactor, ContextPath, Directionality};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LineageKey {
    name: String,
    directionality: Directionality,
    context: ContextPath,
}

impl LineageKey {
    fn of(cf: &CharacterisationFactor, context: ContextPath) -> Self {
        Self {
            name: cf.name.clone(),
            directionality: cf.directionality.clone(),
            context,
        }
    }
}

/// Hierarchy index over a CF slice.
///
/// Only valid for the slice it was built from; rebuild after adding CFs.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    /// Per CF: its own key.
    keys: Vec<LineageKey>,
    /// Exact key → CFs carrying it.
    nodes: FxHashMap<LineageKey, Vec<usize>>,
    /// Proper prefix key → CFs below it, at any depth.
    below: FxHashMap<LineageKey, Vec<usize>>,
}

impl HierarchyIndex {
    pub fn build(cfs: &[CharacterisationFactor]) -> Self {
        let mut index = Self {
            keys: Vec::with_capacity(cfs.len()),
            ..Self::default()
        };

        for (i, cf) in cfs.iter().enumerate() {
            for len in 0..cf.level() {
                index
                    .below
                    .entry(LineageKey::of(cf, cf.context.prefix(len)))
                    .or_default()
                    .push(i);
            }
            let key = LineageKey::of(cf, cf.context.clone());
            index.nodes.entry(key.clone()).or_default().push(i);
            index.keys.push(key);
        }

        index
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn level(&self, i: usize) -> usize {
        self.keys[i].context.level()
    }

    /// All descendants of CF `i`, in container order.
    pub fn descendants(&self, i: usize) -> &[usize] {
        self.below
            .get(&self.keys[i])
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Immediate children of CF `i`.
    pub fn children(&self, i: usize) -> Vec<usize> {
        let level = self.level(i);
        self.descendants(i)
            .iter()
            .copied()
            .filter(|&d| self.level(d) == level + 1)
            .collect()
    }

    /// Descendants of CF `i` with no other descendant of `i` between them
    /// and `i`. Equal to [`Self::children`] when no level is skipped.
    pub fn nearest_descendants(&self, i: usize) -> Vec<usize> {
        let level = self.level(i);
        self.descendants(i)
            .iter()
            .copied()
            .filter(|&d| !self.has_node_between(d, level))
            .collect()
    }

    /// CFs with no ancestor in the collection.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| !(0..self.level(i)).any(|len| self.has_node_at(i, len)))
            .collect()
    }

    /// Whether CF `d` has an ancestor strictly deeper than `level`.
    fn has_node_between(&self, d: usize, level: usize) -> bool {
        (level + 1..self.level(d)).any(|len| self.has_node_at(d, len))
    }

    /// Whether a CF sits at the `len`-long prefix of CF `d`'s context.
    fn has_node_at(&self, d: usize, len: usize) -> bool {
        if len >= self.level(d) {
            return false;
        }
        let key = &self.keys[d];
        let probe = LineageKey {
            name: key.name.clone(),
            directionality: key.directionality.clone(),
            context: key.context.prefix(len),
        };
        self.nodes.contains_key(&probe)
    }
}
