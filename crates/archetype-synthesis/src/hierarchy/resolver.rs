//! Linear-scan relation queries over a flat CF slice.

use archetype_core::CharacterisationFactor;

/// CFs exactly one level below `cf` in the same lineage.
pub fn children_of<'a>(
    cfs: &'a [CharacterisationFactor],
    cf: &CharacterisationFactor,
) -> Vec<&'a CharacterisationFactor> {
    cfs.iter().filter(|candidate| candidate.is_child_of(cf)).collect()
}

/// Every deeper CF whose context extends `cf.context`, at any depth.
pub fn descendants_of<'a>(
    cfs: &'a [CharacterisationFactor],
    cf: &CharacterisationFactor,
) -> Vec<&'a CharacterisationFactor> {
    cfs.iter()
        .filter(|candidate| candidate.is_descendant_of(cf))
        .collect()
}
