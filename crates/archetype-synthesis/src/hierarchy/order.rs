//! Processing order for the bottom-up passes.

use archetype_core::CharacterisationFactor;

/// Indices of `cfs`, deepest level first; ties keep container order.
///
/// Every descendant of a CF is strictly deeper, so walking this order
/// guarantees a parent is visited after all of its descendants.
pub fn deepest_first(cfs: &[CharacterisationFactor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cfs.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(cfs[i].level()));
    order
}
