//! Near-duplicate collapsing of aggregated values.
//!
//! Single pass over the adjacent pairs of the sorted input: for every close
//! pair the smaller member is dropped. This is not a fixed point. Three
//! mutually close values `a < b < c` drop `a` and `b` and keep `c`, even
//! when `a` and `c` are not close to each other.

/// `math.isclose` with a zero absolute tolerance.
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Sorted survivors of `values` after dropping the smaller member of every
/// close adjacent pair.
pub fn dedup(values: &[f64], rel_tol: f64) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut dropped = vec![false; sorted.len()];
    for (i, pair) in sorted.windows(2).enumerate() {
        if is_close(pair[0], pair[1], rel_tol) {
            dropped[i] = true;
        }
    }

    sorted
        .into_iter()
        .zip(dropped)
        .filter_map(|(value, dropped)| (!dropped).then_some(value))
        .collect()
}
