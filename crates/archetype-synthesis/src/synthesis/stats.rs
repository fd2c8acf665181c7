//! Frequency-weighted moments over possible values.

use archetype_core::PossibleValue;

pub fn frequency_sum(values: &[PossibleValue]) -> f64 {
    values.iter().map(|pv| pv.frequency).sum()
}

/// Σ fᵢ·vᵢ / Σ fᵢ. NaN on an empty or zero-weight input.
pub fn weighted_mean(values: &[PossibleValue]) -> f64 {
    let total = frequency_sum(values);
    values.iter().map(|pv| pv.frequency * pv.value).sum::<f64>() / total
}

/// Population standard deviation with frequencies as weights.
pub fn weighted_std_dev(values: &[PossibleValue]) -> f64 {
    let total = frequency_sum(values);
    let mean = weighted_mean(values);
    let variance = values
        .iter()
        .map(|pv| pv.frequency * (pv.value - mean).powi(2))
        .sum::<f64>()
        / total;
    variance.max(0.0).sqrt()
}

/// (min, max) of the raw values, ignoring frequencies.
pub fn value_range(values: &[PossibleValue]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), pv| {
            (lo.min(pv.value), hi.max(pv.value))
        })
}
