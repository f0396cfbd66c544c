//! Shared statistics helpers for the source tests
//!
//! The distribution checks compare empirical mean and variance of sampled
//! draws against the theoretical uniform-distribution values, within a fixed
//! absolute tolerance. They indicate that a source stays inside expected
//! boundaries; they say nothing about randomness quality.

#![allow(dead_code)]

/// Maximum absolute difference accepted by [`near_equal`]
pub const MAX_DIFF: f64 = 0.1;

/// Arithmetic mean of `values`
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "mean of empty sample");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance of `values`
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn variance(values: &[f64]) -> f64 {
    let center = mean(values);
    values
        .iter()
        .map(|value| {
            let deviation = value - center;
            deviation * deviation
        })
        .sum::<f64>()
        / values.len() as f64
}

/// Whether `actual` is within `max_diff` of `expected`
pub fn near_equal(actual: f64, expected: f64, max_diff: f64) -> bool {
    (actual - expected).abs() <= max_diff
}
