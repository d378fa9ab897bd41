#![forbid(unsafe_code)]

//! Error metrics over index-aligned solution sequences.
//!
//! The originating material labeled its comparison "mse" while computing
//! a plain sum of squared differences (never divided by `n`). The
//! functions here are named for what they compute: [`sum_squared_error`]
//! reproduces the reference quantity, [`mean_squared_error`] is that sum
//! divided by the sample count.

/// Sum of squared differences `Σ (approx[i] - reference[i])²`.
///
/// # Panics
/// Panics if the slices differ in length; the sequences are required to
/// be index-aligned samples over the same grid.
#[must_use]
pub fn sum_squared_error(approx: &[f64], reference: &[f64]) -> f64 {
    assert_eq!(
        approx.len(),
        reference.len(),
        "sum_squared_error: length mismatch: approx={} reference={}",
        approx.len(),
        reference.len()
    );
    approx
        .iter()
        .zip(reference.iter())
        .map(|(a, r)| (a - r) * (a - r))
        .sum()
}

/// [`sum_squared_error`] divided by the sample count. Empty input yields 0.
///
/// # Panics
/// Panics if the slices differ in length.
#[must_use]
pub fn mean_squared_error(approx: &[f64], reference: &[f64]) -> f64 {
    if approx.is_empty() && reference.is_empty() {
        return 0.0;
    }
    sum_squared_error(approx, reference) / approx.len() as f64
}
