#![forbid(unsafe_code)]

use heunix_runtime::RuntimeMode;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeunValidationError {
    #[error("`n_points` must be at least 1.")]
    PointCountMustBePositive,
    #[error("interval endpoints must be finite.")]
    IntervalNotFinite,
    #[error("interval is reversed: `t_a` exceeds `t_b`.")]
    IntervalReversed,
    #[error("`y0` must be finite.")]
    InitialValueNotFinite,
}

/// Validate the requested number of grid points.
pub fn validate_points(n_points: usize) -> Result<usize, HeunValidationError> {
    if n_points == 0 {
        return Err(HeunValidationError::PointCountMustBePositive);
    }
    Ok(n_points)
}

/// Validate the integration interval.
///
/// Non-finite endpoints are rejected in both modes. A reversed interval
/// (`t_a > t_b`) is accepted in Strict mode, where it yields a
/// negative-direction grid, and rejected in Hardened mode.
pub fn validate_interval(
    t_a: f64,
    t_b: f64,
    mode: RuntimeMode,
) -> Result<(f64, f64), HeunValidationError> {
    if !t_a.is_finite() || !t_b.is_finite() {
        return Err(HeunValidationError::IntervalNotFinite);
    }
    if mode == RuntimeMode::Hardened && t_a > t_b {
        return Err(HeunValidationError::IntervalReversed);
    }
    Ok((t_a, t_b))
}

/// Validate the initial condition.
///
/// Strict mode passes any value through; the arithmetic then follows
/// IEEE 754 propagation rules. Hardened mode rejects NaN/Inf up front.
pub fn validate_initial_value(y0: f64, mode: RuntimeMode) -> Result<f64, HeunValidationError> {
    if mode == RuntimeMode::Hardened && !y0.is_finite() {
        return Err(HeunValidationError::InitialValueNotFinite);
    }
    Ok(y0)
}
