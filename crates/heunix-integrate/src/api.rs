#![forbid(unsafe_code)]

use heunix_runtime::RuntimeMode;

use crate::grid::uniform_grid;
use crate::heun::integrate_on_grid;
use crate::validation::{
    HeunValidationError, validate_initial_value, validate_interval, validate_points,
};

/// Options for [`solve_heun`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeunOptions {
    /// Integration interval `(t_a, t_b)`, endpoints included in the grid.
    pub interval: (f64, f64),
    /// Number of grid points, endpoints included. Must be at least 1.
    pub n_points: usize,
    /// Initial condition `y(t_a)`.
    pub y0: f64,
    pub mode: RuntimeMode,
}

impl Default for HeunOptions {
    fn default() -> Self {
        Self {
            interval: (0.0, 0.0),
            n_points: 1,
            y0: 0.0,
            mode: RuntimeMode::Strict,
        }
    }
}

/// Result of [`solve_heun`]: the grid and the solution sequence,
/// index-aligned (`y[i]` approximates the true solution at `t[i]`).
#[derive(Debug, Clone, PartialEq)]
pub struct HeunResult {
    pub t: Vec<f64>,
    pub y: Vec<f64>,
    /// Number of derivative evaluations: `2 * (n_points - 1)`.
    pub nfev: usize,
}

/// Solve a scalar initial value problem `y' = fun(t, y)`, `y(t_a) = y0`
/// with Heun's method on `n_points` evenly spaced grid points.
///
/// # Contract
/// - Validates the point count, interval, and initial value up front;
///   no partial result is produced on a validation failure.
/// - `n_points == 1` returns `(t=[t_a], y=[y0])` with `nfev == 0`.
/// - In Strict mode a reversed interval integrates over a
///   negative-direction grid; Hardened mode rejects it.
/// - The driver performs no recovery around `fun`: a panic in the
///   caller-supplied closure unwinds unmodified, and NaN/Inf values it
///   returns propagate under IEEE 754 rules.
pub fn solve_heun<F>(fun: &mut F, options: &HeunOptions) -> Result<HeunResult, HeunValidationError>
where
    F: FnMut(f64, f64) -> f64,
{
    let n = validate_points(options.n_points)?;
    let (t_a, t_b) = validate_interval(options.interval.0, options.interval.1, options.mode)?;
    let y0 = validate_initial_value(options.y0, options.mode)?;

    let t = uniform_grid(t_a, t_b, n);
    let (y, nfev) = integrate_on_grid(fun, &t, y0);

    Ok(HeunResult { t, y, nfev })
}
