#![forbid(unsafe_code)]

//! Heun predictor-corrector stepping.
//!
//! The scheme is second order: the predictor is a forward-Euler stage and
//! the corrector averages the derivative at the interval start with the
//! derivative at the predicted endpoint, i.e. the trapezoidal rule applied
//! to the derivative estimate. The corrector is applied once per step
//! (plain Heun, not iterated).

/// Perform a single Heun step from `(t, y)` to `t_next`.
///
/// Returns `(y_predicted, y_corrected)`: the forward-Euler predictor at
/// `t_next` and the corrected value. The starting slope is evaluated once
/// and shared by both stages, so `fun` is called exactly twice.
pub fn heun_step<F>(fun: &mut F, t: f64, y: f64, t_next: f64) -> (f64, f64)
where
    F: FnMut(f64, f64) -> f64,
{
    let h = t_next - t;
    let slope = fun(t, y);
    let y_pred = y + h * slope;
    let y_corr = y + 0.5 * h * (slope + fun(t_next, y_pred));
    (y_pred, y_corr)
}

/// Integrate `y' = fun(t, y)` over an explicit grid starting from `y0`.
///
/// Returns the solution values index-aligned with `t`, together with the
/// number of derivative evaluations (two per step). The step size is
/// taken from consecutive grid points, so a non-uniform or descending
/// grid integrates with whatever spacing it carries.
pub(crate) fn integrate_on_grid<F>(fun: &mut F, t: &[f64], y0: f64) -> (Vec<f64>, usize)
where
    F: FnMut(f64, f64) -> f64,
{
    let mut y = Vec::with_capacity(t.len());
    if t.is_empty() {
        return (y, 0);
    }
    y.push(y0);
    let mut nfev = 0;
    for i in 0..t.len() - 1 {
        let (_, y_next) = heun_step(fun, t[i], y[i], t[i + 1]);
        nfev += 2;
        y.push(y_next);
    }
    (y, nfev)
}
