#![forbid(unsafe_code)]

/// Evenly spaced sample points over `[t_a, t_b]`, inclusive of both ends.
///
/// `t[i] = t_a + i * (t_b - t_a) / (n - 1)`, except that the final point
/// is pinned to `t_b` rather than accumulated, so both endpoints are
/// exact for any `n >= 2`. `n == 1` yields `[t_a]`; `n == 0` yields an
/// empty vector (callers that require `n >= 1` validate before calling).
///
/// A decreasing interval (`t_a > t_b`) produces a negative-direction
/// grid with the same construction.
#[must_use]
pub fn uniform_grid(t_a: f64, t_b: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![t_a];
    }
    let h = (t_b - t_a) / (n - 1) as f64;
    let mut t = Vec::with_capacity(n);
    for i in 0..n - 1 {
        t.push(t_a + i as f64 * h);
    }
    t.push(t_b);
    t
}
