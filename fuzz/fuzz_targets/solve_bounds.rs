#![no_main]

use arbitrary::Arbitrary;
use heunix_integrate::{HeunOptions, solve_heun};
use heunix_runtime::RuntimeMode;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SolveInput {
    t_a: f64,
    t_b: f64,
    y0: f64,
    n_points: u16,
    hardened: bool,
}

fuzz_target!(|input: SolveInput| {
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    // Cap the grid so a single input cannot dominate the fuzzing budget.
    let n_points = usize::from(input.n_points) % 4096;
    let result = solve_heun(
        &mut |t, y| t - 0.5 * y,
        &HeunOptions {
            interval: (input.t_a, input.t_b),
            n_points,
            y0: input.y0,
            mode,
        },
    );
    if let Ok(result) = result {
        assert_eq!(result.t.len(), n_points);
        assert_eq!(result.y.len(), n_points);
        assert_eq!(result.nfev, 2 * (n_points - 1));
        // NaN y0 passes through Strict mode; compare by bits.
        assert_eq!(result.y[0].to_bits(), input.y0.to_bits());
    }
});
