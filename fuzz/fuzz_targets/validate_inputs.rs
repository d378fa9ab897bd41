#![no_main]

use arbitrary::Arbitrary;
use heunix_integrate::{validate_initial_value, validate_interval, validate_points};
use heunix_runtime::RuntimeMode;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ValidateInput {
    t_a: f64,
    t_b: f64,
    y0: f64,
    n_points: usize,
    hardened: bool,
}

fuzz_target!(|input: ValidateInput| {
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    let _ = validate_points(input.n_points);
    let _ = validate_interval(input.t_a, input.t_b, mode);
    let _ = validate_initial_value(input.y0, mode);
});
