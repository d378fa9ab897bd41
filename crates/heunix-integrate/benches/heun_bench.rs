use criterion::{Criterion, criterion_group, criterion_main};
use heunix_integrate::{HeunOptions, solve_heun, sum_squared_error, uniform_grid};
use heunix_runtime::RuntimeMode;

/// Exponential decay: y' = -y, y(0) = 1.
fn exponential_decay(_t: f64, y: f64) -> f64 {
    -y
}

/// Reference toy problem: y' = 2t, exact solution t² + C.
fn time_linear(t: f64, _y: f64) -> f64 {
    2.0 * t
}

fn bench_solve_heun_reference_scenario(c: &mut Criterion) {
    let opts = HeunOptions {
        interval: (-1.0, 1.0),
        n_points: 1000,
        y0: 1.0,
        mode: RuntimeMode::Strict,
    };
    c.bench_function("solve_heun_time_linear_1000", |b| {
        b.iter(|| {
            let mut rhs = time_linear;
            solve_heun(&mut rhs, &opts)
        });
    });
}

fn bench_solve_heun_decay(c: &mut Criterion) {
    let opts = HeunOptions {
        interval: (0.0, 10.0),
        n_points: 10_000,
        y0: 2.0,
        mode: RuntimeMode::Strict,
    };
    c.bench_function("solve_heun_exponential_10000", |b| {
        b.iter(|| {
            let mut rhs = exponential_decay;
            solve_heun(&mut rhs, &opts)
        });
    });
}

fn bench_grid_and_metric(c: &mut Criterion) {
    c.bench_function("uniform_grid_1000", |b| {
        b.iter(|| uniform_grid(-1.0, 1.0, 1000));
    });
    let t = uniform_grid(-1.0, 1.0, 1000);
    let approx: Vec<f64> = t.iter().map(|t| t * t).collect();
    let reference = approx.clone();
    c.bench_function("sum_squared_error_1000", |b| {
        b.iter(|| sum_squared_error(&approx, &reference));
    });
}

criterion_group!(
    benches,
    bench_solve_heun_reference_scenario,
    bench_solve_heun_decay,
    bench_grid_and_metric
);
criterion_main!(benches);
