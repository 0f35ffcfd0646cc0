use criterion::{criterion_group, criterion_main};

mod coefficient_benches;
mod evaluate_benches;

criterion_group!(
    benches,
    coefficient_benches::bench_coefficients,
    evaluate_benches::bench_evaluate,
);

criterion_main!(benches);
