use criterion::{black_box, BenchmarkId, Criterion};
use epicycles::{ApproximationConfig, CoefficientTable, Polyline};
use std::f64::consts::TAU;

fn unit_circle(t: f64) -> [f64; 2] {
    [(TAU * t).cos(), (TAU * t).sin()]
}

pub fn bench_coefficients(c: &mut Criterion) {
    let mut group = c.benchmark_group("coefficients");

    // Table construction cost against the sample count (FFT dominated)
    for sample_count in [500, 2000, 8000] {
        group.bench_with_input(
            BenchmarkId::new("from_path_samples", sample_count),
            &sample_count,
            |b, &sample_count| {
                let config = ApproximationConfig {
                    vector_count: 100,
                    sample_count,
                    scale: 1.0,
                };

                b.iter(|| CoefficientTable::from_path(black_box(&unit_circle), &config).unwrap());
            },
        );
    }

    // Table construction cost against the vector count at a fixed sample count
    for vector_count in [10, 50, 100, 400] {
        group.bench_with_input(
            BenchmarkId::new("from_path_vectors", vector_count),
            &vector_count,
            |b, &vector_count| {
                let config = ApproximationConfig {
                    vector_count,
                    sample_count: 2000,
                    scale: 1.0,
                };

                b.iter(|| CoefficientTable::from_path(black_box(&unit_circle), &config).unwrap());
            },
        );
    }

    // Polyline sampling overhead compared to a closure path
    group.bench_function("from_path_square_polyline", |b| {
        let square =
            Polyline::closed(vec![[1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0], [1.0, -1.0]]).unwrap();
        let config = ApproximationConfig::default();

        b.iter(|| CoefficientTable::from_path(black_box(&square), &config).unwrap());
    });

    group.finish();
}
