use criterion::{black_box, BenchmarkId, Criterion};
use epicycles::{ApproximationConfig, Epicycles};
use std::f64::consts::TAU;

fn unit_circle(t: f64) -> [f64; 2] {
    [(TAU * t).cos(), (TAU * t).sin()]
}

fn build(vector_count: usize) -> Epicycles {
    Epicycles::from_path(
        &unit_circle,
        &ApproximationConfig {
            vector_count,
            sample_count: 2000,
            scale: 1.0,
        },
    )
    .unwrap()
}

pub fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    // Full chain materialization, one frame's worth of geometry
    for vector_count in [10, 50, 100, 400] {
        group.bench_with_input(
            BenchmarkId::new("partial_sums", vector_count),
            &vector_count,
            |b, &vector_count| {
                let epicycles = build(vector_count);

                b.iter(|| {
                    epicycles
                        .partial_sums(black_box(0.37))
                        .last()
                        .unwrap()
                });
            },
        );
    }

    // Tip only, the traced-path probe
    for vector_count in [10, 100, 400] {
        group.bench_with_input(
            BenchmarkId::new("tip", vector_count),
            &vector_count,
            |b, &vector_count| {
                let epicycles = build(vector_count);

                b.iter(|| epicycles.tip(black_box(0.37)));
            },
        );
    }

    // A playback frame: advance the clock and read the renderer geometry
    group.bench_function("frame_100_vectors", |b| {
        let mut epicycles = build(100);
        epicycles.start(1.0);

        b.iter(|| {
            let t = epicycles.tick(1.0 / 60.0);
            epicycles.terms(t).map(|term| term.tip[0]).sum::<f64>()
        });
    });

    group.finish();
}
