use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_spacer::{distribute_evenly_on_curve, CurveShape, Rect};
use curve_spacer_engine::{distribute, sample_curve};
use std::hint::black_box;

fn wave(x: f32) -> f32 {
    (x * 4.0 * std::f32::consts::TAU).sin()
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    for &resolution in &[0.01f32, 0.001, 0.0001] {
        group.bench_with_input(
            BenchmarkId::new("sample_curve", resolution),
            &resolution,
            |b, &res| {
                b.iter(|| {
                    let polyline = sample_curve(&wave, Rect::new(1920.0, 200.0), black_box(res));
                    black_box(polyline.total_length())
                })
            },
        );
    }

    group.finish();
}

fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("even_spacing");
    let polyline = sample_curve(&wave, Rect::new(1920.0, 200.0), 0.001);

    for &count in &[8usize, 128, 2048] {
        group.bench_with_input(BenchmarkId::new("distribute", count), &count, |b, &n| {
            b.iter(|| {
                let dots = distribute(&polyline, black_box(n), f32::INFINITY);
                black_box(dots.len())
            })
        });
    }

    group.finish();
}

fn bench_full_layout(c: &mut Criterion) {
    let shape = CurveShape::Sine {
        periods: 2.0,
        phase: 0.0,
    };

    c.bench_function("layout_sine_64_items", |b| {
        b.iter(|| {
            let dots = distribute_evenly_on_curve(
                &shape,
                Rect::new(800.0, 120.0),
                black_box(64),
                0.005,
                40.0,
            )
            .expect("gültige Anfrage");
            black_box(dots.len())
        })
    });
}

criterion_group!(
    core_benches,
    bench_sampling,
    bench_distribution,
    bench_full_layout
);
criterion_main!(core_benches);
