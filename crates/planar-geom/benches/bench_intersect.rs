use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar_geom::intersect::{
    intersects_closest_point, intersects_corner_edge, intersects_rotated_matrix,
    intersects_rotated_trig,
};
use planar_geom::parallel::{intersect_many, ExecutionStrategy};
use planar_geom::{Circle, Rectangle};
use planar_linalg::Vec2F32;
use rand::Rng;
use std::hint::black_box;

fn bench_axis_aligned(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_aligned");
    let half_extents = Vec2F32::new(2.5, 1.5);
    let circle_center = Vec2F32::new(3.0, 1.0);

    group.bench_function(BenchmarkId::new("corner_edge", ""), |b| {
        b.iter(|| {
            black_box(intersects_corner_edge(
                black_box(Vec2F32::ZERO),
                black_box(half_extents),
                black_box(circle_center),
                black_box(0.5),
            ))
        })
    });

    group.bench_function(BenchmarkId::new("closest_point", ""), |b| {
        b.iter(|| {
            black_box(intersects_closest_point(
                black_box(Vec2F32::ZERO),
                black_box(half_extents),
                black_box(circle_center),
                black_box(0.5),
            ))
        })
    });
    group.finish();
}

fn bench_rotated(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotated");
    let rect = Rectangle::from_size(Vec2F32::ZERO, 5.0, 3.0, 45.0);
    let circle = Circle::new(Vec2F32::new(2.0, 2.0), 0.5);

    group.bench_function(BenchmarkId::new("matrix", ""), |b| {
        b.iter(|| black_box(intersects_rotated_matrix(black_box(&rect), black_box(&circle))))
    });

    group.bench_function(BenchmarkId::new("trig", ""), |b| {
        b.iter(|| black_box(intersects_rotated_trig(black_box(&rect), black_box(&circle))))
    });
    group.finish();
}

fn bench_intersect_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect_many");
    let mut rng = rand::rng();

    for (num_rects, num_circles) in [(16, 256), (256, 1024)] {
        let rects: Vec<Rectangle> = (0..num_rects)
            .map(|_| {
                Rectangle::from_size(
                    Vec2F32::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
                    rng.random_range(1.0..10.0),
                    rng.random_range(1.0..10.0),
                    rng.random_range(0.0..360.0),
                )
            })
            .collect();
        let circles: Vec<Circle> = (0..num_circles)
            .map(|_| {
                Circle::new(
                    Vec2F32::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
                    rng.random_range(0.1..5.0),
                )
            })
            .collect();

        let parameter = format!("{num_rects}x{num_circles}");
        group.bench_with_input(
            BenchmarkId::new("serial", &parameter),
            &(&rects, &circles),
            |b, (rects, circles)| {
                b.iter(|| black_box(intersect_many(rects, circles, ExecutionStrategy::Serial)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", &parameter),
            &(&rects, &circles),
            |b, (rects, circles)| {
                b.iter(|| black_box(intersect_many(rects, circles, ExecutionStrategy::Parallel)))
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_axis_aligned,
    bench_rotated,
    bench_intersect_many
);
criterion_main!(benches);
