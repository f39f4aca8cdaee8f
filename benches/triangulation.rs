//! Benchmarks for Bowyer-Watson triangulation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bowyer_watson::{in_circumcircle, triangulate, Point2, Triangle};

/// Generates uniformly scattered points in `[0, 100)²`.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    let mut next = || {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state as f64 / u64::MAX as f64) * 100.0
    };

    for _ in 0..count {
        let x = next();
        let y = next();
        points.push(Point2::new(x, y));
    }

    points
}

/// Generates a `side × side` lattice, which is full of cocircular quads.
fn generate_grid(side: usize) -> Vec<Point2<f64>> {
    (0..side)
        .flat_map(|i| (0..side).map(move |j| Point2::new(i as f64, j as f64)))
        .collect()
}

fn bench_triangulate_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_random");

    for size in [100, 500, 1000, 2000] {
        let points = generate_random_points(size, 12345);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| triangulate(black_box(points)))
        });
    }

    group.finish();
}

fn bench_triangulate_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_grid");

    for side in [10, 20, 40] {
        let points = generate_grid(side);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &points, |b, points| {
            b.iter(|| triangulate(black_box(points)))
        });
    }

    group.finish();
}

fn bench_in_circumcircle(c: &mut Criterion) {
    let tri = Triangle::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.5, 0.866),
    );
    let queries = generate_random_points(10000, 67890);

    c.bench_function("in_circumcircle_10000_queries", |b| {
        b.iter(|| {
            queries
                .iter()
                .filter(|&&p| in_circumcircle(black_box(p), &tri))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_triangulate_random,
    bench_triangulate_grid,
    bench_in_circumcircle
);
criterion_main!(benches);
