//! Property checks over seeded random point clouds.

use std::collections::HashSet;

use approx::assert_relative_eq;
use bowyer_watson::{
    in_circumcircle, triangulate, BowyerWatson, Edge2, Point2, SuperTriangle, Triangle,
    TriangulationOptions,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(count: usize, extent: f64, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point2::new(
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
            )
        })
        .collect()
}

/// One monotone chain of the convex hull, without its final point.
fn half_hull<'a>(points: impl Iterator<Item = &'a Point2<f64>>) -> Vec<Point2<f64>> {
    let mut chain: Vec<Point2<f64>> = Vec::new();
    for &p in points {
        while chain.len() >= 2 {
            let (o, a) = (chain[chain.len() - 2], chain[chain.len() - 1]);
            if (a - o).cross(p - o) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}

/// Area of the convex hull via Andrew's monotone chain.
fn hull_area(points: &[Point2<f64>]) -> f64 {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return 0.0;
    }

    let mut hull = half_hull(sorted.iter());
    hull.extend(half_hull(sorted.iter().rev()));

    let n = hull.len();
    (0..n)
        .map(|i| hull[i].to_vec().cross(hull[(i + 1) % n].to_vec()))
        .sum::<f64>()
        .abs()
        / 2.0
}

fn total_area(triangles: &[Triangle<f64>]) -> f64 {
    triangles.iter().map(|t| t.area()).sum()
}

#[test]
fn delaunay_property_holds_for_random_clouds() {
    for seed in 0..20 {
        let points = random_points(10 + 10 * seed as usize, 10.0, seed);
        let triangles = triangulate(&points);

        assert!(!triangles.is_empty(), "seed {}", seed);
        for tri in &triangles {
            for &p in &points {
                if !tri.contains_vertex(p) {
                    assert!(!in_circumcircle(p, tri), "seed {}: {:?} in {:?}", seed, p, tri);
                }
            }
        }
    }
}

#[test]
fn output_has_no_duplicates_or_super_vertices() {
    for seed in 100..110 {
        let points = random_points(150, 50.0, seed);
        let triangles = triangulate(&points);
        let st = SuperTriangle::enclosing(&points, 1.25);
        let inputs: HashSet<Point2<f64>> = points.iter().copied().collect();

        let unique: HashSet<Triangle<f64>> = triangles.iter().copied().collect();
        assert_eq!(unique.len(), triangles.len(), "seed {}", seed);

        for tri in &triangles {
            assert!(!st.touches(tri));
            assert!(tri.vertices().iter().all(|v| inputs.contains(v)));
        }
    }
}

#[test]
fn triangles_never_exceed_hull_area() {
    for seed in 200..210 {
        let points = random_points(100, 5.0, seed);
        let covered = total_area(&triangulate(&points));
        assert!(covered <= hull_area(&points) * (1.0 + 1e-9), "seed {}", seed);
    }
}

#[test]
fn interior_edges_are_shared_by_two_triangles() {
    let points = random_points(200, 20.0, 7);
    let triangles = triangulate(&points);

    let mut edge_count = std::collections::HashMap::<Edge2<f64>, usize>::new();
    for tri in &triangles {
        for &edge in tri.edges() {
            *edge_count.entry(edge).or_insert(0) += 1;
        }
    }
    assert!(edge_count.values().all(|&n| n == 1 || n == 2));
}

#[test]
fn lattice_is_fully_covered() {
    let mut points = Vec::new();
    for i in 0..6 {
        for j in 0..6 {
            points.push(Point2::new(i as f64 - 2.5, j as f64 - 2.5));
        }
    }

    let triangles = triangulate(&points);

    assert_eq!(triangles.len(), 50);
    assert_relative_eq!(total_area(&triangles), hull_area(&points), epsilon = 1e-9);
}

#[test]
fn rectangle_with_interior_points_is_fully_covered() {
    let points: Vec<Point2<f64>> = vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 3.0),
        Point2::new(0.0, 3.0),
        Point2::new(2.0, 1.0),
        Point2::new(1.0, 2.0),
        Point2::new(3.0, 2.0),
        // Repeats of earlier points
        Point2::new(2.0, 1.0),
        Point2::new(4.0, 3.0),
    ];

    let triangles = triangulate(&points);

    assert_eq!(triangles.len(), 8);
    assert_relative_eq!(total_area(&triangles), 12.0, epsilon = 1e-12);
}

#[test]
fn insertion_order_does_not_change_area() {
    let points: Vec<Point2<f64>> = (0..5)
        .flat_map(|i| (0..5).map(move |j| Point2::new(i as f64, j as f64)))
        .collect();
    let reversed: Vec<Point2<f64>> = points.iter().rev().copied().collect();

    let forward = triangulate(&points);
    let backward = triangulate(&reversed);

    assert_eq!(forward.len(), backward.len());
    assert_relative_eq!(total_area(&forward), total_area(&backward), epsilon = 1e-9);
}

#[test]
fn margin_option_is_honoured() {
    let points = random_points(50, 3.0, 42);
    let triangulator = BowyerWatson::new(TriangulationOptions::with_margin(50.0));
    let triangles = triangulator.try_triangulate(&points).unwrap();

    let st = SuperTriangle::enclosing(&points, 50.0);
    assert!(triangles.iter().all(|t| !st.touches(t)));
    assert!(total_area(&triangles) <= hull_area(&points) * (1.0 + 1e-9));
}
