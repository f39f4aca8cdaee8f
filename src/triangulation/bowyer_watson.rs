//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! # Algorithm
//!
//! 1. Seed the triangulation with a super-triangle containing all points
//! 2. Insert points one at a time in input order. Each insertion removes
//!    every triangle whose circumcircle strictly contains the new point and
//!    fans the vacated cavity out from the point to the cavity boundary
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! # Complexity
//!
//! - Time: O(n²); every insertion scans the whole working set
//! - Space: O(n)
//!
//! # Degenerate input
//!
//! Nothing is rejected. Duplicate points, collinear points and fewer than
//! three points all run to completion; the output may then be empty or
//! contain zero-area triangles. Use [`BowyerWatson::try_triangulate`] to
//! reject NaN or infinite coordinates first.
//!
//! Because the super-triangle is finite, triangles along a very flat stretch
//! of the convex hull can be discarded together with the super-triangle.
//! Raising [`TriangulationOptions::margin`] makes that less likely.

use super::predicates::in_circumcircle;
use super::super_triangle::{SuperTriangle, DEFAULT_MARGIN};
use super::triangle::Triangle;
use crate::error::TriangulationError;
use crate::primitives::{Edge2, Point2};
use num_traits::Float;
use std::collections::{HashMap, HashSet};

/// Options for the Bowyer-Watson triangulator.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationOptions<F> {
    /// Safety factor for the super-triangle size.
    ///
    /// The super-triangle circumradius is `margin * sqrt(3)` times the
    /// largest input distance from the origin (at least 1). Values at or
    /// below `2 / sqrt(3)` do not enclose the input and are rejected by the
    /// checked entry points.
    pub margin: F,
    /// Whether zero-area triangles are kept in the output.
    pub keep_degenerate: bool,
}

impl<F: Float> Default for TriangulationOptions<F> {
    fn default() -> Self {
        Self {
            margin: F::from(DEFAULT_MARGIN).unwrap(),
            keep_degenerate: true,
        }
    }
}

impl<F: Float> TriangulationOptions<F> {
    /// Creates options with the given super-triangle margin.
    pub fn with_margin(margin: F) -> Self {
        Self {
            margin,
            ..Default::default()
        }
    }

    /// Sets the super-triangle margin.
    pub fn margin(mut self, margin: F) -> Self {
        self.margin = margin;
        self
    }

    /// Sets whether zero-area triangles are kept.
    pub fn keep_degenerate(mut self, keep: bool) -> Self {
        self.keep_degenerate = keep;
        self
    }

    /// Checks that the margin encloses every input point.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        let min_margin = F::from(2.0).unwrap() / F::from(3.0).unwrap().sqrt();
        if self.margin.is_finite() && self.margin > min_margin {
            Ok(())
        } else {
            Err(TriangulationError::InvalidMargin {
                margin: self.margin.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}

/// Incremental Delaunay triangulator.
///
/// # Example
///
/// ```
/// use bowyer_watson::{BowyerWatson, Point2, TriangulationOptions};
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 1.0),
/// ];
///
/// let triangulator = BowyerWatson::new(TriangulationOptions::default().keep_degenerate(false));
/// let triangles = triangulator.try_triangulate(&points).unwrap();
///
/// assert_eq!(triangles.len(), 2);
/// assert!(triangles.iter().all(|t| t.area() > 0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BowyerWatson<F> {
    options: TriangulationOptions<F>,
}

impl<F: Float> Default for BowyerWatson<F> {
    fn default() -> Self {
        Self::new(TriangulationOptions::default())
    }
}

impl<F: Float> BowyerWatson<F> {
    /// Creates a triangulator with the given options.
    pub fn new(options: TriangulationOptions<F>) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &TriangulationOptions<F> {
        &self.options
    }

    /// Triangulates `points`.
    ///
    /// Never fails. Triangles are returned in unspecified order with
    /// vertices copied from the input.
    pub fn triangulate(&self, points: &[Point2<F>]) -> Vec<Triangle<F>> {
        let super_triangle = SuperTriangle::enclosing(points, self.options.margin);
        log::debug!(
            "triangulating {} points, super-triangle radius {}",
            points.len(),
            super_triangle.radius().to_f64().unwrap_or(f64::NAN)
        );

        let mut triangulation: HashSet<Triangle<F>> = HashSet::new();
        triangulation.insert(super_triangle.triangle());

        for (i, &point) in points.iter().enumerate() {
            let (removed, added) = insert_point(&mut triangulation, point);
            log::trace!(
                "point {}: replaced {} triangles with {}, working set {}",
                i,
                removed,
                added,
                triangulation.len()
            );
        }

        let before_cleanup = triangulation.len();
        triangulation.retain(|t| !super_triangle.touches(t));
        if !self.options.keep_degenerate {
            triangulation.retain(|t| !t.is_degenerate());
        }

        log::debug!(
            "triangulation finished: {} triangles ({} removed in cleanup)",
            triangulation.len(),
            before_cleanup - triangulation.len()
        );

        triangulation.into_iter().collect()
    }

    /// Triangulates `points` after checking the input and options.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidMargin`] if the configured margin does
    ///   not enclose the input
    /// - [`TriangulationError::NonFiniteCoordinate`] for the first point with
    ///   a NaN or infinite coordinate
    pub fn try_triangulate(
        &self,
        points: &[Point2<F>],
    ) -> Result<Vec<Triangle<F>>, TriangulationError> {
        self.options.validate()?;
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            log::warn!("rejecting input: point {} is not finite", index);
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }
        Ok(self.triangulate(points))
    }

    /// Triangulates `points` and reports each triangle as input indices.
    ///
    /// Coincident input points share the index of their first occurrence.
    pub fn triangulate_indexed(&self, points: &[Point2<F>]) -> Vec<[usize; 3]> {
        let mut first_index: HashMap<Point2<F>, usize> = HashMap::with_capacity(points.len());
        for (i, &p) in points.iter().enumerate() {
            first_index.entry(p).or_insert(i);
        }

        self.triangulate(points)
            .iter()
            .filter_map(|t| {
                let index = |p: Point2<F>| first_index.get(&p).copied();
                Some([index(t.a())?, index(t.b())?, index(t.c())?])
            })
            .collect()
    }
}

/// Inserts `point`, returning the number of triangles removed and added.
fn insert_point<F: Float>(
    triangulation: &mut HashSet<Triangle<F>>,
    point: Point2<F>,
) -> (usize, usize) {
    let bad_triangles: Vec<Triangle<F>> = triangulation
        .iter()
        .filter(|t| in_circumcircle(point, t))
        .copied()
        .collect();

    let polygon = boundary_polygon(&bad_triangles);

    for bad in &bad_triangles {
        triangulation.remove(bad);
    }

    let mut added = 0;
    for edge in &polygon {
        if triangulation.insert(Triangle::new(point, edge.p, edge.q)) {
            added += 1;
        }
    }

    (bad_triangles.len(), added)
}

/// Returns the edges of `bad_triangles` not shared with another bad triangle.
///
/// These outline the cavity left by removing the bad triangles.
fn boundary_polygon<F: Float>(bad_triangles: &[Triangle<F>]) -> Vec<Edge2<F>> {
    // Number of distinct bad triangles carrying each edge
    let mut edge_count: HashMap<Edge2<F>, usize> = HashMap::new();

    for triangle in bad_triangles {
        let edges = triangle.edges();
        for (i, edge) in edges.iter().enumerate() {
            if edges[..i].contains(edge) {
                continue;
            }
            *edge_count.entry(*edge).or_insert(0) += 1;
        }
    }

    edge_count
        .into_iter()
        .filter(|&(_, count)| count == 1)
        .map(|(edge, _)| edge)
        .collect()
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Uses Bowyer-Watson incremental insertion with default
/// [`TriangulationOptions`]. Returns an empty vector for empty input.
///
/// # Example
///
/// ```
/// use bowyer_watson::{triangulate, Point2};
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let triangles = triangulate(&points);
/// assert_eq!(triangles.len(), 4);
/// assert!(triangles.iter().all(|t| t.contains_vertex(Point2::new(0.5, 0.5))));
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Vec<Triangle<F>> {
    BowyerWatson::default().triangulate(points)
}

/// Like [`triangulate`], but rejects points with NaN or infinite coordinates.
pub fn try_triangulate<F: Float>(
    points: &[Point2<F>],
) -> Result<Vec<Triangle<F>>, TriangulationError> {
    BowyerWatson::default().try_triangulate(points)
}

/// Like [`triangulate`], but returns vertex indices into `points`.
///
/// # Example
///
/// ```
/// use bowyer_watson::{triangulate_indexed, Point2};
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let mut tri = triangulate_indexed(&points)[0];
/// tri.sort_unstable();
/// assert_eq!(tri, [0, 1, 2]);
/// ```
pub fn triangulate_indexed<F: Float>(points: &[Point2<F>]) -> Vec<[usize; 3]> {
    BowyerWatson::default().triangulate_indexed(points)
}
