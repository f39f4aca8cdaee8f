//! Enclosing triangle used to seed incremental insertion.

use super::triangle::Triangle;
use crate::primitives::Point2;
use num_traits::Float;

/// Default ratio between the super-triangle's circumradius and
/// `sqrt(3)` times the largest distance of any input point from the origin.
pub(crate) const DEFAULT_MARGIN: f64 = 1.25;

/// An equilateral triangle centered on the origin that encloses a point set.
///
/// Its vertices lie at 0°, 120° and 240° on a circle of radius
/// `margin * sqrt(3) * sqrt(max(1, max |p|²))`. The squared-distance floor of
/// `1` keeps the triangle non-degenerate for empty or all-zero input.
///
/// # Example
///
/// ```
/// use bowyer_watson::{Point2, SuperTriangle};
///
/// let points = vec![Point2::new(3.0_f64, 4.0), Point2::new(-1.0, 0.5)];
/// let st = SuperTriangle::enclosing(&points, 1.25);
///
/// let [a, _, _] = st.vertices();
/// assert_eq!(a, Point2::new(st.radius(), 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperTriangle<F> {
    vertices: [Point2<F>; 3],
    radius: F,
}

impl<F: Float> SuperTriangle<F> {
    /// Builds the super-triangle for `points` with the given safety `margin`.
    pub fn enclosing(points: &[Point2<F>], margin: F) -> Self {
        let max_square_distance = points
            .iter()
            .map(|p| p.to_vec().magnitude_squared())
            .fold(F::one(), |acc, d| if d > acc { d } else { acc });

        let sqrt3 = F::from(3.0).unwrap().sqrt();
        let half = F::from(0.5).unwrap();
        let radius = margin * sqrt3 * max_square_distance.sqrt();

        let vertices = [
            Point2::new(radius, F::zero()),
            Point2::new(-half * radius, half * sqrt3 * radius),
            Point2::new(-half * radius, -half * sqrt3 * radius),
        ];

        Self { vertices, radius }
    }

    /// Returns the three vertices, counter-clockwise starting on the +x axis.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        self.vertices
    }

    /// Returns the circumradius.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Returns the super-triangle as a [`Triangle`].
    #[inline]
    pub fn triangle(&self) -> Triangle<F> {
        let [a, b, c] = self.vertices;
        Triangle::new(a, b, c)
    }

    /// Checks if `p` is one of the super-triangle vertices.
    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>) -> bool {
        self.vertices.contains(&p)
    }

    /// Checks if `triangle` has any super-triangle vertex as a vertex.
    #[inline]
    pub fn touches(&self, triangle: &Triangle<F>) -> bool {
        self.vertices.iter().any(|&v| triangle.contains_vertex(v))
    }
}
