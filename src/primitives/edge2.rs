//! Undirected edge between two points.

use super::Point2;
use num_traits::Float;
use std::hash::{Hash, Hasher};

/// An unordered pair of points: one side of a triangle.
///
/// `Edge2::new(a, b)` and `Edge2::new(b, a)` are equal and hash the same,
/// which is what lets the triangulation recognise an edge shared by two
/// triangles regardless of how each triangle lists its vertices.
///
/// # Example
///
/// ```
/// use bowyer_watson::{Edge2, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 2.0);
/// assert_eq!(Edge2::new(a, b), Edge2::new(b, a));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge2<F> {
    pub p: Point2<F>,
    pub q: Point2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates an edge between two points.
    #[inline]
    pub fn new(p: Point2<F>, q: Point2<F>) -> Self {
        Self { p, q }
    }

    /// Returns the endpoints in the order they were given.
    #[inline]
    pub fn endpoints(&self) -> [Point2<F>; 2] {
        [self.p, self.q]
    }

    /// Returns `true` if `point` is one of the endpoints.
    #[inline]
    pub fn has_endpoint(&self, point: Point2<F>) -> bool {
        self.p == point || self.q == point
    }

    /// Returns the length of the edge.
    #[inline]
    pub fn length(&self) -> F {
        self.p.distance(self.q)
    }
}

impl<F: Float> PartialEq for Edge2<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.p == other.p && self.q == other.q) || (self.p == other.q && self.q == other.p)
    }
}

impl<F: Float> Eq for Edge2<F> {}

impl<F: Float> Hash for Edge2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (p, q) = (self.p.key(), self.q.key());
        if p <= q {
            (p, q).hash(state);
        } else {
            (q, p).hash(state);
        }
    }
}
