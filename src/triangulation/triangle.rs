//! Triangle value type with vertex-order-independent identity.

use super::predicates::orient2d;
use crate::primitives::{Circle2, Edge2, Point2, PointKey};
use num_traits::Float;
use std::hash::{Hash, Hasher};

/// A triangle given by three vertex positions.
///
/// The three edges `{a, b}`, `{a, c}` and `{b, c}` are computed once at
/// construction. Two triangles are equal iff they have the same three
/// vertices in any order, and equal triangles hash the same, so a
/// `HashSet<Triangle<F>>` never holds two copies of one triangle.
///
/// Vertex order is preserved as given; no orientation is imposed.
///
/// # Example
///
/// ```
/// use bowyer_watson::{Point2, Triangle};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// assert_eq!(Triangle::new(a, b, c), Triangle::new(c, a, b));
/// assert_eq!(Triangle::new(a, b, c).area(), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangle<F> {
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    edges: [Edge2<F>; 3],
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle from three vertices.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self {
            a,
            b,
            c,
            edges: [Edge2::new(a, b), Edge2::new(a, c), Edge2::new(b, c)],
        }
    }

    /// First vertex.
    #[inline]
    pub fn a(&self) -> Point2<F> {
        self.a
    }

    /// Second vertex.
    #[inline]
    pub fn b(&self) -> Point2<F> {
        self.b
    }

    /// Third vertex.
    #[inline]
    pub fn c(&self) -> Point2<F> {
        self.c
    }

    /// Returns the vertices in construction order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the edges `{a, b}`, `{a, c}`, `{b, c}`.
    #[inline]
    pub fn edges(&self) -> &[Edge2<F>; 3] {
        &self.edges
    }

    /// Checks if `p` is one of the vertices.
    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Returns the signed area: positive when `a, b, c` are counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> F {
        orient2d(self.a, self.b, self.c) / F::from(2.0).unwrap()
    }

    /// Returns the unsigned area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns `true` if the vertices are exactly collinear (zero area).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        orient2d(self.a, self.b, self.c) == F::zero()
    }

    /// Returns the circle through all three vertices, or `None` if degenerate.
    #[inline]
    pub fn circumcircle(&self) -> Option<Circle2<F>> {
        Circle2::circumscribed(self.a, self.b, self.c)
    }

    /// Vertex keys in ascending order; identical for every vertex permutation.
    fn canonical_key(&self) -> [PointKey; 3] {
        let mut keys = [self.a.key(), self.b.key(), self.c.key()];
        keys.sort_unstable();
        keys
    }
}

impl<F: Float> PartialEq for Triangle<F> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b, c) = (self.a, self.b, self.c);
        let (x, y, z) = (other.a, other.b, other.c);
        (a == x && b == y && c == z)
            || (a == x && b == z && c == y)
            || (a == y && b == x && c == z)
            || (a == y && b == z && c == x)
            || (a == z && b == x && c == y)
            || (a == z && b == y && c == x)
    }
}

impl<F: Float> Eq for Triangle<F> {}

impl<F: Float> Hash for Triangle<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}
