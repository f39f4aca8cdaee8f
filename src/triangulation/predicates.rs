//! Orientation and in-circle predicates.
//!
//! Both predicates are evaluated in plain floating point with no epsilon.
//! Results for nearly degenerate configurations follow whatever the
//! arithmetic produces.

use super::triangle::Triangle;
use crate::primitives::Point2;
use num_traits::Float;

/// Computes twice the signed area of the triangle `a, b, c`.
///
/// Positive if the points are counter-clockwise, negative if clockwise,
/// zero if collinear.
///
/// # Example
///
/// ```
/// use bowyer_watson::{orient2d, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// assert!(orient2d(a, b, c) > 0.0);
/// assert!(orient2d(a, c, b) < 0.0);
/// ```
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Tests if a point lies strictly inside the circumcircle of a triangle.
///
/// The triangle may be given in either orientation: if its vertices are not
/// counter-clockwise (including the collinear case) the first two are
/// swapped before the determinant test. A point exactly on the circle is not
/// inside.
///
/// The test evaluates
///
/// ```text
/// | ax-px  ay-py  (ax-px)²+(ay-py)² |
/// | bx-px  by-py  (bx-px)²+(by-py)² | > 0
/// | cx-px  cy-py  (cx-px)²+(cy-py)² |
/// ```
///
/// # Example
///
/// ```
/// use bowyer_watson::{in_circumcircle, Point2, Triangle};
///
/// let tri = Triangle::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 0.866),
/// );
///
/// assert!(in_circumcircle(Point2::new(0.5, 0.29), &tri));
/// assert!(!in_circumcircle(Point2::new(10.0, 10.0), &tri));
/// ```
pub fn in_circumcircle<F: Float>(p: Point2<F>, triangle: &Triangle<F>) -> bool {
    let (a, b) = if orient2d(triangle.a(), triangle.b(), triangle.c()) > F::zero() {
        (triangle.a(), triangle.b())
    } else {
        (triangle.b(), triangle.a())
    };
    let c = triangle.c();

    let row = |v: Point2<F>| {
        let d = v - p;
        [d.x, d.y, d.magnitude_squared()]
    };
    let matrix = [row(a), row(b), row(c)];

    determinant3x3(&matrix) > F::zero()
}

/// Computes the determinant of a 3×3 matrix by cofactor expansion along the
/// first column.
///
/// # Example
///
/// ```
/// use bowyer_watson::determinant3x3;
///
/// let m = [[2.0_f64, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]];
/// assert_eq!(determinant3x3(&m), 24.0);
/// ```
#[inline]
pub fn determinant3x3<F: Float>(m: &[[F; 3]; 3]) -> F {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[1][0] * (m[0][1] * m[2][2] - m[0][2] * m[2][1])
        + m[2][0] * (m[0][1] * m[1][2] - m[0][2] * m[1][1])
}
