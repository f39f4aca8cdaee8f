//! 2D circle type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use bowyer_watson::{Circle2, Point2};
///
/// let circle = Circle2::circumscribed(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// )
/// .unwrap();
/// assert_eq!(circle.center, Point2::new(1.0, 1.0));
/// assert!(circle.contains_strict(Point2::new(1.5, 1.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Returns the unique circle through three points.
    ///
    /// Returns `None` when the points are collinear (including coincident
    /// points), since no finite circle passes through them.
    pub fn circumscribed(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Self> {
        let ab = b - a;
        let ac = c - a;
        let d = (ab.cross(ac)) * F::from(2.0).unwrap();
        if d == F::zero() {
            return None;
        }

        let ab_sq = ab.magnitude_squared();
        let ac_sq = ac.magnitude_squared();
        let offset = Vec2::new(
            (ac.y * ab_sq - ab.y * ac_sq) / d,
            (ab.x * ac_sq - ac.x * ab_sq) / d,
        );

        Some(Self {
            center: a + offset,
            radius: offset.magnitude(),
        })
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Checks if a point is strictly inside the circle (excluding boundary).
    #[inline]
    pub fn contains_strict(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }
}
