//! 2D point type with exact, hashable equality.

use super::Vec2;
use num_traits::Float;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A 2D point representing a position.
///
/// Generic over floating-point types (`f32` or `f64`).
///
/// Two points are equal iff both coordinates compare equal with `==`. There
/// is no tolerance. Points also implement [`Eq`] and [`Hash`] so they can key
/// hash maps; `0.0` and `-0.0` hash the same because they compare equal.
/// Points with NaN coordinates are never equal to anything, themselves
/// included, and must not be used as keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

/// Bit-level key of one coordinate as returned by `Float::integer_decode`.
type CoordKey = (u64, i16, i8);

/// Totally ordered key of a point, equal exactly when the points are equal.
///
/// Used to give edges and triangles a canonical vertex order for hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct PointKey([CoordKey; 2]);

#[inline]
fn coord_key<F: Float>(v: F) -> CoordKey {
    // -0.0 == 0.0 but decodes with a different sign
    if v == F::zero() {
        F::zero().integer_decode()
    } else {
        v.integer_decode()
    }
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the vector from the origin to this point.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (self - other).magnitude_squared()
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub(crate) fn key(self) -> PointKey {
        PointKey([coord_key(self.x), coord_key(self.y)])
    }
}

impl<F: Float> Eq for Point2<F> {}

impl<F: Float> Hash for Point2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}
