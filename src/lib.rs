//! bowyer-watson - 2D Delaunay triangulation
//!
//! Computes the Delaunay triangulation of a finite point set by inserting
//! points one at a time into a triangulation seeded with an enclosing
//! super-triangle (the Bowyer-Watson algorithm). Plain floating-point
//! arithmetic is used throughout; there is no exact-arithmetic fallback.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::{triangulate, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let triangles = triangulate(&points);
//! assert_eq!(triangles.len(), 2);
//! ```

pub mod error;
pub mod primitives;
pub mod triangulation;

pub use error::TriangulationError;
pub use primitives::{Circle2, Edge2, Point2, Vec2};
pub use triangulation::{
    determinant3x3, in_circumcircle, orient2d, triangulate, triangulate_indexed, try_triangulate,
    BowyerWatson, SuperTriangle, Triangle, TriangulationOptions,
};
