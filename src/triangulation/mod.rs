//! Delaunay triangulation of point sets.
//!
//! [`triangulate`] is the entry point for the common case. [`BowyerWatson`]
//! runs the same algorithm with non-default [`TriangulationOptions`].

mod bowyer_watson;
mod predicates;
mod super_triangle;
mod triangle;

pub use bowyer_watson::{
    triangulate, triangulate_indexed, try_triangulate, BowyerWatson, TriangulationOptions,
};
pub use predicates::{determinant3x3, in_circumcircle, orient2d};
pub use super_triangle::SuperTriangle;
pub use triangle::Triangle;
