//! Floating-point primitives shared by the triangulation code.

mod circle2;
mod edge2;
mod point2;
mod vec2;

pub use circle2::Circle2;
pub use edge2::Edge2;
pub use point2::Point2;
pub(crate) use point2::PointKey;
pub use vec2::Vec2;
