//! Shapes on the sphere.
//!
//! All shapes are immutable `Copy` values. Angles returned by any operation are in degrees and distances in
//! kilometres; inputs may be in any [`Unit`](crate::Unit).

mod circle;
mod line;
mod point;
mod rectangle;

#[cfg(feature = "serde")]
mod raw;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use rectangle::Rectangle;
