//! Great-circle geometry on a spherical Earth.
//!
//! `geode` is the user-facing crate in this workspace. It re-exports the unit algebra from `geode-core` and adds the
//! geometric primitives built on top of it: [`Point`], [`Line`], [`Rectangle`] and [`Circle`].
//!
//! Every coordinate, bearing and distance is a [`Measure`], so callers can mix degrees, radians, kilometres and miles
//! freely; operations convert on demand and report results in a fixed unit (degrees for angles, kilometres for
//! distances).
//!
//! # What this crate solves
//!
//! - Haversine distance, initial/final bearing, midpoint and interpolation between two points.
//! - Projecting a destination from a point, a bearing and a distance, with pole and antimeridian crossings normalized.
//! - Simple containment tests for axis-aligned latitude/longitude boxes and great-circle circles.
//!
//! # What this crate does not try to solve
//!
//! - Ellipsoidal models (WGS-84 and friends); the Earth is a sphere of radius
//!   [`RADIUS_OF_EARTH`](constants::RADIUS_OF_EARTH).
//! - Rectangles that straddle the antimeridian.
//!
//! # Quick start
//!
//! ```rust
//! use geode::{Circle, Point};
//!
//! let a = Point::new(0, 0).unwrap();
//! let b = Point::new(2, 2).unwrap();
//!
//! assert!((a.bearing_to(&b).value() - 45.0).abs() < 0.1);
//! assert!((a.distance_to(&b).value() - 314.4).abs() < 0.1);
//!
//! let fence = Circle::new(a, 200).unwrap();
//! assert!(fence.contains(&Point::new(1, 1).unwrap()));
//! assert!(!fence.contains(&b));
//! ```
//!
//! Mixed units are accepted anywhere a measure is expected:
//!
//! ```rust
//! use geode::{Line, Measure, Point};
//!
//! let origin = Point::new(Measure::radians(0.1), "12.5 degrees").unwrap();
//! let leg = Line::from_point(origin, 90, Measure::miles(50.0)).unwrap();
//! assert!((leg.distance().as_miles().value() - 50.0).abs() < 1e-9);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for measures and every shape. Deserialization goes through the validating
//!   constructors, so an out-of-range coordinate in a config file is a deserialization error.
//!
//! # Panics and errors
//!
//! Constructors return [`Result`] with a [`GeodeError`] on invalid input. Measurement operations on already-valid
//! shapes (distance, bearing, midpoint, containment) are infallible.
#![forbid(unsafe_code)]

pub use geode_core::*;

pub mod geometry;

pub use geometry::{Circle, Line, Point, Rectangle};
