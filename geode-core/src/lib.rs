//! Core unit algebra for spherical geodesy.
//!
//! `geode-core` provides a small, runtime-tagged units model for geometry on a
//! spherical Earth:
//!
//! - A [`Unit`] is one of degree, radian, kilometre or mile.
//! - A value tagged with a unit is a [`Measure`], backed by an `f64`.
//! - Conversion multiplies once by a factor from
//!   [`constants::CONVERSION_TABLE`]; angles and surface distances convert into
//!   each other through the Earth radius.
//!
//! Most users should depend on `geode` (the facade crate, which adds points,
//! lines, rectangles and circles) unless they only need the unit algebra.
//!
//! # Quick start
//!
//! ```rust
//! use geode_core::{Measure, Unit};
//!
//! let leg = Measure::miles(10.0);
//! let total = Measure::kilometers(5.0) + leg;
//! assert_eq!(total.unit(), Unit::Kilometer);
//! assert!((total.value() - 21.09344).abs() < 1e-9);
//!
//! let arc = total.as_degrees();
//! assert!(arc < Measure::degrees(1.0));
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Unit`] and [`Measure`]; a measure
//!   serializes as `{"value": f64, "unit": "<name>"}`.
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with a [`GeodeError`]. Conversions and
//! operator arithmetic never fail; they follow IEEE-754 behavior (NaN and
//! infinities propagate according to the underlying operation).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod constants;
mod error;
mod measure;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use constants::compass;
pub use error::{GeodeError, Result};
pub use measure::{IntoMeasure, Measure};
pub use unit::Unit;
