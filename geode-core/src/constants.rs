//! Earth model, conversion factors and validation ranges.
//!
//! The Earth is a sphere of radius [`RADIUS_OF_EARTH`]. Every factor in
//! [`CONVERSION_TABLE`] is derived from four base quantities expressed in
//! kilometres or radians, so each table entry is a single product or quotient
//! of those constants rather than a chain of conversions.
//!
//! ```rust
//! use geode_core::constants::{conversion_factor, RADIUS_OF_EARTH};
//! use geode_core::Unit;
//!
//! let km_per_radian = conversion_factor(Unit::Radian, Unit::Kilometer);
//! assert_eq!(km_per_radian, RADIUS_OF_EARTH);
//! ```

use crate::unit::Unit;
use core::f64::consts::PI;
use core::ops::RangeInclusive;

/// Mean radius of the Earth in kilometres, per IUGG.
pub const RADIUS_OF_EARTH: f64 = 6371.0088;

// Base units, in km
/// One kilometre, in kilometres.
pub const KILOMETER: f64 = 1.0;
/// Surface distance subtended by one radian, in kilometres.
pub const RADIAN: f64 = RADIUS_OF_EARTH;

// Derived units
/// One international mile, in kilometres.
pub const MILE: f64 = 1.609344;
/// One degree, in radians.
pub const DEGREE: f64 = PI / 180.0;

const DEGREE_KM: f64 = DEGREE * RADIAN;

/// `CONVERSION_TABLE[from][to]`, indexed in [`Unit::ALL`] order
/// (degree, kilometer, mile, radian).
pub const CONVERSION_TABLE: [[f64; 4]; 4] = [
    // degree
    [1.0, DEGREE_KM, DEGREE_KM / MILE, DEGREE],
    // kilometer
    [1.0 / DEGREE_KM, 1.0, KILOMETER / MILE, KILOMETER / RADIAN],
    // mile
    [MILE / DEGREE_KM, MILE, 1.0, MILE / RADIAN],
    // radian
    [1.0 / DEGREE, RADIAN, RADIAN / MILE, 1.0],
];

/// Factor by which a value in `from` is multiplied to express it in `to`.
#[inline]
pub const fn conversion_factor(from: Unit, to: Unit) -> f64 {
    CONVERSION_TABLE[from.index()][to.index()]
}

// Boundaries, in degrees
/// Valid latitudes.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitudes.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
/// Valid initial bearings. `360` is accepted and means the same as `0`.
pub const BEARING_RANGE: RangeInclusive<f64> = 0.0..=360.0;

/// The sixteen points of the compass, as bearings in degrees.
#[allow(missing_docs)]
pub mod compass {
    use crate::Measure;

    pub const N: Measure = Measure::degrees(0.0);
    pub const NNE: Measure = Measure::degrees(22.5);
    pub const NE: Measure = Measure::degrees(45.0);
    pub const ENE: Measure = Measure::degrees(67.5);
    pub const E: Measure = Measure::degrees(90.0);
    pub const ESE: Measure = Measure::degrees(112.5);
    pub const SE: Measure = Measure::degrees(135.0);
    pub const SSE: Measure = Measure::degrees(157.5);
    pub const S: Measure = Measure::degrees(180.0);
    pub const SSW: Measure = Measure::degrees(202.5);
    pub const SW: Measure = Measure::degrees(225.0);
    pub const WSW: Measure = Measure::degrees(247.5);
    pub const W: Measure = Measure::degrees(270.0);
    pub const WNW: Measure = Measure::degrees(292.5);
    pub const NW: Measure = Measure::degrees(315.0);
    pub const NNW: Measure = Measure::degrees(337.5);

    /// All sixteen points, clockwise from north.
    pub const POINTS: [Measure; 16] = [
        N, NNE, NE, ENE, E, ESE, SE, SSE, S, SSW, SW, WSW, W, WNW, NW, NNW,
    ];
}
