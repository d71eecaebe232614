//! Geographic points and the great-circle operations between them.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

use geode_core::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use geode_core::{GeodeError, IntoMeasure, Measure, Result, Unit};

#[cfg(feature = "serde")]
use super::raw::RawMeasure;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair on the sphere.
///
/// Coordinates may be given in any unit (degrees, radians, or a distance along the surface) and are stored in
/// degrees. Construction checks that the latitude lies in `-90..=90` and the longitude in `-180..=180`; a `Point`
/// therefore always holds a valid position.
///
/// ```rust
/// use geode::{Measure, Point};
///
/// let p = Point::new(51.5, Measure::radians(-0.0022)).unwrap();
/// assert_eq!(p.latitude(), Measure::degrees(51.5));
/// assert!(Point::new(91, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoint"))]
pub struct Point {
    latitude: Measure,
    longitude: Measure,
}

impl Point {
    /// `(0°, 0°)`, the reference for [`Point::cmp_by_origin_distance`].
    pub const ORIGIN: Point = Point {
        latitude: Measure::degrees(0.0),
        longitude: Measure::degrees(0.0),
    };

    /// Creates a point, treating bare numbers as degrees.
    ///
    /// # Errors
    ///
    /// [`GeodeError::Coordinate`] when either coordinate is out of range (or NaN), and the coercion errors of
    /// [`IntoMeasure`] for operands that are not measures.
    pub fn new<A: IntoMeasure, B: IntoMeasure>(latitude: A, longitude: B) -> Result<Self> {
        let latitude = latitude.into_measure(Unit::Degree)?;
        let longitude = longitude.into_measure(Unit::Degree)?;

        let (lat, lon) = (latitude.value(), longitude.value());
        if !LATITUDE_RANGE.contains(&lat) || !LONGITUDE_RANGE.contains(&lon) {
            log::debug!("rejected coordinate ({}, {})", lat, lon);
            return Err(GeodeError::Coordinate {
                latitude: lat,
                longitude: lon,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Unchecked constructor for degree values already known to be in range.
    #[inline]
    pub(crate) const fn from_valid_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Measure::degrees(latitude),
            longitude: Measure::degrees(longitude),
        }
    }

    /// Builds a point from spherical coordinates that may lie past a pole or the antimeridian.
    ///
    /// The latitude is folded back over the pole and the longitude wrapped into `(-180, 180]`. Only non-finite
    /// input can still be rejected.
    fn from_radians(phi: f64, lambda: f64) -> Result<Self> {
        let latitude = Measure::radians(phi).as_degrees();
        let longitude = Measure::radians(lambda).as_degrees();

        let latitude = if LATITUDE_RANGE.contains(&latitude.value()) {
            latitude
        } else {
            latitude.wrap_quarter_fold()
        };
        let longitude = if longitude.value() > -180.0 && longitude.value() <= 180.0 {
            longitude
        } else {
            longitude.wrap_signed()
        };

        Self::new(latitude, longitude)
    }

    /// Latitude, in degrees.
    #[inline]
    pub const fn latitude(&self) -> Measure {
        self.latitude
    }

    /// Longitude, in degrees.
    #[inline]
    pub const fn longitude(&self) -> Measure {
        self.longitude
    }

    #[inline]
    fn to_radians(self) -> (f64, f64) {
        (
            self.latitude.as_radians().value(),
            self.longitude.as_radians().value(),
        )
    }

    /// Central angle to `other`, in radians, by the haversine formula.
    fn angular_distance(&self, other: &Point) -> f64 {
        let (phi1, lambda1) = self.to_radians();
        let (phi2, lambda2) = other.to_radians();

        let half_d_phi = ((phi2 - phi1) / 2.0).sin();
        let half_d_lambda = ((lambda2 - lambda1) / 2.0).sin();
        let a = half_d_phi * half_d_phi + phi1.cos() * phi2.cos() * half_d_lambda * half_d_lambda;
        // rounding can push `a` just past 1 for antipodal points
        let a = a.clamp(0.0, 1.0);

        2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Great-circle distance to `other`, in kilometres.
    ///
    /// ```rust
    /// use geode::Point;
    ///
    /// let a = Point::new(0, 0).unwrap();
    /// let b = Point::new(2, 2).unwrap();
    /// assert!((a.distance_to(&b).value() - 314.475).abs() < 1e-3);
    /// ```
    pub fn distance_to(&self, other: &Point) -> Measure {
        Measure::radians(self.angular_distance(other)).as_kilometers()
    }

    /// Initial bearing of the great circle towards `other`, in degrees within `[0, 360)`.
    ///
    /// Coincident points have a bearing of `0`.
    pub fn bearing_to(&self, other: &Point) -> Measure {
        let (phi1, lambda1) = self.to_radians();
        let (phi2, lambda2) = other.to_radians();
        let d_lambda = lambda2 - lambda1;

        let y = d_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

        Measure::radians(y.atan2(x)).as_degrees().wrap_pos()
    }

    /// Bearing on arrival at `other`, in degrees within `[0, 360)`.
    ///
    /// This is the reverse of the initial bearing from `other` back to `self`.
    pub fn final_bearing_to(&self, other: &Point) -> Measure {
        (other.bearing_to(self) + 180.0).wrap_pos()
    }

    /// Point halfway along the great circle to `other`.
    pub fn midpoint_to(&self, other: &Point) -> Point {
        let (phi1, lambda1) = self.to_radians();
        let (phi2, lambda2) = other.to_radians();
        let d_lambda = lambda2 - lambda1;

        let bx = phi2.cos() * d_lambda.cos();
        let by = phi2.cos() * d_lambda.sin();
        let phi = (phi1.sin() + phi2.sin()).atan2(((phi1.cos() + bx).powi(2) + by * by).sqrt());
        let lambda = lambda1 + by.atan2(phi1.cos() + bx);

        // finite for valid inputs
        Self::from_radians(phi, lambda).unwrap_or(*self)
    }

    /// Point at `fraction` of the way along the great circle to `other`.
    ///
    /// `0.0` yields `self` and `1.0` yields `other`; fractions outside `[0, 1]` extrapolate along the same great
    /// circle. Coincident points have no unique great circle and yield `self` for every fraction.
    ///
    /// # Errors
    ///
    /// [`GeodeError::Coordinate`] when `fraction` is not finite.
    pub fn intermediate_point_to(&self, other: &Point, fraction: f64) -> Result<Point> {
        let delta = self.angular_distance(other);
        if delta == 0.0 {
            log::debug!("intermediate point between coincident points {} and {}", self, other);
            return Ok(*self);
        }

        let (phi1, lambda1) = self.to_radians();
        let (phi2, lambda2) = other.to_radians();

        let a = ((1.0 - fraction) * delta).sin() / delta.sin();
        let b = (fraction * delta).sin() / delta.sin();

        let x = a * phi1.cos() * lambda1.cos() + b * phi2.cos() * lambda2.cos();
        let y = a * phi1.cos() * lambda1.sin() + b * phi2.cos() * lambda2.sin();
        let z = a * phi1.sin() + b * phi2.sin();

        Self::from_radians(z.atan2((x * x + y * y).sqrt()), y.atan2(x))
    }

    /// Point reached by travelling `distance` from here along the great circle with initial `bearing`.
    ///
    /// Bare numbers are taken as degrees for the bearing and kilometres for the distance. Crossing a pole or the
    /// antimeridian is normalized: the result always has a latitude in `-90..=90` and a longitude in `(-180, 180]`.
    ///
    /// ```rust
    /// use geode::Point;
    ///
    /// let start = Point::new(2, 2).unwrap();
    /// let end = start.destination_point(0, 19_792.7).unwrap();
    /// assert!((end.longitude().value() + 178.0).abs() < 1e-9);
    /// ```
    ///
    /// # Errors
    ///
    /// Coercion errors of [`IntoMeasure`], or [`GeodeError::Coordinate`] when the operands are not finite.
    pub fn destination_point<B: IntoMeasure, D: IntoMeasure>(&self, bearing: B, distance: D) -> Result<Point> {
        let theta = bearing.into_tagged(Unit::Degree)?.as_radians().value();
        let delta = distance.into_tagged(Unit::Kilometer)?.as_radians().value();
        let (phi1, lambda1) = self.to_radians();

        let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
        let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

        Self::from_radians(phi2, lambda2)
    }

    /// `[distance, bearing, latitude, longitude]` relative to [`Point::ORIGIN`], all as plain numbers.
    fn origin_key(&self) -> [f64; 4] {
        [
            Self::ORIGIN.angular_distance(self),
            Self::ORIGIN.bearing_to(self).value(),
            self.latitude.value(),
            self.longitude.value(),
        ]
    }

    /// Orders points by great-circle distance from `(0°, 0°)`, then by bearing from it.
    ///
    /// Ties fall back to latitude and then longitude, in degrees.
    pub fn cmp_by_origin_distance(&self, other: &Point) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.origin_key().iter().zip(other.origin_key().iter()) {
            match a.partial_cmp(b)? {
                Ordering::Equal => continue,
                ord => return Some(ord),
            }
        }
        Some(Ordering::Equal)
    }
}

impl Display for Point {
    /// `"<latitude>,<longitude>"` in degrees, e.g. `"51.5,-0.12"`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{},{}",
            self.latitude.value(),
            self.longitude.value()
        )
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPoint {
    latitude: RawMeasure,
    longitude: RawMeasure,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoint> for Point {
    type Error = GeodeError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Point::new(raw.latitude, raw.longitude)
    }
}
