//! Great-circle segments.

use geode_core::constants::BEARING_RANGE;
use geode_core::{GeodeError, IntoMeasure, Measure, Result, Unit};

use super::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A great-circle segment from `origin` to `terminus`.
///
/// The initial bearing (degrees) and length (kilometres) are computed once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawLine"))]
pub struct Line {
    origin: Point,
    terminus: Point,
    bearing: Measure,
    distance: Measure,
}

impl Line {
    /// Segment between two known points.
    pub fn between_points(origin: Point, terminus: Point) -> Self {
        Self {
            origin,
            terminus,
            bearing: origin.bearing_to(&terminus),
            distance: origin.distance_to(&terminus),
        }
    }

    /// Segment that starts at `origin` and runs `distance` along the initial `bearing`.
    ///
    /// Bare numbers are degrees for the bearing and kilometres for the distance.
    ///
    /// ```rust
    /// use geode::{Line, Point};
    ///
    /// let line = Line::from_point(Point::new(0, 0).unwrap(), 0, 200).unwrap();
    /// assert!((line.terminus().latitude().value() - 1.7986).abs() < 1e-4);
    /// assert!(Line::from_point(Point::new(0, 0).unwrap(), 361, 200).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`GeodeError::Bearing`] when the bearing is outside `0..=360` degrees, plus the coercion errors of
    /// [`IntoMeasure`].
    pub fn from_point<B: IntoMeasure, D: IntoMeasure>(origin: Point, bearing: B, distance: D) -> Result<Self> {
        let bearing = bearing.into_tagged(Unit::Degree)?;
        let degrees = bearing.as_degrees();
        if !BEARING_RANGE.contains(&degrees.value()) {
            log::debug!("rejected bearing {}", bearing);
            return Err(GeodeError::Bearing {
                bearing: degrees.value(),
            });
        }
        let distance = distance.into_tagged(Unit::Kilometer)?;

        let terminus = origin.destination_point(bearing, distance)?;
        log::trace!("projected {} by {} at {} to {}", origin, distance, bearing, terminus);

        Ok(Self {
            origin,
            terminus,
            bearing: degrees.wrap_pos(),
            distance: distance.as_kilometers(),
        })
    }

    /// Start of the segment.
    #[inline]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// End of the segment.
    #[inline]
    pub const fn terminus(&self) -> Point {
        self.terminus
    }

    /// Initial bearing at the origin, in degrees within `[0, 360)`.
    #[inline]
    pub const fn bearing(&self) -> Measure {
        self.bearing
    }

    /// Length of the segment, in kilometres.
    #[inline]
    pub const fn distance(&self) -> Measure {
        self.distance
    }

    /// Bearing on arrival at the terminus.
    pub fn final_bearing(&self) -> Measure {
        self.origin.final_bearing_to(&self.terminus)
    }

    /// Point halfway along the segment.
    pub fn midpoint(&self) -> Point {
        self.origin.midpoint_to(&self.terminus)
    }

    /// Same segment travelled from the terminus back to the origin.
    pub fn reversed(&self) -> Self {
        Self::between_points(self.terminus, self.origin)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLine {
    origin: Point,
    terminus: Point,
}

#[cfg(feature = "serde")]
impl From<RawLine> for Line {
    fn from(raw: RawLine) -> Self {
        Line::between_points(raw.origin, raw.terminus)
    }
}
