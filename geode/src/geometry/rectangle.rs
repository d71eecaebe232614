//! Latitude/longitude-aligned boxes.

use geode_core::{compass, IntoMeasure, Measure, Result, Unit};

use super::{Line, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box bounded by two parallels and two meridians.
///
/// `corners[0]` is the south-west (minimum) corner and `corners[1]` the north-east (maximum) corner. Boxes that
/// straddle the antimeridian are not representable.
///
/// ```rust
/// use geode::{Point, Rectangle};
///
/// let area = Rectangle::from_corners(Point::new(2, 0).unwrap(), Point::new(0, 2).unwrap());
/// assert!(area.contains(&Point::new(1, 1).unwrap()));
/// assert!(area.contains(&Point::new(2, 2).unwrap()));
/// assert!(!area.contains(&Point::new(2.1, 1).unwrap()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRectangle"))]
pub struct Rectangle {
    corners: [Point; 2],
    height: Measure,
    width: Measure,
}

impl Rectangle {
    /// Box spanned by any two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (a_lat, a_lon) = (a.latitude().value(), a.longitude().value());
        let (b_lat, b_lon) = (b.latitude().value(), b.longitude().value());

        let min = Point::from_valid_degrees(a_lat.min(b_lat), a_lon.min(b_lon));
        let max = Point::from_valid_degrees(a_lat.max(b_lat), a_lon.max(b_lon));

        Self {
            corners: [min, max],
            height: (max.latitude() - min.latitude()).as_kilometers(),
            width: (max.longitude() - min.longitude()).as_kilometers(),
        }
    }

    /// Box with the line's origin and terminus as opposite corners.
    pub fn from_line(line: &Line) -> Self {
        Self::from_corners(line.origin(), line.terminus())
    }

    /// Box with `point` as one corner, extending `height` north and `width` west of it.
    ///
    /// Negative dimensions extend south and east instead. Bare numbers are kilometres.
    ///
    /// # Errors
    ///
    /// The coercion errors of [`IntoMeasure`], or [`GeodeError::Coordinate`](geode_core::GeodeError::Coordinate)
    /// for non-finite dimensions.
    pub fn from_point_and_dimensions<H: IntoMeasure, W: IntoMeasure>(point: Point, height: H, width: W) -> Result<Self> {
        let height = height.into_tagged(Unit::Kilometer)?;
        let width = width.into_tagged(Unit::Kilometer)?;

        let vertical = if height.is_negative() { compass::S } else { compass::N };
        let horizontal = if width.is_negative() { compass::E } else { compass::W };

        let corner_a = Line::from_point(point, vertical, height.abs())?.terminus();
        let corner_b = Line::from_point(point, horizontal, width.abs())?.terminus();
        let opposite = Point::new(corner_a.latitude(), corner_b.longitude())?;

        Ok(Self::from_corners(point, opposite))
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, point: &Point) -> bool {
        let [min, max] = self.corners;
        let lat = point.latitude().value();
        let lon = point.longitude().value();

        lat >= min.latitude().value()
            && lat <= max.latitude().value()
            && lon >= min.longitude().value()
            && lon <= max.longitude().value()
    }

    /// `[south-west, north-east]`.
    #[inline]
    pub const fn corners(&self) -> [Point; 2] {
        self.corners
    }

    /// South-west corner.
    #[inline]
    pub const fn min(&self) -> Point {
        self.corners[0]
    }

    /// North-east corner.
    #[inline]
    pub const fn max(&self) -> Point {
        self.corners[1]
    }

    /// Latitude span, as a distance along a meridian in kilometres.
    #[inline]
    pub const fn height(&self) -> Measure {
        self.height
    }

    /// Longitude span, as kilometres along the equator.
    #[inline]
    pub const fn width(&self) -> Measure {
        self.width
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRectangle {
    corners: [Point; 2],
}

#[cfg(feature = "serde")]
impl From<RawRectangle> for Rectangle {
    fn from(raw: RawRectangle) -> Self {
        let [a, b] = raw.corners;
        Rectangle::from_corners(a, b)
    }
}
