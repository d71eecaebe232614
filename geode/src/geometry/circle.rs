//! Great-circle discs.

use geode_core::{GeodeError, IntoMeasure, Measure, Result, Unit};

use super::{Point, Rectangle};

#[cfg(feature = "serde")]
use super::raw::RawMeasure;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All points strictly closer than `radius` to `center` along the surface.
///
/// ```rust
/// use geode::{Measure, Point, Circle};
///
/// let fence = Circle::new(Point::new(0, 0).unwrap(), Measure::miles(125.0)).unwrap();
/// assert!(fence.contains(&Point::new(1, 1).unwrap()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCircle"))]
pub struct Circle {
    center: Point,
    radius: Measure,
}

impl Circle {
    /// Creates a circle, treating a bare radius as kilometres.
    ///
    /// # Errors
    ///
    /// The coercion errors of [`IntoMeasure`].
    pub fn new<R: IntoMeasure>(center: Point, radius: R) -> Result<Self> {
        Ok(Self {
            center,
            radius: radius.into_measure(Unit::Kilometer)?,
        })
    }

    /// Centre of the circle.
    #[inline]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius, in kilometres.
    #[inline]
    pub const fn radius(&self) -> Measure {
        self.radius
    }

    /// `true` when `point` is strictly inside; points on the boundary are outside.
    pub fn contains(&self, point: &Point) -> bool {
        self.center.distance_to(point) < self.radius
    }

    /// Smallest latitude/longitude box enclosing the whole circle.
    ///
    /// The north and south edges are the circle's extremes along the centre's meridian. The east and west edges are
    /// the two meridians tangent to the circle, which touch it north of due east (or south of it, in the southern
    /// hemisphere). A circle that reaches a pole spans every longitude up to that pole, and one that crosses the
    /// antimeridian spans every longitude, since a [`Rectangle`] cannot wrap. A negative radius is taken by magnitude.
    ///
    /// ```rust
    /// use geode::{Circle, Point};
    ///
    /// let fence = Circle::new(Point::new(0, 0).unwrap(), 200).unwrap();
    /// let [sw, ne] = fence.bounding_box().unwrap().corners();
    /// assert!((ne.latitude().value() - 1.7986).abs() < 5e-4);
    /// assert!((sw.longitude().value() + 1.7986).abs() < 5e-4);
    ///
    /// let polar = Circle::new(Point::new(89.5, 0).unwrap(), 200).unwrap();
    /// assert!(polar.bounding_box().unwrap().contains(&Point::new(90, 0).unwrap()));
    /// ```
    ///
    /// # Errors
    ///
    /// [`GeodeError::Coordinate`](geode_core::GeodeError::Coordinate) when the radius is not finite.
    pub fn bounding_box(&self) -> Result<Rectangle> {
        let reach = self.radius.abs().as_degrees();
        let (lat, lon) = (self.center.latitude(), self.center.longitude());
        if !reach.is_finite() {
            return Err(GeodeError::Coordinate {
                latitude: (lat + reach).value(),
                longitude: lon.value(),
            });
        }

        let north = lat + reach;
        let south = lat - reach;
        let polar = north.value() >= 90.0 || south.value() <= -90.0;

        let (west, east) = if polar {
            (-180.0, 180.0)
        } else {
            // Tangent meridians: sin(half width) = sin(reach) / cos(latitude).
            let half_width = (reach.sin() / lat.cos()).clamp(-1.0, 1.0).asin().to_degrees();
            let (west, east) = (lon.value() - half_width, lon.value() + half_width);
            if west < -180.0 || east > 180.0 {
                (-180.0, 180.0)
            } else {
                (west, east)
            }
        };

        let bounds = Rectangle::from_corners(
            Point::from_valid_degrees(south.value().max(-90.0), west),
            Point::from_valid_degrees(north.value().min(90.0), east),
        );
        log::trace!("bounding box of circle at {} with radius {}: {:?}", self.center, self.radius, bounds.corners());
        Ok(bounds)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCircle {
    center: Point,
    radius: RawMeasure,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCircle> for Circle {
    type Error = GeodeError;

    fn try_from(raw: RawCircle) -> Result<Self> {
        Circle::new(raw.center, raw.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn p(lat: f64, lon: f64) -> Point {
        Point::new(lat, lon).unwrap()
    }

    #[test]
    fn radius_is_stored_in_kilometres() {
        let c = Circle::new(p(0.0, 0.0), Measure::miles(100.0)).unwrap();
        assert_eq!(c.radius().unit(), Unit::Kilometer);
        assert_abs_diff_eq!(c.radius().value(), 160.9344, epsilon = 1e-9);
        assert_eq!(Circle::new(p(0.0, 0.0), "5").unwrap().radius(), Measure::kilometers(5.0));
    }

    #[test]
    fn rejects_incompatible_radius() {
        assert!(Circle::new(p(0.0, 0.0), "wide").unwrap_err().is_incompatible());
    }

    #[test]
    fn contains_points_inside_radius() {
        let c = Circle::new(p(0.0, 0.0), 200).unwrap();
        assert_eq!(c.center(), p(0.0, 0.0));
        assert!(c.contains(&p(1.0, 1.0)));
        assert!(!c.contains(&p(2.0, 2.0)));
    }

    #[test]
    fn boundary_is_excluded() {
        let (center, edge) = (p(0.0, 0.0), p(0.0, 1.0));
        let c = Circle::new(center, center.distance_to(&edge)).unwrap();
        assert!(!c.contains(&edge));
        assert!(!Circle::new(p(0.0, 0.0), 0).unwrap().contains(&p(0.0, 0.0)));
    }

    #[test]
    fn bounding_box_of_equatorial_circle() {
        let bounds = Circle::new(p(0.0, 0.0), 200).unwrap().bounding_box().unwrap();
        let [sw, ne] = bounds.corners();
        assert_abs_diff_eq!(ne.latitude().value(), 1.798640727449076, epsilon = 1e-9);
        assert_abs_diff_eq!(ne.longitude().value(), 1.798640727449076, epsilon = 1e-9);
        assert_abs_diff_eq!(sw.latitude().value(), -1.798640727449076, epsilon = 1e-9);
        assert_abs_diff_eq!(sw.longitude().value(), -1.798640727449076, epsilon = 1e-9);
    }

    #[test]
    fn bounding_box_reaches_tangent_meridians() {
        let c = Circle::new(p(60.0, 0.0), 1000).unwrap();
        let bounds = c.bounding_box().unwrap();
        let [sw, ne] = bounds.corners();
        assert_abs_diff_eq!(ne.latitude().value(), 68.99320363724539, epsilon = 1e-9);
        assert_abs_diff_eq!(sw.latitude().value(), 51.00679636275462, epsilon = 1e-9);
        assert_abs_diff_eq!(ne.longitude().value(), 18.218076318512583, epsilon = 1e-9);
        assert_abs_diff_eq!(sw.longitude().value(), -18.218076318512583, epsilon = 1e-9);

        // Due east falls well short of the easternmost point at this latitude.
        let due_east = c.center().destination_point(90, 999).unwrap();
        assert!(due_east.longitude().value() < 17.6);

        let mut easternmost = f64::MIN;
        for step in 0..3600 {
            let edge = c.center().destination_point(f64::from(step) / 10.0, 999).unwrap();
            assert!(bounds.contains(&edge), "bearing {}", f64::from(step) / 10.0);
            easternmost = easternmost.max(edge.longitude().value());
        }
        assert!(easternmost > ne.longitude().value() - 0.05);
    }

    #[test]
    fn bounding_box_over_north_pole() {
        let c = Circle::new(p(89.5, 0.0), 200).unwrap();
        let bounds = c.bounding_box().unwrap();
        let [sw, ne] = bounds.corners();
        assert_abs_diff_eq!(sw.latitude().value(), 87.70135927255092, epsilon = 1e-9);
        assert_eq!(ne.latitude().value(), 90.0);
        assert_eq!(sw.longitude().value(), -180.0);
        assert_eq!(ne.longitude().value(), 180.0);
        assert!(c.contains(&p(90.0, 0.0)));
        assert!(bounds.contains(&p(90.0, 0.0)));
        for bearing in (0..360).step_by(15) {
            let edge = c.center().destination_point(bearing, 199.0).unwrap();
            assert!(bounds.contains(&edge), "bearing {bearing}");
        }
    }

    #[test]
    fn bounding_box_over_south_pole() {
        let [sw, ne] = Circle::new(p(-89.9, 45.0), 50).unwrap().bounding_box().unwrap().corners();
        assert_eq!(sw.latitude().value(), -90.0);
        assert!(ne.latitude().value() < -89.0);
        assert_eq!(sw.longitude().value(), -180.0);
        assert_eq!(ne.longitude().value(), 180.0);
    }

    #[test]
    fn bounding_box_across_antimeridian_spans_all_longitudes() {
        let c = Circle::new(p(0.0, 179.0), 200).unwrap();
        let bounds = c.bounding_box().unwrap();
        assert_eq!(bounds.min().longitude().value(), -180.0);
        assert_eq!(bounds.max().longitude().value(), 180.0);
        assert_abs_diff_eq!(bounds.max().latitude().value(), 1.798640727449076, epsilon = 1e-9);

        let across = c.center().destination_point(90, 150).unwrap();
        assert!(across.longitude().value() < -179.0);
        assert!(bounds.contains(&across));
    }

    #[test]
    fn bounding_box_ignores_radius_sign() {
        let positive = Circle::new(p(30.0, 40.0), 500).unwrap().bounding_box().unwrap();
        let negative = Circle::new(p(30.0, 40.0), -500).unwrap().bounding_box().unwrap();
        assert_eq!(positive, negative);
    }

    #[test]
    fn bounding_box_rejects_infinite_radius() {
        let c = Circle::new(p(0.0, 0.0), f64::INFINITY).unwrap();
        assert!(c.bounding_box().unwrap_err().is_coordinate());
    }

    proptest! {
        #[test]
        fn prop_bounding_box_encloses_circle(
            lat in -89.0f64..=89.0,
            lon in -180.0f64..=180.0,
            radius in 1.0f64..3000.0,
            bearing in 0.0f64..360.0,
        ) {
            let c = Circle::new(p(lat, lon), radius).unwrap();
            let inside = c.center().destination_point(bearing, radius * 0.999).unwrap();
            prop_assert!(c.bounding_box().unwrap().contains(&inside));
        }
    }
}
