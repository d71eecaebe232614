//! The closed set of units a [`Measure`](crate::Measure) can carry.

use crate::error::GeodeError;
use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of a [`Measure`](crate::Measure).
///
/// Angles ([`Unit::Degree`], [`Unit::Radian`]) and surface distances
/// ([`Unit::Kilometer`], [`Unit::Mile`]) share one dimension here: on a sphere
/// of fixed radius an arc length and its central angle are interchangeable, so
/// any unit converts into any other through
/// [`CONVERSION_TABLE`](crate::constants::CONVERSION_TABLE).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Radian of arc on the Earth sphere.
    #[cfg_attr(feature = "serde", serde(alias = "radians"))]
    Radian,
    /// Degree of arc on the Earth sphere.
    #[cfg_attr(feature = "serde", serde(alias = "degrees"))]
    Degree,
    /// Kilometre of surface distance.
    #[cfg_attr(feature = "serde", serde(alias = "kilometers"))]
    Kilometer,
    /// International mile (`1.609344 km`) of surface distance.
    #[cfg_attr(feature = "serde", serde(alias = "miles"))]
    Mile,
}

impl Unit {
    /// Every unit, in conversion-table order.
    pub const ALL: [Unit; 4] = [Unit::Degree, Unit::Kilometer, Unit::Mile, Unit::Radian];

    /// Singular lowercase name, e.g. `"kilometer"`.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Degree => "degree",
            Unit::Kilometer => "kilometer",
            Unit::Mile => "mile",
            Unit::Radian => "radian",
        }
    }

    /// Plural lowercase name, e.g. `"kilometers"`.
    pub const fn plural(self) -> &'static str {
        match self {
            Unit::Degree => "degrees",
            Unit::Kilometer => "kilometers",
            Unit::Mile => "miles",
            Unit::Radian => "radians",
        }
    }

    /// Row/column of this unit in the conversion table.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Unit::Degree => 0,
            Unit::Kilometer => 1,
            Unit::Mile => 2,
            Unit::Radian => 3,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = GeodeError;

    /// Parses a unit name, accepting singular and plural forms.
    ///
    /// ```rust
    /// use geode_core::Unit;
    ///
    /// assert_eq!("degrees".parse::<Unit>().unwrap(), Unit::Degree);
    /// assert_eq!("mile".parse::<Unit>().unwrap(), Unit::Mile);
    /// assert!("furlongs".parse::<Unit>().is_err());
    /// ```
    fn from_str(name: &str) -> core::result::Result<Self, Self::Err> {
        let singular = name.strip_suffix('s').unwrap_or(name);
        match singular {
            "degree" => Ok(Unit::Degree),
            "kilometer" => Ok(Unit::Kilometer),
            "mile" => Ok(Unit::Mile),
            "radian" => Ok(Unit::Radian),
            _ => {
                log::debug!("rejected unit name '{}'", name);
                Err(GeodeError::Unit {
                    name: singular.to_string(),
                })
            }
        }
    }
}
