//! Error types for measure and geometry construction.

/// Result type for fallible geode operations.
pub type Result<T> = core::result::Result<T, GeodeError>;

/// Error type for invalid caller input.
///
/// Every variant is raised synchronously at a construction or arithmetic
/// boundary; none of them is transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeodeError {
    /// Latitude or longitude (after conversion to degrees) is out of range.
    #[error(
        "Invalid coordinate ({latitude}, {longitude}): latitude must be in -90..=90 degrees \
         and longitude in -180..=180 degrees"
    )]
    Coordinate {
        /// Offending latitude, in degrees.
        latitude: f64,
        /// Offending longitude, in degrees.
        longitude: f64,
    },

    /// Bearing is not a compass heading in `[0, 360]` degrees.
    #[error("Invalid bearing {bearing}: must be degrees clockwise from true north within 0..=360")]
    Bearing {
        /// Offending bearing, in degrees.
        bearing: f64,
    },

    /// Unit name is not one of radian, degree, kilometer or mile.
    #[error("Unknown unit '{name}' given. Must be one of radian, degree, kilometer, mile")]
    Unit {
        /// Name as given, with one trailing `s` removed.
        name: String,
    },

    /// Operand can be read neither as a number nor as a measure.
    #[error("'{operand}' can't be coerced into a measure")]
    Incompatible {
        /// Operand text as given.
        operand: String,
    },
}

impl GeodeError {
    /// Returns `true` for the coordinate variant.
    pub fn is_coordinate(&self) -> bool {
        matches!(self, GeodeError::Coordinate { .. })
    }

    /// Returns `true` for the bearing variant.
    pub fn is_bearing(&self) -> bool {
        matches!(self, GeodeError::Bearing { .. })
    }

    /// Returns `true` for the unit variant.
    pub fn is_unit(&self) -> bool {
        matches!(self, GeodeError::Unit { .. })
    }

    /// Returns `true` for the incompatible-operand variant.
    pub fn is_incompatible(&self) -> bool {
        matches!(self, GeodeError::Incompatible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_message_names_both_ranges() {
        let err = GeodeError::Coordinate {
            latitude: 91.0,
            longitude: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("(91, 0)"));
        assert!(msg.contains("-90..=90"));
        assert!(msg.contains("-180..=180"));
    }

    #[test]
    fn bearing_message_includes_value() {
        let err = GeodeError::Bearing { bearing: 361.0 };
        assert!(err.to_string().contains("361"));
        assert!(err.is_bearing());
        assert!(!err.is_coordinate());
    }

    #[test]
    fn unit_message_lists_known_units() {
        let err = GeodeError::Unit {
            name: "furlong".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown unit 'furlong' given. Must be one of radian, degree, kilometer, mile"
        );
    }

    #[test]
    fn incompatible_predicate() {
        let err = GeodeError::Incompatible {
            operand: "what".to_string(),
        };
        assert!(err.is_incompatible());
        assert!(!err.is_unit());
    }
}
