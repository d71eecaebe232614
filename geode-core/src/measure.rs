//! `Measure` type and its unit algebra.

use crate::constants::conversion_factor;
use crate::error::{GeodeError, Result};
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::*;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A magnitude tagged with one of the four [`Unit`]s.
///
/// `Measure` behaves like an ordinary number while keeping track of its unit:
///
/// * arithmetic between two measures converts the right operand into the
///   *left* operand's unit first, and the result carries the left unit;
/// * a bare `f64` operand is taken to already be in the measure's unit;
/// * equality and ordering compare converted values.
///
/// Conversions multiply by irrational factors (π, the Earth radius), so every
/// conversion accessor returns `self` untouched when no conversion is needed.
///
/// ```rust
/// use geode_core::{Measure, Unit};
///
/// let sum = Measure::degrees(1.0) + Measure::kilometers(111.1950802335329);
/// assert_eq!(sum.unit(), Unit::Degree);
/// assert!((sum.value() - 2.0).abs() < 1e-12);
///
/// assert_eq!(Measure::miles(1.0), Measure::kilometers(1.609344));
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measure {
    value: f64,
    unit: Unit,
}

/// Floored modulo: the result takes the sign of the divisor.
#[inline]
fn rem_floor(x: f64, modulus: f64) -> f64 {
    let r = x % modulus;
    if r != 0.0 && (r < 0.0) != (modulus < 0.0) {
        r + modulus
    } else {
        r
    }
}

impl Measure {
    /// Creates a measure from a value and a unit.
    #[inline]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a measure from a value and a unit *name*.
    ///
    /// Singular and plural names are accepted (`"mile"`, `"miles"`).
    ///
    /// ```rust
    /// use geode_core::Measure;
    ///
    /// let a = Measure::with_unit_name(1.0, "degree").unwrap();
    /// let b = Measure::with_unit_name(1.0, "degrees").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Measure::with_unit_name(1.0, "parsecs").is_err());
    /// ```
    pub fn with_unit_name(value: f64, name: &str) -> Result<Self> {
        Ok(Self::new(value, name.parse()?))
    }

    /// A measure in degrees.
    #[inline]
    pub const fn degrees(value: f64) -> Self {
        Self::new(value, Unit::Degree)
    }

    /// A measure in radians.
    #[inline]
    pub const fn radians(value: f64) -> Self {
        Self::new(value, Unit::Radian)
    }

    /// A measure in kilometres.
    #[inline]
    pub const fn kilometers(value: f64) -> Self {
        Self::new(value, Unit::Kilometer)
    }

    /// A measure in miles.
    #[inline]
    pub const fn miles(value: f64) -> Self {
        Self::new(value, Unit::Mile)
    }

    /// Raw magnitude in this measure's own unit.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Unit of this measure.
    #[inline]
    pub const fn unit(self) -> Unit {
        self.unit
    }

    /// Expresses this measure in `unit`.
    ///
    /// Returns `self` unchanged when it is already in `unit`; otherwise the
    /// value is multiplied once by the table factor.
    #[inline]
    pub fn to(self, unit: Unit) -> Self {
        if self.unit == unit {
            return self;
        }
        Self::new(self.value * conversion_factor(self.unit, unit), unit)
    }

    /// This measure in degrees.
    #[inline]
    pub fn as_degrees(self) -> Self {
        self.to(Unit::Degree)
    }

    /// This measure in kilometres.
    #[inline]
    pub fn as_kilometers(self) -> Self {
        self.to(Unit::Kilometer)
    }

    /// This measure in miles.
    #[inline]
    pub fn as_miles(self) -> Self {
        self.to(Unit::Mile)
    }

    /// This measure in radians.
    #[inline]
    pub fn as_radians(self) -> Self {
        self.to(Unit::Radian)
    }

    /// Absolute value, same unit.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    /// Sign of the raw value (same semantics as `f64::signum()`).
    #[inline]
    pub fn signum(self) -> f64 {
        self.value.signum()
    }

    /// `true` when the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.value > 0.0
    }

    /// `true` when the value is strictly less than zero.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.value < 0.0
    }

    /// `true` when the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    /// Sine of the central angle this measure represents.
    #[inline]
    pub fn sin(self) -> f64 {
        self.as_radians().value.sin()
    }

    /// Cosine of the central angle this measure represents.
    #[inline]
    pub fn cos(self) -> f64 {
        self.as_radians().value.cos()
    }

    /// One full turn (360°) expressed in this measure's unit.
    #[inline]
    pub fn full_turn(self) -> f64 {
        360.0 * conversion_factor(Unit::Degree, self.unit)
    }

    /// Wrap into `[0, FULL_TURN)`.
    ///
    /// ```rust
    /// use geode_core::Measure;
    /// assert_eq!(Measure::degrees(-90.0).wrap_pos().value(), 270.0);
    /// ```
    #[inline]
    pub fn wrap_pos(self) -> Self {
        let full = self.full_turn();
        let y = self.value.rem_euclid(full);
        // rem_euclid can round up to the modulus for tiny negative inputs
        Self::new(if y >= full { 0.0 } else { y }, self.unit)
    }

    /// Wrap into `(-HALF_TURN, HALF_TURN]`.
    ///
    /// ```rust
    /// use geode_core::Measure;
    /// assert_eq!(Measure::degrees(182.0).wrap_signed().value(), -178.0);
    /// assert_eq!(Measure::degrees(-180.0).wrap_signed().value(), 180.0);
    /// ```
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let full = self.full_turn();
        let half = 0.5 * full;
        let y = (self.value + half).rem_euclid(full) - half;
        let norm = if y <= -half { y + full } else { y };
        Self::new(norm, self.unit)
    }

    /// Latitude fold into `[-QUARTER_TURN, QUARTER_TURN]`.
    ///
    /// Values past a pole fold back towards the equator: 100° becomes 80°.
    #[inline]
    pub fn wrap_quarter_fold(self) -> Self {
        let full = self.full_turn();
        let half = 0.5 * full;
        let quarter = 0.25 * full;
        let y = (self.value + quarter).rem_euclid(full);
        Self::new(quarter - (y - half).abs(), self.unit)
    }

    /// `self + other`, with `other` coerced through [`IntoMeasure`].
    ///
    /// ```rust
    /// use geode_core::Measure;
    ///
    /// let sum = Measure::degrees(1.0).try_add("2").unwrap();
    /// assert_eq!(sum, Measure::degrees(3.0));
    /// assert!(Measure::degrees(1.0).try_add("what is this").is_err());
    /// ```
    pub fn try_add<T: IntoMeasure>(self, other: T) -> Result<Self> {
        Ok(self + other.into_measure(self.unit)?.value)
    }

    /// `self - other`, with `other` coerced through [`IntoMeasure`].
    pub fn try_sub<T: IntoMeasure>(self, other: T) -> Result<Self> {
        Ok(self - other.into_measure(self.unit)?.value)
    }

    /// `self * other`, with `other` coerced through [`IntoMeasure`].
    pub fn try_mul<T: IntoMeasure>(self, other: T) -> Result<Self> {
        Ok(self * other.into_measure(self.unit)?.value)
    }

    /// `self / other`, with `other` coerced through [`IntoMeasure`].
    pub fn try_div<T: IntoMeasure>(self, other: T) -> Result<Self> {
        Ok(self / other.into_measure(self.unit)?.value)
    }

    /// `self % other`, with `other` coerced through [`IntoMeasure`].
    pub fn try_rem<T: IntoMeasure>(self, other: T) -> Result<Self> {
        Ok(self % other.into_measure(self.unit)?.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Coercion
// ─────────────────────────────────────────────────────────────────────────────

/// Explicit conversion of an operand into a [`Measure`].
///
/// Plain numbers are tagged with the `default` unit; measures keep their own
/// unit; text is read either as a bare number (tagged) or as
/// `"<number> <unit>"`. Anything else is an [`GeodeError::Incompatible`]
/// operand.
///
/// ```rust
/// use geode_core::{IntoMeasure, Measure, Unit};
///
/// assert_eq!(7_i32.into_measure(Unit::Degree).unwrap(), Measure::degrees(7.0));
/// let km = "1 mile".into_measure(Unit::Kilometer).unwrap();
/// assert_eq!(km.unit(), Unit::Kilometer);
/// assert!("seven".into_measure(Unit::Degree).is_err());
/// ```
pub trait IntoMeasure: Sized {
    /// Tags the operand without converting it.
    ///
    /// A [`Measure`] (or text naming a unit) comes back in its own unit, so
    /// callers that immediately convert again can skip one lossy step.
    fn into_tagged(self, default: Unit) -> Result<Measure>;

    /// Tags the operand and expresses it in `unit`.
    #[inline]
    fn into_measure(self, unit: Unit) -> Result<Measure> {
        Ok(self.into_tagged(unit)?.to(unit))
    }
}

impl IntoMeasure for Measure {
    #[inline]
    fn into_tagged(self, _default: Unit) -> Result<Measure> {
        Ok(self)
    }
}

impl IntoMeasure for &Measure {
    #[inline]
    fn into_tagged(self, _default: Unit) -> Result<Measure> {
        Ok(*self)
    }
}

macro_rules! impl_into_measure_for_number {
    ($($t:ty),+ $(,)?) => {
        $(
            impl IntoMeasure for $t {
                #[inline]
                fn into_tagged(self, default: Unit) -> Result<Measure> {
                    Ok(Measure::new(self as f64, default))
                }
            }
        )+
    };
}

impl_into_measure_for_number!(f64, f32, i32, i64, u32);

impl IntoMeasure for &str {
    fn into_tagged(self, default: Unit) -> Result<Measure> {
        let text = self.trim();
        match text.parse::<f64>() {
            Ok(value) => Ok(Measure::new(value, default)),
            Err(_) => text.parse::<Measure>(),
        }
    }
}

impl IntoMeasure for String {
    fn into_tagged(self, default: Unit) -> Result<Measure> {
        self.as_str().into_tagged(default)
    }
}

impl IntoMeasure for &String {
    fn into_tagged(self, default: Unit) -> Result<Measure> {
        self.as_str().into_tagged(default)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Implements a binary operator for `Measure op Measure`, `Measure op f64` and
/// `f64 op Measure`, plus the compound-assignment forms.
macro_rules! impl_measure_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $f:expr) => {
        impl $op for Measure {
            type Output = Measure;
            #[inline]
            fn $method(self, rhs: Measure) -> Measure {
                let rhs = rhs.to(self.unit).value;
                Measure::new($f(self.value, rhs), self.unit)
            }
        }

        impl $op<f64> for Measure {
            type Output = Measure;
            #[inline]
            fn $method(self, rhs: f64) -> Measure {
                Measure::new($f(self.value, rhs), self.unit)
            }
        }

        impl $op<Measure> for f64 {
            type Output = Measure;
            #[inline]
            fn $method(self, rhs: Measure) -> Measure {
                Measure::new($f(self, rhs.value), rhs.unit)
            }
        }

        impl $assign for Measure {
            #[inline]
            fn $assign_method(&mut self, rhs: Measure) {
                *self = $op::$method(*self, rhs);
            }
        }

        impl $assign<f64> for Measure {
            #[inline]
            fn $assign_method(&mut self, rhs: f64) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

impl_measure_op!(Add, add, AddAssign, add_assign, |a: f64, b: f64| a + b);
impl_measure_op!(Sub, sub, SubAssign, sub_assign, |a: f64, b: f64| a - b);
impl_measure_op!(Mul, mul, MulAssign, mul_assign, |a: f64, b: f64| a * b);
impl_measure_op!(Div, div, DivAssign, div_assign, |a: f64, b: f64| a / b);
impl_measure_op!(Rem, rem, RemAssign, rem_assign, rem_floor);

impl Neg for Measure {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl PartialEq for Measure {
    #[inline]
    fn eq(&self, other: &Measure) -> bool {
        self.value == other.to(self.unit).value
    }
}

impl PartialEq<f64> for Measure {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialOrd for Measure {
    #[inline]
    fn partial_cmp(&self, other: &Measure) -> Option<Ordering> {
        self.value.partial_cmp(&other.to(self.unit).value)
    }
}

impl PartialOrd<f64> for Measure {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl From<Measure> for f64 {
    #[inline]
    fn from(measure: Measure) -> f64 {
        measure.value
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting and parsing
// ─────────────────────────────────────────────────────────────────────────────

impl Display for Measure {
    /// `"1 degree"`, `"2 kilometers"`, `"2.5 miles"`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let name = if self.value == 1.0 || self.value == -1.0 {
            self.unit.name()
        } else {
            self.unit.plural()
        };
        // `-0` prints as `0`.
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{} {}", value, name)
    }
}

impl FromStr for Measure {
    type Err = GeodeError;

    /// Parses `"<number> <unit>"`, e.g. `"12.5 kilometers"`.
    fn from_str(text: &str) -> Result<Self> {
        let incompatible = || GeodeError::Incompatible {
            operand: text.to_string(),
        };
        let mut parts = text.split_whitespace();
        let (Some(value), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(incompatible());
        };
        let value: f64 = value.parse().map_err(|_| incompatible())?;
        Measure::with_unit_name(value, unit)
    }
}
