//! Wrapped physical quantities
//!
//! `Length` (millimeters) and `Angle` (radians) keep lengths, angles and
//! dimensionless numbers apart at the type level. Trigonometry lives on
//! [`Angle`], never on raw floats.

use crate::float_types::{PI, Real, TAU};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A signed length in millimeters. Total order, closed under
/// addition, subtraction and scalar scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Length(Real);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Construct from millimeters.
    pub const fn mm(value: Real) -> Self {
        Length(value)
    }

    /// The raw millimeter value.
    pub const fn as_mm(self) -> Real {
        self.0
    }

    pub fn abs(self) -> Self {
        Length(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Length(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Length(self.0.max(other.0))
    }

    /// Total order over lengths. `PartialOrd` is derived; NaN never
    /// appears in a constructed `Length`, so this is safe to expose.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl Mul<Real> for Length {
    type Output = Length;
    fn mul(self, rhs: Real) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for Real {
    type Output = Length;
    fn mul(self, rhs: Length) -> Length {
        Length(self * rhs.0)
    }
}

impl Div<Real> for Length {
    type Output = Length;
    fn div(self, rhs: Real) -> Length {
        Length(self.0 / rhs)
    }
}

/// Length / Length is a dimensionless ratio.
impl Div<Length> for Length {
    type Output = Real;
    fn div(self, rhs: Length) -> Real {
        self.0 / rhs.0
    }
}

impl std::iter::Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        Length(iter.map(|l| l.0).sum())
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// A signed angle, stored in radians. Comparisons are plain value
/// comparisons: normalization is never automatic, so range tests such as
/// "within ±90° of zero" behave predictably.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle(Real);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    /// A quarter turn (90°).
    pub const QUARTER_TURN: Angle = Angle(PI / 2.0);
    /// A half turn (180°).
    pub const HALF_TURN: Angle = Angle(PI);
    /// A full turn (360°).
    pub const FULL_TURN: Angle = Angle(TAU);

    pub const fn from_radians(value: Real) -> Self {
        Angle(value)
    }

    pub fn from_degrees(value: Real) -> Self {
        Angle(value.to_radians())
    }

    pub const fn as_radians(self) -> Real {
        self.0
    }

    pub fn as_degrees(self) -> Real {
        self.0.to_degrees()
    }

    pub fn sin(self) -> Real {
        self.0.sin()
    }

    pub fn cos(self) -> Real {
        self.0.cos()
    }

    pub fn tan(self) -> Real {
        self.0.tan()
    }

    /// Inverse tangent of a dimensionless ratio.
    pub fn atan(ratio: Real) -> Self {
        Angle(ratio.atan())
    }

    /// Quadrant-aware inverse tangent. Lengths cancel, so the result is a
    /// pure angle; this is the preferred way to recover an angle from two
    /// signed offsets (no `acos` domain trouble near ±1).
    pub fn atan2(y: Length, x: Length) -> Self {
        Angle(y.as_mm().atan2(x.as_mm()))
    }

    pub fn abs(self) -> Self {
        Angle(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Angle(self.0.min(other.0))
    }

    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<Real> for Angle {
    type Output = Angle;
    fn mul(self, rhs: Real) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Mul<Angle> for Real {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        Angle(self * rhs.0)
    }
}

impl Div<Real> for Angle {
    type Output = Angle;
    fn div(self, rhs: Real) -> Angle {
        Angle(self.0 / rhs)
    }
}

impl Div<Angle> for Angle {
    type Output = Real;
    fn div(self, rhs: Angle) -> Real {
        self.0 / rhs.0
    }
}

impl std::iter::Sum for Angle {
    fn sum<I: Iterator<Item = Angle>>(iter: I) -> Angle {
        Angle(iter.map(|a| a.0).sum())
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0.to_degrees())
    }
}
