//! 3D displacement vectors
//!
//! [`Vec3`] is a typed wrapper over [`nalgebra::Vector3`]: components are
//! millimeters, construction goes through [`Length`], and the angular
//! operations return [`Angle`] instead of raw floats.

use crate::errors::GeometryError;
use crate::float_types::{ANGLE_EPSILON, Real};
use crate::scalar::{Angle, Length};
use nalgebra::{Rotation3, Unit, Vector3};
use std::ops::{Add, Mul, Neg, Sub};

/// A displacement or direction in 3-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3(pub(crate) Vector3<Real>);

impl Vec3 {
    pub const fn zero() -> Self {
        Vec3(Vector3::new(0.0, 0.0, 0.0))
    }

    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Vec3(Vector3::new(x.as_mm(), y.as_mm(), z.as_mm()))
    }

    /// Construct from raw millimeter components.
    pub const fn from_mm(x: Real, y: Real, z: Real) -> Self {
        Vec3(Vector3::new(x, y, z))
    }

    pub const fn unit_x() -> Self {
        Vec3(Vector3::new(1.0, 0.0, 0.0))
    }

    pub const fn unit_y() -> Self {
        Vec3(Vector3::new(0.0, 1.0, 0.0))
    }

    pub const fn unit_z() -> Self {
        Vec3(Vector3::new(0.0, 0.0, 1.0))
    }

    pub fn x(&self) -> Length {
        Length::mm(self.0.x)
    }

    pub fn y(&self) -> Length {
        Length::mm(self.0.y)
    }

    pub fn z(&self) -> Length {
        Length::mm(self.0.z)
    }

    pub fn norm(&self) -> Length {
        Length::mm(self.0.norm())
    }

    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3(self.0.cross(&other.0))
    }

    /// Raw dot product in mm². Exposed to the rest of the crate through
    /// [`Vec3::angle_between`] and [`Vec3::same_direction`].
    pub(crate) fn dot(&self, other: &Vec3) -> Real {
        self.0.dot(&other.0)
    }

    /// Unsigned angle between two vectors, in [0°, 180°].
    ///
    /// Computed as `atan2(|a × b|, a · b)` rather than `acos` of the
    /// normalized dot product, which runs into domain errors at ±1.
    pub fn angle_between(&self, other: &Vec3) -> Angle {
        Angle::from_radians(self.0.cross(&other.0).norm().atan2(self.0.dot(&other.0)))
    }

    /// Whether `other` points within ±90° of this vector. This is the
    /// half-space membership test used throughout the boundary search,
    /// so it reduces to a single dot product.
    pub fn same_direction(&self, other: &Vec3) -> bool {
        self.dot(other) >= 0.0
    }

    /// Whether the angle between the vectors is below the crate's angular
    /// tolerance (directions coincide).
    pub fn is_parallel_to(&self, other: &Vec3) -> bool {
        self.angle_between(other) < Angle::from_radians(ANGLE_EPSILON)
    }

    /// Unit vector with the same direction.
    ///
    /// Errors on a (near-)zero vector instead of silently returning NaN.
    pub fn to_unit(&self) -> Result<Vec3, GeometryError> {
        Unit::try_new(self.0, Real::EPSILON)
            .map(|u| Vec3(u.into_inner()))
            .ok_or(GeometryError::ZeroVector)
    }

    /// Rodrigues rotation about an axis vector through the origin.
    ///
    /// The axis need not be unit length, but it must be nonzero.
    pub fn rotated(&self, axis: &Vec3, angle: Angle) -> Result<Vec3, GeometryError> {
        let axis = Unit::try_new(axis.0, Real::EPSILON).ok_or(GeometryError::ZeroVector)?;
        let rotation = Rotation3::from_axis_angle(&axis, angle.as_radians());
        Ok(Vec3(rotation * self.0))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3(self.0 + rhs.0)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3(self.0 - rhs.0)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3(-self.0)
    }
}

impl Mul<Real> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: Real) -> Vec3 {
        Vec3(self.0 * rhs)
    }
}

/// Scaling a unit direction by a length yields a displacement of that
/// length along the direction.
impl Mul<Length> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: Length) -> Vec3 {
        Vec3(self.0 * rhs.as_mm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    #[test]
    fn angle_between_handles_parallel_and_antiparallel() {
        let x = Vec3::unit_x();
        assert!(x.angle_between(&x).as_radians().abs() < 1e-12);
        assert!((x.angle_between(&-x).as_radians() - PI).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_refuses_to_normalize() {
        assert_eq!(Vec3::zero().to_unit(), Err(GeometryError::ZeroVector));
    }

    #[test]
    fn rotation_about_z_moves_x_to_y() {
        let rotated = Vec3::unit_x()
            .rotated(&Vec3::unit_z(), Angle::from_degrees(90.0))
            .unwrap();
        assert!((rotated - Vec3::unit_y()).norm().as_mm() < 1e-12);
    }
}
