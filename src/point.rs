//! 3D positions
//!
//! [`Point3d`] is a position without orientation. Differences of points
//! are [`Vec3`] displacements; rotation about an arbitrary [`Line3d`] axis
//! uses the Rodrigues formula with the axis translated through the origin.

use crate::float_types::Real;
use crate::line::Line3d;
use crate::scalar::{Angle, Length};
use crate::vector::Vec3;
use nalgebra::{Point3, Rotation3, Unit};
use std::ops::{Add, Sub};

/// A position in 3-space, components in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3d(pub(crate) Point3<Real>);

impl Point3d {
    pub const fn origin() -> Self {
        Point3d(Point3::new(0.0, 0.0, 0.0))
    }

    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Point3d(Point3::new(x.as_mm(), y.as_mm(), z.as_mm()))
    }

    /// Construct from raw millimeter components.
    pub const fn from_mm(x: Real, y: Real, z: Real) -> Self {
        Point3d(Point3::new(x, y, z))
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

    pub fn distance_to(&self, other: &Point3d) -> Length {
        Length::mm((self.0 - other.0).norm())
    }

    /// Rotate about an arbitrary axis line: translate the axis through the
    /// origin, rotate, translate back.
    pub fn rotated_about(&self, axis: &Line3d, angle: Angle) -> Point3d {
        // Line3d guarantees a unit direction.
        let unit = Unit::new_unchecked(axis.direction().0);
        let rotation = Rotation3::from_axis_angle(&unit, angle.as_radians());
        let offset = self.0 - axis.origin().0;
        Point3d(axis.origin().0 + rotation * offset)
    }
}

impl Add<Vec3> for Point3d {
    type Output = Point3d;
    fn add(self, rhs: Vec3) -> Point3d {
        Point3d(self.0 + rhs.0)
    }
}

impl Sub<Vec3> for Point3d {
    type Output = Point3d;
    fn sub(self, rhs: Vec3) -> Point3d {
        Point3d(self.0 - rhs.0)
    }
}

impl Sub for Point3d {
    type Output = Vec3;
    fn sub(self, rhs: Point3d) -> Vec3 {
        Vec3(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_about_offset_axis() {
        // Quarter turn about a vertical axis through (1, 0, 0) carries the
        // origin to (1, -1, 0).
        let axis = Line3d::new(Point3d::from_mm(1.0, 0.0, 0.0), Vec3::unit_z()).unwrap();
        let rotated = Point3d::origin().rotated_about(&axis, Angle::from_degrees(90.0));
        assert!(rotated.distance_to(&Point3d::from_mm(1.0, -1.0, 0.0)).as_mm() < 1e-12);
    }

    #[test]
    fn rotation_round_trip_returns_start() {
        let axis = Line3d::new(
            Point3d::from_mm(3.0, -2.0, 7.0),
            Vec3::from_mm(1.0, 1.0, -0.5),
        )
        .unwrap();
        let p = Point3d::from_mm(10.0, 4.0, -3.0);
        let angle = Angle::from_degrees(37.5);
        let back = p.rotated_about(&axis, angle).rotated_about(&axis, -angle);
        assert!(back.distance_to(&p).as_mm() < 1e-9);
    }
}
