//! Infinite lines
//!
//! A line is a point plus a unit direction, infinite in both directions.

use crate::errors::GeometryError;
use crate::point::Point3d;
use crate::scalar::{Angle, Length};
use crate::vector::Vec3;

/// An infinite line through `origin` along `direction` (kept unit length).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3d {
    origin: Point3d,
    direction: Vec3,
}

impl Line3d {
    /// Errors when `direction` is (near-)zero.
    pub fn new(origin: Point3d, direction: Vec3) -> Result<Self, GeometryError> {
        Ok(Line3d {
            origin,
            direction: direction.to_unit()?,
        })
    }

    /// The line through two distinct points, directed from `a` to `b`.
    pub fn through(a: Point3d, b: Point3d) -> Result<Self, GeometryError> {
        Line3d::new(a, b - a)
    }

    pub fn origin(&self) -> Point3d {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The point at signed distance `t` from the origin.
    pub fn at(&self, t: Length) -> Point3d {
        self.origin + self.direction * t
    }

    pub fn translated(&self, offset: Vec3) -> Line3d {
        Line3d {
            origin: self.origin + offset,
            direction: self.direction,
        }
    }

    /// Rotate the whole line about another axis line.
    pub fn rotated_about(&self, axis: &Line3d, angle: Angle) -> Result<Line3d, GeometryError> {
        Ok(Line3d {
            origin: self.origin.rotated_about(axis, angle),
            direction: self.direction.rotated(&axis.direction(), angle)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let line = Line3d::new(Point3d::origin(), Vec3::from_mm(0.0, 0.0, 5.0)).unwrap();
        assert!((line.direction().norm().as_mm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_direction_is_rejected() {
        assert_eq!(
            Line3d::new(Point3d::origin(), Vec3::zero()),
            Err(GeometryError::ZeroVector)
        );
    }
}
