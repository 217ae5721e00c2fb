//! Infinite planes
//!
//! A plane is a point plus a unit normal. Alongside the intersection
//! solvers, planes carry a total order along a shared normal direction:
//! the boundary construction picks "the outermost of these candidate
//! walls" through [`Plane3d::compare_along_normal`].

use crate::errors::GeometryError;
use crate::float_types::{ANGLE_EPSILON, LENGTH_EPSILON};
use crate::line::Line3d;
use crate::point::Point3d;
use crate::scalar::{Angle, Length};
use crate::vector::Vec3;
use std::cmp::Ordering;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3d {
    point: Point3d,
    normal: Vec3,
}

impl Plane3d {
    /// Errors when `normal` is (near-)zero.
    pub fn new(point: Point3d, normal: Vec3) -> Result<Self, GeometryError> {
        Ok(Plane3d {
            point,
            normal: normal.to_unit()?,
        })
    }

    pub fn point(&self) -> Point3d {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed distance of `p` from the plane, positive on the normal side.
    pub fn signed_distance_to(&self, p: &Point3d) -> Length {
        Length::mm(self.normal.dot(&(*p - self.point)))
    }

    pub fn contains(&self, p: &Point3d) -> bool {
        self.signed_distance_to(p).abs() < Length::mm(LENGTH_EPSILON)
    }

    pub fn translated(&self, offset: Vec3) -> Plane3d {
        Plane3d {
            point: self.point + offset,
            normal: self.normal,
        }
    }

    /// Shift the plane along its own normal by a signed distance.
    pub fn offset_along_normal(&self, distance: Length) -> Plane3d {
        self.translated(self.normal * distance)
    }

    pub fn rotated_about(&self, axis: &Line3d, angle: Angle) -> Result<Plane3d, GeometryError> {
        Ok(Plane3d {
            point: self.point.rotated_about(axis, angle),
            normal: self.normal.rotated(&axis.direction(), angle)?,
        })
    }

    /// The line common to two planes.
    ///
    /// Errors with [`GeometryError::ParallelPlanes`] when the normals are
    /// (anti-)parallel within the angular tolerance.
    pub fn intersect_plane(&self, other: &Plane3d) -> Result<Line3d, GeometryError> {
        let direction = self.normal.cross(&other.normal);
        // |n1 × n2| = sin of the angle between unit normals.
        if direction.norm().as_mm() < ANGLE_EPSILON {
            return Err(GeometryError::ParallelPlanes);
        }

        // Solve n1·p = d1, n2·p = d2 restricted to the span of the two
        // normals; the closed form below satisfies both equations.
        let d1 = self.normal.dot(&(self.point - Point3d::origin()));
        let d2 = other.normal.dot(&(other.point - Point3d::origin()));
        let n12 = direction;
        let numerator = other.normal.cross(&n12) * d1 + n12.cross(&self.normal) * d2;
        let origin = Point3d::origin() + numerator * (1.0 / n12.dot(&n12));

        Line3d::new(origin, direction)
    }

    /// The single point where a line pierces the plane.
    ///
    /// Errors with [`GeometryError::LineParallelToPlane`] when the line
    /// direction is perpendicular to the normal within tolerance.
    pub fn intersect_line(&self, line: &Line3d) -> Result<Point3d, GeometryError> {
        // Both vectors are unit, so the dot is the cosine of their angle.
        let denom = self.normal.dot(&line.direction());
        if denom.abs() < ANGLE_EPSILON {
            return Err(GeometryError::LineParallelToPlane);
        }
        let t = self.signed_distance_to(&line.origin()).as_mm() / denom;
        Ok(line.at(Length::mm(-t)))
    }

    /// The corner vertex where three construction planes meet: the
    /// dominant idiom for deriving case corners (e.g. left wall ∩ back
    /// wall ∩ top wall).
    pub fn corner(a: &Plane3d, b: &Plane3d, c: &Plane3d) -> Result<Point3d, GeometryError> {
        c.intersect_line(&a.intersect_plane(b)?)
    }

    /// Order of `self` relative to `other` along their shared normal:
    /// `Greater` when `self` lies further along the normal direction.
    ///
    /// Only defined for planes whose normals agree within 0.01°; anything
    /// else is a [`GeometryError::MismatchedNormals`].
    pub fn compare_along_normal(&self, other: &Plane3d) -> Result<Ordering, GeometryError> {
        let angle = self.normal.angle_between(&other.normal);
        if angle.as_radians() >= ANGLE_EPSILON {
            return Err(GeometryError::MismatchedNormals {
                angle_deg: angle.as_degrees(),
            });
        }
        let separation = self.normal.dot(&(self.point - other.point));
        if separation > LENGTH_EPSILON {
            Ok(Ordering::Greater)
        } else if separation < -LENGTH_EPSILON {
            Ok(Ordering::Less)
        } else {
            Ok(Ordering::Equal)
        }
    }

    /// The plane furthest along the shared normal among `candidates`.
    pub fn outermost(candidates: &[Plane3d]) -> Result<Plane3d, GeometryError> {
        assert!(!candidates.is_empty(), "outermost requires at least one candidate plane");
        let mut best = candidates[0];
        for plane in &candidates[1..] {
            if plane.compare_along_normal(&best)? == Ordering::Greater {
                best = *plane;
            }
        }
        Ok(best)
    }
}
