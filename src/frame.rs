//! Rigid-part placement frames
//!
//! Every rigid part carries one [`Frame`]: a reference point plus two
//! orthogonal orientation vectors (front and bottom). The four remaining
//! directions are derived, never stored. Parts implement [`Placeable`] by
//! exposing their frame and a copy constructor; translation and rotation
//! come for free.
//!
//! [`Frame::place`] carries geometry built in canonical space (front =
//! −Y, bottom = −Z, origin at the reference point) into the frame with a
//! two-step minimal rotation: align top first, then front about the
//! updated frame, then translate. The ordering matters: aligning front
//! first does not converge to the same orientation.

use crate::errors::GeometryError;
use crate::float_types::ANGLE_EPSILON;
use crate::line::Line3d;
use crate::point::Point3d;
use crate::scad::Scad;
use crate::scalar::{Angle, Length};
use crate::vector::Vec3;
use nalgebra::{Rotation3, Unit};

/// Reference point plus orthonormal front/bottom orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    reference_point: Point3d,
    front: Vec3,
    bottom: Vec3,
}

impl Frame {
    /// Build a frame, normalizing both vectors and enforcing the
    /// orthogonality invariant: front ⟂ bottom within 0.01°.
    pub fn new(
        reference_point: Point3d,
        front: Vec3,
        bottom: Vec3,
    ) -> Result<Self, GeometryError> {
        let front = front.to_unit()?;
        let bottom = bottom.to_unit()?;
        let angle = front.angle_between(&bottom);
        if (angle - Angle::QUARTER_TURN).abs().as_radians() >= ANGLE_EPSILON {
            return Err(GeometryError::NonOrthogonalFrame {
                angle_deg: angle.as_degrees(),
            });
        }
        Ok(Frame {
            reference_point,
            front,
            bottom,
        })
    }

    /// The canonical frame: origin, front = −Y, bottom = −Z.
    pub fn canonical() -> Frame {
        Frame {
            reference_point: Point3d::origin(),
            front: -Vec3::unit_y(),
            bottom: -Vec3::unit_z(),
        }
    }

    pub fn reference_point(&self) -> Point3d {
        self.reference_point
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn bottom(&self) -> Vec3 {
        self.bottom
    }

    pub fn top(&self) -> Vec3 {
        -self.bottom
    }

    pub fn back(&self) -> Vec3 {
        -self.front
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(&self.bottom)
    }

    pub fn left(&self) -> Vec3 {
        -self.right()
    }

    pub fn translated(&self, offset: Vec3) -> Frame {
        Frame {
            reference_point: self.reference_point + offset,
            front: self.front,
            bottom: self.bottom,
        }
    }

    /// Rotate the whole frame (point and orientation) about an axis line.
    pub fn rotated_about(&self, axis: &Line3d, angle: Angle) -> Frame {
        // Axis direction is unit by Line3d's invariant.
        let unit = Unit::new_unchecked(axis.direction().0);
        let rotation = Rotation3::from_axis_angle(&unit, angle.as_radians());
        Frame {
            reference_point: self.reference_point.rotated_about(axis, angle),
            front: Vec3(rotation * self.front.0),
            bottom: Vec3(rotation * self.bottom.0),
        }
    }

    /// Map a canonical-space offset (right, back, top millimeters) to a
    /// world-space point. Used to derive plate corners and axis anchors
    /// without building CSG.
    pub fn world_point(&self, right: Length, back: Length, top: Length) -> Point3d {
        self.reference_point + self.right() * right + self.back() * back + self.top() * top
    }

    /// Place canonical-space CSG content into this frame.
    ///
    /// Two-step minimal rotation: align canonical top with the target top,
    /// then canonical front with the target front about the updated
    /// orientation, then translate from the origin to the reference
    /// point. A step whose alignment cross product vanishes is skipped
    /// (already aligned), or replaced by a 180° turn about a
    /// deterministic orthogonal axis when the vectors are anti-parallel.
    pub fn place(&self, content: Scad) -> Scad {
        let mut solid = content;
        let mut tracked = Frame::canonical();

        for pick in [top_of, front_of] {
            if let Some((axis, angle)) = alignment_rotation(&pick(&tracked), &pick(self)) {
                solid = solid.rotated(angle, axis);
                tracked = rotate_frame_about_origin(&tracked, &axis, angle);
            }
        }

        solid.translated(self.reference_point - tracked.reference_point)
    }
}

fn top_of(frame: &Frame) -> Vec3 {
    frame.top()
}

fn front_of(frame: &Frame) -> Vec3 {
    frame.front()
}

/// The rotation taking unit vector `from` onto unit vector `to`, if one
/// is needed. `None` means the vectors already coincide. Anti-parallel
/// vectors get a half turn about a deterministically chosen orthogonal
/// axis, since their cross product gives no usable axis.
fn alignment_rotation(from: &Vec3, to: &Vec3) -> Option<(Vec3, Angle)> {
    let axis = from.cross(to);
    if axis.norm().as_mm() >= ANGLE_EPSILON {
        return Some((axis, from.angle_between(to)));
    }
    if from.same_direction(to) {
        return None;
    }
    Some((orthogonal_to(from), Angle::HALF_TURN))
}

/// Any unit vector orthogonal to `v`, chosen deterministically.
fn orthogonal_to(v: &Vec3) -> Vec3 {
    let candidate = v.cross(&Vec3::unit_x());
    if candidate.norm().as_mm() >= ANGLE_EPSILON {
        return Vec3(candidate.0.normalize());
    }
    Vec3(v.cross(&Vec3::unit_y()).0.normalize())
}

/// Rotate a frame about an axis through the origin. The axis was checked
/// nonzero by the caller.
fn rotate_frame_about_origin(frame: &Frame, axis: &Vec3, angle: Angle) -> Frame {
    let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis.0), angle.as_radians());
    Frame {
        reference_point: Point3d(Point3d::origin().0 + rotation * frame.reference_point.0.coords),
        front: Vec3(rotation * frame.front.0),
        bottom: Vec3(rotation * frame.bottom.0),
    }
}

/// The rotation-and-translation contract every rigid part implements.
///
/// A part exposes its frame and a copy constructor; the generic
/// translate/rotate transforms derive from those once, instead of being
/// re-implemented per part type.
pub trait Placeable: Sized {
    fn frame(&self) -> &Frame;

    /// Copy of this part carried by a replacement frame.
    fn with_frame(&self, frame: Frame) -> Self;

    fn reference_point(&self) -> Point3d {
        self.frame().reference_point()
    }

    fn front(&self) -> Vec3 {
        self.frame().front()
    }

    fn bottom(&self) -> Vec3 {
        self.frame().bottom()
    }

    fn top(&self) -> Vec3 {
        self.frame().top()
    }

    fn back(&self) -> Vec3 {
        self.frame().back()
    }

    fn right(&self) -> Vec3 {
        self.frame().right()
    }

    fn left(&self) -> Vec3 {
        self.frame().left()
    }

    fn translated(&self, offset: Vec3) -> Self {
        self.with_frame(self.frame().translated(offset))
    }

    fn rotated_about(&self, axis: &Line3d, angle: Angle) -> Self {
        self.with_frame(self.frame().rotated_about(axis, angle))
    }
}

impl Placeable for Frame {
    fn frame(&self) -> &Frame {
        self
    }

    fn with_frame(&self, frame: Frame) -> Self {
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Vec3, b: &Vec3) {
        assert!((*a - *b).norm().as_mm() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn non_orthogonal_vectors_are_rejected() {
        let result = Frame::new(
            Point3d::origin(),
            Vec3::from_mm(0.0, -1.0, 0.0),
            Vec3::from_mm(0.0, -0.1, -1.0),
        );
        assert!(matches!(result, Err(GeometryError::NonOrthogonalFrame { .. })));
    }

    #[test]
    fn derived_directions_are_consistent() {
        let frame = Frame::new(
            Point3d::origin(),
            Vec3::from_mm(1.0, 0.0, 0.0),
            Vec3::from_mm(0.0, 0.0, -1.0),
        )
        .unwrap();
        assert_close(&frame.top(), &-frame.bottom());
        assert_close(&frame.back(), &-frame.front());
        assert_close(&frame.right(), &frame.front().cross(&frame.bottom()));
        assert_close(&frame.left(), &-frame.right());
    }

    #[test]
    fn canonical_frame_needs_no_rotation() {
        let placed = Frame::canonical().place(Scad::sphere(Length::mm(1.0)));
        // Only a zero translation wraps the content.
        match placed {
            Scad::Translate { offset, child } => {
                assert_eq!(offset, [0.0, 0.0, 0.0]);
                assert_eq!(*child, Scad::sphere(Length::mm(1.0)));
            },
            other => panic!("expected bare translate, got {other:?}"),
        }
    }

    #[test]
    fn antiparallel_top_gets_half_turn() {
        // Frame flipped upside down: bottom = +Z.
        let frame = Frame::new(
            Point3d::origin(),
            Vec3::from_mm(0.0, -1.0, 0.0),
            Vec3::from_mm(0.0, 0.0, 1.0),
        )
        .unwrap();
        let placed = frame.place(Scad::sphere(Length::mm(1.0)));
        let text = crate::scad::writer::scene(&placed, 16);
        assert!(text.contains("rotate(a = 180.000000"));
    }
}
