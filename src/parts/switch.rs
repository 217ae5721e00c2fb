//! Key switches and per-key mounting plates
//!
//! A switch's reference point is the center of its keycap top: column
//! layout places keycap tops on the finger arc, and everything else
//! (plate, cutout, corner points) hangs below that point.

use crate::config::KeyGeometry;
use crate::frame::{Frame, Placeable};
use crate::point::Point3d;
use crate::scad::Scad;
use crate::scalar::Length;
use crate::vector::Vec3;

/// An MX-style key switch, anchored at its keycap-top center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySwitch {
    frame: Frame,
}

impl KeySwitch {
    pub fn new(frame: Frame) -> Self {
        KeySwitch { frame }
    }

    /// The mounting plate carrying this switch.
    pub fn plate(&self, keys: &KeyGeometry) -> KeyPlate {
        KeyPlate {
            frame: self.frame,
            size: keys.plate_size,
            thickness: keys.plate_thickness,
            drop: keys.keycap_height,
        }
    }

    /// Clearance pocket above the plate so the keycap can travel and
    /// emerge through whatever wall the boundary search derives.
    pub fn keycap_clearance(&self, keys: &KeyGeometry, margin: Length) -> Scad {
        let reach = Length::mm(30.0);
        let side = keys.key_pitch + margin * 2.0;
        let pocket = Scad::cube(side, side, reach, true).translated(Vec3::new(
            Length::ZERO,
            Length::ZERO,
            reach / 2.0 - keys.keycap_height,
        ));
        self.frame.place(pocket)
    }

    /// The square hole the switch clips into, over-deep on both sides so
    /// boolean subtraction never leaves a skin.
    pub fn cutout(&self, keys: &KeyGeometry) -> Scad {
        let overcut = Length::mm(0.4);
        let depth = keys.plate_thickness + overcut * 2.0;
        let hole = Scad::cube(keys.switch_hole_size, keys.switch_hole_size, depth, true)
            .translated(Vec3::new(
                Length::ZERO,
                Length::ZERO,
                -(keys.keycap_height + keys.plate_thickness / 2.0),
            ));
        self.frame.place(hole)
    }
}

impl Placeable for KeySwitch {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        KeySwitch { frame }
    }
}

/// The per-key mounting plate: a square slab whose top face sits
/// `drop` below the keycap top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPlate {
    frame: Frame,
    size: Length,
    thickness: Length,
    drop: Length,
}

impl KeyPlate {
    pub fn size(&self) -> Length {
        self.size
    }

    pub fn thickness(&self) -> Length {
        self.thickness
    }

    pub fn solid(&self) -> Scad {
        let slab = Scad::cube(self.size, self.size, self.thickness, true).translated(Vec3::new(
            Length::ZERO,
            Length::ZERO,
            -(self.drop + self.thickness / 2.0),
        ));
        self.frame.place(slab)
    }

    /// The four corners of the plate's top face in world space, ordered
    /// front-left, front-right, back-right, back-left. These are the
    /// inputs of the case-wall boundary search.
    pub fn top_corners(&self) -> [Point3d; 4] {
        let half = self.size / 2.0;
        let drop = -self.drop;
        [
            self.frame.world_point(-half, -half, drop),
            self.frame.world_point(half, -half, drop),
            self.frame.world_point(half, half, drop),
            self.frame.world_point(-half, half, drop),
        ]
    }

    /// Corners of the plate's bottom face, same ordering.
    pub fn bottom_corners(&self) -> [Point3d; 4] {
        let half = self.size / 2.0;
        let drop = -(self.drop + self.thickness);
        [
            self.frame.world_point(-half, -half, drop),
            self.frame.world_point(half, -half, drop),
            self.frame.world_point(half, half, drop),
            self.frame.world_point(-half, half, drop),
        ]
    }
}

impl Placeable for KeyPlate {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        KeyPlate { frame, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyGeometry;

    #[test]
    fn top_corners_sit_below_the_keycap_top() {
        let keys = KeyGeometry::default();
        let switch = KeySwitch::new(Frame::canonical());
        let plate = switch.plate(&keys);
        for corner in plate.top_corners() {
            assert!((corner.z().as_mm() - -keys.keycap_height.as_mm()).abs() < 1e-9);
        }
    }

    #[test]
    fn corners_span_the_plate_size() {
        let keys = KeyGeometry::default();
        let plate = KeySwitch::new(Frame::canonical()).plate(&keys);
        let [fl, fr, _, bl] = plate.top_corners();
        assert!(((fr - fl).norm().as_mm() - keys.plate_size.as_mm()).abs() < 1e-9);
        assert!(((bl - fl).norm().as_mm() - keys.plate_size.as_mm()).abs() < 1e-9);
    }
}
