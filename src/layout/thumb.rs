//! The thumb cluster
//!
//! Thumb keys fan out from the plate frame: each key is the previous one
//! swung about a vertical axis at its outer edge. The rotation chain is
//! empirically tuned for one hand and carried as opaque configuration
//! data.

use crate::config::KeyGeometry;
use crate::errors::GeometryError;
use crate::frame::{Frame, Placeable};
use crate::line::Line3d;
use crate::parts::KeySwitch;
use crate::point::Point3d;
use crate::scad::Scad;
use crate::vector::Vec3;

/// The thumb-key fan: one key per rotation-chain entry plus the anchor
/// key at the plate frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPlate {
    frame: Frame,
}

impl ThumbPlate {
    pub fn new(frame: Frame) -> Self {
        ThumbPlate { frame }
    }

    /// The fanned-out thumb switches, anchor key first.
    pub fn key_switches(&self, keys: &KeyGeometry) -> Result<Vec<KeySwitch>, GeometryError> {
        let mut frames = vec![self.frame];
        let mut current = self.frame;
        for rotation in keys.thumb_rotations {
            let pivot = current.reference_point()
                + current.right() * (keys.key_pitch / 2.0 + keys.thumb_spread);
            let axis = Line3d::new(pivot, current.top())?;
            current = current.rotated_about(&axis, rotation);
            frames.push(current);
        }
        Ok(frames.into_iter().map(KeySwitch::new).collect())
    }

    /// Top-face plate corners of the thumb keys, boundary-search input.
    pub fn corner_points(&self, keys: &KeyGeometry) -> Result<Vec<Point3d>, GeometryError> {
        let mut points = Vec::new();
        for switch in self.key_switches(keys)? {
            points.extend(switch.plate(keys).top_corners());
        }
        Ok(points)
    }

    pub fn key_orientations(&self, keys: &KeyGeometry) -> Result<Vec<Vec3>, GeometryError> {
        Ok(self
            .key_switches(keys)?
            .iter()
            .map(|s| s.top())
            .collect())
    }

    /// Hull-bridged fan of thumb key plates.
    pub fn solid(&self, keys: &KeyGeometry) -> Result<Scad, GeometryError> {
        let plates: Vec<Scad> = self
            .key_switches(keys)?
            .iter()
            .map(|s| s.plate(keys).solid())
            .collect();
        let mut parts = Vec::new();
        for pair in plates.windows(2) {
            parts.push(Scad::hull(pair.to_vec()));
        }
        Ok(Scad::union(parts))
    }

    pub fn cutouts(&self, keys: &KeyGeometry) -> Result<Scad, GeometryError> {
        Ok(Scad::union(
            self.key_switches(keys)?
                .iter()
                .map(|s| s.cutout(keys))
                .collect(),
        ))
    }
}

impl Placeable for ThumbPlate {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        ThumbPlate { frame }
    }
}
