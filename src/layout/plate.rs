//! The alphanumeric plate
//!
//! Columns are independently parameterized (radius, stagger, twist) but
//! composed under one shared frame; the plate owns the transform that
//! positions the whole finger cluster in case space.

use crate::config::KeyGeometry;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::frame::{Frame, Placeable};
use crate::layout::Column;
use crate::parts::KeySwitch;
use crate::point::Point3d;
use crate::scad::Scad;
use crate::vector::Vec3;

/// The finger-key cluster: one column per entry in the configuration's
/// column table, spread along the plate's right direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphanumericPlate {
    frame: Frame,
}

impl AlphanumericPlate {
    pub fn new(frame: Frame) -> Self {
        AlphanumericPlate { frame }
    }

    /// Derive the per-finger columns from the configuration table.
    pub fn columns(&self, keys: &KeyGeometry) -> Vec<Column> {
        keys.columns
            .iter()
            .enumerate()
            .map(|(i, params)| {
                let offset = self.frame.right() * (keys.key_pitch * i as Real)
                    + self.frame.back() * params.back_offset;
                Column::new(
                    self.frame.translated(offset),
                    params.radius,
                    params.twist,
                    params.layer_offset,
                )
            })
            .collect()
    }

    /// All switches of the plate, column by column, rows back to front.
    pub fn key_switches(&self, keys: &KeyGeometry) -> Result<Vec<KeySwitch>, GeometryError> {
        let mut switches = Vec::new();
        for column in self.columns(keys) {
            switches.extend(column.key_switches(keys)?);
        }
        Ok(switches)
    }

    /// Top-face corner points of every key plate: the input point set for
    /// the case-wall boundary search.
    pub fn corner_points(&self, keys: &KeyGeometry) -> Result<Vec<Point3d>, GeometryError> {
        let mut points = Vec::new();
        for switch in self.key_switches(keys)? {
            points.extend(switch.plate(keys).top_corners());
        }
        Ok(points)
    }

    /// Top directions of every switch, paired with `corner_points` for
    /// tilt-sum wall costs.
    pub fn key_orientations(&self, keys: &KeyGeometry) -> Result<Vec<Vec3>, GeometryError> {
        Ok(self
            .key_switches(keys)?
            .iter()
            .map(|s| s.top())
            .collect())
    }

    /// The plate solid: every key plate, with hull bridges along each
    /// column and between neighboring columns so the curved surfaces
    /// close into one shell.
    pub fn solid(&self, keys: &KeyGeometry) -> Result<Scad, GeometryError> {
        let columns = self.columns(keys);
        let mut parts = Vec::new();

        let mut per_column = Vec::new();
        for column in &columns {
            let plates: Vec<Scad> = column
                .key_switches(keys)?
                .iter()
                .map(|s| s.plate(keys).solid())
                .collect();
            for pair in plates.windows(2) {
                parts.push(Scad::hull(pair.to_vec()));
            }
            per_column.push(plates);
        }

        // Bridge the arc rows of neighboring columns; the scooped reach
        // keys diverge too much to bridge usefully.
        for pair in per_column.windows(2) {
            for row in 0..3 {
                parts.push(Scad::hull(vec![pair[0][row].clone(), pair[1][row].clone()]));
            }
        }

        Ok(Scad::union(parts))
    }

    /// Every switch cutout, for subtraction after the shell is built.
    pub fn cutouts(&self, keys: &KeyGeometry) -> Result<Scad, GeometryError> {
        Ok(Scad::union(
            self.key_switches(keys)?
                .iter()
                .map(|s| s.cutout(keys))
                .collect(),
        ))
    }
}

impl Placeable for AlphanumericPlate {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        AlphanumericPlate { frame }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyGeometry;

    fn plate() -> AlphanumericPlate {
        AlphanumericPlate::new(
            Frame::new(Point3d::origin(), -Vec3::unit_y(), -Vec3::unit_z()).unwrap(),
        )
    }

    #[test]
    fn one_column_per_table_entry() {
        let keys = KeyGeometry::default();
        assert_eq!(plate().columns(&keys).len(), keys.columns.len());
        assert_eq!(
            plate().key_switches(&keys).unwrap().len(),
            keys.columns.len() * 4
        );
    }

    #[test]
    fn columns_spread_along_the_right_direction() {
        let keys = KeyGeometry::default();
        let columns = plate().columns(&keys);
        let first = columns[0].reference_point();
        let last = columns[keys.columns.len() - 1].reference_point();
        let spread = (last - first).x();
        let expected = keys.key_pitch * (keys.columns.len() - 1) as Real;
        assert!((spread.as_mm() - expected.as_mm()).abs() < 1e-9);
    }

    #[test]
    fn four_corners_per_switch() {
        let keys = KeyGeometry::default();
        let corners = plate().corner_points(&keys).unwrap();
        assert_eq!(corners.len(), keys.columns.len() * 4 * 4);
    }
}
