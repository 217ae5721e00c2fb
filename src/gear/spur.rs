//! Spur and internal gears with the meshing-pair solver
//!
//! Derived circles are never stored: pitch, addendum, dedendum and base
//! diameters are pure functions of module and tooth count. Two gears mesh
//! only when they share a module; the center distance is then
//! `module * (za + zb) / 2` for an external pair and
//! `module * (za − zb) / 2` for a pinion inside a ring gear.

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU};
use crate::frame::{Frame, Placeable};
use crate::gear::involute::tooth_outline;
use crate::gear::PRESSURE_ANGLE;
use crate::line::Line3d;
use crate::scad::Scad;
use crate::scalar::{Angle, Length};
use crate::vector::Vec3;
use tracing::debug;

/// An external involute spur gear.
#[derive(Debug, Clone, PartialEq)]
pub struct SpurGear {
    module: Length,
    tooth_count: u32,
    thickness: Length,
    frame: Frame,
}

impl SpurGear {
    pub fn new(module: Length, tooth_count: u32, thickness: Length, frame: Frame) -> Self {
        assert!(module > Length::ZERO, "gear module must be positive");
        assert!(tooth_count >= 4, "need at least 4 teeth for a valid gear");
        SpurGear {
            module,
            tooth_count,
            thickness,
            frame,
        }
    }

    pub fn module(&self) -> Length {
        self.module
    }

    pub fn tooth_count(&self) -> u32 {
        self.tooth_count
    }

    pub fn thickness(&self) -> Length {
        self.thickness
    }

    pub fn pitch_diameter(&self) -> Length {
        self.module * self.tooth_count as Real
    }

    pub fn addendum_diameter(&self) -> Length {
        self.pitch_diameter() + self.module * 2.0
    }

    pub fn dedendum_diameter(&self) -> Length {
        self.pitch_diameter() - self.module * 2.5
    }

    pub fn base_diameter(&self) -> Length {
        self.pitch_diameter() * PRESSURE_ANGLE.cos()
    }

    /// The 2D tooth outline in the gear plane, millimeter coordinates.
    pub fn profile(&self, segments_per_flank: usize) -> Vec<[Real; 2]> {
        tooth_outline(
            self.module.as_mm(),
            self.tooth_count,
            PRESSURE_ANGLE,
            self.addendum_diameter().as_mm() / 2.0,
            self.dedendum_diameter().as_mm() / 2.0,
            segments_per_flank,
        )
    }

    /// Solid gear body, extruded symmetrically about the reference point.
    pub fn solid(&self, segments_per_flank: usize) -> Scad {
        let body = Scad::polygon(self.profile(segments_per_flank))
            .linear_extrude(self.thickness, 1.0)
            .translated(Vec3::new(
                Length::ZERO,
                Length::ZERO,
                -self.thickness / 2.0,
            ));
        self.frame.place(body)
    }

    /// Center distance to a correctly meshed partner.
    pub fn center_distance_to(&self, other: &SpurGear) -> Result<Length, GeometryError> {
        check_modules(self.module, other.module)?;
        Ok(self.module * ((self.tooth_count + other.tooth_count) as Real) / 2.0)
    }

    /// Place a meshing partner gear with `partner_teeth` teeth, offset
    /// from this gear toward `toward` (projected into the gear plane).
    ///
    /// The partner shares module, thickness and axis direction; it is
    /// rotated half a tooth about its own axis so teeth interleave.
    pub fn meshed_partner(
        &self,
        partner_teeth: u32,
        toward: &Vec3,
    ) -> Result<SpurGear, GeometryError> {
        let partner = SpurGear::new(self.module, partner_teeth, self.thickness, self.frame);
        let distance = self.center_distance_to(&partner)?;
        let direction = project_into_gear_plane(toward, &self.frame)?;
        let reference = self.frame.reference_point() + direction * distance;

        let partner = partner.with_frame(self.frame.translated(reference - self.frame.reference_point()));
        let axis = Line3d::new(partner.reference_point(), partner.top())?;
        let half_tooth = Angle::from_radians(TAU / (2.0 * partner_teeth as Real));
        let partner = partner.rotated_about(&axis, half_tooth);

        debug!(
            module = self.module.as_mm(),
            teeth_a = self.tooth_count,
            teeth_b = partner_teeth,
            center_distance = distance.as_mm(),
            "meshed external gear pair"
        );
        Ok(partner)
    }
}

impl Placeable for SpurGear {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        SpurGear { frame, ..self.clone() }
    }
}

/// An internal (ring) gear: teeth point inward and the outline is
/// consumed by boolean subtraction from the knob or housing body, not by
/// union.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalGear {
    module: Length,
    tooth_count: u32,
    thickness: Length,
    frame: Frame,
}

impl InternalGear {
    pub fn new(module: Length, tooth_count: u32, thickness: Length, frame: Frame) -> Self {
        assert!(module > Length::ZERO, "gear module must be positive");
        assert!(tooth_count >= 4, "need at least 4 teeth for a valid gear");
        InternalGear {
            module,
            tooth_count,
            thickness,
            frame,
        }
    }

    pub fn module(&self) -> Length {
        self.module
    }

    pub fn tooth_count(&self) -> u32 {
        self.tooth_count
    }

    pub fn thickness(&self) -> Length {
        self.thickness
    }

    pub fn pitch_diameter(&self) -> Length {
        self.module * self.tooth_count as Real
    }

    /// The cutting outline: the external profile with addendum and
    /// dedendum heights swapped, so subtracting it leaves inward teeth
    /// with the right clearances.
    pub fn cut_profile(&self, segments_per_flank: usize) -> Vec<[Real; 2]> {
        let pitch_radius = self.pitch_diameter().as_mm() / 2.0;
        tooth_outline(
            self.module.as_mm(),
            self.tooth_count,
            PRESSURE_ANGLE,
            pitch_radius + 1.25 * self.module.as_mm(),
            pitch_radius - self.module.as_mm(),
            segments_per_flank,
        )
    }

    /// The tooth-space cavity to subtract from a host solid. Slightly
    /// over-extruded so the boolean never leaves a zero-thickness skin.
    pub fn cut_solid(&self, segments_per_flank: usize) -> Scad {
        let overcut = Length::mm(0.2);
        let body = Scad::polygon(self.cut_profile(segments_per_flank))
            .linear_extrude(self.thickness + overcut * 2.0, 1.0)
            .translated(Vec3::new(
                Length::ZERO,
                Length::ZERO,
                -(self.thickness / 2.0) - overcut,
            ));
        self.frame.place(body)
    }

    /// Center distance to a pinion running inside this ring.
    pub fn center_distance_to(&self, pinion: &SpurGear) -> Result<Length, GeometryError> {
        check_modules(self.module, pinion.module())?;
        assert!(
            pinion.tooth_count() < self.tooth_count,
            "pinion must be smaller than its ring gear"
        );
        Ok(self.module * ((self.tooth_count - pinion.tooth_count()) as Real) / 2.0)
    }

    /// Place a pinion meshing inside this ring gear, offset toward
    /// `toward` in the gear plane.
    pub fn meshed_pinion(
        &self,
        pinion_teeth: u32,
        toward: &Vec3,
    ) -> Result<SpurGear, GeometryError> {
        let pinion = SpurGear::new(self.module, pinion_teeth, self.thickness, self.frame);
        let distance = self.center_distance_to(&pinion)?;
        let direction = project_into_gear_plane(toward, &self.frame)?;
        let reference = self.frame.reference_point() + direction * distance;

        debug!(
            module = self.module.as_mm(),
            ring_teeth = self.tooth_count,
            pinion_teeth,
            center_distance = distance.as_mm(),
            "meshed internal gear pair"
        );
        Ok(pinion.with_frame(self.frame.translated(reference - self.frame.reference_point())))
    }
}

impl Placeable for InternalGear {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        InternalGear { frame, ..self.clone() }
    }
}

fn check_modules(a: Length, b: Length) -> Result<(), GeometryError> {
    if (a - b).abs() > Length::mm(crate::float_types::LENGTH_EPSILON) {
        return Err(GeometryError::ModuleMismatch {
            module_a: a.as_mm(),
            module_b: b.as_mm(),
        });
    }
    Ok(())
}

/// Drop the axis component of `toward` so the meshing offset stays in the
/// gear plane; errors if `toward` is parallel to the gear axis.
fn project_into_gear_plane(toward: &Vec3, frame: &Frame) -> Result<Vec3, GeometryError> {
    let top = frame.top();
    let in_plane = *toward - top * Length::mm(toward.dot(&top));
    in_plane.to_unit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3d;

    fn gear_frame() -> Frame {
        Frame::new(Point3d::origin(), -Vec3::unit_y(), -Vec3::unit_z()).unwrap()
    }

    #[test]
    fn derived_diameters_follow_module_and_teeth() {
        let gear = SpurGear::new(Length::mm(1.5), 17, Length::mm(4.0), gear_frame());
        assert!((gear.pitch_diameter().as_mm() - 25.5).abs() < 1e-12);
        assert!((gear.addendum_diameter().as_mm() - 28.5).abs() < 1e-12);
        assert!((gear.dedendum_diameter().as_mm() - 21.75).abs() < 1e-12);
        assert!((gear.base_diameter().as_mm() - 25.5 * PRESSURE_ANGLE.cos()).abs() < 1e-12);
    }

    #[test]
    fn mismatched_modules_refuse_to_mesh() {
        let a = SpurGear::new(Length::mm(1.5), 17, Length::mm(4.0), gear_frame());
        let b = SpurGear::new(Length::mm(2.0), 11, Length::mm(4.0), gear_frame());
        assert!(matches!(
            a.center_distance_to(&b),
            Err(GeometryError::ModuleMismatch { .. })
        ));
    }

    #[test]
    fn meshed_partner_sits_at_the_analytic_center_distance() {
        let a = SpurGear::new(Length::mm(1.5), 17, Length::mm(4.0), gear_frame());
        let b = a.meshed_partner(11, &Vec3::unit_x()).unwrap();
        let distance = b.reference_point().distance_to(&a.reference_point());
        assert!((distance.as_mm() - 21.0).abs() < 1e-6);
    }

    #[test]
    fn pinion_offset_ignores_axis_component() {
        let ring = InternalGear::new(Length::mm(1.0), 36, Length::mm(5.0), gear_frame());
        // Toward vector deliberately leans along the gear axis.
        let pinion = ring
            .meshed_pinion(12, &Vec3::from_mm(1.0, 0.0, 0.7))
            .unwrap();
        let offset = pinion.reference_point() - ring.reference_point();
        assert!(offset.z().as_mm().abs() < 1e-9);
        assert!((offset.norm().as_mm() - 12.0).abs() < 1e-9);
    }
}
