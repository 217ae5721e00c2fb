//! Bevel gears and the pitch-cone pair solver
//!
//! The numerically delicate corner of the gear layer. A bevel pair is
//! solved from the desired operating angle and the two tooth counts: the
//! pitch-cone angles must be complementary with respect to the operating
//! angle and both teeth reference the same cone apex, otherwise the pair
//! only appears to mesh while the contact geometry is wrong.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::frame::{Frame, Placeable};
use crate::gear::involute::tooth_outline;
use crate::gear::PRESSURE_ANGLE;
use crate::line::Line3d;
use crate::scad::Scad;
use crate::scalar::{Angle, Length};
use tracing::debug;

/// One involute bevel gear referenced to its pitch cone.
#[derive(Debug, Clone, PartialEq)]
pub struct BevelGear {
    module: Length,
    tooth_count: u32,
    pitch_cone_angle: Angle,
    /// Tooth width measured along the cone surface.
    thickness: Length,
    frame: Frame,
}

impl BevelGear {
    pub fn module(&self) -> Length {
        self.module
    }

    pub fn tooth_count(&self) -> u32 {
        self.tooth_count
    }

    pub fn pitch_cone_angle(&self) -> Angle {
        self.pitch_cone_angle
    }

    pub fn thickness(&self) -> Length {
        self.thickness
    }

    pub fn pitch_diameter(&self) -> Length {
        self.module * self.tooth_count as Real
    }

    /// Distance from the pitch circle to the cone apex, measured along
    /// the cone surface.
    pub fn cone_distance(&self) -> Length {
        self.pitch_diameter() / (2.0 * self.pitch_cone_angle.sin())
    }

    /// The shared apex of the pitch cone, on the gear axis above the
    /// reference point.
    pub fn apex(&self) -> crate::point::Point3d {
        let height = self.pitch_diameter() / (2.0 * self.pitch_cone_angle.tan());
        self.frame.reference_point() + self.frame.top() * height
    }

    /// Solid body: the tooth outline extruded toward the apex with a
    /// proportional taper, so tooth cross sections shrink linearly along
    /// the cone as involute bevel teeth do.
    pub fn solid(&self, segments_per_flank: usize) -> Scad {
        let pitch_radius = self.pitch_diameter().as_mm() / 2.0;
        let outline = tooth_outline(
            self.module.as_mm(),
            self.tooth_count,
            PRESSURE_ANGLE,
            pitch_radius + self.module.as_mm(),
            pitch_radius - 1.25 * self.module.as_mm(),
            segments_per_flank,
        );
        let cone_distance = self.cone_distance();
        let taper = (cone_distance - self.thickness) / cone_distance;
        // Axial height covered by `thickness` of cone surface.
        let height = Length::mm(self.thickness.as_mm() * self.pitch_cone_angle.cos());
        let body = Scad::polygon(outline).linear_extrude(height, taper);
        self.frame.place(body)
    }
}

impl Placeable for BevelGear {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        BevelGear { frame, ..self.clone() }
    }
}

/// A solved meshing pair of bevel gears.
#[derive(Debug, Clone, PartialEq)]
pub struct BevelGearPair {
    pub gear_a: BevelGear,
    pub gear_b: BevelGear,
    operating_angle: Angle,
}

impl BevelGearPair {
    /// Solve a meshing pair: gear A at `frame`, gear B rotated off A's
    /// axis by `operating_angle` (typically 90°).
    ///
    /// Pitch-cone angle of gear A follows
    /// `atan(sin Σ / (zb/za + cos Σ))`; gear B takes the complement
    /// `Σ − δa`. Tooth thickness is clamped to the smaller of a third of
    /// the outer cone distance and ten modules, so teeth cannot
    /// degenerate on small gears. Gear B is translated along the shared
    /// axis until both cone apexes coincide, then rotated about the apex
    /// by the operating angle.
    pub fn create(
        module: Length,
        teeth_a: u32,
        teeth_b: u32,
        operating_angle: Angle,
        frame: Frame,
    ) -> Result<Self, GeometryError> {
        assert!(module > Length::ZERO, "gear module must be positive");
        assert!(teeth_a >= 4 && teeth_b >= 4, "need at least 4 teeth for a valid gear");

        let ratio = teeth_b as Real / teeth_a as Real;
        let cone_a = Angle::atan(operating_angle.sin() / (ratio + operating_angle.cos()));
        let cone_b = operating_angle - cone_a;

        let pitch_radius_a = module * teeth_a as Real / 2.0;
        let pitch_radius_b = module * teeth_b as Real / 2.0;
        let cone_distance = pitch_radius_a / cone_a.sin();
        let thickness = (cone_distance / 3.0).min(module * 10.0);

        let gear_a = BevelGear {
            module,
            tooth_count: teeth_a,
            pitch_cone_angle: cone_a,
            thickness,
            frame,
        };

        // Gear B starts coaxial with A, shifted so the apex heights of
        // the two pitch cones coincide on the shared axis.
        let apex = gear_a.apex();
        let apex_height_b = pitch_radius_b * (1.0 / cone_b.tan());
        let coaxial = frame.translated(apex - frame.top() * apex_height_b - frame.reference_point());

        // Swing gear B off the shared axis about the apex.
        let swing_axis = Line3d::new(apex, frame.right())?;
        let gear_b = BevelGear {
            module,
            tooth_count: teeth_b,
            pitch_cone_angle: cone_b,
            thickness,
            frame: coaxial.rotated_about(&swing_axis, operating_angle),
        };

        debug!(
            module = module.as_mm(),
            teeth_a,
            teeth_b,
            operating_angle_deg = operating_angle.as_degrees(),
            cone_a_deg = cone_a.as_degrees(),
            cone_b_deg = cone_b.as_degrees(),
            thickness = thickness.as_mm(),
            "solved bevel gear pair"
        );

        Ok(BevelGearPair {
            gear_a,
            gear_b,
            operating_angle,
        })
    }

    pub fn operating_angle(&self) -> Angle {
        self.operating_angle
    }

    /// Both gear solids as one union.
    pub fn solid(&self, segments_per_flank: usize) -> Scad {
        Scad::union(vec![
            self.gear_a.solid(segments_per_flank),
            self.gear_b.solid(segments_per_flank),
        ])
    }
}
