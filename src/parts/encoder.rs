//! Rotary encoders, knobs and their gear trains
//!
//! Two assemblies consume the gear solvers. The top knob hides an
//! internal ring gear in its rim, driven by a pinion on the encoder
//! shaft. The optional back encoder exposes a knurled thumbwheel; a 90°
//! bevel pair turns the wheel's rotation onto a perpendicular axis and an
//! external spur pair offsets it onto the encoder shaft, clearing the
//! back wall.

use crate::config::EncoderSpec;
use crate::errors::GeometryError;
use crate::frame::{Frame, Placeable};
use crate::gear::{BevelGearPair, InternalGear, SpurGear};
use crate::scad::Scad;
use crate::scalar::{Angle, Length};
use crate::vector::Vec3;

/// An EC11-style rotary encoder, anchored at the center of its mounting
/// face; the shaft extends along the frame's top direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotaryEncoder {
    frame: Frame,
}

impl RotaryEncoder {
    pub fn new(frame: Frame) -> Self {
        RotaryEncoder { frame }
    }

    /// Body plus shaft, for clearance subtraction from the case.
    pub fn solid(&self, spec: &EncoderSpec) -> Scad {
        let body = Scad::cube(spec.body_size, spec.body_size, spec.body_height, true)
            .translated(Vec3::new(
                Length::ZERO,
                Length::ZERO,
                -spec.body_height / 2.0,
            ));
        let shaft = Scad::cylinder(spec.shaft_length, spec.shaft_diameter / 2.0, false);
        self.frame.place(body.plus(shaft))
    }
}

impl Placeable for RotaryEncoder {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        RotaryEncoder { frame }
    }
}

/// A knob whose rim carries an internal ring gear, with the matching
/// pinion and the encoder that drives it. Solved in place: the assembly
/// is rebuilt from its frame and spec rather than moved.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobAssembly {
    frame: Frame,
    spec: EncoderSpec,
    pub ring: InternalGear,
    pub pinion: SpurGear,
    pub encoder: RotaryEncoder,
}

impl KnobAssembly {
    /// Solve the knob gear train at `frame` (reference point = knob
    /// bottom center, top = knob axis).
    pub fn new(frame: Frame, spec: &EncoderSpec) -> Result<Self, GeometryError> {
        // Ring gear centered a little above the knob floor.
        let ring_frame =
            frame.translated(frame.top() * (spec.gear_thickness / 2.0 + Length::mm(1.5)));
        let ring = InternalGear::new(
            spec.gear_module,
            spec.ring_teeth,
            spec.gear_thickness,
            ring_frame,
        );
        // The pinion meshes inside the ring, offset toward the front.
        let pinion = ring.meshed_pinion(spec.pinion_teeth, &frame.front())?;
        // Encoder hangs below the pinion on the same axis.
        let encoder = RotaryEncoder::new(
            pinion
                .frame()
                .translated(frame.bottom() * (spec.shaft_length - spec.gear_thickness)),
        );
        Ok(KnobAssembly {
            frame,
            spec: spec.clone(),
            ring,
            pinion,
            encoder,
        })
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The knob body: knurled cylinder with the ring-gear cavity
    /// subtracted.
    pub fn knob_solid(&self, segments_per_flank: usize) -> Scad {
        let radius = self.spec.knob_diameter / 2.0;
        let mut body = Scad::cylinder(self.spec.knob_height, radius, false);

        // Knurling: shallow vertical grooves around the rim.
        let grooves = 24;
        let groove_radius = Length::mm(0.8);
        for i in 0..grooves {
            let angle = Angle::FULL_TURN * (i as f64 / grooves as f64);
            let groove =
                Scad::cylinder(self.spec.knob_height + Length::mm(0.4), groove_radius, false)
                    .translated(Vec3::new(radius, Length::ZERO, Length::mm(-0.2)))
                    .rotated(angle, Vec3::unit_z());
            body = body.minus(groove);
        }

        self.frame
            .place(body)
            .minus(self.ring.cut_solid(segments_per_flank))
    }

    /// Knob, pinion and encoder as one subtree.
    pub fn solid(&self, segments_per_flank: usize) -> Scad {
        Scad::union(vec![
            self.knob_solid(segments_per_flank),
            self.pinion.solid(segments_per_flank),
            self.encoder.solid(&self.spec),
        ])
    }
}

/// The back thumbwheel: bevel pair turning the wheel axis, then a spur
/// transfer pair onto the encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct BackEncoderAssembly {
    frame: Frame,
    spec: EncoderSpec,
    pub bevel: BevelGearPair,
    pub transfer_drive: SpurGear,
    pub transfer_driven: SpurGear,
    pub encoder: RotaryEncoder,
}

impl BackEncoderAssembly {
    /// Solve the back drive train at `frame` (reference point = wheel
    /// center, top = wheel axis).
    pub fn new(frame: Frame, spec: &EncoderSpec) -> Result<Self, GeometryError> {
        let bevel = BevelGearPair::create(
            spec.gear_module,
            spec.drive_teeth,
            spec.drive_teeth,
            Angle::QUARTER_TURN,
            frame,
        )?;

        // Transfer pair on the turned axis: the drive gear rides the
        // bevel wheel, the driven gear steps off toward the bevel
        // wheel's front to reach the encoder shaft.
        let turned = *bevel.gear_b.frame();
        let transfer_drive = SpurGear::new(
            spec.gear_module,
            spec.drive_teeth,
            spec.gear_thickness,
            turned.translated(turned.top() * spec.gear_thickness),
        );
        let transfer_driven = transfer_drive.meshed_partner(spec.driven_teeth, &turned.front())?;

        let encoder = RotaryEncoder::new(
            transfer_driven
                .frame()
                .translated(transfer_driven.bottom() * (spec.shaft_length - spec.gear_thickness)),
        );

        Ok(BackEncoderAssembly {
            frame,
            spec: spec.clone(),
            bevel,
            transfer_drive,
            transfer_driven,
            encoder,
        })
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The knurled thumbwheel on the wheel axis.
    pub fn wheel_solid(&self) -> Scad {
        let radius = self.spec.knob_diameter / 2.0;
        let width = self.spec.gear_thickness * 2.0;
        let mut wheel = Scad::cylinder(width, radius, true);
        let grooves = 32;
        for i in 0..grooves {
            let angle = Angle::FULL_TURN * (i as f64 / grooves as f64);
            let groove = Scad::cylinder(width + Length::mm(0.4), Length::mm(0.6), true)
                .translated(Vec3::new(radius, Length::ZERO, Length::ZERO))
                .rotated(angle, Vec3::unit_z());
            wheel = wheel.minus(groove);
        }
        self.frame.place(wheel)
    }

    pub fn solid(&self, segments_per_flank: usize) -> Scad {
        Scad::union(vec![
            self.wheel_solid(),
            self.bevel.solid(segments_per_flank),
            self.transfer_drive.solid(segments_per_flank),
            self.transfer_driven.solid(segments_per_flank),
            self.encoder.solid(&self.spec),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3d;

    fn upright_frame() -> Frame {
        Frame::new(Point3d::origin(), -Vec3::unit_y(), -Vec3::unit_z()).unwrap()
    }

    #[test]
    fn knob_pinion_meshes_inside_the_ring() {
        let spec = EncoderSpec::default();
        let knob = KnobAssembly::new(upright_frame(), &spec).unwrap();
        let distance = knob
            .pinion
            .reference_point()
            .distance_to(&knob.ring.reference_point());
        let expected =
            spec.gear_module.as_mm() * (spec.ring_teeth - spec.pinion_teeth) as f64 / 2.0;
        assert!((distance.as_mm() - expected).abs() < 1e-6);
    }

    #[test]
    fn back_encoder_turns_the_axis_by_ninety_degrees() {
        let spec = EncoderSpec::default();
        let assembly = BackEncoderAssembly::new(upright_frame(), &spec).unwrap();
        let angle = assembly
            .bevel
            .gear_a
            .top()
            .angle_between(&assembly.bevel.gear_b.top());
        assert!((angle.as_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn transfer_pair_keeps_parallel_axes() {
        let spec = EncoderSpec::default();
        let assembly = BackEncoderAssembly::new(upright_frame(), &spec).unwrap();
        let angle = assembly
            .transfer_drive
            .top()
            .angle_between(&assembly.transfer_driven.top());
        assert!(angle.as_degrees() < 1e-9);
    }
}
