//! Generation configuration
//!
//! Everything the geometry layer reads as a parameter lives here and is
//! passed down explicitly; nothing reaches for ambient context. The
//! defaults carry the empirically tuned values for the reference
//! keyboard — the row-4 tilt, the thumb rotation chain and the column
//! table have no derivable formula and are preserved as data.

use crate::scalar::{Angle, Length};

/// Printer-dependent manufacturing tolerances. These vary per machine
/// and material, which is why they are configuration, not constants.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterLimits {
    /// Walls thinner than this do not survive printing.
    pub wall_thickness_min: Length,
    /// Smallest positive feature the printer resolves.
    pub feature_size_min: Length,
    /// Clearance added between parts meant to move against each other.
    pub clearance_margin: Length,
    /// Expected dimensional error of printed parts.
    pub dimensional_error: Length,
}

impl Default for PrinterLimits {
    fn default() -> Self {
        PrinterLimits {
            wall_thickness_min: Length::mm(2.0),
            feature_size_min: Length::mm(0.8),
            clearance_margin: Length::mm(0.3),
            dimensional_error: Length::mm(0.15),
        }
    }
}

/// Per-finger column parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnParams {
    /// Curvature radius of the column arc.
    pub radius: Length,
    /// Shift of the whole column along the plate's back direction.
    pub back_offset: Length,
    /// Shift of the whole column along the plate's bottom direction
    /// (finger-length stagger).
    pub layer_offset: Length,
    /// Fan/tent rotation about the column edge; positive twists about
    /// the left edge, negative about the right edge.
    pub twist: Angle,
}

/// Key switch, plate and layout geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyGeometry {
    /// Column-to-column spacing.
    pub key_pitch: Length,
    /// Row-to-row spacing along a column.
    pub row_pitch: Length,
    /// MX switch cutout, square.
    pub switch_hole_size: Length,
    /// Depth of the switch cutout through the plate.
    pub plate_thickness: Length,
    /// Side length of the per-key mounting plate.
    pub plate_size: Length,
    /// Height of the keycap top above the plate top.
    pub keycap_height: Length,
    /// Extra drop applied to the scooped reach key before tilting.
    pub row4_depth_offset: Length,
    /// Tilt of the scooped reach key. Empirical, do not re-derive.
    pub row4_tilt: Angle,
    /// One entry per finger column, pinky to inner index.
    pub columns: Vec<ColumnParams>,
    /// Rotation chain fanning the thumb keys out. Empirical.
    pub thumb_rotations: [Angle; 3],
    /// Extra spacing between neighboring thumb keys.
    pub thumb_spread: Length,
}

impl Default for KeyGeometry {
    fn default() -> Self {
        KeyGeometry {
            key_pitch: Length::mm(19.05),
            row_pitch: Length::mm(19.05),
            switch_hole_size: Length::mm(14.0),
            plate_thickness: Length::mm(3.0),
            plate_size: Length::mm(18.0),
            keycap_height: Length::mm(6.5),
            row4_depth_offset: Length::mm(3.0),
            row4_tilt: Angle::from_degrees(-83.0),
            columns: vec![
                // pinky outer
                ColumnParams {
                    radius: Length::mm(54.0),
                    back_offset: Length::mm(-6.0),
                    layer_offset: Length::mm(7.0),
                    twist: Angle::from_degrees(-10.0),
                },
                // pinky
                ColumnParams {
                    radius: Length::mm(52.0),
                    back_offset: Length::mm(-4.0),
                    layer_offset: Length::mm(5.0),
                    twist: Angle::from_degrees(-6.0),
                },
                // ring
                ColumnParams {
                    radius: Length::mm(46.0),
                    back_offset: Length::mm(1.0),
                    layer_offset: Length::mm(1.5),
                    twist: Angle::from_degrees(-2.0),
                },
                // middle
                ColumnParams {
                    radius: Length::mm(44.0),
                    back_offset: Length::mm(2.0),
                    layer_offset: Length::ZERO,
                    twist: Angle::ZERO,
                },
                // index
                ColumnParams {
                    radius: Length::mm(48.0),
                    back_offset: Length::ZERO,
                    layer_offset: Length::mm(2.0),
                    twist: Angle::from_degrees(4.0),
                },
                // inner index
                ColumnParams {
                    radius: Length::mm(50.0),
                    back_offset: Length::mm(-2.0),
                    layer_offset: Length::mm(4.0),
                    twist: Angle::from_degrees(8.0),
                },
            ],
            thumb_rotations: [
                Angle::from_degrees(69.0),
                Angle::from_degrees(65.0),
                Angle::from_degrees(14.0),
            ],
            thumb_spread: Length::mm(1.0),
        }
    }
}

/// EC11-style rotary encoder and knob drive-train dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderSpec {
    pub body_size: Length,
    pub body_height: Length,
    pub shaft_diameter: Length,
    pub shaft_length: Length,
    pub knob_diameter: Length,
    pub knob_height: Length,
    /// Shared module of the whole knob drive train.
    pub gear_module: Length,
    /// Internal ring gear inside the knob rim.
    pub ring_teeth: u32,
    /// Pinion on the encoder shaft, meshing inside the ring.
    pub pinion_teeth: u32,
    /// External transfer pair between encoder and knob axis.
    pub drive_teeth: u32,
    pub driven_teeth: u32,
    pub gear_thickness: Length,
}

impl Default for EncoderSpec {
    fn default() -> Self {
        EncoderSpec {
            body_size: Length::mm(12.4),
            body_height: Length::mm(6.5),
            shaft_diameter: Length::mm(6.0),
            shaft_length: Length::mm(15.0),
            knob_diameter: Length::mm(46.0),
            knob_height: Length::mm(14.0),
            gear_module: Length::mm(1.5),
            ring_teeth: 24,
            pinion_teeth: 12,
            drive_teeth: 17,
            driven_teeth: 11,
            gear_thickness: Length::mm(4.0),
        }
    }
}

/// Optional sub-assemblies gated from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Features {
    pub wrist_rest: bool,
    pub back_encoder: bool,
}

/// Everything a generation run needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub printer: PrinterLimits,
    pub keys: KeyGeometry,
    pub encoder: EncoderSpec,
    pub features: Features,
}
