//! Involute gear geometry
//!
//! Spur gears, internal (ring) gears and bevel gears, all referenced to a
//! [`Frame`](crate::frame::Frame): the gear plane is the frame's
//! right/back plane and the rotation axis is the top direction. Tooth
//! profiles are involute curves with standard ISO 21771 proportions and a
//! fixed 20° pressure angle.

pub mod bevel;
pub mod involute;
pub mod spur;

pub use bevel::{BevelGear, BevelGearPair};
pub use spur::{InternalGear, SpurGear};

use crate::scalar::Angle;

/// Standard pressure angle shared by every gear in the assembly.
pub const PRESSURE_ANGLE: Angle = Angle::from_radians(20.0 * crate::float_types::PI / 180.0);

/// Flank tessellation used when no override is given.
pub const DEFAULT_SEGMENTS_PER_FLANK: usize = 12;
