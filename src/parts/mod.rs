//! Concrete rigid parts
//!
//! Each part wraps one [`Frame`](crate::frame::Frame) and builds its
//! solids in canonical space, letting the frame carry them into case
//! space.

pub mod encoder;
pub mod switch;

pub use encoder::{BackEncoderAssembly, KnobAssembly, RotaryEncoder};
pub use switch::{KeyPlate, KeySwitch};
