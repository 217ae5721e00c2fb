//! Parametric solid-geometry generator for a gear-driven split
//! mechanical keyboard.
//!
//! The crate computes 3D placements of key switches, rotary-encoder
//! knobs and involute/bevel gears, composes them into a CSG tree and
//! serializes the tree as an OpenSCAD scene for an external renderer.
//! The load-bearing layers are the immutable transform model
//! ([`scalar`], [`vector`], [`point`], [`line`], [`plane`], [`frame`])
//! and the supporting-plane boundary search ([`boundary`]) that derives
//! case walls from key geometry instead of hand-drawn outlines.
//!
//! Everything is a pure function of the configuration: the whole model
//! is rebuilt from [`config::Config`] on every run and identical inputs
//! serialize to byte-identical scenes.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod boundary;
pub mod case;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod frame;
pub mod gear;
pub mod layout;
pub mod line;
pub mod parts;
pub mod plane;
pub mod point;
pub mod scad;
pub mod scalar;
pub mod vector;

pub use case::Case;
pub use config::Config;
pub use errors::GeometryError;
pub use frame::{Frame, Placeable};
pub use scad::Scad;
