//! CSG tree composition
//!
//! The geometry layer emits declarative solid-primitive requests (cube,
//! cylinder, sphere, polygon + linear-extrude) combined through
//! union/difference/intersection/hull/minkowski nodes. The tree is never
//! evaluated here: the external renderer performs the boolean work, this
//! module only guarantees well-formed, non-degenerate primitives and a
//! deterministic serialization (see [`writer`]).

pub mod writer;

use crate::float_types::Real;
use crate::scalar::{Angle, Length};
use crate::vector::Vec3;

/// A constructive solid geometry tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scad {
    Cube {
        size: [Real; 3],
        center: bool,
    },
    Cylinder {
        height: Real,
        bottom_radius: Real,
        top_radius: Real,
        center: bool,
    },
    Sphere {
        radius: Real,
    },
    /// A closed 2D outline in the XY plane, millimeter coordinates.
    Polygon {
        points: Vec<[Real; 2]>,
    },
    /// Extrude a 2D child along +Z, optionally tapering by `scale`.
    LinearExtrude {
        height: Real,
        scale: Real,
        child: Box<Scad>,
    },
    Translate {
        offset: [Real; 3],
        child: Box<Scad>,
    },
    /// Rotation by `angle_deg` about `axis` through the origin.
    Rotate {
        angle_deg: Real,
        axis: [Real; 3],
        child: Box<Scad>,
    },
    Union {
        children: Vec<Scad>,
    },
    Difference {
        children: Vec<Scad>,
    },
    Intersection {
        children: Vec<Scad>,
    },
    Hull {
        children: Vec<Scad>,
    },
    Minkowski {
        children: Vec<Scad>,
    },
}

impl Scad {
    /// Axis-aligned cuboid. `center` puts the centroid at the origin,
    /// otherwise the cuboid spans the positive octant.
    pub fn cube(width: Length, depth: Length, height: Length, center: bool) -> Scad {
        debug_assert!(
            width > Length::ZERO && depth > Length::ZERO && height > Length::ZERO,
            "degenerate cube"
        );
        Scad::Cube {
            size: [width.as_mm(), depth.as_mm(), height.as_mm()],
            center,
        }
    }

    /// Circular cylinder along +Z.
    pub fn cylinder(height: Length, radius: Length, center: bool) -> Scad {
        debug_assert!(height > Length::ZERO && radius > Length::ZERO, "degenerate cylinder");
        Scad::Cylinder {
            height: height.as_mm(),
            bottom_radius: radius.as_mm(),
            top_radius: radius.as_mm(),
            center,
        }
    }

    /// Truncated cone along +Z.
    pub fn cone(height: Length, bottom_radius: Length, top_radius: Length, center: bool) -> Scad {
        debug_assert!(height > Length::ZERO, "degenerate cone");
        Scad::Cylinder {
            height: height.as_mm(),
            bottom_radius: bottom_radius.as_mm(),
            top_radius: top_radius.as_mm(),
            center,
        }
    }

    pub fn sphere(radius: Length) -> Scad {
        debug_assert!(radius > Length::ZERO, "degenerate sphere");
        Scad::Sphere {
            radius: radius.as_mm(),
        }
    }

    /// Closed 2D outline; the caller supplies millimeter coordinates and
    /// is responsible for CCW winding.
    pub fn polygon(points: Vec<[Real; 2]>) -> Scad {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 points");
        Scad::Polygon { points }
    }

    /// Extrude this 2D shape `height` along +Z, scaling the top cross
    /// section by `scale` (1.0 = prism, <1.0 tapers toward a cone).
    pub fn linear_extrude(self, height: Length, scale: Real) -> Scad {
        Scad::LinearExtrude {
            height: height.as_mm(),
            scale,
            child: Box::new(self),
        }
    }

    pub fn translated(self, offset: Vec3) -> Scad {
        Scad::Translate {
            offset: [
                offset.x().as_mm(),
                offset.y().as_mm(),
                offset.z().as_mm(),
            ],
            child: Box::new(self),
        }
    }

    /// Rotate about an axis through the origin.
    pub fn rotated(self, angle: Angle, axis: Vec3) -> Scad {
        Scad::Rotate {
            angle_deg: angle.as_degrees(),
            axis: [axis.x().as_mm(), axis.y().as_mm(), axis.z().as_mm()],
            child: Box::new(self),
        }
    }

    pub fn union(children: Vec<Scad>) -> Scad {
        Scad::Union { children }
    }

    /// First child minus all following children.
    pub fn difference(children: Vec<Scad>) -> Scad {
        Scad::Difference { children }
    }

    pub fn intersection(children: Vec<Scad>) -> Scad {
        Scad::Intersection { children }
    }

    pub fn hull(children: Vec<Scad>) -> Scad {
        Scad::Hull { children }
    }

    pub fn minkowski(children: Vec<Scad>) -> Scad {
        Scad::Minkowski { children }
    }

    /// This solid minus `other`.
    pub fn minus(self, other: Scad) -> Scad {
        match self {
            // Keep subtrahends flat so repeated subtraction reads linearly.
            Scad::Difference { mut children } => {
                children.push(other);
                Scad::Difference { children }
            },
            solid => Scad::Difference {
                children: vec![solid, other],
            },
        }
    }

    /// This solid unioned with `other`.
    pub fn plus(self, other: Scad) -> Scad {
        match self {
            Scad::Union { mut children } => {
                children.push(other);
                Scad::Union { children }
            },
            solid => Scad::Union {
                children: vec![solid, other],
            },
        }
    }
}
