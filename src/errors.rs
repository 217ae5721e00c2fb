//! Geometric precondition errors
//!
//! Every variant indicates a programming or parameter error, never a
//! recoverable runtime condition: generation aborts with enough context
//! to locate the offending part or constraint.

use crate::float_types::Real;

/// All the geometric preconditions we might violate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Tried to normalize or orient along a (near-)zero vector
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,

    /// A rigid part's front/bottom vectors are not 90° apart
    #[error("front/bottom vectors are {angle_deg:.4}° apart, expected 90° ± 0.01°")]
    NonOrthogonalFrame { angle_deg: Real },

    /// Two planes with (anti-)parallel normals have no unique
    /// intersection line
    #[error("planes are parallel, no intersection line")]
    ParallelPlanes,

    /// A line parallel to a plane has no unique intersection point
    #[error("line is parallel to plane, no intersection point")]
    LineParallelToPlane,

    /// Plane ordering is only defined for planes sharing a normal
    /// direction
    #[error("plane normals differ by {angle_deg:.4}°, ordering requires shared normals")]
    MismatchedNormals { angle_deg: Real },

    /// Two gears can only mesh when they share the same module
    #[error("meshing gears with modules {module_a}mm and {module_b}mm")]
    ModuleMismatch { module_a: Real, module_b: Real },

    /// The extremal-plane search exhausted every candidate pair
    #[error("none of {candidates} candidate planes over {points} points supports the whole set")]
    NoSupportingPlane { points: usize, candidates: usize },
}
