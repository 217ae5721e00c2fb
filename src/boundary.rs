//! Extremal supporting-plane search
//!
//! Case walls are not drawn, they are derived: given the scattered corner
//! points of the key plates and an approximate orientation, find the
//! plane through two of the points that keeps every other point on its
//! negative side and minimizes an angular cost. The same search produces
//! the top wall, the front and back slopes, and the side walls — it is
//! implemented once here and parameterized by the cost function.
//!
//! The search is O(n²) over ordered point pairs with an O(n) half-space
//! filter per candidate; n is the handful of corners per wall, so this
//! comfortably stays exact rather than approximate.

use crate::errors::GeometryError;
use crate::float_types::{ANGLE_EPSILON, LENGTH_EPSILON};
use crate::plane::Plane3d;
use crate::point::Point3d;
use crate::scalar::Angle;
use crate::vector::Vec3;
use tracing::debug;

/// Find the supporting plane of `points` spanning `approx_direction`,
/// minimizing `cost` over all candidates.
///
/// Fails with [`GeometryError::NoSupportingPlane`] when no pair of points
/// spans a plane with the whole set on one side — a loud signal that the
/// layout's geometric assumptions no longer hold, never an arbitrary
/// fallback plane.
pub fn supporting_plane(
    points: &[Point3d],
    approx_direction: &Vec3,
    cost: impl Fn(&Plane3d) -> Angle,
) -> Result<Plane3d, GeometryError> {
    let mut best: Option<(Plane3d, Angle)> = None;
    let mut candidates = 0usize;

    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let chord = *b - *a;
            if chord.norm().as_mm() < LENGTH_EPSILON {
                continue;
            }
            // Each unordered pair appears twice; keeping only the chord
            // that agrees with the approximate direction drops the
            // reverse-ordered duplicate.
            if !chord.same_direction(approx_direction) {
                continue;
            }
            let normal = approx_direction.cross(&chord);
            if normal.norm().as_mm() < ANGLE_EPSILON {
                continue;
            }
            let plane = Plane3d::new(*a, normal)?;
            candidates += 1;

            // A candidate supports the set when every point lies on one
            // side; the normal is canonicalized to point away from the
            // set, so (A,B) and (B,A) would yield the same plane — which
            // is why the direction filter above can drop one of them.
            let Some(plane) = oriented_supporting(&plane, points) else {
                continue;
            };

            let plane_cost = cost(&plane);
            if best
                .as_ref()
                .is_none_or(|(_, best_cost)| plane_cost < *best_cost)
            {
                best = Some((plane, plane_cost));
            }
        }
    }

    debug!(
        points = points.len(),
        candidates, "supporting-plane search finished"
    );
    best.map(|(plane, _)| plane)
        .ok_or(GeometryError::NoSupportingPlane {
            points: points.len(),
            candidates,
        })
}

/// `plane` with its normal pointing away from `points`, or `None` when
/// the plane cuts through the set.
fn oriented_supporting(plane: &Plane3d, points: &[Point3d]) -> Option<Plane3d> {
    let mut below = true;
    let mut above = true;
    for p in points {
        let distance = plane.signed_distance_to(p).as_mm();
        below &= distance <= LENGTH_EPSILON;
        above &= distance >= -LENGTH_EPSILON;
        if !below && !above {
            return None;
        }
    }
    if below {
        Some(*plane)
    } else {
        // Flip so the set ends up on the negative side. The flipped
        // plane shares the original's point, only the normal turns.
        Plane3d::new(plane.point(), -plane.normal()).ok()
    }
}

/// Supporting plane whose normal leans closest to `desired_normal`.
pub fn wall_toward(
    points: &[Point3d],
    approx_direction: &Vec3,
    desired_normal: &Vec3,
) -> Result<Plane3d, GeometryError> {
    supporting_plane(points, approx_direction, |plane| {
        plane.normal().angle_between(desired_normal)
    })
}

/// Supporting plane minimizing the summed angle to each part's own
/// reference orientation — used where a wall should follow several keys
/// at once rather than one preferred direction.
pub fn wall_min_total_tilt(
    points: &[Point3d],
    approx_direction: &Vec3,
    orientations: &[Vec3],
) -> Result<Plane3d, GeometryError> {
    supporting_plane(points, approx_direction, |plane| {
        orientations
            .iter()
            .map(|o| plane.normal().angle_between(o))
            .sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Corners of a unit square in z=0 plus one raised interior point.
    fn sample_points() -> Vec<Point3d> {
        vec![
            Point3d::from_mm(0.0, 0.0, 0.0),
            Point3d::from_mm(10.0, 0.0, 0.0),
            Point3d::from_mm(10.0, 10.0, 0.0),
            Point3d::from_mm(0.0, 10.0, 0.0),
            Point3d::from_mm(5.0, 5.0, 4.0),
        ]
    }

    #[test]
    fn returned_plane_supports_every_point() {
        let points = sample_points();
        let plane = wall_toward(&points, &Vec3::unit_x(), &Vec3::unit_z()).unwrap();
        for p in &points {
            assert!(plane.signed_distance_to(p).as_mm() <= LENGTH_EPSILON);
        }
    }

    #[test]
    fn top_wall_passes_through_the_raised_point() {
        let points = sample_points();
        let plane = wall_toward(&points, &Vec3::unit_x(), &Vec3::unit_z()).unwrap();
        assert!(plane.contains(&Point3d::from_mm(5.0, 5.0, 4.0)));
    }

    #[test]
    fn collinear_points_have_no_supporting_plane() {
        let points = vec![
            Point3d::from_mm(0.0, 0.0, 0.0),
            Point3d::from_mm(1.0, 0.0, 0.0),
            Point3d::from_mm(2.0, 0.0, 0.0),
        ];
        // Every candidate chord is parallel to the search direction.
        let result = wall_toward(&points, &Vec3::unit_x(), &Vec3::unit_z());
        assert!(matches!(
            result,
            Err(GeometryError::NoSupportingPlane { .. })
        ));
    }
}
