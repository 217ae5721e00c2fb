//! Involute-curve primitives and tooth outline construction
//!
//! The involute is traced by unwinding a taut string from the base
//! circle; sampling it parametrically and mirroring yields one symmetric
//! tooth, which is replicated by rotation to the full outline.

use crate::float_types::{FRAC_PI_2, Real, TAU};
use crate::scalar::Angle;

/// Classic parametric involute of a circle.
///
/// `phi` is the unwinding parameter; the returned point sits at radius
/// `rb * sqrt(1 + phi²)`.
pub(crate) fn involute_xy(rb: Real, phi: Real) -> (Real, Real) {
    (
        rb * (phi.cos() + phi * phi.sin()),
        rb * (phi.sin() - phi * phi.cos()),
    )
}

/// The involute parameter at which the curve reaches radius `r`.
///
/// φ = sqrt((r/rb)² − 1); radii inside the base circle clamp to 0.
pub(crate) fn involute_angle_at_radius(r: Real, rb: Real) -> Real {
    ((r / rb).powi(2) - 1.0).max(0.0).sqrt()
}

/// Build a full gear outline: `teeth` involute teeth between `tip_radius`
/// and `root_radius`, CCW, tooth 0 centered on the +X axis.
///
/// The flank is sampled over the involute parameter range [0, π/2],
/// stopping early where the curve reaches the tip radius. Swapping tip
/// and root heights relative to the pitch circle turns the same outline
/// into the cutting shape of an internal gear.
pub(crate) fn tooth_outline(
    module: Real,
    teeth: u32,
    pressure_angle: Angle,
    tip_radius: Real,
    root_radius: Real,
    segments_per_flank: usize,
) -> Vec<[Real; 2]> {
    assert!(teeth >= 4, "need at least 4 teeth for a valid gear");
    assert!(segments_per_flank >= 3);

    let z = teeth as Real;
    let pitch_radius = 0.5 * module * z;
    let base_radius = pitch_radius * pressure_angle.cos();

    let angular_pitch = TAU / z;
    // Tooth thickness at the pitch circle is half the circular pitch.
    let half_tooth = angular_pitch / 4.0;

    // Involute parameters at the pitch and tip circles; the tip value is
    // capped to the sampled parameter range.
    let phi_pitch = involute_angle_at_radius(pitch_radius, base_radius);
    let phi_tip = involute_angle_at_radius(tip_radius, base_radius).min(FRAC_PI_2);
    // Polar angle of the involute point at the pitch circle.
    let theta_pitch = {
        let (x, y) = involute_xy(base_radius, phi_pitch);
        y.atan2(x)
    };

    // Left flank, root to tip: the flank crosses the pitch circle at
    // -half_tooth so the tooth is symmetric about angle zero.
    let mut full_tooth = Vec::<(Real, Real)>::with_capacity(2 * segments_per_flank + 7);
    for i in 0..=segments_per_flank {
        let phi = phi_tip * (i as Real) / (segments_per_flank as Real);
        let (ix, iy) = involute_xy(base_radius, phi);
        let theta = iy.atan2(ix);
        let r = (ix * ix + iy * iy).sqrt();
        let global_theta = theta - theta_pitch - half_tooth;
        full_tooth.push((r * global_theta.cos(), r * global_theta.sin()));
    }

    // Mirror to get the right flank, tip to root, keeping the outline CCW.
    for i in (0..=segments_per_flank).rev() {
        let phi = phi_tip * (i as Real) / (segments_per_flank as Real);
        let (ix, iy) = involute_xy(base_radius, phi);
        let theta = iy.atan2(ix);
        let r = (ix * ix + iy * iy).sqrt();
        let global_theta = half_tooth + theta_pitch - theta;
        full_tooth.push((r * global_theta.cos(), r * global_theta.sin()));
    }

    // Root circle arc between successive teeth.
    let root_arc_steps = 4;
    let gap_start = half_tooth + theta_pitch;
    let gap_end = angular_pitch - half_tooth - theta_pitch;
    let arc_step = (gap_end - gap_start) / (root_arc_steps as Real + 1.0);
    for i in 1..=root_arc_steps {
        let ang = gap_start + (i as Real) * arc_step;
        full_tooth.push((root_radius * ang.cos(), root_radius * ang.sin()));
    }

    // Replicate the tooth profile around the gear.
    let mut outline = Vec::<[Real; 2]>::with_capacity(full_tooth.len() * teeth as usize);
    for tooth_idx in 0..teeth {
        let rot = (tooth_idx as Real) * angular_pitch;
        let (c, s) = (rot.cos(), rot.sin());
        for &(x, y) in &full_tooth {
            outline.push([x * c - y * s, x * s + y * c]);
        }
    }
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::PRESSURE_ANGLE;

    #[test]
    fn involute_starts_on_base_circle() {
        let (x, y) = involute_xy(10.0, 0.0);
        assert!((x - 10.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn involute_parameter_inverts_radius() {
        let rb = 8.0;
        let phi = involute_angle_at_radius(11.0, rb);
        let (x, y) = involute_xy(rb, phi);
        assert!(((x * x + y * y).sqrt() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn outline_stays_between_root_and_tip() {
        let module = 1.5;
        let teeth = 17;
        let pitch = 0.5 * module * teeth as Real;
        let tip = pitch + module;
        let root = pitch - 1.25 * module;
        let outline = tooth_outline(module, teeth, PRESSURE_ANGLE, tip, root, 8);
        for p in &outline {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!(r <= tip + 1e-9, "point outside tip circle: r = {r}");
            assert!(r >= root - 1e-9, "point inside root circle: r = {r}");
        }
    }

    #[test]
    fn outline_replicates_per_tooth() {
        let outline = tooth_outline(2.0, 11, PRESSURE_ANGLE, 13.0, 8.5, 6);
        assert_eq!(outline.len() % 11, 0);
    }
}
