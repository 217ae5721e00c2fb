use approx::assert_relative_eq;
use keyforge::errors::GeometryError;
use keyforge::frame::{Frame, Placeable};
use keyforge::gear::{BevelGearPair, InternalGear, SpurGear};
use keyforge::point::Point3d;
use keyforge::scalar::{Angle, Length};
use keyforge::vector::Vec3;

fn gear_frame() -> Frame {
    Frame::new(Point3d::origin(), -Vec3::unit_y(), -Vec3::unit_z()).unwrap()
}

#[test]
fn spur_pair_meshes_at_the_analytic_center_distance() {
    // module 1.5mm, 17 and 11 teeth: distance = 1.5 * (17 + 11) / 2.
    let gear = SpurGear::new(Length::mm(1.5), 17, Length::mm(4.0), gear_frame());
    let partner = gear.meshed_partner(11, &Vec3::unit_x()).unwrap();
    let distance = partner
        .reference_point()
        .distance_to(&gear.reference_point());
    assert!((distance.as_mm() - 21.0).abs() < 1e-6);
}

#[test]
fn spur_pair_distance_is_direction_independent() {
    let gear = SpurGear::new(Length::mm(2.0), 13, Length::mm(5.0), gear_frame());
    for toward in [
        Vec3::unit_x(),
        -Vec3::unit_x(),
        Vec3::from_mm(1.0, 1.0, 0.0),
        Vec3::from_mm(-0.3, 0.8, 0.0),
    ] {
        let partner = gear.meshed_partner(9, &toward).unwrap();
        let distance = partner
            .reference_point()
            .distance_to(&gear.reference_point());
        assert_relative_eq!(distance.as_mm(), 22.0, epsilon = 1e-6);
    }
}

#[test]
fn internal_pair_uses_the_tooth_count_difference() {
    let ring = InternalGear::new(Length::mm(1.5), 36, Length::mm(4.0), gear_frame());
    let pinion = ring.meshed_pinion(12, &Vec3::unit_x()).unwrap();
    let distance = pinion
        .reference_point()
        .distance_to(&ring.reference_point());
    assert_relative_eq!(distance.as_mm(), 1.5 * (36.0 - 12.0) / 2.0, epsilon = 1e-6);
}

#[test]
fn meshing_requires_equal_modules() {
    let a = SpurGear::new(Length::mm(1.5), 17, Length::mm(4.0), gear_frame());
    let b = SpurGear::new(Length::mm(1.0), 17, Length::mm(4.0), gear_frame());
    assert!(matches!(
        a.center_distance_to(&b),
        Err(GeometryError::ModuleMismatch { .. })
    ));
}

#[test]
fn derived_circles_follow_the_module_relations() {
    let gear = SpurGear::new(Length::mm(1.5), 17, Length::mm(4.0), gear_frame());
    assert_relative_eq!(gear.pitch_diameter().as_mm(), 25.5);
    assert_relative_eq!(gear.addendum_diameter().as_mm(), 25.5 + 2.0 * 1.5);
    assert_relative_eq!(gear.dedendum_diameter().as_mm(), 25.5 - 2.5 * 1.5);
    assert_relative_eq!(
        gear.base_diameter().as_mm(),
        25.5 * Angle::from_degrees(20.0).cos(),
        epsilon = 1e-12
    );
}

#[test]
fn bevel_cone_angles_sum_to_the_operating_angle() {
    for (za, zb, operating_deg) in [(13, 21, 90.0), (16, 16, 90.0), (11, 29, 75.0)] {
        let pair = BevelGearPair::create(
            Length::mm(1.25),
            za,
            zb,
            Angle::from_degrees(operating_deg),
            gear_frame(),
        )
        .unwrap();
        let sum = pair.gear_a.pitch_cone_angle() + pair.gear_b.pitch_cone_angle();
        assert!((sum.as_radians() - Angle::from_degrees(operating_deg).as_radians()).abs() < 1e-9);
    }
}

#[test]
fn bevel_cone_angle_satisfies_the_tangent_relation() {
    let operating = Angle::from_degrees(90.0);
    let pair = BevelGearPair::create(Length::mm(1.0), 12, 30, operating, gear_frame()).unwrap();
    let ratio = 30.0 / 12.0;
    let expected = (operating.sin() / (ratio + operating.cos())).atan();
    assert_relative_eq!(
        pair.gear_a.pitch_cone_angle().as_radians(),
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn bevel_gears_share_one_pitch_cone_apex() {
    let pair = BevelGearPair::create(
        Length::mm(1.5),
        14,
        22,
        Angle::from_degrees(90.0),
        gear_frame(),
    )
    .unwrap();
    assert!(pair.gear_a.apex().distance_to(&pair.gear_b.apex()).as_mm() < 1e-9);
}

#[test]
fn bevel_axes_meet_at_the_operating_angle() {
    let operating = Angle::from_degrees(90.0);
    let pair = BevelGearPair::create(Length::mm(1.0), 16, 24, operating, gear_frame()).unwrap();
    let angle = pair.gear_a.top().angle_between(&pair.gear_b.top());
    assert_relative_eq!(angle.as_radians(), operating.as_radians(), epsilon = 1e-9);
}

#[test]
fn bevel_tooth_thickness_never_degenerates() {
    for (za, zb) in [(8, 8), (12, 40), (60, 60)] {
        let pair = BevelGearPair::create(
            Length::mm(1.0),
            za,
            zb,
            Angle::from_degrees(90.0),
            gear_frame(),
        )
        .unwrap();
        let thickness = pair.gear_a.thickness();
        assert!(thickness > Length::ZERO);
        assert!(thickness <= pair.gear_a.cone_distance() / 3.0 + Length::mm(1e-9));
        assert!(thickness <= Length::mm(10.0) + Length::mm(1e-9));
    }
}
