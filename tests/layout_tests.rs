use approx::assert_relative_eq;
use keyforge::boundary::{supporting_plane, wall_toward};
use keyforge::config::{Config, KeyGeometry};
use keyforge::frame::{Frame, Placeable};
use keyforge::layout::{AlphanumericPlate, Column, ThumbPlate};
use keyforge::point::Point3d;
use keyforge::scad::writer;
use keyforge::scalar::{Angle, Length};
use keyforge::vector::Vec3;
use keyforge::Case;

fn upright() -> Frame {
    Frame::new(Point3d::origin(), -Vec3::unit_y(), -Vec3::unit_z()).unwrap()
}

#[test]
fn column_scenario_at_the_origin() {
    // Column at (0,0,0), bottom (0,0,-1), front (0,-1,0), radius 44mm,
    // no twist: the four keycap tops lie at increasing angular offsets
    // along the (Y,Z) arc of radius 44 centered on the reference point.
    let keys = KeyGeometry::default();
    let column = Column::new(upright(), Length::mm(44.0), Angle::ZERO, Length::ZERO);
    let switches = column.key_switches(&keys).unwrap();
    assert_eq!(switches.len(), 4);

    // Rows 1-3 sit on the arc; their angular offset from straight-down
    // strictly decreases toward the home row.
    let mut previous = f64::INFINITY;
    for switch in &switches[..3] {
        let p = switch.reference_point();
        assert_relative_eq!(p.x().as_mm(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            p.distance_to(&Point3d::origin()).as_mm(),
            44.0,
            epsilon = 1e-9
        );
        let angular_offset = Angle::atan2(p.y(), -p.z()).as_radians();
        assert!(angular_offset < previous);
        previous = angular_offset;
    }

    // Row 1 is the furthest back along the back vector (+Y).
    let backs: Vec<f64> = switches
        .iter()
        .map(|s| s.reference_point().y().as_mm())
        .collect();
    assert!(backs[0] > backs[1] && backs[1] > backs[2] && backs[2] > backs[3]);

    // The reach key overshoots the home row along Y thanks to the extra
    // front translation applied before its tilt.
    assert!(backs[3].abs() > backs[2].abs() + keys.row_pitch.as_mm() / 2.0);
}

#[test]
fn column_rows_step_by_the_chord_angle() {
    let keys = KeyGeometry::default();
    let radius = Length::mm(44.0);
    let column = Column::new(upright(), radius, Angle::ZERO, Length::ZERO);
    let switches = column.key_switches(&keys).unwrap();

    let expected_step = 2.0 * ((keys.row_pitch.as_mm() / 2.0) / 44.0).atan();
    let p1 = switches[0].reference_point();
    let p2 = switches[1].reference_point();
    let a1 = Angle::atan2(p1.y(), -p1.z()).as_radians();
    let a2 = Angle::atan2(p2.y(), -p2.z()).as_radians();
    assert_relative_eq!(a1 - a2, expected_step, epsilon = 1e-9);
}

#[test]
fn thumb_fan_has_the_configured_key_count() {
    let keys = KeyGeometry::default();
    let switches = ThumbPlate::new(upright()).key_switches(&keys).unwrap();
    assert_eq!(switches.len(), keys.thumb_rotations.len() + 1);
}

#[test]
fn boundary_plane_supports_the_whole_plate() {
    let keys = KeyGeometry::default();
    let plate = AlphanumericPlate::new(upright());
    let points = plate.corner_points(&keys).unwrap();

    let plane = wall_toward(&points, &Vec3::unit_x(), &Vec3::unit_z()).unwrap();
    for p in &points {
        assert!(
            plane.signed_distance_to(p).as_mm() <= 1e-3,
            "{p:?} on the positive side"
        );
    }
}

#[test]
fn boundary_search_minimizes_the_requested_cost() {
    // Two candidate supporting planes exist over this roof-shaped set;
    // the cost function must pick the flatter one.
    let points = vec![
        Point3d::from_mm(0.0, 0.0, 0.0),
        Point3d::from_mm(10.0, 0.0, 0.0),
        Point3d::from_mm(0.0, 10.0, 8.0),
        Point3d::from_mm(10.0, 10.0, 8.0),
        Point3d::from_mm(0.0, 20.0, 9.0),
        Point3d::from_mm(10.0, 20.0, 9.0),
    ];
    let plane = supporting_plane(&points, &Vec3::unit_x(), |p| {
        p.normal().angle_between(&Vec3::unit_z())
    })
    .unwrap();
    // The flat back span (z from 8 to 9) wins over the steep front span.
    let tilt = plane.normal().angle_between(&Vec3::unit_z());
    assert!(tilt.as_degrees() < 10.0, "picked tilt {}", tilt.as_degrees());
}

#[test]
fn case_walls_enclose_both_clusters() {
    let config = Config::default();
    let case = Case::new(upright());
    let walls = case.walls(&config).unwrap();

    let mut points = case
        .alphanumeric_plate()
        .unwrap()
        .corner_points(&config.keys)
        .unwrap();
    points.extend(
        case.thumb_plate()
            .unwrap()
            .corner_points(&config.keys)
            .unwrap(),
    );
    for plane in [walls.top, walls.front, walls.back, walls.left, walls.right] {
        for p in &points {
            assert!(plane.signed_distance_to(p).as_mm() <= 1e-3);
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let config = Config {
        features: keyforge::config::Features {
            wrist_rest: true,
            back_encoder: true,
        },
        ..Config::default()
    };
    let case = Case::new(upright());
    let first = writer::scene(&case.solid(&config, 8).unwrap(), 48);
    let second = writer::scene(&case.solid(&config, 8).unwrap(), 48);
    assert_eq!(first, second);
    assert!(first.contains("difference()"));
    assert!(first.contains("hull()"));
    assert!(first.contains("intersection()"));
    assert!(first.contains("minkowski()"));
}
