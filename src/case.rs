//! Case assembly
//!
//! The case frame is the single source of global placement truth: the
//! alphanumeric plate, thumb fan, knob and back encoder are all derived
//! from it through one fixed chain of translate/rotate calls, and the
//! case walls are derived from the resulting key geometry by the
//! supporting-plane search rather than drawn by hand.

use crate::boundary::{wall_min_total_tilt, wall_toward};
use crate::config::Config;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::frame::Frame;
use crate::layout::{AlphanumericPlate, ThumbPlate};
use crate::line::Line3d;
use crate::parts::{BackEncoderAssembly, KnobAssembly};
use crate::plane::Plane3d;
use crate::point::Point3d;
use crate::scad::Scad;
use crate::scalar::{Angle, Length};
use tracing::info;

// Placement chain of the reference keyboard. Millimeters and degrees,
// tuned on the physical prototype.
// The plate frame is the curvature center: keys hang one column radius
// below it, so the lift must clear the largest radius plus key travel.
const PLATE_LIFT: Real = 84.0;
const PLATE_SETBACK: Real = 8.0;
const PLATE_TENT_DEG: Real = 14.0;
const THUMB_RIGHT: Real = 34.0;
const THUMB_FORWARD: Real = 56.0;
const THUMB_LIFT: Real = 16.0;
const THUMB_YAW_DEG: Real = -40.0;
const KNOB_BACK: Real = 14.0;
const BACK_WHEEL_SETBACK: Real = 58.0;
const BACK_WHEEL_LIFT: Real = 30.0;

/// Six derived construction planes enclosing the key cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walls {
    pub top: Plane3d,
    pub floor: Plane3d,
    pub front: Plane3d,
    pub back: Plane3d,
    pub left: Plane3d,
    pub right: Plane3d,
}

impl Walls {
    /// The eight shell vertices, via pairwise-then-third plane
    /// intersections.
    pub fn corners(&self) -> Result<[Point3d; 8], GeometryError> {
        Ok([
            Plane3d::corner(&self.front, &self.left, &self.top)?,
            Plane3d::corner(&self.front, &self.right, &self.top)?,
            Plane3d::corner(&self.back, &self.right, &self.top)?,
            Plane3d::corner(&self.back, &self.left, &self.top)?,
            Plane3d::corner(&self.front, &self.left, &self.floor)?,
            Plane3d::corner(&self.front, &self.right, &self.floor)?,
            Plane3d::corner(&self.back, &self.right, &self.floor)?,
            Plane3d::corner(&self.back, &self.left, &self.floor)?,
        ])
    }

    /// The same walls pushed inward (outward for the floor, keeping the
    /// bottom open) to bound the interior pocket.
    pub fn shrunk(&self, wall: Length, floor_overcut: Length) -> Walls {
        Walls {
            top: self.top.offset_along_normal(-wall),
            floor: self.floor.offset_along_normal(floor_overcut),
            front: self.front.offset_along_normal(-wall),
            back: self.back.offset_along_normal(-wall),
            left: self.left.offset_along_normal(-wall),
            right: self.right.offset_along_normal(-wall),
        }
    }
}

/// The root composition anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    frame: Frame,
}

impl Case {
    pub fn new(frame: Frame) -> Self {
        Case { frame }
    }

    /// The finger cluster: lifted, set back and tented off the case
    /// frame.
    pub fn alphanumeric_plate(&self) -> Result<AlphanumericPlate, GeometryError> {
        let lifted = self.frame.translated(
            self.frame.top() * Length::mm(PLATE_LIFT)
                + self.frame.back() * Length::mm(PLATE_SETBACK),
        );
        let tent_axis = Line3d::new(lifted.reference_point(), lifted.back())?;
        Ok(AlphanumericPlate::new(
            lifted.rotated_about(&tent_axis, Angle::from_degrees(PLATE_TENT_DEG)),
        ))
    }

    /// The thumb fan: forward and right of the case origin, yawed
    /// inward.
    pub fn thumb_plate(&self) -> Result<ThumbPlate, GeometryError> {
        let moved = self.frame.translated(
            self.frame.right() * Length::mm(THUMB_RIGHT)
                + self.frame.front() * Length::mm(THUMB_FORWARD)
                + self.frame.top() * Length::mm(THUMB_LIFT),
        );
        let yaw_axis = Line3d::new(moved.reference_point(), moved.top())?;
        Ok(ThumbPlate::new(
            moved.rotated_about(&yaw_axis, Angle::from_degrees(THUMB_YAW_DEG)),
        ))
    }

    /// The volume-knob assembly above the far edge of the plate. The
    /// knob floor rides the deck: the outermost horizontal plane through
    /// any key-plate corner, plus the printer's clearance margin.
    pub fn knob(&self, config: &Config) -> Result<KnobAssembly, GeometryError> {
        let plate = self.alphanumeric_plate()?;
        let top = self.frame.top();
        let candidates = plate
            .corner_points(&config.keys)?
            .into_iter()
            .map(|p| Plane3d::new(p, top))
            .collect::<Result<Vec<_>, _>>()?;
        let deck = Plane3d::outermost(&candidates)?;
        let deck_height = -deck.signed_distance_to(&self.frame.reference_point());

        let across = config.keys.key_pitch * config.keys.columns.len() as Real;
        let frame = self.frame.translated(
            self.frame.right() * across
                + self.frame.back() * Length::mm(KNOB_BACK)
                + self.frame.top() * (deck_height + config.printer.clearance_margin),
        );
        KnobAssembly::new(frame, &config.encoder)
    }

    /// The optional back thumbwheel, axis pointing out the back wall.
    pub fn back_encoder(&self, config: &Config) -> Result<BackEncoderAssembly, GeometryError> {
        let anchor = self.frame.translated(
            self.frame.back() * Length::mm(BACK_WHEEL_SETBACK)
                + self.frame.top() * Length::mm(BACK_WHEEL_LIFT)
                + self.frame.right() * (config.keys.key_pitch * 2.0),
        );
        // Wheel axis (frame top) points backward; the bevel pair then
        // swings the driven gear onto a vertical axis inside the case.
        let wheel_frame = Frame::new(
            anchor.reference_point(),
            anchor.bottom(),
            anchor.front(),
        )?;
        BackEncoderAssembly::new(wheel_frame, &config.encoder)
    }

    /// Derive the six case walls from the key-plate corner points.
    ///
    /// Top, front and back come out of the extremal-plane search over
    /// both clusters' corners; the slope costs follow the keys' own
    /// orientations so the walls hug the curvature. Left and right span
    /// the back direction; the floor is the case frame's own plane.
    pub fn walls(&self, config: &Config) -> Result<Walls, GeometryError> {
        let plate = self.alphanumeric_plate()?;
        let thumb = self.thumb_plate()?;

        let mut points = plate.corner_points(&config.keys)?;
        points.extend(thumb.corner_points(&config.keys)?);
        let mut orientations = plate.key_orientations(&config.keys)?;
        orientations.extend(thumb.key_orientations(&config.keys)?);

        let right = self.frame.right();
        let back = self.frame.back();

        let top = wall_min_total_tilt(&points, &right, &orientations)?;
        let front = wall_toward(&points, &right, &self.frame.front())?;
        let back_wall = wall_toward(&points, &right, &back)?;
        let left = wall_toward(&points, &back, &self.frame.left())?;
        let right_wall = wall_toward(&points, &back, &right)?;
        let floor = Plane3d::new(self.frame.reference_point(), self.frame.bottom())?;

        info!(
            corner_points = points.len(),
            top_normal_tilt_deg = top.normal().angle_between(&self.frame.top()).as_degrees(),
            "derived case walls"
        );

        Ok(Walls {
            top,
            floor,
            front,
            back: back_wall,
            left,
            right: right_wall,
        })
    }

    /// The complete case solid.
    pub fn solid(&self, config: &Config, segments_per_flank: usize) -> Result<Scad, GeometryError> {
        let plate = self.alphanumeric_plate()?;
        let thumb = self.thumb_plate()?;
        let walls = self.walls(config)?;

        let wall = config.printer.wall_thickness_min;
        let outer = walls.corners()?;
        let inner = walls
            .shrunk(wall, config.printer.clearance_margin)
            .corners()?;

        let vertex_radius = config.printer.feature_size_min;
        let outer_hull = Scad::hull(balls(&outer, vertex_radius));
        let shell = outer_hull
            .clone()
            .minus(Scad::hull(balls(&inner, vertex_radius)));

        // The wall search only supports the plates' top corners, so the
        // hull bridges between tilted plates can poke past the walls
        // underneath; clip the whole key surface to the shell volume.
        let key_surface = Scad::intersection(vec![
            plate.solid(&config.keys)?.plus(thumb.solid(&config.keys)?),
            outer_hull,
        ]);

        // Shell plus the clipped key plates, minus switch cutouts and
        // the keycap clearance pockets that let the caps emerge.
        let mut body = shell
            .plus(key_surface)
            .minus(plate.cutouts(&config.keys)?)
            .minus(thumb.cutouts(&config.keys)?)
            .minus(keycap_pockets(&plate, &thumb, config)?);

        let knob = self.knob(config)?;
        body = body.plus(knob.solid(segments_per_flank));

        if config.features.back_encoder {
            let back = self.back_encoder(config)?;
            body = body.plus(back.solid(segments_per_flank));
        }

        if config.features.wrist_rest {
            body = body.plus(self.wrist_rest());
        }

        Ok(body)
    }

    /// A rounded slab in front of the thumb fan.
    fn wrist_rest(&self) -> Scad {
        let slab = Scad::cube(Length::mm(96.0), Length::mm(58.0), Length::mm(9.0), true);
        let rounded = Scad::minkowski(vec![slab, Scad::sphere(Length::mm(3.0))]);
        let offset = self.frame.front() * Length::mm(96.0) + self.frame.top() * Length::mm(6.0);
        self.frame.translated(offset).place(rounded)
    }
}

fn balls(points: &[Point3d; 8], radius: Length) -> Vec<Scad> {
    points
        .iter()
        .map(|p| Scad::sphere(radius).translated(*p - Point3d::origin()))
        .collect()
}

/// Clearance pockets above every key plate so keycaps poke through the
/// derived top wall.
fn keycap_pockets(
    plate: &AlphanumericPlate,
    thumb: &ThumbPlate,
    config: &Config,
) -> Result<Scad, GeometryError> {
    let mut pockets = Vec::new();
    let mut switches = plate.key_switches(&config.keys)?;
    switches.extend(thumb.key_switches(&config.keys)?);
    for switch in switches {
        pockets.push(switch.keycap_clearance(&config.keys, config.printer.clearance_margin));
    }
    Ok(Scad::union(pockets))
}
