//! Finger columns
//!
//! A column's reference point is the center of curvature of its arc: the
//! home-row keycap top sits `radius` straight down the bottom vector, and
//! rows 1 and 2 rotate backward up the arc from there. Row 4 is the
//! scooped reach key and follows a different rule entirely; its tilt is
//! an empirical constant, not a function of the radius.

use crate::config::KeyGeometry;
use crate::errors::GeometryError;
use crate::frame::{Frame, Placeable};
use crate::line::Line3d;
use crate::parts::KeySwitch;
use crate::scalar::{Angle, Length};

/// One finger's column of four keys on a cylindrical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    frame: Frame,
    radius: Length,
    twist: Angle,
    layer_offset: Length,
}

impl Column {
    pub fn new(frame: Frame, radius: Length, twist: Angle, layer_offset: Length) -> Self {
        assert!(radius > Length::ZERO, "column radius must be positive");
        Column {
            frame,
            radius,
            twist,
            layer_offset,
        }
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn twist(&self) -> Angle {
        self.twist
    }

    /// The four switches of this column, ordered back to front: row 1 is
    /// the furthest back, row 4 is the scooped reach key.
    ///
    /// Recomputed on each access; the column stores parameters, not
    /// placements.
    pub fn key_switches(&self, keys: &KeyGeometry) -> Result<Vec<KeySwitch>, GeometryError> {
        // Row-to-row arc angle: a chord of one row pitch on the cylinder.
        let step = Angle::atan((keys.row_pitch / 2.0) / self.radius) * 2.0;

        // Home row (row 3): keycap top `radius` down the bottom vector.
        let home = self.frame.translated(self.frame.bottom() * self.radius);

        // Rows 2 and 1 climb backward up the arc about the horizontal
        // axis through the curvature center.
        let row_axis = Line3d::new(self.frame.reference_point(), self.frame.right())?;
        let row2 = home.rotated_about(&row_axis, step);
        let row1 = home.rotated_about(&row_axis, step * 2.0);

        // Row 4: translate forward and down, then tilt hard about an
        // axis half a row pitch further forward. This models the key
        // reached by continuing the finger curl, not the arc.
        let dropped = home.translated(
            home.front() * keys.row_pitch + home.bottom() * keys.row4_depth_offset,
        );
        let tilt_axis = Line3d::new(
            dropped.reference_point() + home.front() * (keys.row_pitch / 2.0),
            home.right(),
        )?;
        let row4 = dropped.rotated_about(&tilt_axis, keys.row4_tilt);

        let mut frames = vec![row1, row2, home, row4];

        // Column twist about a vertical edge axis; the sign picks the
        // edge: positive twists about the left edge, negative about the
        // right.
        if self.twist != Angle::ZERO {
            let edge = if self.twist > Angle::ZERO {
                self.frame.left()
            } else {
                self.frame.right()
            };
            let pivot = home.reference_point() + edge * (keys.key_pitch / 2.0);
            let twist_axis = Line3d::new(pivot, self.frame.top())?;
            frames = frames
                .iter()
                .map(|f| f.rotated_about(&twist_axis, self.twist))
                .collect();
        }

        // Finger-length stagger, applied uniformly after the arc.
        let stagger = self.frame.bottom() * self.layer_offset;
        Ok(frames
            .into_iter()
            .map(|f| KeySwitch::new(f.translated(stagger)))
            .collect())
    }
}

impl Placeable for Column {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn with_frame(&self, frame: Frame) -> Self {
        Column { frame, ..*self }
    }
}
