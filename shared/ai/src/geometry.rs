//! Conversions between the robot frame and field coordinates.
//!
//! Angles follow the compass convention used throughout the arena: 0 points
//! up the field and positive angles turn clockwise, so `x` offsets use the
//! sine and `y` offsets the cosine.

use crate::agent::AgentState;
use standoff_api::prelude::*;

/// Returns the field position seen at `bearing` (relative to `heading`) and
/// `distance` from `origin`.
pub fn to_absolute(origin: Vec2, heading: f64, bearing: f64, distance: f64) -> Vec2 {
    origin + project(heading + bearing, distance)
}

/// Inverse of [`to_absolute`]: returns the relative bearing and distance of
/// `target` as seen from `origin` facing `heading`.
pub fn to_relative(origin: Vec2, heading: f64, target: Vec2) -> (f64, f64) {
    let offset = target - origin;
    (
        normalize_angle(offset.bearing() - heading),
        offset.length(),
    )
}

/// Returns the compass bearing from `from` towards `to`.
pub fn absolute_bearing(from: Vec2, to: Vec2) -> f64 {
    from.bearing_to(to)
}

/// A single detection of the opponent, converted to field coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct OpponentObservation {
    /// Bearing relative to our body heading.
    pub bearing: f64,
    pub distance: f64,
    /// The opponent's own heading.
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
    /// Absolute bearing from us to the opponent.
    pub angle_to_enemy: f64,
    pub position: Vec2,
}

impl OpponentObservation {
    pub fn from_scan(state: &AgentState, scan: &ScannedRobot) -> OpponentObservation {
        OpponentObservation {
            bearing: scan.bearing,
            distance: scan.distance,
            heading: scan.heading,
            velocity: scan.velocity,
            energy: scan.energy,
            angle_to_enemy: normalize_angle(state.heading + scan.bearing),
            position: to_absolute(state.position, state.heading, scan.bearing, scan.distance),
        }
    }

    /// Returns the opponent's speed across our line of sight.
    ///
    /// Positive when it moves clockwise around us.
    pub fn lateral_velocity(&self) -> f64 {
        self.velocity * (self.heading - self.angle_to_enemy).sin()
    }
}
