//! Wall gliding.
//!
//! Inside the margin along a wall the orbit is replaced by a turn that runs
//! the agent diagonally along the wall, or the orbit direction is reversed
//! when the agent is already heading away from it. Headings here are compass
//! degrees in `[0, 360)`.

use crate::agent::{AgentState, OrbitDirection};
use crate::config::ArenaBounds;
use standoff_api::prelude::*;
use std::ops::{Bound, RangeBounds};

/// Offset used for the diagonal escape headings, and how far ahead of the
/// top and right margins the speed damping starts.
const ESCAPE_OFFSET: f64 = 100.0;

type HeadingRange = (Bound<f64>, Bound<f64>);

fn closed(start: f64, end: f64) -> HeadingRange {
    (Bound::Included(start), Bound::Included(end))
}

fn half_open(start: f64, end: f64) -> HeadingRange {
    (Bound::Included(start), Bound::Excluded(end))
}

fn open_closed(start: f64, end: f64) -> HeadingRange {
    (Bound::Excluded(start), Bound::Included(end))
}

fn open(start: f64, end: f64) -> HeadingRange {
    (Bound::Excluded(start), Bound::Excluded(end))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

/// How to react to one wall for one orbit direction.
struct WallRule {
    /// Headings that would run into the wall and must be steered.
    steer: HeadingRange,
    /// Offset (dx, dy) of the diagonal to steer onto.
    escape: (f64, f64),
    /// Headings already leaving the wall, where reversing is enough.
    flip: HeadingRange,
    /// Fraction of a quarter turn by which a steered heading points into the
    /// wall.
    approach: fn(f64) -> f64,
}

impl Wall {
    /// Evaluation order matters: an earlier wall may reverse the orbit.
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];

    /// Returns true if `position` is inside this wall's margin.
    pub fn contains(self, arena: &ArenaBounds, position: Vec2) -> bool {
        match self {
            Wall::Top => position.y > arena.height() - arena.margin(),
            Wall::Bottom => position.y < arena.margin(),
            Wall::Left => position.x < arena.margin(),
            Wall::Right => position.x > arena.width() - arena.margin(),
        }
    }

    /// Returns the diagonal compass heading this wall steers onto.
    pub fn escape_heading(self, direction: OrbitDirection) -> f64 {
        let (dx, dy) = self.rule(direction).escape;
        dx.atan2(dy)
    }

    fn rule(self, direction: OrbitDirection) -> WallRule {
        use OrbitDirection::*;
        let o = ESCAPE_OFFSET;
        match (self, direction) {
            (Wall::Top, Clockwise) => WallRule {
                steer: closed(0.0, 90.0),
                escape: (o, -o),
                flip: half_open(270.0, 360.0),
                approach: |h| h / 90.0,
            },
            (Wall::Top, CounterClockwise) => WallRule {
                steer: half_open(90.0, 180.0),
                escape: (o, o),
                flip: closed(180.0, 270.0),
                approach: |h| (180.0 - h) / 90.0,
            },
            (Wall::Bottom, CounterClockwise) => WallRule {
                steer: half_open(270.0, 360.0),
                escape: (-o, -o),
                flip: closed(0.0, 90.0),
                approach: |h| (360.0 - h) / 90.0,
            },
            (Wall::Bottom, Clockwise) => WallRule {
                steer: closed(180.0, 270.0),
                escape: (-o, o),
                flip: half_open(90.0, 180.0),
                approach: |h| (h - 180.0) / 90.0,
            },
            (Wall::Left, Clockwise) => WallRule {
                steer: open(270.0, 360.0),
                escape: (o, o),
                flip: closed(180.0, 270.0),
                approach: |h| (h - 270.0) / 90.0,
            },
            (Wall::Left, CounterClockwise) => WallRule {
                steer: half_open(0.0, 90.0),
                escape: (-o, o),
                flip: half_open(90.0, 180.0),
                approach: |h| (90.0 - h) / 90.0,
            },
            (Wall::Right, Clockwise) => WallRule {
                steer: open_closed(90.0, 180.0),
                escape: (-o, -o),
                flip: closed(0.0, 90.0),
                approach: |h| (h - 90.0) / 90.0,
            },
            (Wall::Right, CounterClockwise) => WallRule {
                steer: half_open(180.0, 270.0),
                escape: (o, -o),
                flip: half_open(270.0, 360.0),
                approach: |h| (270.0 - h) / 90.0,
            },
        }
    }

    /// Speed multiplier from how deep into the margin `position` is. It falls
    /// to 1 at the wall, starting from 2 at the bottom and left zone edges
    /// and from `2 - 100 / (m + 100)` (1.5 for the default margin) at the top
    /// and right ones.
    fn proximity(self, arena: &ArenaBounds, position: Vec2) -> f64 {
        let m = arena.margin();
        match self {
            Wall::Top => {
                2.0 - (position.y - (arena.height() - m - ESCAPE_OFFSET)) / (m + ESCAPE_OFFSET)
            }
            Wall::Right => {
                2.0 - (position.x - (arena.width() - m - ESCAPE_OFFSET)) / (m + ESCAPE_OFFSET)
            }
            Wall::Bottom => 2.0 - (m - position.y) / m,
            Wall::Left => 2.0 - (m - position.x) / m,
        }
    }
}

/// Returns the walls whose margin contains `position`.
pub fn nearby_walls(arena: &ArenaBounds, position: Vec2) -> impl Iterator<Item = Wall> + '_ {
    Wall::ALL
        .into_iter()
        .filter(move |wall| wall.contains(arena, position))
}

/// Replaces `desired_turn` with a glide along any wall the agent is heading
/// into, reversing the orbit where that suffices.
///
/// Uses the pre-turn heading. Turns from several walls add up.
pub fn turn_smoothing(state: &mut AgentState, arena: &ArenaBounds, desired_turn: f64) -> f64 {
    let degrees = heading_degrees(state.heading);
    let mut smoothing = 0.0;
    for wall in nearby_walls(arena, state.position) {
        let rule = wall.rule(state.direction);
        if rule.steer.contains(&degrees) {
            let (dx, dy) = rule.escape;
            smoothing += normalize_angle(dx.atan2(dy) - state.heading);
        } else if rule.flip.contains(&degrees) {
            state.direction = state.direction.reversed();
            log::debug!(
                "{:?} wall at heading {:.0}, orbit now {:?}",
                wall,
                degrees,
                state.direction
            );
        }
    }
    if smoothing != 0.0 {
        log::trace!("wall override {:.3} (wanted {:.3})", smoothing, desired_turn);
        smoothing
    } else {
        desired_turn
    }
}

/// Returns a speed multiplier in `[0, 2]`: 1 away from walls, lower when
/// the heading points into a nearby wall.
///
/// When several walls apply the last one wins.
pub fn speed_smoothing(state: &AgentState, arena: &ArenaBounds) -> f64 {
    let degrees = heading_degrees(state.heading);
    let mut factor = 1.0;
    for wall in nearby_walls(arena, state.position) {
        let rule = wall.rule(state.direction);
        if rule.steer.contains(&degrees) {
            factor = wall.proximity(arena, state.position) * (rule.approach)(degrees);
        }
    }
    factor
}
