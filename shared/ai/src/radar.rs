use serde::{Deserialize, Serialize};
use standoff_api::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl SweepDirection {
    pub fn sign(self) -> f64 {
        match self {
            SweepDirection::Clockwise => 1.0,
            SweepDirection::CounterClockwise => -1.0,
        }
    }
}

/// Keeps the radar turning: a full circle while searching, and a slightly
/// overshooting lock while an opponent is in view.
#[derive(Clone, Debug)]
pub struct RadarSweep {
    direction: SweepDirection,
    widen: f64,
}

impl RadarSweep {
    pub fn new(direction: SweepDirection, widen_divisor: f64) -> RadarSweep {
        RadarSweep {
            direction,
            widen: rules::RADAR_TURN_RATE / widen_divisor,
        }
    }

    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Extra rotation added past the opponent on each lock.
    pub fn widen(&self) -> f64 {
        self.widen
    }

    /// Queues a full sweep if the radar would otherwise stop this tick.
    ///
    /// Returns true if a sweep was queued.
    pub fn sweep(&self, host: &impl Host, commands: &mut Commands) -> bool {
        if commands.radar_turn.is_some() || host.radar_turn_remaining() != 0.0 {
            return false;
        }
        commands.turn_radar(TAU * self.direction.sign());
        true
    }

    /// Returns the radar turn that crosses `angle_to_enemy` with some margin
    /// to spare, so the opponent is still inside the beam next tick.
    pub fn lock(&self, radar_heading: f64, angle_to_enemy: f64) -> f64 {
        let turn = normalize_angle(angle_to_enemy - radar_heading);
        if turn < 0.0 {
            turn - self.widen
        } else {
            turn + self.widen
        }
    }
}
