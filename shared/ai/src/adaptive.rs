//! Reactions to combat events that reshape how the agent moves.

use crate::agent::AgentState;
use crate::config::AgentConfig;
use crate::rng::{new_rng, SeededRng};
use rand::Rng;
use std::ops::Range;

/// Preferred distance to keep from the opponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandoffPreference {
    value: f64,
    min: f64,
    max: f64,
}

impl StandoffPreference {
    pub fn new(value: f64, min: f64, max: f64) -> StandoffPreference {
        StandoffPreference {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    /// Moves the preference `step` units closer to the opponent.
    pub fn close_in(&mut self, step: f64) -> f64 {
        self.value = (self.value - step).clamp(self.min, self.max);
        self.value
    }
}

pub struct Adaptive {
    standoff: StandoffPreference,
    last_opponent_energy: f64,
    flip_probability: f64,
    miss_step: Range<u32>,
    rng: SeededRng,
}

impl Adaptive {
    pub fn new(config: &AgentConfig) -> Adaptive {
        Adaptive {
            standoff: StandoffPreference::new(
                config.initial_standoff,
                config.min_standoff,
                config.max_standoff,
            ),
            last_opponent_energy: config.initial_opponent_energy,
            flip_probability: config.flip_probability,
            miss_step: config.miss_step_min..config.miss_step_max,
            rng: new_rng(config.seed),
        }
    }

    pub fn standoff(&self) -> StandoffPreference {
        self.standoff
    }

    pub fn last_opponent_energy(&self) -> f64 {
        self.last_opponent_energy
    }

    /// A missed shot means we are too far away to hit reliably: close in.
    pub fn on_bullet_missed(&mut self) -> f64 {
        let step = self.rng.gen_range(self.miss_step.clone());
        let standoff = self.standoff.close_in(step as f64);
        log::debug!("bullet missed, standoff now {:.0} (-{})", standoff, step);
        standoff
    }

    pub fn on_bullet_collision(&mut self, state: &mut AgentState) -> bool {
        self.maybe_flip(state, "bullet collision")
    }

    /// Compares the opponent's energy with the last reading. A drop means it
    /// probably fired, so we may dodge by reversing the orbit.
    pub fn observe_energy(&mut self, state: &mut AgentState, energy: f64) -> bool {
        let fired = self.last_opponent_energy > energy;
        self.last_opponent_energy = energy;
        fired && self.maybe_flip(state, "opponent fired")
    }

    /// Our hit drains the opponent; remember that so it isn't mistaken for a
    /// shot.
    pub fn on_bullet_hit(&mut self, energy: f64) {
        self.last_opponent_energy = energy;
    }

    fn maybe_flip(&mut self, state: &mut AgentState, reason: &str) -> bool {
        if self.rng.gen_bool(self.flip_probability) {
            state.direction = state.direction.reversed();
            log::debug!("{}: orbit now {:?}", reason, state.direction);
            true
        } else {
            false
        }
    }
}
