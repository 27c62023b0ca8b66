use crate::radar::SweepDirection;
use serde::{Deserialize, Serialize};
use standoff_api::prelude::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Arena {width}x{height} is too small for a wall margin of {margin}")]
    ArenaTooSmall { width: f64, height: f64, margin: f64 },

    #[error("Wall margin must be positive, got {0}")]
    InvalidMargin(f64),

    #[error("Stand-off {initial} outside [{min}, {max}]")]
    InvalidStandoff { min: f64, max: f64, initial: f64 },

    #[error("Empty miss step range [{min}, {max})")]
    InvalidMissStep { min: u32, max: u32 },

    #[error("Probability {0} outside [0, 1]")]
    InvalidProbability(f64),

    #[error("Power range must be positive, got {0}")]
    InvalidPowerRange(f64),

    #[error("Radar widen divisor must be positive, got {0}")]
    InvalidRadarDivisor(f64),

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidTunable { name: &'static str, value: f64 },
}

/// Tunables for [`CombatAgent`](crate::CombatAgent).
///
/// Defaults reproduce the behaviour the agent was tuned with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Distance from each wall that counts as "near" it.
    pub wall_margin: f64,
    /// Stand-off distance before any shot has missed.
    pub initial_standoff: f64,
    /// Closest the stand-off can get after repeated misses.
    pub min_standoff: f64,
    pub max_standoff: f64,
    /// Distance at which the orbit leans fully towards the opponent.
    pub bias_horizon: f64,
    /// Distance beyond which bullets are fired with no power.
    pub power_range: f64,
    /// Bullet power requested at point blank range.
    pub power_scale: f64,
    /// Chance of reversing the orbit when dodging.
    pub flip_probability: f64,
    /// Each miss closes the stand-off by a step drawn from
    /// `miss_step_min..miss_step_max`.
    pub miss_step_min: u32,
    pub miss_step_max: u32,
    /// Opponent energy assumed before the first scan.
    pub initial_opponent_energy: f64,
    /// The radar lock overshoots by `RADAR_TURN_RATE` divided by this.
    pub radar_widen_divisor: f64,
    /// Rotation of the idle radar sweep.
    pub sweep_direction: SweepDirection,
    /// Fire on every detection, even while the gun is still turning.
    pub fire_while_turning: bool,
    /// Largest gun turn still considered on target when
    /// `fire_while_turning` is off.
    pub aim_tolerance: f64,
    /// Seed for the dodge and retreat randomness.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            wall_margin: 100.0,
            initial_standoff: 250.0,
            min_standoff: 50.0,
            max_standoff: 400.0,
            bias_horizon: 400.0,
            power_range: 600.0,
            power_scale: 4.0,
            flip_probability: 0.6,
            miss_step_min: 25,
            miss_step_max: 75,
            initial_opponent_energy: 100.0,
            radar_widen_divisor: 2.5,
            sweep_direction: SweepDirection::Clockwise,
            fire_while_turning: true,
            aim_tolerance: TAU / 180.0,
            seed: 0,
        }
    }
}

impl AgentConfig {
    /// Checks that every tunable is usable, returning the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wall_margin.is_finite() && self.wall_margin > 0.0) {
            return Err(ConfigError::InvalidMargin(self.wall_margin));
        }
        if !(self.min_standoff <= self.initial_standoff
            && self.initial_standoff <= self.max_standoff)
        {
            return Err(ConfigError::InvalidStandoff {
                min: self.min_standoff,
                max: self.max_standoff,
                initial: self.initial_standoff,
            });
        }
        if self.miss_step_min >= self.miss_step_max {
            return Err(ConfigError::InvalidMissStep {
                min: self.miss_step_min,
                max: self.miss_step_max,
            });
        }
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(ConfigError::InvalidProbability(self.flip_probability));
        }
        if !(self.power_range.is_finite() && self.power_range > 0.0) {
            return Err(ConfigError::InvalidPowerRange(self.power_range));
        }
        if !(self.radar_widen_divisor.is_finite() && self.radar_widen_divisor > 0.0) {
            return Err(ConfigError::InvalidRadarDivisor(self.radar_widen_divisor));
        }
        for (name, value) in [
            ("bias_horizon", self.bias_horizon),
            ("power_scale", self.power_scale),
            ("aim_tolerance", self.aim_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidTunable { name, value });
            }
        }
        Ok(())
    }
}

/// The play field and the margin that defines the near-wall zones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArenaBounds {
    width: f64,
    height: f64,
    margin: f64,
}

impl ArenaBounds {
    /// Fails unless `margin` is positive and leaves an interior on both axes.
    pub fn new(width: f64, height: f64, margin: f64) -> Result<ArenaBounds, ConfigError> {
        if !(margin.is_finite() && margin > 0.0) {
            return Err(ConfigError::InvalidMargin(margin));
        }
        if !(width > 2.0 * margin && height > 2.0 * margin) {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                margin,
            });
        }
        Ok(ArenaBounds {
            width,
            height,
            margin,
        })
    }

    pub fn from_host(host: &impl Host, margin: f64) -> Result<ArenaBounds, ConfigError> {
        let size = host.arena_size();
        ArenaBounds::new(size.x, size.y, margin)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Returns true if `position` is clear of every near-wall zone.
    pub fn is_interior(&self, position: Vec2) -> bool {
        position.x > self.margin
            && position.x < self.width - self.margin
            && position.y > self.margin
            && position.y < self.height - self.margin
    }
}
