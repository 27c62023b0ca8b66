use crate::adaptive::{Adaptive, StandoffPreference};
use crate::config::{AgentConfig, ArenaBounds, ConfigError};
use crate::geometry::OpponentObservation;
use crate::radar::RadarSweep;
use crate::{orbit, targeting, walls};
use serde::{Deserialize, Serialize};
use standoff_api::prelude::*;

/// Which way the agent circles the opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl OrbitDirection {
    /// +1 for clockwise, -1 for counter-clockwise.
    pub fn sign(self) -> f64 {
        match self {
            OrbitDirection::Clockwise => 1.0,
            OrbitDirection::CounterClockwise => -1.0,
        }
    }

    /// Returns the opposite direction.
    pub fn reversed(self) -> OrbitDirection {
        match self {
            OrbitDirection::Clockwise => OrbitDirection::CounterClockwise,
            OrbitDirection::CounterClockwise => OrbitDirection::Clockwise,
        }
    }
}

/// Our own pose plus the orbit direction, threaded through every controller.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    pub position: Vec2,
    pub heading: f64,
    pub speed: f64,
    pub direction: OrbitDirection,
}

impl Default for AgentState {
    fn default() -> Self {
        AgentState {
            position: vec2(0.0, 0.0),
            heading: 0.0,
            speed: 0.0,
            direction: OrbitDirection::Clockwise,
        }
    }
}

impl AgentState {
    /// Refreshes the pose from the host. The orbit direction is ours.
    pub fn sync(&mut self, host: &impl Host) {
        self.position = host.position();
        self.heading = host.heading();
        self.speed = host.velocity();
    }
}

/// A duelling agent driven by host callbacks.
///
/// Every callback writes into the command buffer for the current tick; see
/// [`CombatAgent::advance_tick`] for the usual driver.
pub struct CombatAgent {
    config: AgentConfig,
    arena: ArenaBounds,
    state: AgentState,
    adaptive: Adaptive,
    radar: RadarSweep,
    pub(crate) commands: Commands,
    pub(crate) started: bool,
}

impl CombatAgent {
    /// Validates `config` and builds an agent for `arena`.
    pub fn new(config: AgentConfig, arena: ArenaBounds) -> Result<CombatAgent, ConfigError> {
        config.validate()?;
        log::info!(
            "seed {} arena {}x{} margin {}",
            config.seed,
            arena.width(),
            arena.height(),
            arena.margin()
        );
        Ok(CombatAgent {
            adaptive: Adaptive::new(&config),
            radar: RadarSweep::new(config.sweep_direction, config.radar_widen_divisor),
            state: AgentState::default(),
            commands: Commands::default(),
            started: false,
            config,
            arena,
        })
    }

    /// Builds an agent for the arena the host reports, using the configured
    /// wall margin.
    pub fn for_host(config: AgentConfig, host: &impl Host) -> Result<CombatAgent, ConfigError> {
        let arena = ArenaBounds::from_host(host, config.wall_margin)?;
        let mut agent = CombatAgent::new(config, arena)?;
        agent.state.sync(host);
        Ok(agent)
    }

    /// The configuration the agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The arena and its wall margin.
    pub fn arena(&self) -> &ArenaBounds {
        &self.arena
    }

    /// Our pose as of the last callback, plus the orbit direction.
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// The current orbit direction.
    pub fn direction(&self) -> OrbitDirection {
        self.state.direction
    }

    /// The current preferred distance to the opponent.
    pub fn standoff(&self) -> StandoffPreference {
        self.adaptive.standoff()
    }

    /// Opponent energy from the latest scan or hit.
    pub fn last_opponent_energy(&self) -> f64 {
        self.adaptive.last_opponent_energy()
    }

    /// Commands queued so far this tick.
    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    /// Runs once per tick, after any events: keeps the radar moving.
    pub fn on_tick(&mut self, host: &impl Host) {
        self.state.sync(host);
        if !self.started {
            self.commands.independent_gun = true;
            self.commands.independent_radar = true;
            self.started = true;
        }
        if self.radar.sweep(host, &mut self.commands) {
            log::trace!("radar idle, sweeping");
        }
    }

    /// Handles a radar detection: lock the radar, aim and fire, then orbit.
    pub fn on_detect(&mut self, host: &impl Host, scan: &ScannedRobot) {
        self.state.sync(host);
        let target = OpponentObservation::from_scan(&self.state, scan);

        self.commands
            .turn_radar(self.radar.lock(host.radar_heading(), target.angle_to_enemy));

        let solution = targeting::aim(host, &target, &self.config);
        self.commands.turn_gun(solution.gun_turn);
        if solution.power > 0.0
            && (self.config.fire_while_turning
                || solution.gun_turn.abs() <= self.config.aim_tolerance)
        {
            self.commands.fire(solution.power);
        }

        let desired = orbit::desired_turn(
            &self.state,
            &target,
            self.adaptive.standoff().get(),
            &self.arena,
            &self.config,
        );
        let turn = walls::turn_smoothing(&mut self.state, &self.arena, desired);
        let wall_factor = walls::speed_smoothing(&self.state, &self.arena);
        self.commands.turn(normalize_angle(turn));

        self.adaptive.observe_energy(&mut self.state, target.energy);

        self.commands
            .ahead(orbit::orbit_speed(self.state.direction, wall_factor));
    }

    /// One of our bullets missed: close in on the opponent.
    pub fn on_bullet_missed(&mut self) {
        self.adaptive.on_bullet_missed();
    }

    /// One of our bullets hit one of theirs: maybe reverse the orbit.
    pub fn on_bullet_collision(&mut self) {
        self.adaptive.on_bullet_collision(&mut self.state);
    }

    /// Our bullet hit the opponent, leaving it with `energy`.
    pub fn on_hit(&mut self, energy: f64) {
        self.adaptive.on_bullet_hit(energy);
    }
}
