//! A reactive duelling agent.
//!
//! [`CombatAgent`] reacts to the events a host delivers each tick: it locks
//! the radar onto the opponent, leads its shots, orbits at an adaptive
//! stand-off distance and glides along the arena walls. Everything it wants
//! done is written to a [`prelude::Commands`] buffer that the host commits at
//! the end of the tick.

pub mod adaptive;
pub mod agent;
pub mod config;
pub mod geometry;
pub mod orbit;
pub mod radar;
pub mod rng;
pub mod targeting;
mod tick;
pub mod walls;

pub use standoff_api::prelude;

pub use agent::{AgentState, CombatAgent, OrbitDirection};
pub use config::{AgentConfig, ArenaBounds, ConfigError};
