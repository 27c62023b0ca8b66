//! Circle the opponent while drifting towards the preferred distance.

use crate::agent::{AgentState, OrbitDirection};
use crate::config::{AgentConfig, ArenaBounds};
use crate::geometry::{absolute_bearing, OpponentObservation};
use standoff_api::prelude::*;

/// Commanded distance per tick, as a multiple of the maximum velocity. The
/// host clamps it, so this mostly keeps the throttle saturated.
pub const SPEED_COEFFICIENT: f64 = 2.5;

/// Returns how strongly to lean towards (+) or away from (-) the opponent,
/// in `[-1, 1]`.
pub fn standoff_bias(distance: f64, standoff: f64, horizon: f64) -> f64 {
    let span = horizon - standoff;
    let offset = distance - standoff;
    if span <= 0.0 {
        return if offset > 0.0 {
            1.0
        } else if offset < 0.0 {
            -1.0
        } else {
            0.0
        };
    }
    (offset / span).clamp(-1.0, 1.0)
}

/// Returns the body turn that puts the opponent abeam, tilted by up to 45°
/// to close or open the distance.
///
/// Near a wall the tilt is dropped and only the perpendicular is kept.
pub fn desired_turn(
    state: &AgentState,
    target: &OpponentObservation,
    standoff: f64,
    arena: &ArenaBounds,
    config: &AgentConfig,
) -> f64 {
    let bearing = absolute_bearing(state.position, target.position);
    let bias = if arena.is_interior(state.position) {
        standoff_bias(target.distance, standoff, config.bias_horizon)
    } else {
        0.0
    };
    normalize_angle(bearing - state.heading) - FRAC_PI_2 + FRAC_PI_4 * bias * state.direction.sign()
}

/// Returns the signed distance to request along the body heading.
pub fn orbit_speed(direction: OrbitDirection, wall_factor: f64) -> f64 {
    rules::MAX_VELOCITY * (SPEED_COEFFICIENT * wall_factor) * direction.sign()
}
