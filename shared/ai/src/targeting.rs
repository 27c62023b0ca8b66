//! Lead targeting against an opponent moving at constant lateral speed.

use crate::config::AgentConfig;
use crate::geometry::OpponentObservation;
use standoff_api::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiringSolution {
    pub power: f64,
    pub bullet_speed: f64,
    /// Lead angle added to the direct bearing.
    pub correction: f64,
    /// Normalized rotation that points the gun at the lead.
    pub gun_turn: f64,
}

/// Picks a bullet power that grows as the opponent gets closer.
///
/// The result is never negative and never exceeds `energy`.
pub fn bullet_power(distance: f64, energy: f64, config: &AgentConfig) -> f64 {
    let power = (config.power_scale * (1.0 - distance / config.power_range)).min(energy);
    power.clamp(0.0, energy.max(0.0))
}

/// Returns the maximum escape angle for a target moving at `lateral` speed
/// across the line of fire.
///
/// A target faster than the bullet saturates at ±π/2.
pub fn escape_correction(lateral: f64, bullet_speed: f64) -> f64 {
    if !(bullet_speed.is_finite() && bullet_speed > 0.0) {
        return if lateral > 0.0 {
            FRAC_PI_2
        } else if lateral < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        };
    }
    (lateral / bullet_speed).clamp(-1.0, 1.0).asin()
}

pub fn aim(host: &impl Host, target: &OpponentObservation, config: &AgentConfig) -> FiringSolution {
    let power = bullet_power(target.distance, host.energy(), config);
    let bullet_speed = host.bullet_speed(power);
    let correction = escape_correction(target.lateral_velocity(), bullet_speed);
    let gun_turn = normalize_angle(target.angle_to_enemy - host.gun_heading() + correction);
    log::trace!(
        "power {:.2} speed {:.2} correction {:.3} gun turn {:.3}",
        power,
        bullet_speed,
        correction,
        gun_turn
    );
    FiringSolution {
        power,
        bullet_speed,
        correction,
        gun_turn,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bullet_power() {
        let config = AgentConfig::default();
        assert_abs_diff_eq!(bullet_power(0.0, 100.0, &config), 4.0);
        assert_abs_diff_eq!(bullet_power(300.0, 100.0, &config), 2.0);
        assert_abs_diff_eq!(bullet_power(300.0, 0.5, &config), 0.5);
        assert_abs_diff_eq!(bullet_power(600.0, 100.0, &config), 0.0);
        assert_abs_diff_eq!(bullet_power(900.0, 100.0, &config), 0.0);
        assert_abs_diff_eq!(bullet_power(100.0, -1.0, &config), 0.0);
    }

    #[test]
    fn test_escape_correction() {
        assert_abs_diff_eq!(escape_correction(0.0, 11.0), 0.0);
        assert_abs_diff_eq!(escape_correction(5.5, 11.0), PI / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(escape_correction(30.0, 11.0), FRAC_PI_2);
        assert_abs_diff_eq!(escape_correction(-30.0, 11.0), -FRAC_PI_2);
        assert_abs_diff_eq!(escape_correction(3.0, 0.0), FRAC_PI_2);
        assert_abs_diff_eq!(escape_correction(0.0, f64::NAN), 0.0);
    }
}
