#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
mod vec;

mod math {
    pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    /// Maps `angle` to the equivalent rotation in `(-π, π]`.
    ///
    /// Non-finite input yields NaN.
    pub fn normalize_angle(angle: f64) -> f64 {
        let c = angle.rem_euclid(TAU);
        if c > PI {
            c - TAU
        } else {
            c
        }
    }

    /// Returns the smallest rotation from angle `a` to angle `b`.
    ///
    /// A positive result is a clockwise rotation and negative is
    /// counter-clockwise.
    pub fn angle_diff(a: f64, b: f64) -> f64 {
        normalize_angle(b - a)
    }

    /// Returns a compass heading in degrees, in `[0, 360)`.
    pub fn heading_degrees(heading: f64) -> f64 {
        let d = heading.to_degrees().rem_euclid(360.0);
        if d >= 360.0 {
            0.0
        } else {
            d
        }
    }
}

/// Fixed laws of the arena simulation.
pub mod rules {
    /// Maximum speed of a robot (in distance units per tick).
    pub const MAX_VELOCITY: f64 = 8.0;

    /// Maximum radar rotation per tick (in radians).
    pub const RADAR_TURN_RATE: f64 = 45.0 * std::f64::consts::PI / 180.0;

    /// Smallest power a bullet can be fired with.
    pub const MIN_BULLET_POWER: f64 = 0.1;

    /// Largest power a bullet can be fired with.
    pub const MAX_BULLET_POWER: f64 = 3.0;

    /// Returns the speed of a bullet fired with `power`.
    ///
    /// Power is clamped to the legal range first, so the result is always
    /// between 11 and 19.7.
    pub fn bullet_speed(power: f64) -> f64 {
        20.0 - 3.0 * power.clamp(MIN_BULLET_POWER, MAX_BULLET_POWER)
    }
}

mod api {
    use crate::rules;
    use crate::vec::*;

    /// Queries the agent can make of the hosting simulation.
    ///
    /// Headings are compass bearings in radians: 0 points "up" the field and
    /// positive angles rotate clockwise.
    pub trait Host {
        /// Returns the current position.
        fn position(&self) -> Vec2;

        /// Returns the current body heading.
        fn heading(&self) -> f64;

        /// Returns the current signed speed.
        fn velocity(&self) -> f64;

        /// Returns the remaining energy.
        fn energy(&self) -> f64;

        /// Returns the heading of the gun.
        fn gun_heading(&self) -> f64;

        /// Returns the heading of the radar.
        fn radar_heading(&self) -> f64;

        /// Returns the width (`x`) and height (`y`) of the arena.
        fn arena_size(&self) -> Vec2;

        /// Returns the body rotation still pending from earlier ticks.
        fn turn_remaining(&self) -> f64;

        /// Returns the gun rotation still pending from earlier ticks.
        fn gun_turn_remaining(&self) -> f64;

        /// Returns the radar rotation still pending from earlier ticks.
        fn radar_turn_remaining(&self) -> f64;

        /// Returns the speed of a bullet fired with `power`.
        fn bullet_speed(&self, power: f64) -> f64 {
            rules::bullet_speed(power)
        }
    }

    /// A snapshot of everything [`Host`] exposes, gathered once per tick.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HostState {
        #[allow(missing_docs)]
        pub position: Vec2,
        #[allow(missing_docs)]
        pub heading: f64,
        #[allow(missing_docs)]
        pub velocity: f64,
        #[allow(missing_docs)]
        pub energy: f64,
        #[allow(missing_docs)]
        pub gun_heading: f64,
        #[allow(missing_docs)]
        pub radar_heading: f64,
        #[allow(missing_docs)]
        pub arena_size: Vec2,
        #[allow(missing_docs)]
        pub turn_remaining: f64,
        #[allow(missing_docs)]
        pub gun_turn_remaining: f64,
        #[allow(missing_docs)]
        pub radar_turn_remaining: f64,
    }

    impl Default for HostState {
        fn default() -> Self {
            HostState {
                position: vec2(400.0, 300.0),
                heading: 0.0,
                velocity: 0.0,
                energy: 100.0,
                gun_heading: 0.0,
                radar_heading: 0.0,
                arena_size: vec2(800.0, 600.0),
                turn_remaining: 0.0,
                gun_turn_remaining: 0.0,
                radar_turn_remaining: 0.0,
            }
        }
    }

    impl Host for HostState {
        fn position(&self) -> Vec2 {
            self.position
        }

        fn heading(&self) -> f64 {
            self.heading
        }

        fn velocity(&self) -> f64 {
            self.velocity
        }

        fn energy(&self) -> f64 {
            self.energy
        }

        fn gun_heading(&self) -> f64 {
            self.gun_heading
        }

        fn radar_heading(&self) -> f64 {
            self.radar_heading
        }

        fn arena_size(&self) -> Vec2 {
            self.arena_size
        }

        fn turn_remaining(&self) -> f64 {
            self.turn_remaining
        }

        fn gun_turn_remaining(&self) -> f64 {
            self.gun_turn_remaining
        }

        fn radar_turn_remaining(&self) -> f64 {
            self.radar_turn_remaining
        }
    }
}

mod event {
    /// An opponent seen by the radar this tick.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ScannedRobot {
        /// Bearing relative to our body heading (in radians).
        pub bearing: f64,
        /// Distance between the two robots.
        pub distance: f64,
        /// The opponent's absolute heading (in radians).
        pub heading: f64,
        /// The opponent's signed speed.
        pub velocity: f64,
        /// The opponent's remaining energy.
        pub energy: f64,
    }

    /// Notifications delivered by the host during a tick.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Event {
        /// The radar swept over an opponent.
        Scanned(ScannedRobot),
        /// One of our bullets left the arena without hitting anything.
        BulletMissed,
        /// One of our bullets collided with an opponent's bullet.
        BulletHitBullet,
        /// One of our bullets hit the opponent.
        BulletHit {
            /// The opponent's energy after the hit.
            energy: f64,
        },
    }
}

mod command {
    /// Requests for the host, committed together at the end of a tick.
    ///
    /// Writing the same command twice in a tick keeps the last value.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Commands {
        /// Signed body rotation (in radians, positive is clockwise).
        pub body_turn: Option<f64>,
        /// Signed gun rotation (in radians).
        pub gun_turn: Option<f64>,
        /// Signed radar rotation (in radians).
        pub radar_turn: Option<f64>,
        /// Signed distance to travel. The host clamps the resulting speed.
        pub ahead: Option<f64>,
        /// Power of a bullet to fire.
        pub fire: Option<f64>,
        /// Keep the gun still while the body turns.
        pub independent_gun: bool,
        /// Keep the radar still while the body and gun turn.
        pub independent_radar: bool,
    }

    impl Commands {
        /// Rotates the body by `angle` radians.
        pub fn turn(&mut self, angle: f64) {
            self.body_turn = Some(angle);
        }

        /// Rotates the gun by `angle` radians.
        pub fn turn_gun(&mut self, angle: f64) {
            self.gun_turn = Some(angle);
        }

        /// Rotates the radar by `angle` radians.
        pub fn turn_radar(&mut self, angle: f64) {
            self.radar_turn = Some(angle);
        }

        /// Moves `distance` units along the body heading (negative is
        /// backwards).
        pub fn ahead(&mut self, distance: f64) {
            self.ahead = Some(distance);
        }

        /// Fires a bullet with the given power.
        pub fn fire(&mut self, power: f64) {
            self.fire = Some(power);
        }

        /// Returns true if nothing has been requested.
        pub fn is_empty(&self) -> bool {
            *self == Commands::default()
        }
    }
}

/// All APIs.
pub mod prelude {
    #[doc(inline)]
    pub use super::api::*;
    #[doc(inline)]
    pub use super::command::*;
    #[doc(inline)]
    pub use super::event::*;
    #[doc(inline)]
    pub use super::math::*;
    #[doc(inline)]
    pub use super::rules;
    #[doc(inline)]
    pub use super::vec::*;
}
