use approx::assert_abs_diff_eq;
use standoff_ai::prelude::*;
use standoff_ai::{AgentConfig, CombatAgent, OrbitDirection};
use test_log::test;

fn agent_with(config: AgentConfig, host: &HostState) -> CombatAgent {
    CombatAgent::for_host(config, host).unwrap()
}

fn scan(bearing: f64, distance: f64, energy: f64) -> Event {
    Event::Scanned(ScannedRobot {
        bearing,
        distance,
        heading: 0.0,
        velocity: 0.0,
        energy,
    })
}

#[test]
fn test_turret_setup_only_on_first_tick() {
    let host = HostState::default();
    let mut agent = agent_with(AgentConfig::default(), &host);
    let first = agent.advance_tick(&host, &[]);
    assert!(first.independent_gun && first.independent_radar);
    for _ in 0..5 {
        let commands = agent.advance_tick(&host, &[]);
        assert!(!commands.independent_gun && !commands.independent_radar);
    }
}

#[test]
fn test_sweeps_only_when_radar_idle() {
    let mut host = HostState::default();
    let mut agent = agent_with(AgentConfig::default(), &host);
    assert_eq!(agent.advance_tick(&host, &[]).radar_turn, Some(TAU));

    host.radar_turn_remaining = 1.5;
    assert_eq!(agent.advance_tick(&host, &[]).radar_turn, None);

    host.radar_turn_remaining = 0.0;
    let commands = agent.advance_tick(&host, &[scan(0.5, 300.0, 100.0)]);
    assert_abs_diff_eq!(
        commands.radar_turn.unwrap(),
        0.5 + rules::RADAR_TURN_RATE / 2.5,
        epsilon = 1e-12
    );

    let config = AgentConfig {
        sweep_direction: standoff_ai::radar::SweepDirection::CounterClockwise,
        ..Default::default()
    };
    let mut agent = agent_with(config, &host);
    assert_eq!(agent.advance_tick(&host, &[]).radar_turn, Some(-TAU));
}

#[test]
fn test_detection_commands() {
    let host = HostState::default();
    let mut agent = agent_with(AgentConfig::default(), &host);
    let event = Event::Scanned(ScannedRobot {
        bearing: FRAC_PI_2,
        distance: 300.0,
        heading: 0.0,
        velocity: 8.0,
        energy: 100.0,
    });
    let commands = agent.advance_tick(&host, &[event]);

    assert_abs_diff_eq!(
        commands.gun_turn.unwrap(),
        FRAC_PI_2 + (-8.0f64 / 14.0).asin(),
        epsilon = 1e-12
    );
    assert_eq!(commands.fire, Some(2.0));
    // Abeam plus a third of the closing tilt, since 300 is between the
    // 250 stand-off and the 400 horizon.
    assert_abs_diff_eq!(commands.body_turn.unwrap(), FRAC_PI_4 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(commands.ahead.unwrap(), 20.0, epsilon = 1e-12);
}

#[test]
fn test_no_fire_out_of_range() {
    let host = HostState::default();
    let mut agent = agent_with(AgentConfig::default(), &host);
    let commands = agent.advance_tick(&host, &[scan(0.0, 700.0, 100.0)]);
    assert_eq!(commands.fire, None);
    assert!(commands.gun_turn.is_some());
}

#[test]
fn test_holds_fire_until_aimed() {
    let config = AgentConfig {
        fire_while_turning: false,
        ..Default::default()
    };
    let mut host = HostState::default();
    let mut agent = agent_with(config, &host);
    let commands = agent.advance_tick(&host, &[scan(FRAC_PI_2, 300.0, 100.0)]);
    assert_eq!(commands.fire, None);

    host.gun_heading = FRAC_PI_2;
    let commands = agent.advance_tick(&host, &[scan(FRAC_PI_2, 300.0, 100.0)]);
    assert_eq!(commands.fire, Some(2.0));
}

#[test]
fn test_standoff_stays_in_bounds() {
    let host = HostState::default();
    let mut agent = agent_with(AgentConfig::default(), &host);
    let mut previous = agent.standoff().get();
    for _ in 0..50 {
        agent.advance_tick(&host, &[Event::BulletMissed]);
        let standoff = agent.standoff().get();
        assert!(standoff <= previous);
        assert!(standoff >= 50.0);
        previous = standoff;
    }
    assert_eq!(previous, 50.0);
}

#[test]
fn test_collision_flip_rate() {
    let host = HostState::default();
    let mut agent = agent_with(
        AgentConfig {
            seed: 7,
            ..Default::default()
        },
        &host,
    );
    let trials = 10000;
    let mut flips = 0;
    for _ in 0..trials {
        let before = agent.direction();
        agent.on_bullet_collision();
        if agent.direction() != before {
            flips += 1;
        }
    }
    let rate = flips as f64 / trials as f64;
    assert!((0.55..=0.65).contains(&rate), "flip rate {rate}");
}

#[test]
fn test_opponent_fire_reverses_orbit() {
    let host = HostState::default();
    let always = AgentConfig {
        flip_probability: 1.0,
        ..Default::default()
    };

    let mut agent = agent_with(always.clone(), &host);
    let commands = agent.advance_tick(&host, &[scan(FRAC_PI_2, 300.0, 100.0)]);
    assert_eq!(agent.direction(), OrbitDirection::Clockwise);
    assert_abs_diff_eq!(commands.ahead.unwrap(), 20.0, epsilon = 1e-12);

    let commands = agent.advance_tick(&host, &[scan(FRAC_PI_2, 300.0, 97.0)]);
    assert_eq!(agent.direction(), OrbitDirection::CounterClockwise);
    assert_abs_diff_eq!(commands.ahead.unwrap(), -20.0, epsilon = 1e-12);
    assert_eq!(agent.last_opponent_energy(), 97.0);

    let never = AgentConfig {
        flip_probability: 0.0,
        ..Default::default()
    };
    let mut agent = agent_with(never, &host);
    agent.advance_tick(&host, &[scan(FRAC_PI_2, 300.0, 90.0)]);
    assert_eq!(agent.direction(), OrbitDirection::Clockwise);
    assert_eq!(agent.last_opponent_energy(), 90.0);
}

#[test]
fn test_hit_is_not_mistaken_for_fire() {
    let host = HostState::default();
    let mut agent = agent_with(
        AgentConfig {
            flip_probability: 1.0,
            ..Default::default()
        },
        &host,
    );
    agent.advance_tick(
        &host,
        &[Event::BulletHit { energy: 84.0 }, scan(FRAC_PI_2, 300.0, 84.0)],
    );
    assert_eq!(agent.direction(), OrbitDirection::Clockwise);
    assert_eq!(agent.last_opponent_energy(), 84.0);
}

#[test]
fn test_config_from_json() {
    let config: AgentConfig = serde_json::from_str(
        r#"{"wall_margin": 120, "flip_probability": 0.5, "sweep_direction": "CounterClockwise", "seed": 3}"#,
    )
    .unwrap();
    assert_eq!(config.wall_margin, 120.0);
    assert_eq!(config.flip_probability, 0.5);
    assert_eq!(config.seed, 3);
    assert_eq!(config.initial_standoff, 250.0);
    assert_eq!(config.validate(), Ok(()));

    let host = HostState::default();
    let agent = agent_with(config, &host);
    assert_eq!(agent.arena().margin(), 120.0);
}
