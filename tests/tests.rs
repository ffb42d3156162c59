use probesim::simulation::params::Parameters;
use probesim::simulation::states::{MassBody, NVec2, Particle, Probe};
use probesim::simulation::forces::{body_acceleration, gravity_acceleration};
use probesim::simulation::integrator::{apply_gravity, rotate, step_frame, thrust, update_position, ControlInput};
use probesim::simulation::particles::{emit_exhaust, update_particles, EXHAUST_LIFE, EXHAUST_PER_FRAME};
use probesim::simulation::scenario::Scenario;
use probesim::configuration::config::ScenarioConfig;

/// Default motion parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        rotation_speed: 180.0,
        thrust_acceleration: 100.0,
        max_vx: 300.0,
        max_vy: 300.0,
        trail_length: 500,
        scale_factor: 0.3,
        G: 66.743,
    }
}

/// Probe at the origin, stationary, facing +x
pub fn test_probe(p: &Parameters) -> Probe {
    Probe::new(NVec2::zeros(), p.scale_factor)
}

/// The default scenario's first planet, on the +x axis
pub fn blue_planet() -> MassBody {
    MassBody::new(NVec2::new(300.0, 0.0), 50000.0, 50.0, 66.743, [0.0, 0.0, 1.0])
}

/// The default scenario's full roster
pub fn three_planets() -> Vec<MassBody> {
    vec![
        blue_planet(),
        MassBody::new(NVec2::new(-400.0, 150.0), 70000.0, 60.0, 66.743, [0.0, 0.0, 0.545]),
        MassBody::new(NVec2::new(200.0, -300.0), 60000.0, 55.0, 66.743, [0.545, 0.0, 0.0]),
    ]
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_superposition() {
    let p = test_params();
    let probe = test_probe(&p);
    let masses = three_planets();
    let clearance = probe.min_clearance();

    let total = gravity_acceleration(&masses, probe.x, clearance);

    let mut sum = NVec2::zeros();
    for body in &masses {
        sum += body_acceleration(body, probe.x, clearance);
    }
    assert!((total - sum).norm() < 1e-12, "accumulation differs from per-body sum");

    // Order independence up to rounding
    let mut reversed = masses.clone();
    reversed.reverse();
    let total_rev = gravity_acceleration(&reversed, probe.x, clearance);
    assert!((total - total_rev).norm() < 1e-9, "body order changed the result");
}

#[test]
fn gravity_points_toward_body() {
    let p = test_params();
    let probe = test_probe(&p);
    let body = blue_planet();

    let a = body_acceleration(&body, probe.x, probe.min_clearance());
    let r = body.x - probe.x;

    assert!(r.norm() > 0.0);
    assert!(a.dot(&r) > 0.0, "acceleration is not toward the body");
}

#[test]
fn gravity_inverse_square() {
    // Two probes at r and 2r from the same body, both well outside the floor
    let body = MassBody::new(NVec2::zeros(), 50000.0, 1.0, 66.743, [0.0, 0.0, 1.0]);

    let a_r = body_acceleration(&body, NVec2::new(100.0, 0.0), 0.0);
    let a_2r = body_acceleration(&body, NVec2::new(200.0, 0.0), 0.0);

    let ratio = a_r.norm() / a_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "expected ~4x, got {}", ratio);
}

#[test]
fn softening_floor_magnitude_exact() {
    let p = test_params();
    let probe = test_probe(&p);
    let body = blue_planet();
    let clearance = probe.min_clearance();
    let min_distance = body.radius + clearance;

    // Probe well inside the floor distance
    let point = NVec2::new(body.x.x - 10.0, body.x.y);
    let a = body_acceleration(&body, point, clearance);

    let expected = body.G * body.m / (min_distance * min_distance);
    assert!(
        (a.norm() - expected).abs() < 1e-9,
        "floored magnitude {} != {}",
        a.norm(),
        expected
    );
    // Still points toward the body
    assert!(a.x > 0.0);
}

#[test]
fn gravity_is_never_clamped() {
    let p = test_params();
    let mut probe = test_probe(&p);
    // An absurdly heavy body close by drives velocity far past the caps
    let masses = vec![MassBody::new(
        NVec2::new(100.0, 0.0),
        5.0e9,
        10.0,
        66.743,
        [0.0, 0.0, 1.0],
    )];

    apply_gravity(&mut probe, &masses, 1.0);
    assert!(
        probe.v.x > p.max_vx,
        "gravity should be allowed to exceed the velocity cap"
    );
}

// ==================================================================================
// Probe motion tests
// ==================================================================================

#[test]
fn thrust_one_second_from_rest() {
    let p = test_params();
    let mut probe = test_probe(&p);

    thrust(&mut probe, 1.0, &p);

    assert!((probe.v.x - 100.0).abs() < 1e-12, "vx = {}", probe.v.x);
    assert!(probe.v.y.abs() < 1e-12, "vy = {}", probe.v.y);
}

#[test]
fn thrust_clamps_at_cap() {
    let p = test_params();
    let mut probe = test_probe(&p);

    // 100 u/s per call: the cap is hit on the third call and held after
    for _ in 0..5 {
        thrust(&mut probe, 1.0, &p);
        assert!(probe.v.x <= p.max_vx);
        assert!(probe.v.y.abs() <= p.max_vy);
    }
    assert_eq!(probe.v.x, 300.0, "cap must be exact");
}

#[test]
fn thrust_reclamps_gravity_overshoot() {
    let p = test_params();
    let mut probe = test_probe(&p);

    // Velocity pushed past the cap (as gravity is allowed to do)
    probe.v.x = 450.0;
    probe.v.y = -450.0;

    thrust(&mut probe, 0.01, &p);

    assert_eq!(probe.v.x, 300.0, "thrust must pull vx back to the cap");
    assert_eq!(probe.v.y, -300.0, "thrust must pull vy back to the cap");
}

#[test]
fn rotate_direction_scales_rate() {
    let p = test_params();
    let mut probe = test_probe(&p);

    // +1 increases the angle: 180 deg/s for 0.1 s
    rotate(&mut probe, 1.0, 0.1, &p);
    assert!((probe.angle - 18.0).abs() < 1e-12);

    // -1 turns the other way
    rotate(&mut probe, -1.0, 0.2, &p);
    assert!((probe.angle - 342.0).abs() < 1e-12);
}

#[test]
fn rotate_keeps_angle_normalized() {
    let p = test_params();
    let mut probe = test_probe(&p);

    // Mixed directions and durations, including full wraps both ways
    let spins = [
        (1.0, 1.0),
        (1.0, 1.0),
        (-1.0, 3.5),
        (1.0, 0.25),
        (-1.0, 0.125),
        (1.0, 10.0),
    ];
    for (direction, dt) in spins {
        rotate(&mut probe, direction, dt, &p);
        assert!(
            (0.0..360.0).contains(&probe.angle),
            "angle {} out of range",
            probe.angle
        );
    }
}

#[test]
fn trajectory_bounded_to_recent() {
    let p = test_params();
    let mut probe = test_probe(&p);
    probe.v = NVec2::new(1.0, 0.0);

    for _ in 0..600 {
        update_position(&mut probe, 1.0, &p);
    }

    // Exactly the window size, holding positions 101..=600 in order
    assert_eq!(probe.trajectory.len(), 500);
    assert!((probe.trajectory.front().unwrap().x - 101.0).abs() < 1e-9);
    assert!((probe.trajectory.back().unwrap().x - 600.0).abs() < 1e-9);
    for (a, b) in probe.trajectory.iter().zip(probe.trajectory.iter().skip(1)) {
        assert!(b.x > a.x, "samples out of chronological order");
    }
}

#[test]
fn sixty_frames_of_pull_match_direct_integration() {
    let p = test_params();
    let mut probe = test_probe(&p);
    let masses = vec![blue_planet()];
    let dt = 1.0 / 60.0;

    // Reference: the same semi-implicit Euler scheme with the acceleration
    // written out by hand
    let body = &masses[0];
    let clearance = probe.min_clearance();
    let mut ref_x = probe.x;
    let mut ref_v = probe.v;

    let mut prev_vx = 0.0;
    for _ in 0..60 {
        apply_gravity(&mut probe, &masses, dt);
        update_position(&mut probe, dt, &p);

        assert!(probe.v.x > prev_vx, "pull toward +x should grow vx every frame");
        prev_vx = probe.v.x;

        let r = body.x - ref_x;
        let dist = r.norm();
        let min_distance = body.radius + clearance;
        let d = if dist < min_distance { min_distance } else { dist };
        let a = r * (body.G * body.m / (d * d) / dist);
        ref_v += a * dt;
        ref_x += ref_v * dt;
    }

    assert!((probe.x - ref_x).norm() < 1e-9, "position drifted from reference");
    assert!((probe.v - ref_v).norm() < 1e-9, "velocity drifted from reference");
    assert!(probe.x.x > 0.0 && probe.v.x > 0.0);
}

#[test]
fn step_frame_applies_canonical_order() {
    let p = test_params();
    let masses = vec![blue_planet()];
    let input = ControlInput {
        direction: 1.0,
        thrusting: true,
    };
    let dt = 1.0 / 60.0;

    let mut probe = test_probe(&p);
    step_frame(&mut probe, &masses, &input, dt, &p);

    // Same result as calling the operations by hand, in order
    let mut by_hand = test_probe(&p);
    rotate(&mut by_hand, 1.0, dt, &p);
    thrust(&mut by_hand, dt, &p);
    apply_gravity(&mut by_hand, &masses, dt);
    update_position(&mut by_hand, dt, &p);

    assert!((probe.x - by_hand.x).norm() < 1e-12);
    assert!((probe.v - by_hand.v).norm() < 1e-12);
    assert!((probe.angle - by_hand.angle).abs() < 1e-12);
    assert_eq!(probe.trajectory.len(), 1);
}

// ==================================================================================
// Thruster and exhaust tests
// ==================================================================================

#[test]
fn thruster_position_tracks_facing() {
    let p = test_params();
    let mut probe = test_probe(&p);
    let half_w = probe.width / 2.0;

    // Facing +x: the nozzle sits half a width behind the center
    let nozzle = probe.thruster_position();
    assert!((nozzle - NVec2::new(-half_w, 0.0)).norm() < 1e-9);

    // Quarter turn moves it to the -y side
    probe.angle = 90.0;
    let nozzle = probe.thruster_position();
    assert!((nozzle - NVec2::new(0.0, -half_w)).norm() < 1e-9);
}

#[test]
fn exhaust_burst_shape() {
    let p = test_params();
    let probe = test_probe(&p);
    let mut rng = rand::thread_rng();
    let mut particles = Vec::new();

    emit_exhaust(&mut particles, &probe, p.scale_factor, &mut rng);

    assert_eq!(particles.len(), EXHAUST_PER_FRAME);
    let origin = probe.thruster_position();
    for part in &particles {
        assert!((part.x - origin).norm() < 1e-12, "not emitted at the nozzle");
        assert_eq!(part.life, EXHAUST_LIFE);
        let speed = part.v.norm();
        assert!((50.0..150.0).contains(&speed), "speed {} out of range", speed);
        // Probe faces +x, so exhaust streams backward
        assert!(part.v.x < 0.0);
    }
}

#[test]
fn particle_linear_motion_and_culling() {
    let mut particles = vec![
        Particle {
            x: NVec2::zeros(),
            v: NVec2::new(10.0, -5.0),
            life: 1.0,
            size: 1.0,
            color: [1.0, 1.0, 0.0],
        },
        Particle {
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            life: 0.05,
            size: 1.0,
            color: [1.0, 0.0, 0.0],
        },
    ];

    // The short-lived particle dies in the same frame its life crosses zero
    update_particles(&mut particles, 0.25);
    assert_eq!(particles.len(), 1);

    // Pure linear motion, no forces
    assert!((particles[0].x - NVec2::new(2.5, -1.25)).norm() < 1e-12);

    // Cumulative dt reaching the full lifetime kills the rest
    for _ in 0..3 {
        update_particles(&mut particles, 0.25);
    }
    assert!(particles.is_empty());
}

// ==================================================================================
// Scenario and configuration tests
// ==================================================================================

#[test]
fn default_scenario_builds_from_yaml() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/default.yaml");
    let yaml = std::fs::read_to_string(path).expect("default scenario readable");
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("default scenario parses");

    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.masses.len(), 3);
    assert!((scenario.masses[0].G - 66.743).abs() < 1e-12);
    assert!((scenario.masses[1].m - 70000.0).abs() < 1e-12);
    assert!((scenario.parameters.thrust_acceleration - 100.0).abs() < 1e-12);
    assert_eq!(scenario.parameters.trail_length, 500);
    assert!((scenario.probe.width - 12.0).abs() < 1e-9);
    assert!((scenario.probe.height - 18.0).abs() < 1e-9);
    assert!(scenario.particles.is_empty());
    assert!(!scenario.accomplished);
}

#[test]
fn mission_latches_inside_target_radius() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/default.yaml");
    let yaml = std::fs::read_to_string(path).expect("default scenario readable");
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("default scenario parses");
    let mut scenario = Scenario::build_scenario(cfg);

    assert!(!scenario.check_mission(), "latched before reaching the target");

    scenario.probe.x = scenario.target.x + NVec2::new(scenario.target.radius / 2.0, 0.0);
    assert!(scenario.check_mission());

    // Latched: moving away does not clear it
    scenario.probe.x = NVec2::zeros();
    assert!(scenario.check_mission());
}
