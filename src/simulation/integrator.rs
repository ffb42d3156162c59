//! Per-frame motion updates for the probe
//!
//! Each operation takes the probe, the measured frame dt in seconds, and the
//! scenario `Parameters`. `step_frame` applies them in the canonical order:
//! rotate, thrust while held, gravity, position. Velocity is clamped inside
//! `thrust` only - gravity may push it past the caps.

use super::forces::gravity_acceleration;
use super::params::Parameters;
use super::states::{MassBody, Probe};

/// Player intent sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlInput {
    pub direction: f64, // -1.0, 0.0 or +1.0; +1 increases the angle
    pub thrusting: bool,
}

/// Turn the probe: angle += direction * rotation_speed * dt
///
/// The direction scales the rate directly, with no inversion. The angle is
/// renormalized into [0, 360) after every call. dt >= 0 is the caller's
/// responsibility.
pub fn rotate(probe: &mut Probe, direction: f64, dt: f64, params: &Parameters) {
    probe.angle += direction * params.rotation_speed * dt;
    probe.angle = probe.angle.rem_euclid(360.0);
}

/// Accelerate along the current facing, then clamp each velocity component
///
/// The clamp is unconditional: a thrust frame pulls velocity back inside
/// [-max, max] even when gravity pushed it past the cap just before.
pub fn thrust(probe: &mut Probe, dt: f64, params: &Parameters) {
    let rad = probe.angle.to_radians();

    // v += a * dt along (cos, sin) of the facing
    probe.v.x += rad.cos() * params.thrust_acceleration * dt;
    probe.v.y += rad.sin() * params.thrust_acceleration * dt;

    probe.v.x = probe.v.x.clamp(-params.max_vx, params.max_vx);
    probe.v.y = probe.v.y.clamp(-params.max_vy, params.max_vy);
}

/// Add the accumulated pull of all bodies to the velocity. Never clamped.
pub fn apply_gravity(probe: &mut Probe, masses: &[MassBody], dt: f64) {
    let a = gravity_acceleration(masses, probe.x, probe.min_clearance());
    probe.v += a * dt;
}

/// Semi-implicit Euler position step, recording one trail sample
///
/// The trail is a fixed-capacity FIFO: once `trail_length` samples are held,
/// the oldest is evicted for each new one.
pub fn update_position(probe: &mut Probe, dt: f64, params: &Parameters) {
    probe.x += probe.v * dt;

    probe.trajectory.push_back(probe.x);
    while probe.trajectory.len() > params.trail_length {
        probe.trajectory.pop_front();
    }
}

/// One physics frame in the canonical order
pub fn step_frame(
    probe: &mut Probe,
    masses: &[MassBody],
    input: &ControlInput,
    dt: f64,
    params: &Parameters,
) {
    rotate(probe, input.direction, dt, params);
    if input.thrusting {
        thrust(probe, dt, params);
    }
    apply_gravity(probe, masses, dt);
    update_position(probe, dt, params);
}
