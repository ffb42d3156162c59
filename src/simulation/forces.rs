//! Gravitational acceleration on the probe
//!
//! One routine backs the physics step, the per-mass arrow overlay, and the
//! telemetry readout, so the softening floor applies everywhere the formula
//! is evaluated.

use crate::simulation::states::{MassBody, NVec2};

/// Acceleration at `point` due to a single body, with a minimum-distance
/// floor.
///
/// `min_clearance` is the probe's own extent (max of width and height); the
/// separation is floored at `body.radius + min_clearance` so the
/// inverse-square magnitude stays bounded at close range. The probe may
/// still overlap the body visually - the floor is a softening device, not a
/// collision response.
pub fn body_acceleration(body: &MassBody, point: NVec2, min_clearance: f64) -> NVec2 {
    // r points from the probe toward the body; the pull acts along +r
    let r = body.x - point;

    // Actual separation |r|
    let dist = r.norm();
    if dist == 0.0 {
        // Coincident - direction undefined, no contribution
        return NVec2::zeros();
    }

    // Floor the separation before squaring
    let min_distance = body.radius + min_clearance;
    let d = if dist < min_distance { min_distance } else { dist };

    // Magnitude of the pull:
    // a = G * M / d^2
    let accel = body.G * body.m / (d * d);

    // Direct it along the unit vector toward the body:
    // a_vec = a * r / |r|
    (accel / dist) * r
}

/// Total acceleration at `point`: plain superposition over all bodies
///
/// The sum is linear, so the result is independent of body order up to
/// floating-point rounding.
pub fn gravity_acceleration(masses: &[MassBody], point: NVec2, min_clearance: f64) -> NVec2 {
    let mut total = NVec2::zeros();
    for body in masses {
        total += body_acceleration(body, point, min_clearance);
    }
    total
}
