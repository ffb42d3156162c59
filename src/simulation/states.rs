//! Core state types for the probe simulation.
//!
//! Defines the entities of one scenario:
//! - `MassBody` - fixed gravitational source
//! - `Probe`    - the player-controlled craft plus its trajectory trail
//! - `Particle` - short-lived thruster exhaust
//! - `Target`   - arrival point for the mission check
//!
//! Motion updates live in `integrator` and `particles`; this module holds
//! state and read-only geometry.

use nalgebra::{Rotation2, Vector2};
use std::collections::VecDeque;

pub type NVec2 = Vector2<f64>;

/// Unscaled probe footprint, world units
pub const PROBE_BASE_WIDTH: f64 = 40.0;
pub const PROBE_BASE_HEIGHT: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct MassBody {
    pub x: NVec2, // position (fixed for the whole run)
    pub m: f64, // mass
    pub radius: f64, // radius (softening floor and rendering)
    pub G: f64, // per-body gravitational constant
    pub color: [f32; 3], // visual hint for the presentation layer
}

impl MassBody {
    /// Fully-initialized body; G is supplied here, not attached later
    pub fn new(x: NVec2, m: f64, radius: f64, g: f64, color: [f32; 3]) -> Self {
        Self {
            x,
            m,
            radius,
            G: g,
            color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Probe {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub angle: f64, // facing, degrees in [0, 360)
    pub width: f64, // footprint, world units
    pub height: f64,
    pub trajectory: VecDeque<NVec2>, // most recent positions, oldest first
}

impl Probe {
    pub fn new(x: NVec2, scale_factor: f64) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            angle: 0.0,
            width: PROBE_BASE_WIDTH * scale_factor,
            height: PROBE_BASE_HEIGHT * scale_factor,
            trajectory: VecDeque::new(),
        }
    }

    /// Clearance added to a body's radius when flooring the separation
    pub fn min_clearance(&self) -> f64 {
        self.width.max(self.height)
    }

    /// World-space engine nozzle: half a width behind the center,
    /// rotated to the current facing
    pub fn thruster_position(&self) -> NVec2 {
        let local = NVec2::new(-self.width / 2.0, 0.0);
        self.x + Rotation2::new(self.angle.to_radians()) * local
    }
}

/// Exhaust particle. Velocity, size and color are fixed at emission;
/// only position and life change afterwards.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub life: f64, // remaining life, seconds
    pub size: f64, // visual radius
    pub color: [f32; 3],
}

#[derive(Debug, Clone)]
pub struct Target {
    pub x: NVec2, // arrival point
    pub radius: f64, // arrival threshold
}
