//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! containing:
//! - display settings (`Display`)
//! - motion parameters (`Parameters`)
//! - the probe, the fixed bodies, the active exhaust, and the target
//!
//! The scenario is inserted into Bevy as a `Resource` and mutated only by
//! the chained per-frame systems.

use bevy::prelude::Resource;

use crate::configuration::config::{MassConfig, ScenarioConfig};
use crate::simulation::params::{Display, Parameters};
use crate::simulation::states::{MassBody, NVec2, Particle, Probe, Target};

/// Bevy resource holding the entire simulation state for one run
#[derive(Resource)]
pub struct Scenario {
    pub display: Display,
    pub parameters: Parameters,
    pub probe: Probe,
    pub masses: Vec<MassBody>,
    pub particles: Vec<Particle>, // active exhaust
    pub target: Target,
    pub accomplished: bool, // latched once the probe reaches the target
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            rotation_speed: p_cfg.rotation_speed,
            thrust_acceleration: p_cfg.thrust_acceleration,
            max_vx: p_cfg.max_vx,
            max_vy: p_cfg.max_vy,
            trail_length: p_cfg.trail_length,
            scale_factor: p_cfg.scale_factor,
            G: p_cfg.G,
        };

        // Display (runtime) from DisplayConfig
        let d_cfg = cfg.display;
        let display = Display {
            width: d_cfg.width,
            height: d_cfg.height,
            star_count: d_cfg.star_count,
            star_area: d_cfg.star_area,
        };

        // Bodies: map `MassConfig` -> runtime `MassBody`; a body without its
        // own G inherits the scenario-wide constant
        let masses: Vec<MassBody> = cfg
            .masses
            .iter()
            .map(|mc: &MassConfig| {
                MassBody::new(
                    NVec2::new(mc.x[0], mc.x[1]),
                    mc.m,
                    mc.radius,
                    mc.G.unwrap_or(parameters.G),
                    mc.color,
                )
            })
            .collect();

        // Probe at its configured start, stationary, facing +x
        let probe = Probe::new(
            NVec2::new(cfg.probe.x[0], cfg.probe.x[1]),
            parameters.scale_factor,
        );

        let target = Target {
            x: NVec2::new(cfg.target.x[0], cfg.target.x[1]),
            radius: cfg.target.radius,
        };

        Self {
            display,
            parameters,
            probe,
            masses,
            particles: Vec::new(),
            target,
            accomplished: false,
        }
    }

    /// Latch the accomplished flag once the probe is inside the target
    /// radius. Returns the (possibly just-latched) flag.
    pub fn check_mission(&mut self) -> bool {
        if !self.accomplished {
            let distance = (self.probe.x - self.target.x).norm();
            if distance < self.target.radius {
                self.accomplished = true;
            }
        }
        self.accomplished
    }
}
