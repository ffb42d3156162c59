pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{MassBody, NVec2, Particle, Probe, Target};
pub use simulation::params::{Display, Parameters};
pub use simulation::forces::{body_acceleration, gravity_acceleration};
pub use simulation::integrator::{apply_gravity, rotate, step_frame, thrust, update_position, ControlInput};
pub use simulation::particles::{emit_exhaust, spawn_exhaust, update_particles, EXHAUST_COLORS, EXHAUST_LIFE, EXHAUST_PER_FRAME};
pub use simulation::scenario::Scenario;

pub use configuration::config::{DisplayConfig, MassConfig, ParametersConfig, ProbeConfig, ScenarioConfig, TargetConfig};

pub use visualization::vis2d::run_2d;
