//! Numerical parameters and display settings for a scenario
//!
//! `Parameters` holds the motion constants fed into the probe step
//! functions; `Display` holds what the window and star field need.
//! Both are built once from the YAML configuration and never mutated.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub rotation_speed: f64, // turn rate, degrees per second
    pub thrust_acceleration: f64, // units per second^2 along the facing
    pub max_vx: f64, // per-axis velocity cap, applied by thrust() only
    pub max_vy: f64,
    pub trail_length: usize, // trajectory samples kept
    pub scale_factor: f64, // world-size multiplier for probe and particles
    pub G: f64, // scenario-wide gravitational constant
}

#[derive(Debug, Clone)]
pub struct Display {
    pub width: f32, // window width, px
    pub height: f32, // window height, px
    pub star_count: usize, // background stars
    pub star_area: f64, // stars scattered in +-star_area on both axes
}
