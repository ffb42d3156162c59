//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`DisplayConfig`]    – window size and star-field decoration
//! - [`ParametersConfig`] – motion constants and the gravitational constant
//! - [`ProbeConfig`]      – the probe's initial position
//! - [`MassConfig`]       – one entry per fixed gravitational body
//! - [`TargetConfig`]     – arrival point for the mission check
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! display:
//!   width: 800.0
//!   height: 600.0
//!   star_count: 500
//!   star_area: 3000.0
//!
//! parameters:
//!   rotation_speed: 180.0        # degrees per second
//!   thrust_acceleration: 100.0   # units per second^2
//!   max_vx: 300.0                # per-axis velocity cap
//!   max_vy: 300.0
//!   trail_length: 500            # trajectory samples kept
//!   scale_factor: 0.3            # probe/particle size multiplier
//!   G: 66.743                    # gravitational constant
//!
//! probe:
//!   x: [ 0.0, 0.0 ]
//!
//! masses:
//!   - x: [ 300.0, 0.0 ]
//!     m: 50000.0
//!     radius: 50.0
//!     color: [ 0.0, 0.0, 1.0 ]
//!
//! target:
//!   x: [ 1000.0, 1000.0 ]
//!   radius: 3.0
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation before the frame loop starts.

use serde::Deserialize;

/// Window and star-field settings
#[derive(Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    pub width: f32, // window width in px
    pub height: f32, // window height in px
    pub star_count: usize, // background stars scattered at startup
    pub star_area: f64, // stars spread in +-star_area on both axes
}

/// Motion constants for the probe and the scenario-wide G
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub rotation_speed: f64, // degrees per second
    pub thrust_acceleration: f64, // units per second^2
    pub max_vx: f64, // per-axis velocity cap, enforced by thrust only
    pub max_vy: f64,
    pub trail_length: usize, // trajectory samples kept
    pub scale_factor: f64, // probe/particle size multiplier
    pub G: f64, // gravitational constant
}

/// The probe's initial state
#[derive(Deserialize, Debug)]
pub struct ProbeConfig {
    pub x: Vec<f64>, // initial position [x, y] in world units
}

/// Configuration for a single gravitational body
#[derive(Deserialize, Debug)]
pub struct MassConfig {
    pub x: Vec<f64>, // position [x, y] in world units
    pub m: f64, // mass
    pub radius: f64, // radius, used for the softening floor and rendering
    pub color: [f32; 3], // linear rgb in 0..1
    pub G: Option<f64>, // per-body override of parameters.G
}

/// Arrival point and threshold for the mission check
#[derive(Deserialize, Debug)]
pub struct TargetConfig {
    pub x: Vec<f64>, // position [x, y] in world units
    pub radius: f64, // arrival threshold
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub display: DisplayConfig, // window and decoration settings
    pub parameters: ParametersConfig, // motion constants
    pub probe: ProbeConfig, // probe starting state
    pub masses: Vec<MassConfig>, // fixed gravitational bodies
    pub target: TargetConfig, // mission arrival point
}
