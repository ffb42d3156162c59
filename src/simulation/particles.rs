//! Thruster exhaust particles
//!
//! Particles are pure decoration: velocity, size and color are drawn once at
//! emission, motion is linear, and a particle is culled the frame its life
//! runs out. No force acts on them.

use rand::Rng;

use super::states::{NVec2, Particle, Probe};

/// Fixed exhaust palette: yellow, orange, red
pub const EXHAUST_COLORS: [[f32; 3]; 3] = [
    [1.0, 1.0, 0.0],
    [1.0, 0.65, 0.0],
    [1.0, 0.0, 0.0],
];

/// Particle lifetime at emission, seconds
pub const EXHAUST_LIFE: f64 = 1.0;

/// Particles pushed per thrust frame
pub const EXHAUST_PER_FRAME: usize = 3;

// Emission speed range, world units per second
const EXHAUST_SPEED_MIN: f64 = 50.0;
const EXHAUST_SPEED_MAX: f64 = 150.0;

/// One exhaust particle at `origin`, emitted along `angle_deg`
pub fn spawn_exhaust<R: Rng>(
    rng: &mut R,
    origin: NVec2,
    angle_deg: f64,
    scale_factor: f64,
) -> Particle {
    let speed = rng.gen_range(EXHAUST_SPEED_MIN..EXHAUST_SPEED_MAX);
    let rad = angle_deg.to_radians();
    Particle {
        x: origin,
        v: NVec2::new(speed * rad.cos(), speed * rad.sin()),
        life: EXHAUST_LIFE,
        size: (rng.gen_range(1..=2) as f64 * scale_factor).max(1.0),
        color: EXHAUST_COLORS[rng.gen_range(0..EXHAUST_COLORS.len())],
    }
}

/// Burst for one thrust frame, emitted backward out of the nozzle
pub fn emit_exhaust<R: Rng>(
    particles: &mut Vec<Particle>,
    probe: &Probe,
    scale_factor: f64,
    rng: &mut R,
) {
    let origin = probe.thruster_position();
    // Directly opposite the facing direction
    let angle = (probe.angle + 180.0) % 360.0;
    for _ in 0..EXHAUST_PER_FRAME {
        particles.push(spawn_exhaust(rng, origin, angle, scale_factor));
    }
}

/// Integrate every particle, then drop the ones whose life ran out
pub fn update_particles(particles: &mut Vec<Particle>, dt: f64) {
    for p in particles.iter_mut() {
        p.x += p.v * dt;
        p.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}
