use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// A decorative point orbiting the orb centre. Built once per widget size, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub hue_degrees: f64,
    pub size: f64,
    pub orbit_radius: f64,
    pub angular_offset: f64, // radians
    pub phase_offset: f64,   // radians, pulse only
}

/// Instantaneous particle state, relative to the orbit centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleSample {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl ParticleSample {
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Pulse angular rate in radians per second, shared by every state.
pub const PULSE_RATE: f64 = 2.0;
pub const PULSE_SCALE_MIN: f64 = 0.4;
pub const PULSE_SCALE_MAX: f64 = 1.2;

/// Orbit position only; the inner ring never pulses.
pub fn orbit_offset(particle: &Particle, elapsed_secs: f64, orbit_angular_speed: f64) -> Vec2 {
    let angle = particle.angular_offset + elapsed_secs * orbit_angular_speed;
    Vec2::from_angle(angle) * particle.orbit_radius
}

pub fn sample_particle(
    particle: &Particle,
    elapsed_secs: f64,
    orbit_angular_speed: f64,
) -> ParticleSample {
    let pos = orbit_offset(particle, elapsed_secs, orbit_angular_speed);
    let pulse = (elapsed_secs * PULSE_RATE + particle.phase_offset).sin();
    ParticleSample {
        x: pos.x,
        y: pos.y,
        // 0.8 + 0.4 rounds one ulp above 1.2.
        scale: (0.8 + pulse * 0.4).clamp(PULSE_SCALE_MIN, PULSE_SCALE_MAX),
        opacity: (0.5 + pulse * 0.5).clamp(0.0, 1.0),
    }
}

/// Sample every particle, preserving input order.
pub fn sample_all(
    particles: &[Particle],
    elapsed_secs: f64,
    orbit_angular_speed: f64,
) -> Vec<ParticleSample> {
    let mut out = Vec::with_capacity(particles.len());
    sample_all_into(particles, elapsed_secs, orbit_angular_speed, &mut out);
    out
}

/// Like [`sample_all`], reusing `out` so a per-frame caller does not allocate.
pub fn sample_all_into(
    particles: &[Particle],
    elapsed_secs: f64,
    orbit_angular_speed: f64,
    out: &mut Vec<ParticleSample>,
) {
    out.clear();
    out.extend(
        particles
            .iter()
            .map(|p| sample_particle(p, elapsed_secs, orbit_angular_speed)),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/orbit/particle.rs"]
mod tests;
