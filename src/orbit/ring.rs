use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::orbit::particle::Particle;

/// Number of particles in the always-on outer ring.
pub const OUTER_RING_COUNT: u32 = 8;
/// Number of particles in the secondary ring shown while thinking.
pub const INNER_RING_COUNT: u32 = 6;
/// Fixed inner ring angular speed (rad/s); it ignores the state table.
pub const INNER_RING_SPEED: f64 = 3.0;

/// Named orb sizes, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl OrbSize {
    pub fn pixels(self) -> f64 {
        match self {
            Self::Xs => 28.0,
            Self::Sm => 56.0,
            Self::Md => 72.0,
            Self::Lg => 96.0,
            Self::Xl => 200.0,
        }
    }
}

fn fraction(i: u32, count: u32) -> f64 {
    f64::from(i) / f64::from(count)
}

/// Hues sweep 60..300 degrees across the ring.
fn ring_hue(i: u32, count: u32) -> f64 {
    60.0 + fraction(i, count) * 240.0
}

/// Outer ring for an orb of `orb_px` pixels: evenly spaced, alternating radius, pulsing out of
/// phase.
pub fn outer_ring(orb_px: f64, count: u32) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let spread = fraction(i, count) * TAU;
            Particle {
                id: i,
                hue_degrees: ring_hue(i, count),
                size: 4.0 + f64::from(i % 3),
                orbit_radius: orb_px * 0.65 + f64::from(i % 2) * 5.0,
                angular_offset: spread,
                phase_offset: spread,
            }
        })
        .collect()
}

/// Inner ring for an orb of `orb_px` pixels: tight, uniform and without pulse phase.
pub fn inner_ring(orb_px: f64, count: u32) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            id: i,
            hue_degrees: ring_hue(i, count),
            size: 3.0,
            orbit_radius: orb_px * 0.35,
            angular_offset: fraction(i, count) * TAU,
            phase_offset: 0.0,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/orbit/ring.rs"]
mod tests;
