use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Damped spring used to smooth pointer-driven values toward a target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "unit_mass")]
    pub mass: f64,
}

fn unit_mass() -> f64 {
    1.0
}

/// Largest integration step; longer frames are subdivided.
const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

impl SpringParams {
    pub const GENTLE: Self = Self::new(100.0, 20.0);
    pub const SNAPPY: Self = Self::new(300.0, 25.0);
    pub const BOUNCY: Self = Self::new(200.0, 10.0);
    /// Pointer-follow spring of the magnetic input.
    pub const MAGNETIC: Self = Self::new(200.0, 25.0);

    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; 1 is critical.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt()).max(1e-9)
    }

    /// Advance `(pos, vel)` toward `target` by `dt` seconds (semi-implicit Euler).
    pub fn step(&self, pos: f64, vel: f64, target: f64, dt: f64) -> (f64, f64) {
        if dt.is_nan() || dt <= 0.0 {
            return (pos, vel);
        }
        let k = self.stiffness.max(0.0);
        let c = self.damping.max(0.0);
        let m = self.mass.max(1e-9);

        let n = (dt / MAX_SUBSTEP_SECS).ceil().max(1.0) as u32;
        let h = dt / f64::from(n);
        let (mut x, mut v) = (pos, vel);
        for _ in 0..n {
            let accel = (-k * (x - target) - c * v) / m;
            v += accel * h;
            x += v * h;
        }
        (x, v)
    }

    pub fn step_vec2(&self, pos: Vec2, vel: Vec2, target: Vec2, dt: f64) -> (Vec2, Vec2) {
        let (x, vx) = self.step(pos.x, vel.x, target.x, dt);
        let (y, vy) = self.step(pos.y, vel.y, target.y, dt);
        (Vec2::new(x, y), Vec2::new(vx, vy))
    }

    pub fn is_settled(pos: Vec2, vel: Vec2, target: Vec2) -> bool {
        (pos - target).hypot() < REST_DELTA && vel.hypot() < REST_SPEED
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/spring.rs"]
mod tests;
