use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::interact::spring::SpringParams;

/// Pull of the pointer on an element: a fraction of the pointer's distance from the centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MagneticField {
    pub strength: f64,
}

impl Default for MagneticField {
    fn default() -> Self {
        Self { strength: 0.15 }
    }
}

impl MagneticField {
    /// Target offset for `pointer` over an element occupying `bounds`.
    ///
    /// `None` while the element is focused: the pointer is ignored and the last target stays.
    pub fn offset(&self, pointer: Point, bounds: Rect, focused: bool) -> Option<Vec2> {
        if focused {
            return None;
        }
        Some((pointer - bounds.center()) * self.strength)
    }
}

/// Glow that brightens as the element is pulled further, capped at 0.5.
pub fn glow_opacity(offset: Vec2) -> f64 {
    (0.3 + offset.hypot() * 0.01).min(0.5)
}

/// Magnetic field plus the spring that smooths the element toward the field's target.
#[derive(Clone, Copy, Debug)]
pub struct MagneticFollower {
    pub field: MagneticField,
    pub spring: SpringParams,
    target: Vec2,
    pos: Vec2,
    vel: Vec2,
}

impl Default for MagneticFollower {
    fn default() -> Self {
        Self::new(MagneticField::default(), SpringParams::MAGNETIC)
    }
}

impl MagneticFollower {
    pub fn new(field: MagneticField, spring: SpringParams) -> Self {
        Self {
            field,
            spring,
            target: Vec2::ZERO,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }

    pub fn pointer_move(&mut self, pointer: Point, bounds: Rect, focused: bool) {
        if let Some(target) = self.field.offset(pointer, bounds, focused) {
            self.target = target;
        }
    }

    /// Pointer left the element: spring back to rest.
    pub fn pointer_leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Advance the spring by `dt` seconds and return the displayed offset.
    pub fn step(&mut self, dt: f64) -> Vec2 {
        (self.pos, self.vel) = self.spring.step_vec2(self.pos, self.vel, self.target, dt);
        self.pos
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn offset(&self) -> Vec2 {
        self.pos
    }

    pub fn glow_opacity(&self) -> f64 {
        glow_opacity(self.pos)
    }

    pub fn is_settled(&self) -> bool {
        SpringParams::is_settled(self.pos, self.vel, self.target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/magnetic.rs"]
mod tests;
