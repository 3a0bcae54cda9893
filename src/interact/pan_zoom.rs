use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

pub const ZOOM_STEP: f64 = 0.15;
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;
pub const DOUBLE_CLICK_SCALE: f64 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    pointer_start: Point,
    offset_start: Vec2,
}

/// Wheel-zoom and drag-pan state of the architecture image viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoom {
    scale: f64,
    offset: Vec2,
    drag: Option<Drag>,
}

/// What the renderer applies: `scale(scale) translate(translate)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate: Vec2,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            drag: None,
        }
    }
}

impl PanZoom {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// A positive delta (scrolling down) zooms out; any other delta, zero included, zooms in.
    /// NaN is ignored.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y.is_nan() {
            return;
        }
        let step = if delta_y > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        self.scale = (self.scale + step).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Begin a drag; only possible while zoomed in. Returns whether the drag started.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        if self.scale <= 1.0 {
            return false;
        }
        self.drag = Some(Drag {
            pointer_start: pointer,
            offset_start: self.offset,
        });
        true
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        if let Some(drag) = self.drag {
            self.offset = drag.offset_start + (pointer - drag.pointer_start);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Toggle between the fitted view and a fixed zoom.
    pub fn double_click(&mut self) {
        if self.scale > 1.0 {
            self.reset();
        } else {
            self.scale = DOUBLE_CLICK_SCALE;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The pan offset is in screen pixels, so it is divided by the scale that precedes it.
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            translate: self.offset / self.scale,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/pan_zoom.rs"]
mod tests;
