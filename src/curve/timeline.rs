use serde::{Deserialize, Serialize};

use crate::curve::catmull_rom::ControlPath;
use crate::curve::ease::Ease;
use crate::curve::keyframes::{Keyframe, KeyframeShaping};
use crate::foundation::error::{MotionError, MotionResult};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Keyframe {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            t: f64::lerp(&a.t, &b.t, t),
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

/// One-shot playback of a precomputed keyframe sequence over a fixed duration.
///
/// Progress is `elapsed / duration` clamped to `[0, 1]`, passed through `ease`, then located
/// among the keyframe times and linearly interpolated. Sampling never restarts: past the end the
/// last keyframe is held.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TimelineDef")]
pub struct EntranceTimeline {
    keyframes: Vec<Keyframe>, // sorted by t
    duration_secs: f64,
    ease: Ease,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TimelineDef {
    keyframes: Vec<Keyframe>,
    duration_secs: f64,
    #[serde(default)]
    ease: Ease,
}

impl TryFrom<TimelineDef> for EntranceTimeline {
    type Error = MotionError;

    fn try_from(def: TimelineDef) -> MotionResult<Self> {
        Ok(Self::new(def.keyframes, def.duration_secs)?.with_ease(def.ease))
    }
}

impl EntranceTimeline {
    pub const REFERENCE_DURATION_SECS: f64 = 2.5;
    pub const REFERENCE_STEPS: u32 = 1000;

    pub fn new(keyframes: Vec<Keyframe>, duration_secs: f64) -> MotionResult<Self> {
        let tl = Self {
            keyframes,
            duration_secs,
            ease: Ease::Linear,
        };
        tl.validate()?;
        Ok(tl)
    }

    /// Sample `path` and wrap the result in a timeline.
    pub fn from_control_path(
        path: &ControlPath,
        steps: u32,
        shaping: KeyframeShaping,
        duration_secs: f64,
    ) -> MotionResult<Self> {
        Self::new(path.keyframes(steps, shaping).collect(), duration_secs)
    }

    /// The landing page entrance: reference path, 1000 steps, 2.5 s, linear.
    pub fn reference() -> Self {
        Self {
            keyframes: ControlPath::reference_entrance()
                .keyframes(Self::REFERENCE_STEPS, KeyframeShaping::default())
                .collect(),
            duration_secs: Self::REFERENCE_DURATION_SECS,
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.keyframes.is_empty() {
            return Err(MotionError::validation(
                "entrance timeline needs at least one keyframe",
            ));
        }
        if !self.keyframes.windows(2).all(|w| w[0].t <= w[1].t) {
            return Err(MotionError::validation(
                "entrance timeline keyframes must be sorted by t",
            ));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(MotionError::validation(format!(
                "entrance timeline duration must be finite and > 0, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn is_finished(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.duration_secs
    }

    pub fn sample(&self, elapsed_secs: f64) -> Keyframe {
        let u = self
            .ease
            .apply((elapsed_secs / self.duration_secs).clamp(0.0, 1.0));

        let keys = &self.keyframes;
        let idx = keys.partition_point(|k| k.t <= u);
        if idx == 0 {
            return keys[0];
        }
        if idx >= keys.len() {
            return keys[keys.len() - 1];
        }

        let a = &keys[idx - 1];
        let b = &keys[idx];
        let denom = b.t - a.t;
        if denom <= 0.0 {
            return *a;
        }
        Keyframe::lerp(a, b, (u - a.t) / denom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/timeline.rs"]
mod tests;
