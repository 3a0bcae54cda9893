use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::curve::catmull_rom::ControlPath;
use crate::foundation::error::{MotionError, MotionResult};

/// Per-keyframe shaping applied on top of the raw spline value.
///
/// The reference values were tuned for [`ControlPath::reference_entrance`]; other paths may
/// want different ones. Always valid once built: [`KeyframeShaping::new`] and deserialization
/// both reject a non-positive fade-in rate and a negative scale floor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShapingDef")]
pub struct KeyframeShaping {
    fade_in_rate: f64,
    min_scale: f64,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ShapingDef {
    fade_in_rate: f64,
    min_scale: f64,
}

impl Default for ShapingDef {
    fn default() -> Self {
        Self {
            fade_in_rate: KeyframeShaping::REFERENCE_FADE_IN_RATE,
            min_scale: KeyframeShaping::REFERENCE_MIN_SCALE,
        }
    }
}

impl TryFrom<ShapingDef> for KeyframeShaping {
    type Error = MotionError;

    fn try_from(def: ShapingDef) -> MotionResult<Self> {
        Self::new(def.fade_in_rate, def.min_scale)
    }
}

impl KeyframeShaping {
    pub const REFERENCE_FADE_IN_RATE: f64 = 8.0;
    pub const REFERENCE_MIN_SCALE: f64 = 0.05;

    /// `fade_in_rate` must be finite and > 0; `min_scale` finite and >= 0.
    pub fn new(fade_in_rate: f64, min_scale: f64) -> MotionResult<Self> {
        if !(fade_in_rate.is_finite() && fade_in_rate > 0.0) {
            return Err(MotionError::validation(format!(
                "fade_in_rate must be finite and > 0, got {fade_in_rate}"
            )));
        }
        if !(min_scale.is_finite() && min_scale >= 0.0) {
            return Err(MotionError::validation(format!(
                "min_scale must be finite and >= 0, got {min_scale}"
            )));
        }
        Ok(Self {
            fade_in_rate,
            min_scale,
        })
    }

    /// Opacity is `min(1, t * fade_in_rate)`; 8 completes the fade at `t = 0.125`.
    pub fn fade_in_rate(&self) -> f64 {
        self.fade_in_rate
    }

    /// Lower bound applied to the interpolated scale.
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Point in normalized time where the fade-in reaches full opacity.
    pub fn fade_complete_at(&self) -> f64 {
        1.0 / self.fade_in_rate
    }
}

impl Default for KeyframeShaping {
    fn default() -> Self {
        Self {
            fade_in_rate: Self::REFERENCE_FADE_IN_RATE,
            min_scale: Self::REFERENCE_MIN_SCALE,
        }
    }
}

/// One sampled point of the entrance path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Lazy keyframe sequence returned by [`ControlPath::keyframes`].
///
/// Yields `steps + 1` keyframes at evenly spaced `t` from 0 to 1 inclusive, or a single
/// keyframe at `t = 0` when `steps == 0`.
#[derive(Clone, Debug)]
pub struct KeyframeIter<'a> {
    path: &'a ControlPath,
    shaping: KeyframeShaping,
    steps: u32,
    next: usize,
    len: usize,
}

impl KeyframeIter<'_> {
    fn keyframe_at(&self, i: usize) -> Keyframe {
        let t = if self.steps == 0 {
            0.0
        } else {
            i as f64 / f64::from(self.steps)
        };
        let s = self.path.interpolate(t);
        Keyframe {
            t,
            x: s.x,
            y: s.y,
            scale: s.scale.max(self.shaping.min_scale),
            opacity: (t * self.shaping.fade_in_rate).min(1.0),
        }
    }
}

impl Iterator for KeyframeIter<'_> {
    type Item = Keyframe;

    fn next(&mut self) -> Option<Keyframe> {
        if self.next >= self.len {
            return None;
        }
        let kf = self.keyframe_at(self.next);
        self.next += 1;
        Some(kf)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KeyframeIter<'_> {}

impl FusedIterator for KeyframeIter<'_> {}

impl ControlPath {
    /// Lazily sample this path into keyframes.
    pub fn keyframes(&self, steps: u32, shaping: KeyframeShaping) -> KeyframeIter<'_> {
        KeyframeIter {
            path: self,
            shaping,
            steps,
            next: 0,
            len: steps as usize + 1,
        }
    }
}

/// Sample `path` into `steps + 1` keyframes using the reference shaping.
pub fn generate_keyframe_sequence(steps: u32, path: &ControlPath) -> Vec<Keyframe> {
    generate_keyframe_sequence_with(steps, path, KeyframeShaping::default())
}

/// Sample `path` into `steps + 1` keyframes using caller-supplied shaping.
#[tracing::instrument(skip(path), fields(points = path.len()))]
pub fn generate_keyframe_sequence_with(
    steps: u32,
    path: &ControlPath,
    shaping: KeyframeShaping,
) -> Vec<Keyframe> {
    let out: Vec<Keyframe> = path.keyframes(steps, shaping).collect();
    tracing::debug!(keyframes = out.len(), "generated entrance keyframes");
    out
}

/// Columnar form of a keyframe sequence: one track per animated property plus shared times.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyframeTracks {
    pub times: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub scale: Vec<f64>,
    pub opacity: Vec<f64>,
}

impl KeyframeTracks {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl FromIterator<Keyframe> for KeyframeTracks {
    fn from_iter<I: IntoIterator<Item = Keyframe>>(iter: I) -> Self {
        let mut tracks = Self::default();
        for kf in iter {
            tracks.times.push(kf.t);
            tracks.x.push(kf.x);
            tracks.y.push(kf.y);
            tracks.scale.push(kf.scale);
            tracks.opacity.push(kf.opacity);
        }
        tracks
    }
}

impl From<&[Keyframe]> for KeyframeTracks {
    fn from(keyframes: &[Keyframe]) -> Self {
        keyframes.iter().copied().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/keyframes.rs"]
mod tests;
