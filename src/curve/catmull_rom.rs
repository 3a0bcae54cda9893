use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::json::{read_json, read_json_file};

/// A waypoint of an entrance path: position plus a scale multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl ControlPoint {
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.scale.is_finite()
    }
}

impl<'de> Deserialize<'de> for ControlPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Hand-edited paths are usually written as `[x, y, scale]` triples.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Triple([f64; 3]),
            Obj { x: f64, y: f64, scale: f64 },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Triple([x, y, scale]) => Self { x, y, scale },
            Repr::Obj { x, y, scale } => Self { x, y, scale },
        })
    }
}

/// Result of interpolating a [`ControlPath`] at some progress value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Ordered, validated list of control points (at least two, all finite).
///
/// Immutable once built; deserializing goes through the same validation as [`ControlPath::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")]
pub struct ControlPath {
    points: Vec<ControlPoint>,
}

impl ControlPath {
    /// Minimum number of points a path needs for interpolation to be defined.
    pub const MIN_POINTS: usize = 2;

    pub fn new(points: Vec<ControlPoint>) -> MotionResult<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(MotionError::validation(format!(
                "control path needs at least {} points, got {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(MotionError::validation(format!(
                "control point {idx} has a non-finite coordinate"
            )));
        }
        Ok(Self { points })
    }

    /// The landing page entrance path: x in viewport-width %, y in viewport-height %.
    pub fn reference_entrance() -> Self {
        const POINTS: [ControlPoint; 10] = [
            ControlPoint::new(-45.0, -45.0, 0.15),
            ControlPoint::new(-42.0, -35.0, 0.25),
            ControlPoint::new(-38.0, -20.0, 0.5),
            ControlPoint::new(-30.0, 5.0, 1.2),
            ControlPoint::new(-15.0, 25.0, 2.5),
            ControlPoint::new(5.0, 30.0, 4.0),
            ControlPoint::new(20.0, 25.0, 3.5),
            ControlPoint::new(25.0, 10.0, 2.0),
            ControlPoint::new(15.0, -5.0, 1.3),
            ControlPoint::new(0.0, -5.0, 1.0),
        ];
        Self {
            points: POINTS.to_vec(),
        }
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> MotionResult<Self> {
        read_json(r, "control path")
    }

    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        read_json_file(path, "control path")
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample the path at normalized progress `t`. See [`interpolate`].
    pub fn interpolate(&self, t: f64) -> PathSample {
        interpolate(t, self)
    }
}

impl TryFrom<Vec<ControlPoint>> for ControlPath {
    type Error = MotionError;

    fn try_from(points: Vec<ControlPoint>) -> MotionResult<Self> {
        Self::new(points)
    }
}

impl From<ControlPath> for Vec<ControlPoint> {
    fn from(path: ControlPath) -> Self {
        path.points
    }
}

/// Uniform Catmull-Rom basis evaluated between `p1` (at `t = 0`) and `p2` (at `t = 1`).
#[inline]
pub fn catmull_rom(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Map normalized progress `t` to a point on the spline through `path`.
///
/// The segment index is `floor(t * (n - 1))` clamped to `[0, n - 2]`; neighbours outside the
/// path reuse the nearest endpoint, which flattens the tangent at both ends. `t` is not clamped:
/// values outside `[0, 1]` extrapolate the first or last segment's cubic.
pub fn interpolate(t: f64, path: &ControlPath) -> PathSample {
    let points = path.points();
    let n = points.len();
    let last_segment = n - 2;

    let s = t * (n - 1) as f64;
    // NaN falls through `clamp` and casts to 0.
    let i = s.floor().clamp(0.0, last_segment as f64) as usize;
    let local_t = s - i as f64;

    let p0 = points[i.saturating_sub(1)];
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = points[(i + 2).min(n - 1)];

    PathSample {
        x: catmull_rom(local_t, p0.x, p1.x, p2.x, p3.x),
        y: catmull_rom(local_t, p0.y, p1.y, p2.y, p3.y),
        scale: catmull_rom(local_t, p0.scale, p1.scale, p2.scale, p3.scale),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/catmull_rom.rs"]
mod tests;
