use serde::ser::SerializeMap as _;
use serde::{Deserialize, Serialize};

/// Timing function applied to normalized progress before sampling a timeline.
///
/// The named curves match the CSS keywords (`ease-in` = `cubic-bezier(0.42, 0, 1, 1)` and so
/// on). JSON form is either a keyword string (`"ease_in_out"`) or `{"cubic_bezier": [x1, y1, x2, y2]}`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// Overshooting "back out" curve used when the orb starts presenting.
    pub const PRESENTING_POP: Self = Self::CubicBezier {
        x1: 0.34,
        y1: 1.56,
        x2: 0.64,
        y2: 1.0,
    };

    /// Map progress `t` (clamped to `[0, 1]`) through the curve.
    ///
    /// Endpoints are exact. Bezier curves with `y` control points outside `[0, 1]` overshoot.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => EASE_IN.solve(t),
            Self::EaseOut => EASE_OUT.solve(t),
            Self::EaseInOut => EASE_IN_OUT.solve(t),
            Self::CubicBezier { x1, y1, x2, y2 } => UnitBezier::new(x1, y1, x2, y2).solve(t),
        }
    }
}

impl Serialize for Ease {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Self::Linear => serializer.serialize_str("linear"),
            Self::EaseIn => serializer.serialize_str("ease_in"),
            Self::EaseOut => serializer.serialize_str("ease_out"),
            Self::EaseInOut => serializer.serialize_str("ease_in_out"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("cubic_bezier", &[x1, y1, x2, y2])?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            CubicBezier { cubic_bezier: [f64; 4] },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => match s.as_str() {
                "linear" => Ok(Self::Linear),
                "ease_in" => Ok(Self::EaseIn),
                "ease_out" => Ok(Self::EaseOut),
                "ease_in_out" => Ok(Self::EaseInOut),
                other => Err(serde::de::Error::custom(format!("unknown ease \"{other}\""))),
            },
            Repr::CubicBezier {
                cubic_bezier: [x1, y1, x2, y2],
            } => {
                // x control points must stay in [0, 1] for the curve to be a function of time.
                if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                    return Err(serde::de::Error::custom(
                        "cubic_bezier x control points must be within [0, 1]",
                    ));
                }
                Ok(Self::CubicBezier { x1, y1, x2, y2 })
            }
        }
    }
}

const EASE_IN: UnitBezier = UnitBezier::new(0.42, 0.0, 1.0, 1.0);
const EASE_OUT: UnitBezier = UnitBezier::new(0.0, 0.0, 0.58, 1.0);
const EASE_IN_OUT: UnitBezier = UnitBezier::new(0.42, 0.0, 0.58, 1.0);

/// Cubic bezier from `(0, 0)` to `(1, 1)` in power-basis form.
///
/// Each axis is `((a * u + b) * u + c) * u`, so the control points are folded into
/// coefficients once and every solve is a handful of multiply-adds.
#[derive(Clone, Copy, Debug)]
struct UnitBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl UnitBezier {
    const EPSILON: f64 = 1e-9;

    const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, u: f64) -> f64 {
        ((self.ax * u + self.bx) * u + self.cx) * u
    }

    fn y_at(&self, u: f64) -> f64 {
        ((self.ay * u + self.by) * u + self.cy) * u
    }

    fn dx_at(&self, u: f64) -> f64 {
        (3.0 * self.ax * u + 2.0 * self.bx) * u + self.cx
    }

    /// Curve parameter `u` with `x_at(u) == x`.
    fn param_for(&self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..8 {
            let err = self.x_at(u) - x;
            if err.abs() < Self::EPSILON {
                return u;
            }
            let d = self.dx_at(u);
            if d.abs() < 1e-7 {
                break;
            }
            u = (u - err / d).clamp(0.0, 1.0);
        }

        // Newton stalled: bracket instead. x is monotonic in u because both x control
        // points lie in [0, 1].
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        u = x;
        for _ in 0..64 {
            let xu = self.x_at(u);
            if (xu - x).abs() < Self::EPSILON {
                break;
            }
            if xu < x {
                lo = u;
            } else {
                hi = u;
            }
            u = 0.5 * (lo + hi);
        }
        u
    }

    fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.y_at(self.param_for(x))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/ease.rs"]
mod tests;
