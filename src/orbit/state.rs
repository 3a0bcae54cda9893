use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::json::{read_json, read_json_file};

/// Visual state of the agent orb.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbState {
    #[default]
    Idle,
    Thinking,
    Searching,
    Presenting,
    Success,
    Error,
}

impl OrbState {
    pub const ALL: [Self; 6] = [
        Self::Idle,
        Self::Thinking,
        Self::Searching,
        Self::Presenting,
        Self::Success,
        Self::Error,
    ];

    /// States in which the outer particle ring orbits.
    pub fn animates_particles(self) -> bool {
        matches!(
            self,
            Self::Idle | Self::Thinking | Self::Searching | Self::Presenting
        )
    }

    pub fn shows_inner_ring(self) -> bool {
        self == Self::Thinking
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Thinking => "thinking",
            Self::Searching => "searching",
            Self::Presenting => "presenting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for OrbState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrbState {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| MotionError::validation(format!("unknown orb state \"{s}\"")))
    }
}

/// Per-state look and motion parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    pub base_hue: f64,
    pub saturation: f64,
    pub intensity: f64,
    /// Period of the body morph / glow pulse loop.
    pub pulse_period_secs: f64,
    /// Outer ring rotation in radians per second.
    pub orbit_angular_speed: f64,
}

impl StateConfig {
    const fn new(
        base_hue: f64,
        saturation: f64,
        intensity: f64,
        pulse_period_secs: f64,
        orbit_angular_speed: f64,
    ) -> Self {
        Self {
            base_hue,
            saturation,
            intensity,
            pulse_period_secs,
            orbit_angular_speed,
        }
    }

    /// Reference look for `state`.
    pub fn reference(state: OrbState) -> Self {
        match state {
            OrbState::Idle => Self::new(220.0, 15.0, 0.6, 8.0, 0.5),
            OrbState::Thinking => Self::new(280.0, 25.0, 0.85, 1.5, 2.0),
            OrbState::Searching => Self::new(200.0, 20.0, 0.75, 2.0, 1.5),
            OrbState::Presenting => Self::new(320.0, 30.0, 0.9, 3.0, 1.0),
            OrbState::Success => Self::new(140.0, 25.0, 0.8, 4.0, 0.3),
            OrbState::Error => Self::new(0.0, 35.0, 0.7, 0.5, 0.0),
        }
    }

    fn validate(&self, state: OrbState) -> MotionResult<()> {
        let fields = [
            ("base_hue", self.base_hue),
            ("saturation", self.saturation),
            ("intensity", self.intensity),
            ("orbit_angular_speed", self.orbit_angular_speed),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MotionError::validation(format!(
                "state {state}: {name} must be finite"
            )));
        }
        if !(self.pulse_period_secs.is_finite() && self.pulse_period_secs > 0.0) {
            return Err(MotionError::validation(format!(
                "state {state}: pulse_period_secs must be finite and > 0"
            )));
        }
        Ok(())
    }
}

/// Mapping from every [`OrbState`] to its [`StateConfig`].
///
/// JSON files may list only some states; the rest keep their reference values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateTable {
    configs: BTreeMap<OrbState, StateConfig>,
}

impl StateTable {
    pub fn from_reader<R: std::io::Read>(r: R) -> MotionResult<Self> {
        let overrides: BTreeMap<OrbState, StateConfig> = read_json(r, "state table")?;
        Self::with_overrides(overrides)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let overrides: BTreeMap<OrbState, StateConfig> = read_json_file(path, "state table")?;
        Self::with_overrides(overrides)
    }

    pub fn with_overrides(
        overrides: impl IntoIterator<Item = (OrbState, StateConfig)>,
    ) -> MotionResult<Self> {
        let mut table = Self::default();
        for (state, cfg) in overrides {
            cfg.validate(state)?;
            table.configs.insert(state, cfg);
        }
        Ok(table)
    }

    pub fn get(&self, state: OrbState) -> StateConfig {
        self.configs
            .get(&state)
            .copied()
            .unwrap_or_else(|| StateConfig::reference(state))
    }

    pub fn orbit_angular_speed(&self, state: OrbState) -> f64 {
        self.get(state).orbit_angular_speed
    }
}

impl Default for StateTable {
    fn default() -> Self {
        Self {
            configs: OrbState::ALL
                .into_iter()
                .map(|s| (s, StateConfig::reference(s)))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/orbit/state.rs"]
mod tests;
