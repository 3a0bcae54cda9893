use serde::{Deserialize, Serialize};

/// Named vibration patterns (alternating on/off durations in milliseconds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
    Tap,
    Success,
    Error,
    Select,
}

impl HapticPattern {
    pub fn durations_ms(self) -> &'static [u32] {
        match self {
            Self::Tap => &[10],
            Self::Success => &[10, 50, 10],
            Self::Error => &[50, 30, 50, 30, 50],
            Self::Select => &[5],
        }
    }
}

/// Device capable of playing a vibration pattern.
pub trait HapticSink {
    fn vibrate(&mut self, durations_ms: &[u32]);
}

/// Play `pattern` if the platform has a vibration device; silently does nothing otherwise.
pub fn haptic(sink: Option<&mut dyn HapticSink>, pattern: HapticPattern) {
    if let Some(sink) = sink {
        sink.vibrate(pattern.durations_ms());
    }
}
