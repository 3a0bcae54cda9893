use crate::interact::haptics::{HapticPattern, HapticSink, haptic};
use crate::interact::magnetic::MagneticFollower;

/// Keys the chat input reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKey {
    Enter,
    Other,
}

/// State of the magnetic chat input: text, focus and the pointer-follow offset.
#[derive(Clone, Debug, Default)]
pub struct ChatInput {
    pub value: String,
    pub focused: bool,
    pub disabled: bool,
    /// Allow submitting blank text (used by the demo's suggested prompts).
    pub allow_empty_submit: bool,
    pub magnet: MagneticFollower,
}

impl ChatInput {
    pub fn can_submit(&self) -> bool {
        !self.disabled && (self.allow_empty_submit || !self.value.trim().is_empty())
    }

    /// Submit the current text, clearing the field. Plays a tap on success.
    pub fn submit(&mut self, haptics: Option<&mut dyn HapticSink>) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        haptic(haptics, HapticPattern::Tap);
        Some(std::mem::take(&mut self.value))
    }

    /// Enter submits; Shift+Enter and every other key are left to the text field.
    pub fn key_down(
        &mut self,
        key: InputKey,
        shift: bool,
        haptics: Option<&mut dyn HapticSink>,
    ) -> Option<String> {
        if key == InputKey::Enter && !shift {
            return self.submit(haptics);
        }
        None
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/input.rs"]
mod tests;
