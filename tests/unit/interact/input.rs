use kurbo::{Point, Rect};

use super::*;

struct Count(usize);

impl HapticSink for Count {
    fn vibrate(&mut self, _durations_ms: &[u32]) {
        self.0 += 1;
    }
}

#[test]
fn enter_submits_and_clears() {
    let mut input = ChatInput {
        value: "how were you built?".to_string(),
        ..ChatInput::default()
    };
    let mut taps = Count(0);
    let sent = input.key_down(InputKey::Enter, false, Some(&mut taps));
    assert_eq!(sent.as_deref(), Some("how were you built?"));
    assert!(input.value.is_empty());
    assert_eq!(taps.0, 1);
}

#[test]
fn shift_enter_and_blank_text_do_not_submit() {
    let mut input = ChatInput {
        value: "hello".to_string(),
        ..ChatInput::default()
    };
    assert!(input.key_down(InputKey::Enter, true, None).is_none());
    assert!(input.key_down(InputKey::Other, false, None).is_none());

    input.value = "   ".to_string();
    assert!(input.submit(None).is_none());
    input.allow_empty_submit = true;
    assert_eq!(input.submit(None).as_deref(), Some("   "));
}

#[test]
fn disabled_blocks_submit() {
    let mut input = ChatInput {
        value: "hi".to_string(),
        disabled: true,
        ..ChatInput::default()
    };
    let mut taps = Count(0);
    assert!(input.submit(Some(&mut taps)).is_none());
    assert_eq!(taps.0, 0);
    assert_eq!(input.value, "hi");
}

#[test]
fn focus_freezes_the_magnet() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
    let mut input = ChatInput::default();
    input.focus();
    input.magnet.pointer_move(Point::new(100.0, 40.0), bounds, input.focused);
    assert_eq!(input.magnet.target(), kurbo::Vec2::ZERO);

    input.blur();
    input.magnet.pointer_move(Point::new(100.0, 40.0), bounds, input.focused);
    assert!(input.magnet.target().x > 0.0);
}
