use super::*;

fn settle(spring: SpringParams, secs: f64) -> (f64, f64, f64) {
    let (mut x, mut v) = (0.0, 0.0);
    let mut peak: f64 = 0.0;
    let dt = 1.0 / 60.0;
    let frames = (secs / dt) as u32;
    for _ in 0..frames {
        (x, v) = spring.step(x, v, 10.0, dt);
        peak = peak.max(x);
    }
    (x, v, peak)
}

#[test]
fn presets_converge_to_target() {
    for spring in [
        SpringParams::GENTLE,
        SpringParams::SNAPPY,
        SpringParams::BOUNCY,
        SpringParams::MAGNETIC,
    ] {
        let (x, v, _) = settle(spring, 3.0);
        assert!((x - 10.0).abs() < 0.01, "{spring:?}: x = {x}");
        assert!(v.abs() < 0.05, "{spring:?}: v = {v}");
    }
}

#[test]
fn underdamped_spring_overshoots() {
    assert!(SpringParams::BOUNCY.damping_ratio() < 1.0);
    let (_, _, peak) = settle(SpringParams::BOUNCY, 1.0);
    assert!(peak > 10.5);
}

#[test]
fn non_positive_dt_is_a_no_op() {
    let s = SpringParams::SNAPPY;
    assert_eq!(s.step(1.0, 2.0, 5.0, 0.0), (1.0, 2.0));
    assert_eq!(s.step(1.0, 2.0, 5.0, -1.0), (1.0, 2.0));
    assert_eq!(s.step(1.0, 2.0, 5.0, f64::NAN), (1.0, 2.0));
}

#[test]
fn long_frames_are_subdivided() {
    // A single 0.5 s step stays bounded instead of blowing up.
    let (x, _) = SpringParams::SNAPPY.step(0.0, 0.0, 10.0, 0.5);
    assert!(x.abs() < 20.0);
}

#[test]
fn settled_detection() {
    let t = Vec2::new(3.0, 4.0);
    assert!(SpringParams::is_settled(t, Vec2::ZERO, t));
    assert!(!SpringParams::is_settled(Vec2::ZERO, Vec2::ZERO, t));
    assert!(!SpringParams::is_settled(t, Vec2::new(1.0, 0.0), t));
}

#[test]
fn json_defaults_mass() {
    let s: SpringParams = serde_json::from_str(r#"{"stiffness": 200, "damping": 25}"#).unwrap();
    assert_eq!(s, SpringParams::MAGNETIC);
}
