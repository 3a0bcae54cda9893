use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::PRESENTING_POP,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn named_curves_bend_the_right_way() {
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn presenting_pop_overshoots() {
    let peak = (1..100)
        .map(|i| Ease::PRESENTING_POP.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn json_forms() {
    let e: Ease = serde_json::from_str("\"ease_in_out\"").unwrap();
    assert_eq!(e, Ease::EaseInOut);
    let e: Ease = serde_json::from_str("{\"cubic_bezier\": [0.34, 1.56, 0.64, 1.0]}").unwrap();
    assert_eq!(e, Ease::PRESENTING_POP);
    assert!(serde_json::from_str::<Ease>("\"wobble\"").is_err());
    assert!(serde_json::from_str::<Ease>("{\"cubic_bezier\": [1.5, 0, 0.5, 1]}").is_err());
}

#[test]
fn serialized_form_parses_back() {
    for ease in ALL {
        let s = serde_json::to_string(&ease).unwrap();
        assert_eq!(serde_json::from_str::<Ease>(&s).unwrap(), ease);
    }
}

#[test]
fn solver_inverts_the_x_axis() {
    for (x1, y1, x2, y2) in [(0.42, 0.0, 1.0, 1.0), (0.34, 1.56, 0.64, 1.0), (0.0, 0.0, 1.0, 1.0)] {
        let bez = UnitBezier::new(x1, y1, x2, y2);
        for i in 1..20 {
            let x = f64::from(i) / 20.0;
            let u = bez.param_for(x);
            assert!((bez.x_at(u) - x).abs() < 1e-8, "{x1} {x2} at {x}");
        }
    }
    // Control points on the diagonal give the identity curve.
    assert!((UnitBezier::new(0.25, 0.25, 0.75, 0.75).solve(0.3) - 0.3).abs() < 1e-8);
}
