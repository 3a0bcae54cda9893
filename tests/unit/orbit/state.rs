use super::*;

#[test]
fn active_states() {
    let active: Vec<_> = OrbState::ALL
        .into_iter()
        .filter(|s| s.animates_particles())
        .collect();
    assert_eq!(
        active,
        [
            OrbState::Idle,
            OrbState::Thinking,
            OrbState::Searching,
            OrbState::Presenting
        ]
    );
    assert!(OrbState::Thinking.shows_inner_ring());
    assert!(!OrbState::Idle.shows_inner_ring());
}

#[test]
fn names_parse_back() {
    for s in OrbState::ALL {
        assert_eq!(s.to_string().parse::<OrbState>().unwrap(), s);
    }
    assert!("dancing".parse::<OrbState>().is_err());
}

#[test]
fn reference_table_values() {
    let table = StateTable::default();
    assert_eq!(table.orbit_angular_speed(OrbState::Idle), 0.5);
    assert_eq!(table.orbit_angular_speed(OrbState::Thinking), 2.0);
    assert_eq!(table.orbit_angular_speed(OrbState::Error), 0.0);
    assert_eq!(table.get(OrbState::Idle).pulse_period_secs, 8.0);
    assert_eq!(table.get(OrbState::Presenting).base_hue, 320.0);
}

#[test]
fn partial_json_overrides_keep_other_states() {
    let s = r#"{
        "thinking": {
            "base_hue": 100, "saturation": 10, "intensity": 0.5,
            "pulse_period_secs": 1.0, "orbit_angular_speed": 4.0
        }
    }"#;
    let table = StateTable::from_reader(s.as_bytes()).unwrap();
    assert_eq!(table.orbit_angular_speed(OrbState::Thinking), 4.0);
    assert_eq!(table.orbit_angular_speed(OrbState::Searching), 1.5);
}

#[test]
fn rejects_bad_overrides() {
    let mut cfg = StateConfig::reference(OrbState::Idle);
    cfg.pulse_period_secs = 0.0;
    let err = StateTable::with_overrides([(OrbState::Idle, cfg)]).unwrap_err();
    assert!(err.to_string().contains("pulse_period_secs"));

    let mut cfg = StateConfig::reference(OrbState::Idle);
    cfg.orbit_angular_speed = f64::NAN;
    assert!(StateTable::with_overrides([(OrbState::Idle, cfg)]).is_err());

    assert!(StateTable::from_reader(r#"{"sleepy": {}}"#.as_bytes()).is_err());
}
