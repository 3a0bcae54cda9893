use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

fn particle(radius: f64, angular_offset: f64, phase_offset: f64) -> Particle {
    Particle {
        id: 0,
        hue_degrees: 60.0,
        size: 4.0,
        orbit_radius: radius,
        angular_offset,
        phase_offset,
    }
}

#[test]
fn starts_on_the_positive_x_axis() {
    let s = sample_particle(&particle(46.8, 0.0, 0.0), 0.0, 2.0);
    assert_eq!(s.x, 46.8);
    assert_eq!(s.y, 0.0);
    // sin(0) = 0: mid pulse.
    assert_eq!(s.scale, 0.8);
    assert_eq!(s.opacity, 0.5);
}

#[test]
fn one_revolution_returns_to_start() {
    let r = 46.8;
    for omega in [0.5, 1.5, 2.0, 3.0] {
        let s = sample_particle(&particle(r, 0.0, 0.0), TAU / omega, omega);
        assert!((s.x - r).abs() < 1e-9, "omega {omega}: x = {}", s.x);
        assert!(s.y.abs() < 1e-9, "omega {omega}: y = {}", s.y);
    }
}

#[test]
fn quarter_turn_moves_to_positive_y() {
    let s = sample_particle(&particle(10.0, 0.0, 0.0), 1.0, FRAC_PI_2);
    assert!(s.x.abs() < 1e-9);
    assert!((s.y - 10.0).abs() < 1e-9);
}

#[test]
fn angular_offset_rotates_start_position() {
    let s = sample_particle(&particle(10.0, PI, 0.0), 0.0, 1.0);
    assert!((s.x + 10.0).abs() < 1e-9);
}

#[test]
fn pulse_stays_in_bounds() {
    let p = particle(10.0, 0.3, 1.1);
    for i in 0..5000 {
        let elapsed = f64::from(i) * 0.013;
        let s = sample_particle(&p, elapsed, 1.5);
        assert!((PULSE_SCALE_MIN..=PULSE_SCALE_MAX).contains(&s.scale));
        assert!((0.0..=1.0).contains(&s.opacity));
    }
}

#[test]
fn pulse_peaks_at_quarter_phase() {
    // 2 * elapsed + phase = pi / 2
    let s = sample_particle(&particle(10.0, 0.0, 0.0), FRAC_PI_2 / PULSE_RATE, 0.0);
    assert!((s.scale - 1.2).abs() < 1e-12);
    assert!((s.opacity - 1.0).abs() < 1e-12);
}

#[test]
fn stopped_orbit_still_pulses() {
    let p = particle(10.0, 0.0, 0.0);
    let a = sample_particle(&p, 0.0, 0.0);
    let b = sample_particle(&p, 0.5, 0.0);
    assert_eq!(a.offset(), b.offset());
    assert_ne!(a.scale, b.scale);
}

#[test]
fn sample_all_preserves_order() {
    let ps = [
        particle(10.0, 0.0, 0.0),
        particle(20.0, PI, 0.0),
        particle(30.0, FRAC_PI_2, 0.0),
    ];
    let out = sample_all(&ps, 0.0, 1.0);
    assert_eq!(out.len(), 3);
    assert!((out[0].x - 10.0).abs() < 1e-9);
    assert!((out[1].x + 20.0).abs() < 1e-9);
    assert!((out[2].y - 30.0).abs() < 1e-9);

    let mut buf = vec![ParticleSample::default(); 7];
    sample_all_into(&ps, 0.0, 1.0, &mut buf);
    assert_eq!(buf, out);
    assert!(sample_all(&[], 1.0, 1.0).is_empty());
}
