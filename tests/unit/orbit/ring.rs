use std::f64::consts::{PI, TAU};

use super::*;

#[test]
fn outer_ring_layout() {
    let ring = outer_ring(OrbSize::Md.pixels(), OUTER_RING_COUNT);
    assert_eq!(ring.len(), 8);
    assert_eq!(ring[0].id, 0);
    assert_eq!(ring[0].hue_degrees, 60.0);
    assert_eq!(ring[4].hue_degrees, 180.0);
    assert_eq!(ring[0].size, 4.0);
    assert_eq!(ring[2].size, 6.0);
    assert_eq!(ring[3].size, 4.0);
    assert!((ring[0].orbit_radius - 46.8).abs() < 1e-12);
    assert!((ring[1].orbit_radius - 51.8).abs() < 1e-12);
    assert!((ring[4].angular_offset - PI).abs() < 1e-12);
    assert_eq!(ring[5].angular_offset, ring[5].phase_offset);
}

#[test]
fn offsets_are_evenly_spaced() {
    let ring = outer_ring(100.0, 5);
    for w in ring.windows(2) {
        assert!((w[1].angular_offset - w[0].angular_offset - TAU / 5.0).abs() < 1e-12);
    }
    assert!(ring.iter().all(|p| p.angular_offset < TAU));
}

#[test]
fn inner_ring_layout() {
    let ring = inner_ring(OrbSize::Xl.pixels(), INNER_RING_COUNT);
    assert_eq!(ring.len(), 6);
    assert!(ring.iter().all(|p| p.size == 3.0));
    assert!(ring.iter().all(|p| (p.orbit_radius - 70.0).abs() < 1e-12));
    assert!(ring.iter().all(|p| p.phase_offset == 0.0));
    assert_eq!(ring[3].hue_degrees, 180.0);
}

#[test]
fn empty_ring() {
    assert!(outer_ring(72.0, 0).is_empty());
    assert!(inner_ring(72.0, 0).is_empty());
}

#[test]
fn sizes_and_json_names() {
    assert_eq!(OrbSize::Xs.pixels(), 28.0);
    assert_eq!(OrbSize::default(), OrbSize::Md);
    let s: OrbSize = serde_json::from_str("\"xl\"").unwrap();
    assert_eq!(s, OrbSize::Xl);
}
