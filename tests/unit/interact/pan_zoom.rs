use super::*;

#[test]
fn wheel_zoom_is_clamped() {
    let mut pz = PanZoom::default();
    pz.wheel(-100.0);
    assert!((pz.scale() - 1.15).abs() < 1e-12);
    for _ in 0..100 {
        pz.wheel(-1.0);
    }
    assert_eq!(pz.scale(), MAX_SCALE);
    for _ in 0..100 {
        pz.wheel(1.0);
    }
    assert_eq!(pz.scale(), MIN_SCALE);
    pz.wheel(f64::NAN);
    assert_eq!(pz.scale(), MIN_SCALE);
}

#[test]
fn zero_wheel_delta_zooms_in() {
    let mut pz = PanZoom::default();
    pz.wheel(0.0);
    assert!((pz.scale() - 1.15).abs() < 1e-12);
    pz.wheel(-0.0);
    assert!((pz.scale() - 1.3).abs() < 1e-12);
}

#[test]
fn drag_requires_zoom() {
    let mut pz = PanZoom::default();
    assert!(!pz.pointer_down(Point::new(10.0, 10.0)));
    pz.pointer_move(Point::new(50.0, 50.0));
    assert_eq!(pz.offset(), Vec2::ZERO);
}

#[test]
fn drag_pans_from_anchor() {
    let mut pz = PanZoom::default();
    pz.double_click();
    assert_eq!(pz.scale(), DOUBLE_CLICK_SCALE);

    assert!(pz.pointer_down(Point::new(10.0, 10.0)));
    pz.pointer_move(Point::new(30.0, 5.0));
    assert_eq!(pz.offset(), Vec2::new(20.0, -5.0));
    pz.pointer_up();
    assert!(!pz.is_dragging());

    // A second drag continues from the previous offset.
    pz.pointer_down(Point::new(0.0, 0.0));
    pz.pointer_move(Point::new(5.0, 5.0));
    assert_eq!(pz.offset(), Vec2::new(25.0, 0.0));

    let vt = pz.view_transform();
    assert_eq!(vt.scale, 2.5);
    assert_eq!(vt.translate, Vec2::new(10.0, 0.0));
}

#[test]
fn double_click_toggles() {
    let mut pz = PanZoom::default();
    pz.double_click();
    pz.pointer_down(Point::ZERO);
    pz.pointer_move(Point::new(4.0, 4.0));
    pz.double_click();
    assert_eq!(pz, PanZoom::default());
}
