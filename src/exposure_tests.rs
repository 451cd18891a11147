use std::cell::RefCell;
use std::rc::Rc;

use crate::camera::Camera;
use crate::transform::{Entity, TransformManager};
use super::*;

fn create_test_camera() -> Camera {
    let transforms = Rc::new(RefCell::new(TransformManager::new()));
    Camera::new(Entity::new(1), transforms)
}

// ============================================================================
// ev100
// ============================================================================

#[test]
fn test_ev100_reference_values() {
    // sunny 16: f/16, 1/100 s, ISO 100 → log2(25600)
    assert!((ev100(16.0, 1.0 / 100.0, 100.0) - 25_600.0_f32.log2()).abs() < 1e-4);
    // f/1, 1 s, ISO 100 → log2(1) = 0
    assert!(ev100(1.0, 1.0, 100.0).abs() < 1e-6);
}

#[test]
fn test_ev100_doubling_iso_lowers_ev_by_one() {
    let base = ev100(2.8, 1.0 / 60.0, 100.0);
    let doubled = ev100(2.8, 1.0 / 60.0, 200.0);

    assert!((base - doubled - 1.0).abs() < 1e-5);
}

#[test]
fn test_ev100_from_camera_defaults() {
    let camera = create_test_camera();

    // f/16, 1/125 s, ISO 100 → log2(32000)
    assert!((ev100_from_camera(&camera) - 32_000.0_f32.log2()).abs() < 1e-4);
}

// ============================================================================
// Derived photometric quantities
// ============================================================================

#[test]
fn test_exposure_reference_value() {
    // exposure(ev) = 1 / (1.2 * 2^ev)
    assert!((exposure(0.0) - 1.0 / 1.2).abs() < 1e-6);
    assert!((exposure(10.0) - 1.0 / (1.2 * 1024.0)).abs() < 1e-9);
}

#[test]
fn test_exposure_decreases_with_higher_ev() {
    assert!(exposure(16.0) < exposure(10.0));
    assert!(exposure(10.0) < exposure(0.0));
}

#[test]
fn test_luminance_inverts_ev100_from_luminance() {
    for ev in [0.0_f32, 5.0, 10.0, 15.0] {
        let l = luminance(ev);
        assert!((ev100_from_luminance(l) - ev).abs() < 1e-4);
    }
    // calibration: 2^(3 - 3) = 1 nit at ev 3
    assert!((luminance(3.0) - 1.0).abs() < 1e-6);
}

#[test]
fn test_illuminance_inverts_ev100_from_illuminance() {
    for ev in [0.0_f32, 5.0, 10.0, 15.0] {
        let e = illuminance(ev);
        assert!((ev100_from_illuminance(e) - ev).abs() < 1e-4);
    }
    assert!((illuminance(0.0) - 2.5).abs() < 1e-6);
}
