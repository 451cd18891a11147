//! Photometric exposure calculator
//!
//! Converts a camera's physical exposure settings (aperture, shutter speed,
//! sensitivity) into an exposure value normalized at ISO 100, and between
//! exposure values and the photometric quantities a light meter would read.
//! Meter calibration constants: K = 12.5 (reflected), C = 250 (incident).

use crate::camera::Camera;

/// Exposure value at ISO 100 for the given settings.
///
/// `ev100 = log2(N^2 / t * 100 / S)` with aperture N in f-stops, shutter
/// speed t in seconds and sensitivity S in ISO.
pub fn ev100(aperture: f32, shutter_speed: f32, sensitivity: f32) -> f32 {
    ((aperture * aperture) / shutter_speed * 100.0 / sensitivity).log2()
}

/// Exposure value at ISO 100 for a camera's current settings.
pub fn ev100_from_camera(camera: &Camera) -> f32 {
    ev100(
        camera.aperture(),
        camera.shutter_speed(),
        camera.sensitivity(),
    )
}

/// Exposure value at ISO 100 that meters an average scene luminance, in
/// cd/m^2.
pub fn ev100_from_luminance(luminance: f32) -> f32 {
    (luminance * (100.0 / 12.5)).log2()
}

/// Exposure value at ISO 100 that meters an illuminance, in lux.
pub fn ev100_from_illuminance(illuminance: f32) -> f32 {
    (illuminance * (100.0 / 250.0)).log2()
}

/// Photometric exposure for an exposure value: the scale factor applied to
/// scene luminance before tonemapping.
pub fn exposure(ev100: f32) -> f32 {
    1.0 / (1.2 * ev100.exp2())
}

/// Average scene luminance (cd/m^2) a reflected-light meter would read at
/// this exposure value.
pub fn luminance(ev100: f32) -> f32 {
    (ev100 - 3.0).exp2()
}

/// Illuminance (lux) an incident-light meter would read at this exposure
/// value.
pub fn illuminance(ev100: f32) -> f32 {
    2.5 * ev100.exp2()
}

#[cfg(test)]
#[path = "exposure_tests.rs"]
mod tests;
