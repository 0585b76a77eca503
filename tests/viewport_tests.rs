// Host-side tests for plane sizing under the fixed camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod uniforms {
    include!("../src/uniforms.rs");
}
mod viewport {
    include!("../src/viewport.rs");
}

use constants::*;
use glam::{Vec2, Vec4};
use uniforms::ShaderUniforms;
use viewport::*;

fn camera() -> Camera {
    Camera::new(CAMERA_FOV_DEG, CAMERA_Z, CAMERA_NEAR, CAMERA_FAR)
}

#[test]
fn viewport_height_matches_fov_and_distance() {
    let units = camera().viewport_units(800.0, 600.0);
    // 2 * tan(37.5deg) * 5
    assert!((units.y - 7.6733).abs() < 1e-3, "height {}", units.y);
    assert!((units.x / units.y - 800.0 / 600.0).abs() < 1e-5);
}

#[test]
fn plane_fills_clip_space() {
    for (w, h) in [(800.0, 600.0), (320.0, 1280.0), (1.0, 1.0), (1920.0, 1080.0)] {
        let layout = PlaneLayout::fit(&camera(), w, h);
        for (cx, cy) in [(0.5, 0.5), (-0.5, 0.5), (0.5, -0.5), (-0.5, -0.5)] {
            let clip = layout.mvp * Vec4::new(cx, cy, 0.0, 1.0);
            let ndc = clip.truncate() / clip.w;
            assert!((ndc.x - cx * 2.0).abs() < 1e-4, "{}x{} x={}", w, h, ndc.x);
            assert!((ndc.y - cy * 2.0).abs() < 1e-4, "{}x{} y={}", w, h, ndc.y);
        }
    }
}

#[test]
fn plane_scale_follows_aspect() {
    let wide = PlaneLayout::fit(&camera(), 1600.0, 400.0);
    let tall = PlaneLayout::fit(&camera(), 400.0, 1600.0);
    assert!((wide.scale.y - tall.scale.y).abs() < 1e-5);
    assert!((wide.scale.x / wide.scale.y - 4.0).abs() < 1e-4);
    assert!((tall.scale.x / tall.scale.y - 0.25).abs() < 1e-4);
}

#[test]
fn size_uniform_tracks_resize() {
    let mut u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 800.0, 600.0);
    assert_eq!(u.size(), Vec2::new(800.0, 600.0));
    u.set_size(1024.0, 768.0);
    assert_eq!(u.size(), Vec2::new(1024.0, 768.0));
}

#[test]
fn degenerate_sizes_are_ignored() {
    let mut u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 800.0, 600.0);
    for (w, h) in [
        (0.0, 600.0),
        (800.0, 0.0),
        (0.0, 0.0),
        (-10.0, 600.0),
        (800.0, -1.0),
        (f32::NAN, 600.0),
        (f32::INFINITY, 600.0),
    ] {
        assert!(!u.try_set_size(w, h), "{}x{} should be rejected", w, h);
        assert_eq!(u.size(), Vec2::new(800.0, 600.0));
    }
}

#[test]
fn positive_sizes_are_applied() {
    let mut u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 800.0, 600.0);
    assert!(u.try_set_size(1.0, 1.0));
    assert_eq!(u.size(), Vec2::new(1.0, 1.0));
    assert!(u.try_set_size(2560.0, 1440.0));
    assert_eq!(u.size(), Vec2::new(2560.0, 1440.0));
    assert!(uniforms::is_drawable_size(0.5, 0.5));
}
