// Host-side tests for the audio output and unmount latches.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn release_before_connect_does_not_disconnect() {
    let mut out = OutputLatch::new();
    assert!(!out.release());
    assert!(out.is_released());
    assert!(!out.is_connected());
}

#[test]
fn connect_then_release_disconnects_once() {
    let mut out = OutputLatch::new();
    assert!(out.connect());
    assert!(out.is_connected());
    assert!(out.release());
    assert!(!out.is_connected());
    for _ in 0..3 {
        assert!(!out.release());
    }
}

#[test]
fn connect_after_release_is_refused() {
    let mut out = OutputLatch::new();
    assert!(out.connect());
    assert!(out.release());
    assert!(!out.connect());
    assert!(!out.is_connected());

    let mut never_connected = OutputLatch::new();
    assert!(!never_connected.release());
    assert!(!never_connected.connect());
}

#[test]
fn second_connect_is_ignored() {
    let mut out = OutputLatch::new();
    assert!(out.connect());
    assert!(!out.connect());
    assert!(out.release());
    assert!(!out.release());
}

#[test]
fn failed_connect_leaves_nothing_to_disconnect() {
    let mut out = OutputLatch::new();
    assert!(out.connect());
    out.connect_failed();
    assert!(!out.is_connected());
    assert!(!out.release());
}

#[test]
fn stop_runs_teardown_once() {
    let mut stop = TeardownLatch::new();
    assert!(!stop.is_done());
    assert!(stop.begin());
    assert!(stop.is_done());
    assert!(!stop.begin());
    assert!(!stop.begin());
}

#[test]
fn stop_without_a_scene_is_a_noop_afterwards() {
    // Never mounted: the first stop only clears the overlay, repeats do nothing
    let mut stop = TeardownLatch::new();
    let mut out = OutputLatch::new();
    assert!(stop.begin());
    assert!(!out.release());
    assert!(!stop.begin());
    assert!(!out.release());
}
