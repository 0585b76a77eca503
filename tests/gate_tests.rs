// Host-side tests for the overlay's Selecting -> Ready latch.

#![allow(dead_code)]
mod gate {
    include!("../src/gate.rs");
}

use gate::*;

#[test]
fn starts_selecting() {
    let g = Gate::new();
    assert_eq!(g.state(), OverlayState::Selecting);
    assert!(!g.is_ready());
}

#[test]
fn first_trigger_transitions() {
    let mut g = Gate::new();
    assert!(g.ready());
    assert_eq!(g.state(), OverlayState::Ready);
    assert!(g.is_ready());
}

#[test]
fn later_triggers_have_no_effect() {
    let mut g = Gate::new();
    assert!(g.ready());
    for _ in 0..3 {
        assert!(!g.ready());
        assert_eq!(g.state(), OverlayState::Ready);
    }
}

#[test]
fn exactly_one_of_two_actions_wins() {
    // Play pressed while a file read is still pending: the read finishing
    // afterwards must not start a second scene.
    let mut g = Gate::new();
    let play_started = g.ready();
    let file_started = g.ready();
    assert!(play_started);
    assert!(!file_started);
}
