// Host-side tests for frequency sampling and uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod spectrum {
    include!("../src/spectrum.rs");
}
mod uniforms {
    include!("../src/uniforms.rs");
}

use constants::*;
use glam::Vec4;
use spectrum::FrequencySample;
use uniforms::*;

#[test]
fn sample_is_half_the_window() {
    let s = FrequencySample::for_window(ANALYSER_FFT_SIZE);
    assert_eq!(s.len(), 128);
    assert_eq!(s.len(), FREQUENCY_BIN_COUNT);
    assert!(s.bins().iter().all(|&b| b == 0));

    assert_eq!(FrequencySample::for_window(2048).len(), 1024);
}

#[test]
fn average_stays_in_byte_range() {
    let mut s = FrequencySample::new(FREQUENCY_BIN_COUNT);
    assert_eq!(s.average(), 0.0);

    s.bins_mut().fill(255);
    assert_eq!(s.average(), 255.0);

    // Deterministic pseudo-random fill
    let mut x: u32 = 0x1234_ABCD;
    for _ in 0..50 {
        for b in s.bins_mut().iter_mut() {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *b = (x & 0xFF) as u8;
        }
        let avg = s.average();
        assert!((0.0..=255.0).contains(&avg), "average {} out of range", avg);
    }
}

#[test]
fn average_is_the_arithmetic_mean() {
    let mut s = FrequencySample::new(4);
    s.bins_mut().copy_from_slice(&[0, 10, 20, 30]);
    assert!((s.average() - 15.0).abs() < 1e-6);
}

#[test]
fn empty_sample_reads_as_silence() {
    let s = FrequencySample::new(0);
    assert!(s.is_empty());
    assert_eq!(s.average(), 0.0);
}

#[test]
fn packed_length_is_a_quarter_of_the_bins() {
    assert_eq!(packed_len(FREQUENCY_BIN_COUNT), 32);
    assert_eq!(packed_len(FREQUENCY_BIN_COUNT), PACKED_FREQUENCY_LEN);
    assert_eq!(packed_len(7), 1);
    assert_eq!(packed_len(3), 0);

    let u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 800.0, 600.0);
    assert_eq!(u.frequency_data().len(), 32);
}

#[test]
fn silence_packs_to_zero_vectors() {
    let mut u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 1.0, 1.0);
    u.set_frequency_data(&[0u8; FREQUENCY_BIN_COUNT]);
    assert_eq!(u.frequency_data().len(), 32);
    assert!(u.frequency_data().iter().all(|v| *v == Vec4::ZERO));
}

#[test]
fn full_scale_packs_to_255_vectors() {
    let mut u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 1.0, 1.0);
    u.set_frequency_data(&[255u8; FREQUENCY_BIN_COUNT]);
    assert_eq!(u.frequency_data().len(), 32);
    assert!(u.frequency_data().iter().all(|v| *v == Vec4::splat(255.0)));
}

#[test]
fn groups_keep_bin_order() {
    let bins: Vec<u8> = (0..FREQUENCY_BIN_COUNT as u8).collect();
    let mut u = ShaderUniforms::new(bins.len(), 1.0, 1.0);
    u.set_frequency_data(&bins);
    assert_eq!(u.frequency_data()[0], Vec4::new(0.0, 1.0, 2.0, 3.0));
    assert_eq!(u.frequency_data()[31], Vec4::new(124.0, 125.0, 126.0, 127.0));
}

#[test]
fn trailing_bins_are_dropped() {
    let bins = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut out = vec![Vec4::ZERO; packed_len(bins.len())];
    pack_frequency_data(&bins, &mut out);
    assert_eq!(out, vec![Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::new(5.0, 6.0, 7.0, 8.0)]);
}

#[test]
fn repacking_reuses_the_buffer() {
    let mut u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 1.0, 1.0);
    let before = u.frequency_data().as_ptr();
    u.set_frequency_data(&[9u8; FREQUENCY_BIN_COUNT]);
    u.set_frequency_data(&[3u8; FREQUENCY_BIN_COUNT]);
    assert_eq!(u.frequency_data().as_ptr(), before);
    assert_eq!(u.frequency_data()[5], Vec4::splat(3.0));
}

#[test]
fn short_input_leaves_remaining_vectors() {
    let mut u = ShaderUniforms::new(FREQUENCY_BIN_COUNT, 1.0, 1.0);
    u.set_frequency_data(&[7u8; FREQUENCY_BIN_COUNT]);
    u.set_frequency_data(&[1u8; 8]);
    assert_eq!(u.frequency_data()[0], Vec4::splat(1.0));
    assert_eq!(u.frequency_data()[1], Vec4::splat(1.0));
    assert_eq!(u.frequency_data()[2], Vec4::splat(7.0));
    assert_eq!(u.frequency_data().len(), 32);
}
