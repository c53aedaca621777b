/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Malformed and truncated archives must decode or error, never panic

use nanorand::{Rng, WyRand};
use xxhash_rust::xxh3::xxh3_128;
use zune_core::options::DecoderOptions;
use zune_dc6::{decode_scanlines, ArchiveLimits, Dc6Document, Dc6Errors, FrameRecord};

fn sample_archive() -> Vec<u8> {
    let mut document = Dc6Document::new();
    let frames = (0..4_u8)
        .map(|i| {
            let pixels: Vec<u8> = (0..12_u8).map(|p| if p % 3 == 0 { 0 } else { p + i }).collect();
            FrameRecord::from_indices(4, 3, &pixels).unwrap()
        })
        .collect();
    document.set_frames(frames).unwrap();
    document.to_bytes().unwrap()
}

fn strict_options() -> DecoderOptions {
    DecoderOptions::default().set_strict_mode(true)
}

/// Archive of `count` frames in one direction, all declaring
/// `width`x`height` with an empty payload
fn empty_frames_archive(count: u32, width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![];
    for field in [6, 1, 0, 0, 1, count] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.resize(bytes.len() + count as usize * 4, 0);

    for _ in 0..count {
        for field in [0, width, height, 0, 0, 0, 0, 0_u32] {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        bytes.extend_from_slice(&[0; 3]);
    }
    bytes
}

#[test]
fn every_prefix_decodes_or_errors() {
    let archive = sample_archive();

    for end in 0..archive.len() {
        let prefix = &archive[..end];
        match Dc6Document::from_bytes(prefix) {
            Ok(document) => {
                for frame in document.frames() {
                    assert_eq!(frame.index_data.as_ref().map(|d| d.len()), Some(frame.pixel_count()));
                }
            }
            Err(e) => assert!(matches!(e, Dc6Errors::TruncatedInput(..)), "{e:?}")
        }
        let strict = Dc6Document::from_bytes_with_options(prefix, strict_options());
        assert!(strict.is_err(), "strict decode accepted {end} of {} bytes", archive.len());
    }
    assert!(Dc6Document::from_bytes_with_options(&archive, strict_options()).is_ok());
}

#[test]
fn random_bytes_never_panic() {
    let mut rng = WyRand::new_seed(0xDC6);

    for _ in 0..500 {
        let length = rng.generate_range(0_usize..400);
        let mut bytes: Vec<u8> = (0..length).map(|_| rng.generate::<u8>()).collect();

        // keep the counts small now and then so frame parsing runs
        if bytes.len() >= 24 && rng.generate::<u8>() & 1 == 0 {
            bytes[16..20].copy_from_slice(&rng.generate_range(0_u32..3).to_le_bytes());
            bytes[20..24].copy_from_slice(&rng.generate_range(0_u32..3).to_le_bytes());
        }
        let options = DecoderOptions::default()
            .set_max_width(256)
            .set_max_height(256);

        let _ = Dc6Document::from_bytes_with_options(&bytes, options);
        let _ = Dc6Document::from_bytes_with_options(&bytes, options.set_strict_mode(true));
    }
}

#[test]
fn random_scanline_streams_stay_in_bounds() {
    let mut rng = WyRand::new_seed(42);

    for _ in 0..1000 {
        let width = rng.generate_range(0_usize..24);
        let height = rng.generate_range(0_usize..24);
        let length = rng.generate_range(0_usize..128);
        let data: Vec<u8> = (0..length).map(|_| rng.generate::<u8>()).collect();

        assert_eq!(decode_scanlines(&data, width, height).len(), width * height);
    }
}

#[test]
fn corrupted_payload_decodes_the_same_way_twice() {
    let mut archive = sample_archive();
    let mut rng = WyRand::new_seed(7);

    // skip header, counts and pointers
    for byte in &mut archive[40..] {
        if rng.generate_range(0_u8..8) == 0 {
            *byte = rng.generate();
        }
    }
    let options = DecoderOptions::default()
        .set_max_width(64)
        .set_max_height(64);

    let hash = |bytes: &[u8]| {
        let indices: Vec<u8> = Dc6Document::from_bytes_with_options(bytes, options)
            .map(|d| d.frames().flat_map(|f| f.index_data.clone().unwrap_or_default()).collect())
            .unwrap_or_default();
        xxh3_128(&indices)
    };
    assert_eq!(hash(&archive), hash(&archive));
}

#[test]
fn oversized_frames_stay_undecoded() {
    let mut document = Dc6Document::new();
    document
        .set_frames(vec![
            FrameRecord::from_indices(2, 2, &[1; 4]).unwrap(),
            FrameRecord::from_indices(64, 1, &[1; 64]).unwrap(),
        ])
        .unwrap();
    let bytes = document.to_bytes().unwrap();

    let options = DecoderOptions::default().set_max_width(16);
    let decoded = Dc6Document::from_bytes_with_options(&bytes, options).unwrap();
    let frames: Vec<&FrameRecord> = decoded.frames().collect();

    assert!(frames[0].is_decoded());
    assert!(!frames[1].is_decoded());
    // the undecoded frame is still written back unchanged
    assert_eq!(decoded.to_bytes().unwrap(), bytes);

    assert!(matches!(
        Dc6Document::from_bytes_with_options(&bytes, options.set_strict_mode(true)),
        Err(Dc6Errors::TooLargeDimensions("width", 16, 64))
    ));
}

#[test]
fn huge_declared_frames_are_not_allocated() {
    let bytes = empty_frames_archive(64, 1 << 14, 1 << 14);
    assert_eq!(bytes.len(), 2520);

    // default options, every frame is within the width and height limits
    let document = Dc6Document::from_bytes(&bytes).unwrap();
    assert_eq!(document.num_frames(), 64);
    assert!(document.frames().all(|f| !f.is_decoded()));

    assert!(matches!(
        Dc6Document::from_bytes_with_options(&bytes, strict_options()),
        Err(Dc6Errors::TooLargeDimensions("total pixels", 16777216, 268435456))
    ));
}

#[test]
fn pixel_budget_is_shared_across_frames() {
    let bytes = empty_frames_archive(64, 1024, 1024);
    let document = Dc6Document::from_bytes(&bytes).unwrap();

    let decoded: Vec<bool> = document.frames().map(|f| f.is_decoded()).collect();
    assert_eq!(decoded.iter().filter(|&&d| d).count(), 16);
    assert!(decoded[..16].iter().all(|&d| d));

    let allocated: usize = document
        .frames()
        .filter_map(|f| f.index_data.as_ref())
        .map(|d| d.len())
        .sum();
    assert!(allocated <= 1 << 24);

    // an explicit budget replaces the derived one
    let limits = ArchiveLimits::default().set_max_pixels(64 << 20);
    let document =
        Dc6Document::from_bytes_with_limits(&bytes, DecoderOptions::default(), limits).unwrap();
    assert!(document.frames().all(|f| f.is_decoded()));
}
