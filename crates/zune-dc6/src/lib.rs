/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding DC6 sprite archives
//!
//! A DC6 archive stores an animation as a grid of directions and frames,
//! each frame carrying a small header and a run length encoded
//! stream of palette indices.
//!
//! This crate parses and serializes the container and decodes the
//! per-frame scanline stream into flat index buffers, one byte per pixel.
//! Turning those indices into colors is left to a [`Palette`].
//!
//! Byte streams, logging and the common decoder limits come from `zune-core`,
//! [`ArchiveLimits`] adds the limits particular to DC6 archives.
//!
//! # Features
//! - Decoding and encoding, byte exact for archives written by this crate
//! - Tolerant of truncated and malformed input, never panics on bad data
//! - Bounded allocations, the pixels decoded are capped by a budget tied to the input size
//! - Optional re-compression of edited index buffers
//! - `no_std` with `alloc`
//!
//! # Example
//! ```
//! use zune_dc6::{Dc6Document, FrameRecord};
//!
//! let frame = FrameRecord::from_indices(2, 1, &[7, 9]).unwrap();
//! let mut document = Dc6Document::new();
//! document.set_frames(vec![frame]).unwrap();
//!
//! let bytes = document.to_bytes().unwrap();
//! let decoded = Dc6Document::from_bytes(&bytes).unwrap();
//!
//! let frame = decoded.frames().next().unwrap();
//! assert_eq!(frame.index_data.as_deref(), Some(&[7, 9][..]));
//! ```
//!
//! ## `no_std`
//! Disable default features to compile for `no_std` targets with an allocator

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::*;
pub use document::*;
pub use encoder::*;
pub use errors::*;
pub use frame::*;
pub use options::*;
pub use palette::*;
pub use scanline::{decode_scanlines, decode_scanlines_into, encode_scanlines};

mod constants;
mod decoder;
mod document;
mod encoder;
mod errors;
mod frame;
mod options;
mod palette;
mod scanline;
mod serde;
