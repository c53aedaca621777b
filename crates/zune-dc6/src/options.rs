/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options

use crate::constants::{MIN_PIXEL_BUDGET, PIXELS_PER_INPUT_BYTE};

/// Archive specific decoding limits
///
/// Frame dimensions and strictness come from
/// [`DecoderOptions`](zune_core::options::DecoderOptions), these cover what
/// is particular to DC6 archives.
#[derive(Debug, Copy, Clone)]
pub struct ArchiveLimits {
    /// Maximum number of directions a header may declare
    ///
    /// - Default value: 1024
    max_directions: usize,
    /// Maximum number of pixels decoded across all frames
    ///
    /// - Default value: `None`, derived from the input length
    max_pixels:     Option<usize>
}

impl Default for ArchiveLimits {
    fn default() -> Self {
        ArchiveLimits {
            max_directions: 1 << 10,
            max_pixels:     None
        }
    }
}

impl ArchiveLimits {
    pub const fn max_directions(&self) -> usize {
        self.max_directions
    }

    /// The configured pixel budget, `None` if it is derived from the input
    pub const fn max_pixels(&self) -> Option<usize> {
        self.max_pixels
    }

    /// Number of pixels the decoder may allocate index buffers for when
    /// decoding an input of `input_len` bytes
    ///
    /// Without an explicit budget this is 256 pixels for every input
    /// byte, never less than `1 << 24` pixels.
    pub fn pixel_budget(&self, input_len: usize) -> usize {
        match self.max_pixels {
            Some(pixels) => pixels,
            None => input_len
                .saturating_mul(PIXELS_PER_INPUT_BYTE)
                .max(MIN_PIXEL_BUDGET)
        }
    }

    pub fn set_max_directions(mut self, directions: usize) -> Self {
        self.max_directions = directions;
        self
    }

    /// Set the total number of pixels the decoder may decode,
    /// frames past the budget keep `index_data` set to `None`
    pub fn set_max_pixels(mut self, pixels: usize) -> Self {
        self.max_pixels = Some(pixels);
        self
    }
}

/// How the encoder derives the `framesPerDirection` header field
///
/// The two disagree once directions hold different numbers of frames,
/// neither pads nor truncates directions to match.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FrameCountStrategy {
    /// Frame count of the first direction
    #[default]
    FirstDirection,
    /// Largest frame count across all directions
    MaxDirection
}

/// Encoder options
#[derive(Debug, Copy, Clone, Default)]
pub struct EncoderOptions {
    frame_count: FrameCountStrategy,
    recompress:  bool,
    strict_mode: bool
}

impl EncoderOptions {
    pub const fn frame_count(&self) -> FrameCountStrategy {
        self.frame_count
    }
    /// Whether frames carrying an index buffer are re-compressed
    /// instead of re-emitting their stored payload
    pub const fn recompress(&self) -> bool {
        self.recompress
    }
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub fn set_frame_count(mut self, strategy: FrameCountStrategy) -> Self {
        self.frame_count = strategy;
        self
    }
    /// Re-compress `index_data` on the fly when writing frames
    ///
    /// Off by default, in which case edits to `index_data` do not show up in
    /// the output and the stored payload is written untouched.
    pub fn set_recompress(mut self, yes: bool) -> Self {
        self.recompress = yes;
        self
    }
    /// Error out on directions with uneven frame counts instead of
    /// writing them with a warning
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
