/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::Dc6Errors;

const PALETTE_ENTRIES: usize = 256;

/// A 256 entry color lookup table
///
/// Frames only ever store indices into a palette, the palette
/// itself lives outside the archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: [[u8; 4]; PALETTE_ENTRIES]
}

impl Default for Palette {
    fn default() -> Self {
        Palette::grayscale()
    }
}

impl Palette {
    /// A palette of 256 opaque grays, index `i` maps to `(i, i, i, 255)`
    pub fn grayscale() -> Palette {
        let mut entries = [[0; 4]; PALETTE_ENTRIES];

        for (i, entry) in entries.iter_mut().enumerate() {
            let value = i as u8;
            *entry = [value, value, value, 255];
        }
        Palette { entries }
    }

    /// Create a palette from 256 RGBA entries, 1024 bytes
    pub fn from_rgba(data: &[u8]) -> Result<Palette, Dc6Errors> {
        Palette::from_components::<4>(data)
    }

    /// Create a palette from 256 RGB entries, 768 bytes, every
    /// entry fully opaque
    pub fn from_rgb(data: &[u8]) -> Result<Palette, Dc6Errors> {
        Palette::from_components::<3>(data)
    }

    fn from_components<const N: usize>(data: &[u8]) -> Result<Palette, Dc6Errors> {
        if data.len() != PALETTE_ENTRIES * N {
            return Err(Dc6Errors::TruncatedInput(PALETTE_ENTRIES * N, data.len()));
        }
        let mut entries = [[0, 0, 0, 255]; PALETTE_ENTRIES];

        for (entry, color) in entries.iter_mut().zip(data.chunks_exact(N)) {
            entry[..N].copy_from_slice(color);
        }
        Ok(Palette { entries })
    }

    /// The RGBA color stored for `index`
    #[inline(always)]
    pub const fn color(&self, index: u8) -> [u8; 4] {
        self.entries[index as usize]
    }

    /// Expand palette indices into RGBA8 pixels
    ///
    /// Expands as many pixels as fit in `output`, four bytes per index.
    pub fn expand(&self, indices: &[u8], output: &mut [u8]) {
        for (pixel, index) in output.chunks_exact_mut(4).zip(indices) {
            pixel.copy_from_slice(&self.color(*index));
        }
    }
}
