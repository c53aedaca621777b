/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use zune_core::options::DecoderOptions;

use crate::decoder::Dc6Decoder;
use crate::encoder::Dc6Encoder;
use crate::errors::{Dc6EncodeErrors, Dc6Errors};
use crate::frame::FrameRecord;
use crate::options::{ArchiveLimits, EncoderOptions, FrameCountStrategy};

/// One facing of the animation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionGroup {
    pub frames: Vec<FrameRecord>
}

impl DirectionGroup {
    pub fn new() -> DirectionGroup {
        DirectionGroup::default()
    }
    pub fn with_capacity(frames: usize) -> DirectionGroup {
        DirectionGroup {
            frames: Vec::with_capacity(frames)
        }
    }
}

/// A decoded DC6 archive
///
/// The document owns its directions, which own their frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dc6Document {
    pub version:     i32,
    pub flags:       u32,
    pub encoding:    u32,
    /// Expected to be zero, written back as stored
    pub termination: [u8; 4],
    pub directions:  Vec<DirectionGroup>
}

impl Dc6Document {
    /// Create an empty document with no directions
    pub fn new() -> Dc6Document {
        Dc6Document::default()
    }

    /// Decode an archive with the default options
    pub fn from_bytes(data: &[u8]) -> Result<Dc6Document, Dc6Errors> {
        Dc6Decoder::new(data).decode()
    }

    pub fn from_bytes_with_options(
        data: &[u8], options: DecoderOptions
    ) -> Result<Dc6Document, Dc6Errors> {
        Dc6Decoder::new_with_options(data, options).decode()
    }

    pub fn from_bytes_with_limits(
        data: &[u8], options: DecoderOptions, limits: ArchiveLimits
    ) -> Result<Dc6Document, Dc6Errors> {
        Dc6Decoder::new_with_limits(data, options, limits).decode()
    }

    /// Read everything from `reader` and decode it
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(
        mut reader: R, options: DecoderOptions
    ) -> Result<Dc6Document, Dc6Errors> {
        let mut data = vec![];
        reader.read_to_end(&mut data)?;

        Dc6Document::from_bytes_with_options(&data, options)
    }

    /// Serialize the document with the default options
    ///
    /// Stored payloads are written as is, see [`EncoderOptions::set_recompress`]
    pub fn to_bytes(&self) -> Result<Vec<u8>, Dc6EncodeErrors> {
        self.to_bytes_with_options(EncoderOptions::default())
    }

    pub fn to_bytes_with_options(&self, options: EncoderOptions) -> Result<Vec<u8>, Dc6EncodeErrors> {
        let mut sink = vec![];
        Dc6Encoder::new_with_options(self, options).encode(&mut sink)?;
        Ok(sink)
    }

    /// Serialize the document into `writer`, returning the bytes written
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(
        &self, mut writer: W, options: EncoderOptions
    ) -> Result<usize, Dc6EncodeErrors> {
        let written = Dc6Encoder::new_with_options(self, options).encode(&mut writer)?;
        writer.flush()?;

        Ok(written)
    }

    /// Iterate over every frame, direction by direction
    pub fn frames(&self) -> impl Iterator<Item = &FrameRecord> {
        self.directions.iter().flat_map(|d| d.frames.iter())
    }

    pub fn frames_mut(&mut self) -> impl Iterator<Item = &mut FrameRecord> {
        self.directions.iter_mut().flat_map(|d| d.frames.iter_mut())
    }

    pub fn num_frames(&self) -> usize {
        self.directions.iter().map(|d| d.frames.len()).sum()
    }

    /// The `framesPerDirection` value an encoder using `strategy` writes
    pub fn frames_per_direction(&self, strategy: FrameCountStrategy) -> usize {
        match strategy {
            FrameCountStrategy::FirstDirection => {
                self.directions.first().map_or(0, |d| d.frames.len())
            }
            FrameCountStrategy::MaxDirection => self
                .directions
                .iter()
                .map(|d| d.frames.len())
                .max()
                .unwrap_or(0)
        }
    }

    /// Replace every frame of the document
    ///
    /// Existing directions are emptied and `frames` are placed in the first
    /// direction, one is created if the document has none.
    ///
    /// # Errors
    /// [`InvalidFrameDimensions`] if any frame has a zero width or height, the
    /// document is left untouched in that case.
    ///
    /// [`InvalidFrameDimensions`]: Dc6Errors::InvalidFrameDimensions
    pub fn set_frames(&mut self, frames: Vec<FrameRecord>) -> Result<(), Dc6Errors> {
        if let Some(frame) = frames.iter().find(|f| f.width == 0 || f.height == 0) {
            return Err(Dc6Errors::InvalidFrameDimensions(frame.width, frame.height));
        }

        for direction in &mut self.directions {
            direction.frames.clear();
        }
        match self.directions.first_mut() {
            Some(direction) => direction.frames.extend(frames),
            None => self.directions.push(DirectionGroup { frames })
        }
        Ok(())
    }

    /// Re-compress every frame that carries an index buffer
    pub fn recompress(&mut self) -> Result<(), Dc6EncodeErrors> {
        for frame in self.frames_mut().filter(|f| f.is_decoded()) {
            frame.recompress()?;
        }
        Ok(())
    }
}
