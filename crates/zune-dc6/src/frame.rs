/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use zune_core::bytestream::{ZByteWriterTrait, ZCursor, ZReader, ZWriter};
use zune_core::options::DecoderOptions;

use crate::constants::{FRAME_HEADER_SIZE, TERMINATOR_SIZE};
use crate::decoder::{bytes_left, read_or_zero, ArchiveReader};
use crate::errors::{Dc6EncodeErrors, Dc6Errors};
use crate::palette::Palette;
use crate::scanline::{decode_scanlines, encode_scanlines};

/// A single frame of a DC6 archive
///
/// The header fields are kept exactly as read so an archive can be written
/// back unchanged. `frame_data` holds the compressed scanline stream,
/// `index_data` the decoded palette indices, row-major with the top row
/// first, once the frame was decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameRecord {
    /// `1` when the frame is stored top to bottom, not interpreted
    pub flipped:     u32,
    pub width:       u32,
    pub height:      u32,
    pub offset_x:    i32,
    pub offset_y:    i32,
    pub unknown:     u32,
    pub next_block:  u32,
    /// Payload length as declared in the header
    ///
    /// On output the length is always derived from `frame_data`.
    pub length:      u32,
    pub frame_data:  Vec<u8>,
    pub terminator:  [u8; TERMINATOR_SIZE],
    /// One palette index per pixel, `width*height` bytes
    pub index_data:  Option<Vec<u8>>
}

impl FrameRecord {
    /// Create an empty frame with every field zeroed
    pub fn new() -> FrameRecord {
        FrameRecord::default()
    }

    /// Build a frame from a buffer of palette indices
    ///
    /// The indices are compressed right away, so the frame can be written
    /// out as is.
    ///
    /// # Errors
    /// - [`InvalidFrameDimensions`] if width or height is zero
    /// - [`IndexLengthMismatch`] if `indices` does not hold `width*height` bytes
    ///
    /// [`InvalidFrameDimensions`]: Dc6Errors::InvalidFrameDimensions
    /// [`IndexLengthMismatch`]: Dc6Errors::IndexLengthMismatch
    pub fn from_indices(width: u32, height: u32, indices: &[u8]) -> Result<FrameRecord, Dc6Errors> {
        if width == 0 || height == 0 {
            return Err(Dc6Errors::InvalidFrameDimensions(width, height));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Dc6Errors::OverFlowOccurred)?;

        if indices.len() != expected {
            return Err(Dc6Errors::IndexLengthMismatch(expected, indices.len()));
        }
        let frame_data = encode_scanlines(indices, width as usize, height as usize);

        Ok(FrameRecord {
            width,
            height,
            length: frame_data.len() as u32,
            frame_data,
            index_data: Some(indices.to_vec()),
            ..FrameRecord::default()
        })
    }

    /// Number of pixels, `width*height`
    pub fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub const fn is_decoded(&self) -> bool {
        self.index_data.is_some()
    }

    /// Read a frame header, its payload and terminator
    ///
    /// `data_len` is the length of the whole input. Without `strict`, a short
    /// read leaves missing integers at zero and keeps whatever part of the
    /// payload is present.
    pub(crate) fn decode_header(
        stream: &mut ArchiveReader, data_len: usize, strict: bool
    ) -> Result<FrameRecord, Dc6Errors> {
        let available = bytes_left(stream, data_len)?;
        if strict && available < FRAME_HEADER_SIZE {
            return Err(Dc6Errors::TruncatedInput(FRAME_HEADER_SIZE, available));
        }
        let mut raw = [0; FRAME_HEADER_SIZE];
        read_or_zero(stream, &mut raw)?;

        let mut fields = ZReader::new(ZCursor::new(&raw[..]));
        let mut frame = FrameRecord {
            flipped: fields.get_u32_le(),
            width: fields.get_u32_le(),
            height: fields.get_u32_le(),
            offset_x: fields.get_u32_le() as i32,
            offset_y: fields.get_u32_le() as i32,
            unknown: fields.get_u32_le(),
            next_block: fields.get_u32_le(),
            length: fields.get_u32_le(),
            ..FrameRecord::default()
        };

        let length = frame.length as usize;
        let available = bytes_left(stream, data_len)?;

        if strict && available < length {
            return Err(Dc6Errors::TruncatedInput(length, available));
        }
        // the declared length is untrusted, size the buffer by what is left
        let mut payload = vec![0; length.min(available)];
        stream.read_exact_bytes(&mut payload)?;
        stream.skip(length - payload.len())?;
        frame.frame_data = payload;

        let available = bytes_left(stream, data_len)?;
        if strict && available < TERMINATOR_SIZE {
            return Err(Dc6Errors::TruncatedInput(TERMINATOR_SIZE, available));
        }
        read_or_zero(stream, &mut frame.terminator)?;

        Ok(frame)
    }

    /// Decode `frame_data` into `index_data`
    ///
    /// Never fails, malformed runs produce a partially filled buffer.
    /// The index buffer is sized from the header, bound the dimensions
    /// first when they come from untrusted input, see
    /// [`decode_with_options`](Self::decode_with_options).
    pub fn decode(&mut self) {
        let (width, height) = self.dimensions();
        self.index_data = Some(decode_scanlines(&self.frame_data, width, height));
    }

    /// Return the first dimension over the limits of `options` as
    /// `(dimension, maximum, found)`, or `None` if the frame fits
    pub fn exceeded_limit(&self, options: &DecoderOptions) -> Option<(&'static str, usize, usize)> {
        let (width, height) = self.dimensions();

        if width > options.max_width() {
            Some(("width", options.max_width(), width))
        } else if height > options.max_height() {
            Some(("height", options.max_height(), height))
        } else {
            None
        }
    }

    /// Decode `frame_data` if the frame fits inside the configured limits
    ///
    /// # Returns
    /// - `Ok(true)`: The frame was decoded
    /// - `Ok(false)`: The frame exceeds the limits and strict mode is off,
    ///    `index_data` stays `None`
    /// - `Err`: The frame exceeds the limits in strict mode
    pub fn decode_with_options(&mut self, options: &DecoderOptions) -> Result<bool, Dc6Errors> {
        if let Some((dimension, max, found)) = self.exceeded_limit(options) {
            if options.strict_mode() {
                return Err(Dc6Errors::TooLargeDimensions(dimension, max, found));
            }
            return Ok(false);
        }
        self.decode();

        Ok(true)
    }

    /// Replace `frame_data` with a fresh compression of `index_data`
    ///
    /// # Errors
    /// - [`Generic`] if the frame has no index buffer
    /// - [`IndexLengthMismatch`] if the index buffer is not `width*height` bytes
    ///
    /// [`Generic`]: Dc6EncodeErrors::Generic
    /// [`IndexLengthMismatch`]: Dc6EncodeErrors::IndexLengthMismatch
    pub fn recompress(&mut self) -> Result<(), Dc6EncodeErrors> {
        let frame_data = self.compressed_indices()?;

        self.length = u32::try_from(frame_data.len())
            .map_err(|_| Dc6EncodeErrors::TooLargeDimensions(frame_data.len()))?;
        self.frame_data = frame_data;

        Ok(())
    }

    fn compressed_indices(&self) -> Result<Vec<u8>, Dc6EncodeErrors> {
        let indices = self
            .index_data
            .as_deref()
            .ok_or(Dc6EncodeErrors::Generic("Frame has no index data to compress"))?;

        if indices.len() != self.pixel_count() {
            return Err(Dc6EncodeErrors::IndexLengthMismatch(
                self.pixel_count(),
                indices.len()
            ));
        }
        let (width, height) = self.dimensions();

        Ok(encode_scanlines(indices, width, height))
    }

    /// Write the header, payload and terminator
    ///
    /// With `recompress` set, frames that carry an index buffer have their
    /// payload re-derived from it, other frames write `frame_data` as is.
    pub(crate) fn encode<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>, recompress: bool
    ) -> Result<(), Dc6EncodeErrors> {
        let fresh;
        let payload = if recompress && self.index_data.is_some() {
            fresh = self.compressed_indices()?;
            &fresh[..]
        } else {
            &self.frame_data[..]
        };

        let length = u32::try_from(payload.len())
            .map_err(|_| Dc6EncodeErrors::TooLargeDimensions(payload.len()))?;

        writer.write_u32_le_err(self.flipped)?;
        writer.write_u32_le_err(self.width)?;
        writer.write_u32_le_err(self.height)?;
        writer.write_u32_le_err(self.offset_x as u32)?;
        writer.write_u32_le_err(self.offset_y as u32)?;
        writer.write_u32_le_err(self.unknown)?;
        writer.write_u32_le_err(self.next_block)?;
        writer.write_u32_le_err(length)?;
        writer.write_all(payload)?;
        writer.write_const_bytes(&self.terminator)?;

        Ok(())
    }

    /// Expand the decoded indices to RGBA8 pixels through `palette`
    ///
    /// Returns `None` if the frame hasn't been decoded.
    pub fn to_rgba(&self, palette: &Palette) -> Option<Vec<u8>> {
        let indices = self.index_data.as_deref()?;
        let mut pixels = vec![0; indices.len() * 4];

        palette.expand(indices, &mut pixels);

        Some(pixels)
    }
}
