/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::log::{trace, warn};

use crate::constants::{
    DC6_COUNTS_SIZE, DC6_HEADER_SIZE, FRAME_HEADER_SIZE, FRAME_POINTER_SIZE, TERMINATOR_SIZE
};
use crate::document::Dc6Document;
use crate::errors::Dc6EncodeErrors;
use crate::options::EncoderOptions;

fn to_u32(value: usize) -> Result<u32, Dc6EncodeErrors> {
    u32::try_from(value).map_err(|_| Dc6EncodeErrors::TooLargeDimensions(value))
}

/// DC6 archive encoder
///
/// Writes the header, the direction and frame counts, a zero filled frame
/// pointer table and every frame, direction by direction.
///
/// # Example
/// ```
/// use zune_dc6::{Dc6Document, Dc6Encoder, EncoderOptions, FrameCountStrategy, FrameRecord};
///
/// let mut document = Dc6Document::new();
/// document.set_frames(vec![FrameRecord::from_indices(1, 1, &[4]).unwrap()]).unwrap();
///
/// let options = EncoderOptions::default().set_frame_count(FrameCountStrategy::MaxDirection);
/// let mut sink = vec![];
/// let written = Dc6Encoder::new_with_options(&document, options).encode(&mut sink).unwrap();
/// assert_eq!(written, sink.len());
/// ```
pub struct Dc6Encoder<'a> {
    document: &'a Dc6Document,
    options:  EncoderOptions
}

impl<'a> Dc6Encoder<'a> {
    pub fn new(document: &'a Dc6Document) -> Dc6Encoder<'a> {
        Dc6Encoder::new_with_options(document, EncoderOptions::default())
    }

    pub const fn new_with_options(document: &'a Dc6Document, options: EncoderOptions) -> Dc6Encoder<'a> {
        Dc6Encoder { document, options }
    }

    /// Number of bytes the archive takes with stored payloads
    ///
    /// Exact unless frames are re-compressed.
    pub fn expected_size(&self) -> usize {
        let frames_per_direction = self
            .document
            .frames_per_direction(self.options.frame_count());
        let pointers = self.document.directions.len() * frames_per_direction;

        let frames: usize = self
            .document
            .frames()
            .map(|f| FRAME_HEADER_SIZE + f.frame_data.len() + TERMINATOR_SIZE)
            .sum();

        DC6_HEADER_SIZE + DC6_COUNTS_SIZE + pointers * FRAME_POINTER_SIZE + frames
    }

    /// Encode the document into `sink`
    ///
    /// # Returns
    /// - Ok(size): Bytes written to `sink`
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, Dc6EncodeErrors> {
        let document = self.document;
        let strategy = self.options.frame_count();

        let num_directions = document.directions.len();
        let frames_per_direction = document.frames_per_direction(strategy);

        trace!("Encoding {num_directions} directions, {frames_per_direction} frames per direction ({strategy:?})");

        if let Some(uneven) = document
            .directions
            .iter()
            .map(|d| d.frames.len())
            .find(|&count| count != frames_per_direction)
        {
            if self.options.strict_mode() {
                return Err(Dc6EncodeErrors::InconsistentDirections(
                    frames_per_direction,
                    uneven
                ));
            }
            warn!(
                "Directions hold uneven frame counts, header declares {frames_per_direction} but found {uneven}, output will not decode as written"
            );
        }

        let pointer_slots = num_directions
            .checked_mul(frames_per_direction)
            .ok_or(Dc6EncodeErrors::TooLargeDimensions(num_directions))?;

        let mut writer = ZWriter::new(sink);
        writer.reserve(self.expected_size())?;

        writer.write_u32_le_err(document.version as u32)?;
        writer.write_u32_le_err(document.flags)?;
        writer.write_u32_le_err(document.encoding)?;
        writer.write_const_bytes(&document.termination)?;

        writer.write_u32_le_err(to_u32(num_directions)?)?;
        writer.write_u32_le_err(to_u32(frames_per_direction)?)?;

        // stream offsets are not reconstructed
        for _ in 0..pointer_slots {
            writer.write_u32_le_err(0)?;
        }

        for frame in document.frames() {
            frame.encode(&mut writer, self.options.recompress())?;
        }
        trace!("Wrote {} bytes", writer.bytes_written());

        Ok(writer.bytes_written())
    }
}
