/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use zune_core::bytestream::{ZCursor, ZReader};
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::constants::{
    DC6_COUNTS_SIZE, DC6_HEADER_SIZE, FRAME_HEADER_SIZE, FRAME_POINTER_SIZE, MIN_FRAME_FOOTPRINT,
    TERMINATOR_SIZE
};
use crate::document::{Dc6Document, DirectionGroup};
use crate::errors::Dc6Errors;
use crate::frame::FrameRecord;
use crate::options::ArchiveLimits;

pub(crate) type ArchiveReader<'a> = ZReader<ZCursor<&'a [u8]>>;

pub(crate) fn stream_position(stream: &mut ArchiveReader) -> Result<usize, Dc6Errors> {
    usize::try_from(stream.position()?).map_err(|_| Dc6Errors::OverFlowOccurred)
}

/// Bytes between the stream position and the end of a `data_len` byte input
pub(crate) fn bytes_left(stream: &mut ArchiveReader, data_len: usize) -> Result<usize, Dc6Errors> {
    Ok(data_len.saturating_sub(stream_position(stream)?))
}

/// Fill `buf` from the stream
///
/// A short read keeps the bytes that were available, zeroes the rest of
/// `buf` and still moves the position past the whole of `buf`.
pub(crate) fn read_or_zero(stream: &mut ArchiveReader, buf: &mut [u8]) -> Result<(), Dc6Errors> {
    buf.fill(0);
    let read = stream.read_bytes(buf)?;
    stream.skip(buf.len() - read)?;

    Ok(())
}

/// Fields of the archive header
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Dc6Header {
    pub version:              i32,
    pub flags:                u32,
    pub encoding:             u32,
    /// Expected to be zero, kept as read
    pub termination:          [u8; 4],
    pub num_directions:       u32,
    pub frames_per_direction: u32
}

impl Dc6Header {
    /// Total number of frames the archive declares
    ///
    /// `None` if the product does not fit a `usize`
    pub fn total_frames(&self) -> Option<usize> {
        (self.num_directions as usize).checked_mul(self.frames_per_direction as usize)
    }
}

/// A DC6 archive decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return the whole document with every frame decoded
///
/// [`decode_headers`]:Dc6Decoder::decode_headers
/// [`decode`]:Dc6Decoder::decode
pub struct Dc6Decoder<'a> {
    stream:          ArchiveReader<'a>,
    data_len:        usize,
    header:          Dc6Header,
    header_end:      usize,
    decoded_headers: bool,
    options:         DecoderOptions,
    limits:          ArchiveLimits
}

impl<'a> Dc6Decoder<'a> {
    /// Create a new decoder with the default, tolerant options
    ///
    /// # Arguments
    /// - `data`: The raw archive bytes
    pub fn new(data: &'a [u8]) -> Dc6Decoder<'a> {
        Dc6Decoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder that obeys specified restrictions
    ///
    /// Only the maximum width and height and strict mode of `options`
    /// are used.
    ///
    /// # Example
    /// ```
    /// use zune_core::options::DecoderOptions;
    /// use zune_dc6::Dc6Decoder;
    /// // only decode frames less than 256 in both width and height
    /// let options = DecoderOptions::default().set_max_width(256).set_max_height(256);
    ///
    /// let mut decoder = Dc6Decoder::new_with_options(&[], options);
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> Dc6Decoder<'a> {
        Dc6Decoder::new_with_limits(data, options, ArchiveLimits::default())
    }

    /// Create a new decoder with archive specific limits on top of `options`
    ///
    /// # Example
    /// ```
    /// use zune_core::options::DecoderOptions;
    /// use zune_dc6::{ArchiveLimits, Dc6Decoder};
    /// // at most 8 directions and 1 << 20 decoded pixels
    /// let limits = ArchiveLimits::default().set_max_directions(8).set_max_pixels(1 << 20);
    ///
    /// let mut decoder = Dc6Decoder::new_with_limits(&[], DecoderOptions::default(), limits);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_limits(
        data: &'a [u8], options: DecoderOptions, limits: ArchiveLimits
    ) -> Dc6Decoder<'a> {
        Dc6Decoder {
            stream:          ZReader::new(ZCursor::new(data)),
            data_len:        data.len(),
            header:          Dc6Header::default(),
            header_end:      0,
            decoded_headers: false,
            options:         options,
            limits:          limits
        }
    }

    /// Decode the archive header and the direction/frame counts
    ///
    /// # Errors
    /// - [`TooManyDirections`] if the direction count exceeds the limit
    /// - [`TruncatedInput`] if the remaining input cannot hold the frames the
    ///   header declares, or in strict mode if the header itself is short
    /// - [`OverFlowOccurred`] if the frame count overflows
    ///
    /// [`TooManyDirections`]: Dc6Errors::TooManyDirections
    /// [`TruncatedInput`]: Dc6Errors::TruncatedInput
    /// [`OverFlowOccurred`]: Dc6Errors::OverFlowOccurred
    pub fn decode_headers(&mut self) -> Result<(), Dc6Errors> {
        if self.decoded_headers {
            return Ok(());
        }
        let available = bytes_left(&mut self.stream, self.data_len)?;

        if self.options.strict_mode() && available < DC6_HEADER_SIZE + DC6_COUNTS_SIZE {
            return Err(Dc6Errors::TruncatedInput(
                DC6_HEADER_SIZE + DC6_COUNTS_SIZE,
                available
            ));
        }

        let mut raw = [0; DC6_HEADER_SIZE + DC6_COUNTS_SIZE];
        read_or_zero(&mut self.stream, &mut raw)?;

        let mut fields = ZReader::new(ZCursor::new(&raw[..]));
        let header = Dc6Header {
            version:              fields.get_u32_le() as i32,
            flags:                fields.get_u32_le(),
            encoding:             fields.get_u32_le(),
            termination:          fields.read_fixed_bytes_or_zero::<4>(),
            num_directions:       fields.get_u32_le(),
            frames_per_direction: fields.get_u32_le()
        };

        trace!("Version: {}", header.version);
        trace!("Flags: {:#x}", header.flags);
        trace!("Encoding: {}", header.encoding);
        trace!("Directions: {}", header.num_directions);
        trace!("Frames per direction: {}", header.frames_per_direction);

        if header.termination != [0; 4] {
            trace!("Non zero header termination {:?}", header.termination);
        }

        let num_directions = header.num_directions as usize;

        if num_directions > self.limits.max_directions() {
            return Err(Dc6Errors::TooManyDirections(
                self.limits.max_directions(),
                num_directions
            ));
        }
        // every declared frame costs at least a pointer, a header and a terminator,
        // reject counts the input cannot back before allocating anything for them
        let needed = header
            .total_frames()
            .and_then(|frames| frames.checked_mul(MIN_FRAME_FOOTPRINT))
            .ok_or(Dc6Errors::OverFlowOccurred)?;

        let available = bytes_left(&mut self.stream, self.data_len)?;
        if needed > available {
            return Err(Dc6Errors::TruncatedInput(needed, available));
        }

        self.header = header;
        self.header_end = stream_position(&mut self.stream)?;
        self.decoded_headers = true;

        Ok(())
    }

    /// Decode the whole archive, returning the document with every frame's
    /// index buffer populated
    ///
    /// Frames larger than the configured limits, or past the pixel budget,
    /// keep `index_data` set to `None` unless strict mode is on, in which
    /// case they are an error.
    ///
    /// Can be called more than once, every call decodes from the frame
    /// pointers onwards.
    pub fn decode(&mut self) -> Result<Dc6Document, Dc6Errors> {
        self.decode_headers()?;
        self.stream.set_position(self.header_end)?;

        let strict = self.options.strict_mode();
        let header = self.header;
        let frames_per_direction = header.frames_per_direction as usize;
        // checked by decode_headers
        let total_frames = header.total_frames().unwrap_or(0);

        // frame pointers are offsets for random access, sequential decoding
        // has no use for them
        let pointer_bytes = total_frames * FRAME_POINTER_SIZE;
        let available = bytes_left(&mut self.stream, self.data_len)?;

        if strict && available < pointer_bytes {
            return Err(Dc6Errors::TruncatedInput(pointer_bytes, available));
        }
        self.stream.skip(pointer_bytes)?;

        let mut directions: Vec<DirectionGroup> = (0..header.num_directions)
            .map(|_| DirectionGroup::with_capacity(frames_per_direction))
            .collect();

        // end of the archive as the headers describe it
        let mut declared_end = self.header_end.saturating_add(pointer_bytes);

        for idx in 0..total_frames {
            let direction = idx / frames_per_direction;
            let frame = FrameRecord::decode_header(&mut self.stream, self.data_len, strict)?;

            trace!(
                "Direction {direction} frame {}: {}x{} with {} bytes of data",
                idx % frames_per_direction,
                frame.width,
                frame.height,
                frame.length
            );
            declared_end = declared_end
                .saturating_add(FRAME_HEADER_SIZE + TERMINATOR_SIZE)
                .saturating_add(frame.length as usize);

            directions[direction].frames.push(frame);
        }

        if declared_end > self.data_len {
            warn!(
                "Archive truncated, wanted {declared_end} bytes but input has {}",
                self.data_len
            );
        } else if declared_end < self.data_len {
            trace!("{} trailing bytes after last frame", self.data_len - declared_end);
        }

        let budget = self.limits.pixel_budget(self.data_len);
        let mut budget_left = budget;

        for (d, direction) in directions.iter_mut().enumerate() {
            for (f, frame) in direction.frames.iter_mut().enumerate() {
                if let Some((dimension, max, found)) = frame.exceeded_limit(&self.options) {
                    if strict {
                        return Err(Dc6Errors::TooLargeDimensions(dimension, max, found));
                    }
                    warn!(
                        "Skipping direction {d} frame {f}, {}x{} exceeds limits {}x{}",
                        frame.width,
                        frame.height,
                        self.options.max_width(),
                        self.options.max_height()
                    );
                    continue;
                }
                let pixels = (frame.width as usize).checked_mul(frame.height as usize);

                match pixels.and_then(|pixels| budget_left.checked_sub(pixels)) {
                    Some(rest) => {
                        frame.decode();
                        budget_left = rest;
                    }
                    None => {
                        let needed = pixels
                            .and_then(|pixels| (budget - budget_left).checked_add(pixels))
                            .unwrap_or(usize::MAX);
                        if strict {
                            return Err(Dc6Errors::TooLargeDimensions(
                                "total pixels",
                                budget,
                                needed
                            ));
                        }
                        warn!(
                            "Skipping direction {d} frame {f}, {}x{} exceeds the remaining pixel budget {budget_left} of {budget}",
                            frame.width,
                            frame.height
                        );
                    }
                }
            }
        }
        trace!("Finished decoding archive");

        Ok(Dc6Document {
            version: header.version,
            flags: header.flags,
            encoding: header.encoding,
            termination: header.termination,
            directions
        })
    }

    /// Return the archive header, or `None` if headers haven't been decoded
    pub const fn header(&self) -> Option<Dc6Header> {
        if self.decoded_headers {
            return Some(self.header);
        }
        None
    }
}
