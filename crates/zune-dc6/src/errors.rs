/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
/// Errors possible during decoding.
use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;

/// Possible Errors that may occur during decoding or when
/// building a document by hand
#[non_exhaustive]
pub enum Dc6Errors {
    /// The input buffer doesn't have enough bytes for a field
    /// or for the frames the header promises
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    TruncatedInput(usize, usize),
    /// A frame with a zero width or height was handed to
    /// the document
    ///
    /// # Arguments
    /// - 1st argument is the width
    /// - 2nd argument is the height
    InvalidFrameDimensions(u32, u32),
    /// A frame is larger than the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the dimension, `width` or `height`
    /// - 2nd argument is the configured maximum
    /// - 3rd argument is the value found
    TooLargeDimensions(&'static str, usize, usize),
    /// The header declares more directions than the configured limit
    ///
    /// # Arguments
    /// - 1st argument is the configured maximum
    /// - 2nd argument is the value found
    TooManyDirections(usize, usize),
    /// A size calculation overflowed
    OverFlowOccurred,
    /// An index buffer does not match the frame dimensions
    ///
    /// # Arguments
    /// - 1st argument is the expected length, `width*height`
    /// - 2nd argument is the length found
    IndexLengthMismatch(usize, usize),
    /// Generic message
    Generic(String),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for Dc6Errors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Dc6Errors::TruncatedInput(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data required {expected} but remaining stream has {found}"
                )
            }
            Dc6Errors::InvalidFrameDimensions(width, height) => {
                writeln!(
                    f,
                    "Frame dimensions must be greater than zero: {width}x{height}"
                )
            }
            Dc6Errors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            Dc6Errors::TooManyDirections(expected, found) => {
                writeln!(
                    f,
                    "Too many directions, {found} exceeds configured maximum {expected}"
                )
            }
            Dc6Errors::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Dc6Errors::IndexLengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Index buffer length {found} does not match frame dimensions, expected {expected}"
                )
            }
            Dc6Errors::Generic(val) => {
                writeln!(f, "{val}")
            }
            Dc6Errors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            Dc6Errors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl From<&'static str> for Dc6Errors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for Dc6Errors {
    fn from(value: ZByteIoError) -> Self {
        Dc6Errors::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Dc6Errors {
    fn from(value: std::io::Error) -> Self {
        Dc6Errors::IoErrors(ZByteIoError::from(value))
    }
}

/// Errors encountered during encoding
#[non_exhaustive]
pub enum Dc6EncodeErrors {
    /// Directions hold different numbers of frames and
    /// strict mode is on
    ///
    /// # Arguments
    /// - 1st argument is the frames per direction written to the header
    /// - 2nd argument is the frame count of the offending direction
    InconsistentDirections(usize, usize),
    /// A count or a payload length cannot be represented in
    /// the 32 bit fields of the format
    TooLargeDimensions(usize),
    /// A frame's index buffer does not match its dimensions
    ///
    /// # Arguments
    /// - 1st argument is the expected length, `width*height`
    /// - 2nd argument is the length found
    IndexLengthMismatch(usize, usize),

    Generic(&'static str),

    IoErrors(ZByteIoError)
}

impl Debug for Dc6EncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Dc6EncodeErrors::InconsistentDirections(expected, found) => {
                writeln!(
                    f,
                    "Inconsistent directions, header declares {expected} frames per direction but a direction has {found}"
                )
            }
            Dc6EncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large value {found}, DC6 can only encode values less than {}",
                    u32::MAX
                )
            }
            Dc6EncodeErrors::IndexLengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Index buffer length {found} does not match frame dimensions, expected {expected}"
                )
            }
            Dc6EncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            Dc6EncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl From<ZByteIoError> for Dc6EncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Dc6EncodeErrors::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Dc6EncodeErrors {
    fn from(value: std::io::Error) -> Self {
        Dc6EncodeErrors::IoErrors(ZByteIoError::from(value))
    }
}

impl Display for Dc6EncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for Dc6Errors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Dc6EncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for Dc6Errors {}
