/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Run length coded scanline stream
//!
//! A frame's pixel payload is a sequence of control bytes, each optionally
//! followed by literal palette indices
//!
//! * `0x80`: end of the current line, move one line up
//! * `0x81..=0xFF`: skip `byte & 0x7F` transparent pixels
//! * `0x00..=0x7F`: the next `byte` bytes are palette indices
//!
//! Lines are stored bottom to top, the first line in the stream is the
//! last line of the image.
use alloc::vec;
use alloc::vec::Vec;

use crate::constants::{END_OF_SCANLINE, MAX_RUN_LENGTH};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ScanlineOp {
    EndOfLine,
    TransparentRun(u8),
    OpaqueRun(u8)
}

impl ScanlineOp {
    const fn classify(byte: u8) -> ScanlineOp {
        if byte == END_OF_SCANLINE {
            ScanlineOp::EndOfLine
        } else if (byte & END_OF_SCANLINE) != 0 {
            ScanlineOp::TransparentRun(byte & MAX_RUN_LENGTH)
        } else {
            ScanlineOp::OpaqueRun(byte)
        }
    }
}

/// Map a cursor position into an offset of a `width` wide
/// row-major buffer, `None` when the line is above the image.
#[inline(always)]
fn pixel_position(x: usize, y: i64, width: usize) -> Option<usize> {
    let y = usize::try_from(y).ok()?;
    y.checked_mul(width)?.checked_add(x)
}

/// Decode a compressed scanline stream into a freshly allocated
/// index buffer of `width*height` bytes
///
/// Pixels the stream never touches stay `0`, the transparent index.
///
/// The caller is responsible for bounding `width` and `height`, this
/// allocates the full buffer up front.
///
/// # Example
/// ```
/// // one opaque run of three pixels then the end of the line
/// let pixels = zune_dc6::decode_scanlines(&[0x03, 5, 6, 7, 0x80], 3, 1);
/// assert_eq!(pixels, [5, 6, 7]);
/// ```
pub fn decode_scanlines(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut pixels = vec![0; width.saturating_mul(height)];

    decode_scanlines_into(data, width, height, &mut pixels);

    pixels
}

/// Decode a compressed scanline stream into `pixels`
///
/// `pixels` is treated as a row-major `width` wide buffer with `height` lines,
/// writes landing outside of it are dropped. Decoding stops when the data
/// runs out, including in the middle of an opaque run, or when an end of
/// line marker shows up after the top line was finished.
///
/// Returns the number of bytes of `data` consumed.
pub fn decode_scanlines_into(data: &[u8], width: usize, height: usize, pixels: &mut [u8]) -> usize {
    let mut x: usize = 0;
    let mut y = i64::try_from(height).unwrap_or(i64::MAX) - 1;
    let mut offset = 0;

    'decode: while offset < data.len() {
        let byte = data[offset];
        offset += 1;

        match ScanlineOp::classify(byte) {
            ScanlineOp::EndOfLine => {
                if y < 0 {
                    break;
                }
                y -= 1;
                x = 0;
            }
            ScanlineOp::TransparentRun(run) => {
                x = x.saturating_add(usize::from(run));
            }
            ScanlineOp::OpaqueRun(run) => {
                for _ in 0..run {
                    let Some(&index) = data.get(offset) else {
                        break 'decode;
                    };
                    offset += 1;

                    if let Some(pixel) =
                        pixel_position(x, y, width).and_then(|pos| pixels.get_mut(pos))
                    {
                        *pixel = index;
                    }
                    x = x.saturating_add(1);
                }
            }
        }
    }
    offset
}

/// Compress an index buffer into a scanline stream
///
/// Index `0` is treated as transparent. Lines are written bottom to top,
/// each one terminated with an end of line marker, trailing transparent
/// pixels of a line are left implicit.
///
/// `indices` should hold `width*height` bytes, missing pixels at the end
/// are encoded as transparent.
///
/// # Example
/// ```
/// let data = zune_dc6::encode_scanlines(&[0, 0, 9, 0], 4, 1);
/// assert_eq!(data, [0x82, 0x01, 9, 0x80]);
/// assert_eq!(zune_dc6::decode_scanlines(&data, 4, 1), [0, 0, 9, 0]);
/// ```
pub fn encode_scanlines(indices: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut output = Vec::with_capacity(indices.len() + height);

    for y in (0..height).rev() {
        let start = y.saturating_mul(width).min(indices.len());
        let end = start.saturating_add(width).min(indices.len());
        let row = &indices[start..end];

        let mut x = 0;

        while x < row.len() {
            let transparent = row[x] == 0;
            let run = row[x..]
                .iter()
                .take_while(|&&index| (index == 0) == transparent)
                .count();

            if transparent {
                if x + run == row.len() {
                    break;
                }
                let mut remaining = run;

                while remaining > 0 {
                    let chunk = remaining.min(usize::from(MAX_RUN_LENGTH));
                    output.push(END_OF_SCANLINE | chunk as u8);
                    remaining -= chunk;
                }
            } else {
                for chunk in row[x..x + run].chunks(usize::from(MAX_RUN_LENGTH)) {
                    output.push(chunk.len() as u8);
                    output.extend_from_slice(chunk);
                }
            }
            x += run;
        }
        output.push(END_OF_SCANLINE);
    }
    output
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn classify_control_bytes() {
        assert_eq!(ScanlineOp::classify(0x80), ScanlineOp::EndOfLine);
        assert_eq!(ScanlineOp::classify(0x81), ScanlineOp::TransparentRun(1));
        assert_eq!(ScanlineOp::classify(0xFF), ScanlineOp::TransparentRun(127));
        assert_eq!(ScanlineOp::classify(0x00), ScanlineOp::OpaqueRun(0));
        assert_eq!(ScanlineOp::classify(0x7F), ScanlineOp::OpaqueRun(127));
    }

    #[test]
    fn opaque_run() {
        assert_eq!(decode_scanlines(&[0x03, 5, 6, 7, 0x80], 3, 1), [5, 6, 7]);
    }

    #[test]
    fn transparent_run() {
        assert_eq!(decode_scanlines(&[0x82, 0x80], 2, 1), [0, 0]);
    }

    #[test]
    fn lines_are_stored_bottom_up() {
        let data = [0x02, 3, 4, 0x80, 0x02, 1, 2, 0x80];
        assert_eq!(decode_scanlines(&data, 2, 2), [1, 2, 3, 4]);
    }

    #[test]
    fn mixed_runs_on_one_line() {
        let data = [0x81, 0x01, 9, 0x81, 0x01, 8, 0x80];
        assert_eq!(decode_scanlines(&data, 4, 1), [0, 9, 0, 8]);
    }

    #[test]
    fn truncated_opaque_run_keeps_available_pixels() {
        // claims five pixels, only two follow
        let data = [0x05, 1, 2];
        let mut pixels = vec![0; 6];
        let consumed = decode_scanlines_into(&data, 3, 2, &mut pixels);

        assert_eq!(consumed, 3);
        assert_eq!(pixels, [0, 0, 0, 1, 2, 0]);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        // 3 pixels on a 2x1 image spill past the buffer
        assert_eq!(decode_scanlines(&[0x03, 1, 2, 3], 2, 1), [1, 2]);
        // a line past the top of the image is ignored entirely
        assert_eq!(decode_scanlines(&[0x80, 0x02, 7, 7, 0x80], 2, 1), [0, 0]);
        // a run past the end of the bottom line falls off the buffer
        assert_eq!(decode_scanlines(&[0x82, 0x01, 5], 2, 2), [0, 0, 0, 0]);
        // a run past the end of the top line spills into the line below it
        assert_eq!(decode_scanlines(&[0x80, 0x82, 0x01, 5], 2, 2), [0, 0, 5, 0]);
    }

    #[test]
    fn empty_frames_do_not_panic() {
        assert!(decode_scanlines(&[0x03, 1, 2, 3, 0x80, 0x85], 0, 0).is_empty());
        assert!(decode_scanlines(&[0x03, 1, 2, 3], 5, 0).is_empty());
        assert!(decode_scanlines(&[0x03, 1, 2, 3], 0, 5).is_empty());
        assert_eq!(decode_scanlines(&[], 2, 2), [0; 4]);
    }

    #[test]
    fn stops_after_top_line() {
        let data = [0x01, 4, 0x80, 0x80, 0x01, 9];
        let mut pixels = vec![0; 1];
        let consumed = decode_scanlines_into(&data, 1, 1, &mut pixels);
        assert_eq!(pixels, [4]);
        assert_eq!(consumed, 4);
    }

    #[test]
    fn encode_omits_trailing_transparency() {
        assert_eq!(encode_scanlines(&[0, 0, 0], 3, 1), [0x80]);
        assert_eq!(encode_scanlines(&[1, 0, 0], 3, 1), [0x01, 1, 0x80]);
        assert_eq!(
            encode_scanlines(&[1, 2, 3, 4], 2, 2),
            [0x02, 3, 4, 0x80, 0x02, 1, 2, 0x80]
        );
    }

    #[test]
    fn encode_splits_long_runs() {
        let mut row = vec![0_u8; 200];
        row.extend((0..300).map(|i| (i % 255 + 1) as u8));

        let data = encode_scanlines(&row, row.len(), 1);

        assert_eq!(&data[..2], &[0xFF, 0x80 | 73]);
        assert_eq!(data[2], 127);
        assert_eq!(decode_scanlines(&data, row.len(), 1), row);
    }

    #[test]
    fn encode_then_decode_restores_pixels() {
        let (width, height) = (13, 7);
        let pixels: Vec<u8> = (0..width * height)
            .map(|i| if i % 5 < 2 { 0 } else { (i * 7 % 256) as u8 })
            .collect();

        let data = encode_scanlines(&pixels, width, height);

        assert_eq!(decode_scanlines(&data, width, height), pixels);
    }
}
