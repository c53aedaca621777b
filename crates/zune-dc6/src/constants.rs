/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Control byte ending a scanline
pub const END_OF_SCANLINE: u8 = 0x80;
/// Longest run a single control byte can describe
pub const MAX_RUN_LENGTH: u8 = 0x7F;

/// version + flags + encoding + termination
pub const DC6_HEADER_SIZE: usize = 16;
/// numDirections + framesPerDirection
pub const DC6_COUNTS_SIZE: usize = 8;
pub const FRAME_POINTER_SIZE: usize = 4;
/// Eight 4 byte little endian fields
pub const FRAME_HEADER_SIZE: usize = 32;
pub const TERMINATOR_SIZE: usize = 3;

/// Smallest number of bytes a frame can occupy in a well formed
/// archive, its pointer slot, header and terminator.
pub const MIN_FRAME_FOOTPRINT: usize = FRAME_POINTER_SIZE + FRAME_HEADER_SIZE + TERMINATOR_SIZE;

/// Lower bound of the derived pixel budget
pub const MIN_PIXEL_BUDGET: usize = 1 << 24;
/// Pixels the derived budget grants for every input byte
pub const PIXELS_PER_INPUT_BYTE: usize = 256;
