/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]
//! A serialization only view of decoded archives
//!
//! Raw payloads and index buffers are left out, frames report their sizes
//! and whether they were decoded.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::decoder::Dc6Header;
use crate::document::{Dc6Document, DirectionGroup};
use crate::frame::FrameRecord;
use crate::options::FrameCountStrategy;

impl Serialize for FrameRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("FrameRecord", 11)?;

        state.serialize_field("flipped", &self.flipped)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("offset_x", &self.offset_x)?;
        state.serialize_field("offset_y", &self.offset_y)?;
        state.serialize_field("unknown", &self.unknown)?;
        state.serialize_field("next_block", &self.next_block)?;
        state.serialize_field("length", &self.length)?;
        state.serialize_field("data_length", &self.frame_data.len())?;
        state.serialize_field("terminator", &self.terminator)?;
        state.serialize_field("decoded", &self.is_decoded())?;

        state.end()
    }
}

impl Serialize for DirectionGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DirectionGroup", 1)?;
        state.serialize_field("frames", self.frames.as_slice())?;
        state.end()
    }
}

impl Serialize for Dc6Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Dc6Document", 7)?;

        state.serialize_field("version", &self.version)?;
        state.serialize_field("flags", &self.flags)?;
        state.serialize_field("encoding", &self.encoding)?;
        state.serialize_field("termination", &self.termination)?;
        state.serialize_field("num_directions", &self.directions.len())?;
        state.serialize_field(
            "frames_per_direction",
            &self.frames_per_direction(FrameCountStrategy::FirstDirection)
        )?;
        state.serialize_field("directions", self.directions.as_slice())?;

        state.end()
    }
}

impl Serialize for Dc6Header {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Dc6Header", 6)?;

        state.serialize_field("version", &self.version)?;
        state.serialize_field("flags", &self.flags)?;
        state.serialize_field("encoding", &self.encoding)?;
        state.serialize_field("termination", &self.termination)?;
        state.serialize_field("num_directions", &self.num_directions)?;
        state.serialize_field("frames_per_direction", &self.frames_per_direction)?;

        state.end()
    }
}
