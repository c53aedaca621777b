/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_dc6::Dc6Document;

pub struct Metadata<'a> {
    file:     OsString,
    size:     u64,
    document: &'a Dc6Document
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, document: &'a Dc6Document) -> Metadata<'a> {
        Metadata {
            file,
            size,
            document
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Dc6Metadata", 4)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("frames", &self.document.num_frames())?;
        state.serialize_field("archive", &self.document)?;

        state.end()
    }
}
