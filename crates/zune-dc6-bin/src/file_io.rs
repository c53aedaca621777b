/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::{OsStr, OsString};
use std::fs::OpenOptions;
use std::io::BufWriter;

use zune_core::options::DecoderOptions;
use zune_dc6::{ArchiveLimits, Dc6Document, Dc6EncodeErrors, Dc6Errors, EncoderOptions};

use crate::cmd_parsers::global_options::CmdOptions;

pub struct Dc6File {
    file_path: OsString,
    options:   DecoderOptions,
    limits:    ArchiveLimits
}

impl Dc6File {
    pub fn new(file_path: OsString, cmd_opts: &CmdOptions) -> Dc6File {
        Dc6File {
            file_path,
            options: cmd_opts.decoder,
            limits: cmd_opts.limits
        }
    }

    /// Size of the file on disk
    pub fn size(&self) -> Result<u64, std::io::Error> {
        Ok(std::fs::metadata(&self.file_path)?.len())
    }

    pub fn into_document(self) -> Result<Dc6Document, Dc6Errors> {
        let data = std::fs::read(self.file_path)?;

        Dc6Document::from_bytes_with_limits(&data, self.options, self.limits)
    }
}

/// Create or truncate `path` and write `document` into it
pub fn write_document(
    path: &OsStr, document: &Dc6Document, options: EncoderOptions
) -> Result<usize, Dc6EncodeErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    document.write_to(BufWriter::new(file), options)
}
