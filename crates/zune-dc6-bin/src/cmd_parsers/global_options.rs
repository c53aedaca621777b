/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;
use zune_dc6::{ArchiveLimits, EncoderOptions};

use crate::cmd_parsers::{get_archive_limits, get_decoder_options, get_encoder_options};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder:        DecoderOptions,
    pub limits:         ArchiveLimits,
    pub encoder:        EncoderOptions,
    pub inspect:        bool,
    pub override_files: bool
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let decoder = get_decoder_options(options);
    let limits = get_archive_limits(options);
    let encoder = get_encoder_options(options);

    info!("Decoder options: {:?}", decoder);
    info!("Archive limits: {:?}", limits);
    info!("Encoder options: {:?}", encoder);

    let mut cmd_options = CmdOptions {
        decoder,
        limits,
        encoder,
        inspect: false,
        override_files: false
    };

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    if options.value_source("inspect") == Some(ValueSource::CommandLine) {
        cmd_options.inspect = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
