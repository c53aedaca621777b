/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use zune_core::options::DecoderOptions;
use zune_dc6::{ArchiveLimits, EncoderOptions, FrameCountStrategy};

use crate::cmd_args::FrameCountArg;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::default();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.max_height());
    let strict_mode = options.get_flag("strict");

    defaults
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(strict_mode)
}

pub fn get_archive_limits(options: &ArgMatches) -> ArchiveLimits {
    let mut limits = ArchiveLimits::default();

    if let Some(directions) = options.get_one::<usize>("max-directions") {
        limits = limits.set_max_directions(*directions);
    }
    if let Some(pixels) = options.get_one::<usize>("max-pixels") {
        limits = limits.set_max_pixels(*pixels);
    }
    limits
}

pub fn get_encoder_options(options: &ArgMatches) -> EncoderOptions {
    let frame_count = options
        .get_one::<FrameCountArg>("frame-count")
        .map_or(FrameCountStrategy::default(), |f| FrameCountStrategy::from(*f));

    EncoderOptions::default()
        .set_frame_count(frame_count)
        .set_recompress(options.get_flag("recompress"))
        .set_strict_mode(options.get_flag("strict"))
}
