/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use zune_dc6::FrameCountStrategy;

static AFTER_HELP: &str = "Examples:
    zune-dc6 -i hero.dc6 --inspect
    zune-dc6 -i hero.dc6 -o hero-fixed.dc6 --recompress --frame-count max
    zune-dc6 -i hero.dc6 --export-frames frames/ --palette act1.dat";

/// How the `framesPerDirection` header field is derived on output
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FrameCountArg {
    First,
    Max
}

impl ValueEnum for FrameCountArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::First, Self::Max]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::First => PossibleValue::new("first").help("Frame count of the first direction"),
            Self::Max => PossibleValue::new("max").help("Largest frame count of any direction")
        })
    }
}

impl From<FrameCountArg> for FrameCountStrategy {
    fn from(value: FrameCountArg) -> Self {
        match value {
            FrameCountArg::First => FrameCountStrategy::FirstDirection,
            FrameCountArg::Max => FrameCountStrategy::MaxDirection
        }
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-dc6")
        .after_help(AFTER_HELP)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and rewrite DC6 sprite archives")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .value_parser(value_parser!(OsString))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the re-encoded archive to")
            .long_help("Output to write the re-encoded archive to, given once per input file.\nWithout an output inputs are only decoded and checked")
            .action(ArgAction::Append)
            .value_parser(value_parser!(OsString)))
        .arg(Arg::new("inspect")
            .long("inspect")
            .help("Print archive and frame metadata as JSON and exit")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .help("Answer yes to all queries asked")
            .action(ArgAction::SetTrue))
        .args(add_logging_options())
        .args(add_decoder_settings())
        .args(add_encoder_settings())
        .args(add_export_settings())
}

fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display information about the decoding options")
    ]
}

fn add_decoder_settings() -> Vec<Arg> {
    static HELP_HEADING: &str = "Decoder Settings";

    let mut args = [
        Arg::new("max-width")
            .long("max-width")
            .help_heading(HELP_HEADING)
            .help("Maximum frame width decoded")
            .default_value("16384")
            .value_parser(value_parser!(usize)),
        Arg::new("max-height")
            .long("max-height")
            .help_heading(HELP_HEADING)
            .help("Maximum frame height decoded")
            .default_value("16384")
            .value_parser(value_parser!(usize)),
        Arg::new("max-pixels")
            .long("max-pixels")
            .help_heading(HELP_HEADING)
            .help("Maximum number of pixels decoded across all frames")
            .long_help("Maximum number of pixels decoded across all frames of an archive.\nDefaults to 256 pixels per input byte, at least 16777216")
            .value_parser(value_parser!(usize)),
        Arg::new("max-directions")
            .long("max-directions")
            .help_heading(HELP_HEADING)
            .help("Maximum number of directions an archive may declare")
            .default_value("1024")
            .value_parser(value_parser!(usize)),
        Arg::new("strict")
            .long("strict")
            .help_heading(HELP_HEADING)
            .help("Treat truncation, oversized frames and uneven directions as errors")
            .action(ArgAction::SetTrue)
    ];
    // list them in order
    args.sort_unstable_by(|x, y| x.get_id().cmp(y.get_id()));

    args.to_vec()
}

fn add_encoder_settings() -> [Arg; 2] {
    static HELP_HEADING: &str = "Encoder Settings";

    [
        Arg::new("recompress")
            .long("recompress")
            .help_heading(HELP_HEADING)
            .help("Re-compress frames from their decoded indices")
            .long_help("Re-derive every decoded frame's payload from its palette indices instead of writing the stored payload back")
            .action(ArgAction::SetTrue),
        Arg::new("frame-count")
            .long("frame-count")
            .help_heading(HELP_HEADING)
            .help("How the frames per direction field is written")
            .default_value("first")
            .value_parser(value_parser!(FrameCountArg))
    ]
}

fn add_export_settings() -> [Arg; 2] {
    static HELP_HEADING: &str = "Export Settings";

    [
        Arg::new("export-frames")
            .long("export-frames")
            .help_heading(HELP_HEADING)
            .help("Directory to write every decoded frame to as PNG")
            .long_help("Directory to write every decoded frame to, one frame_dir{d}_frame{f}.png per frame.\nWith several inputs each input gets a sub directory named after it")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("palette")
            .long("palette")
            .help_heading(HELP_HEADING)
            .help("Palette used when exporting frames, 768 bytes of RGB or 1024 bytes of RGBA")
            .long_help("Palette used when exporting frames, 256 entries of RGB (768 bytes) or RGBA (1024 bytes).\nWithout one frames are exported in grayscale")
            .requires("export-frames")
            .value_parser(value_parser!(PathBuf))
    ]
}
