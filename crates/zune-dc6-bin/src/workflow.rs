/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::Level::Debug;
use log::{debug, info, log_enabled};
use zune_dc6::{Dc6Document, Palette};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::export::{export_frames, load_palette};
use crate::file_io::{write_document, Dc6File};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    let inputs: Vec<&OsStr> = args.get_raw("in").into_iter().flatten().collect();
    let outputs: Vec<&OsStr> = args.get_raw("out").into_iter().flatten().collect();

    if !outputs.is_empty() && outputs.len() != inputs.len() {
        return Err(CliErrors::GenericString(format!(
            "Got {} inputs but {} outputs, give one output per input",
            inputs.len(),
            outputs.len()
        )));
    }

    let export_dir = args.get_one::<PathBuf>("export-frames");
    let palette = match args.get_one::<PathBuf>("palette") {
        Some(path) => load_palette(path)?,
        None => Palette::grayscale()
    };

    for (pos, in_file) in inputs.iter().enumerate() {
        let out_file = outputs.get(pos).copied();

        verify_file_paths(in_file, out_file, cmd_opts)?;

        let document = Dc6File::new(in_file.to_os_string(), cmd_opts).into_document()?;

        info!(
            "Decoded {:?}: {} directions, {} frames",
            in_file,
            document.directions.len(),
            document.num_frames()
        );
        if log_enabled!(Debug) {
            describe_frames(&document);
        }

        if let Some(dir) = export_dir {
            let dir = frames_dir(dir, in_file, inputs.len());
            export_frames(&document, &dir, &palette)?;
        }

        if let Some(out_file) = out_file {
            let written = write_document(out_file, &document, cmd_opts.encoder)?;
            info!("Wrote {} bytes to {:?}", written, out_file);
        }
    }

    Ok(())
}

/// Directory frames of `in_file` are exported to, inputs get their own
/// sub directory when there are several
fn frames_dir(dir: &Path, in_file: &OsStr, num_inputs: usize) -> PathBuf {
    if num_inputs <= 1 {
        return dir.to_path_buf();
    }
    match Path::new(in_file).file_stem() {
        Some(stem) => dir.join(stem),
        None => dir.to_path_buf()
    }
}

fn describe_frames(document: &Dc6Document) {
    for (d, direction) in document.directions.iter().enumerate() {
        for (f, frame) in direction.frames.iter().enumerate() {
            debug!(
                "Direction {d} frame {f}: {}x{} at ({}, {}), {} bytes compressed{}",
                frame.width,
                frame.height,
                frame.offset_x,
                frame.offset_y,
                frame.frame_data.len(),
                if frame.is_decoded() { "" } else { ", not decoded" }
            );
        }
    }
}

fn verify_file_paths(p0: &OsStr, p1: Option<&OsStr>, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    let in_path = Path::new(p0);

    if !in_path.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }

    let Some(p1) = p1 else {
        return Ok(());
    };

    if p0 == p1 {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    let out_path = Path::new(p1);

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", p1);
        } else {
            println!("File {:?} exists, overwrite [y/N]", out_path);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(CliErrors::GenericString(format!(
                    "Not overwriting file {:?}",
                    out_path
                )));
            }
        }
    }
    Ok(())
}
