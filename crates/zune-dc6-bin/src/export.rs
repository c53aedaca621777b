/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Writing decoded frames out as PNG images

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_dc6::{Dc6Document, Palette};
use zune_png::PngEncoder;

use crate::errors::CliErrors;

/// Load a palette of 256 RGB (768 bytes) or RGBA (1024 bytes) entries
pub fn load_palette(path: &Path) -> Result<Palette, CliErrors> {
    let data = fs::read(path)?;

    let palette = if data.len() == 1024 {
        Palette::from_rgba(&data)?
    } else {
        Palette::from_rgb(&data)?
    };
    info!("Loaded palette {:?}", path);

    Ok(palette)
}

/// Name of the image a frame is exported to
pub fn frame_file_name(direction: usize, frame: usize) -> String {
    format!("frame_dir{direction}_frame{frame}.png")
}

/// Write every decoded frame of `document` into `dir` as an RGBA PNG,
/// creating `dir` if needed
///
/// Frames without index data or with an empty dimension are skipped.
/// Returns the number of images written.
pub fn export_frames(
    document: &Dc6Document, dir: &Path, palette: &Palette
) -> Result<usize, CliErrors> {
    fs::create_dir_all(dir)?;

    let mut exported = 0;

    for (d, direction) in document.directions.iter().enumerate() {
        for (f, frame) in direction.frames.iter().enumerate() {
            let (width, height) = frame.dimensions();

            if width == 0 || height == 0 {
                warn!("Direction {d} frame {f} is empty, skipping");
                continue;
            }
            let Some(pixels) = frame.to_rgba(palette) else {
                warn!("Direction {d} frame {f} was not decoded, skipping");
                continue;
            };
            let options = EncoderOptions::new(width, height, ColorSpace::RGBA, BitDepth::Eight);

            let mut image = vec![];
            PngEncoder::new(&pixels, options)
                .encode(&mut image)
                .map_err(|e| {
                    CliErrors::GenericString(format!(
                        "Could not encode direction {d} frame {f}: {e:?}"
                    ))
                })?;

            let path: PathBuf = dir.join(frame_file_name(d, f));
            fs::write(&path, &image)?;

            debug!("Wrote {:?}, {} bytes", path, image.len());
            exported += 1;
        }
    }
    info!("Saved {exported} frames to {:?}", dir);

    Ok(exported)
}
