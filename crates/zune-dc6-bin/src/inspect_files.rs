/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use log::{error, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::Dc6File;
use crate::serde::Metadata;

/// Decode input files and print their metadata to standard output as JSON
pub fn inspect_input_files(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    for in_file in args.get_raw("in").into_iter().flatten() {
        if !Path::new(in_file).exists() {
            warn!("Path {:?} does not exist, skipping", in_file);
            continue;
        }
        let file = Dc6File::new(in_file.to_os_string(), cmd_opts);
        let size = file.size()?;

        match file.into_document() {
            Ok(document) => {
                let metadata = Metadata::new(in_file.to_os_string(), size, &document);

                println!("{}", serde_json::to_string_pretty(&metadata)?);
            }
            Err(e) => error!("Could not inspect {:?}, reason {:?}", in_file, e)
        }
    }
    Ok(())
}
