/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use zune_dc6::{Dc6EncodeErrors, Dc6Errors};

/// Errors that stop the command line workflow
pub enum CliErrors {
    Decode(Dc6Errors),
    Encode(Dc6EncodeErrors),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Decode(err) => writeln!(f, "Decoding failed: {err:?}"),
            CliErrors::Encode(err) => writeln!(f, "Encoding failed: {err:?}"),
            CliErrors::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            CliErrors::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl From<Dc6Errors> for CliErrors {
    fn from(value: Dc6Errors) -> Self {
        CliErrors::Decode(value)
    }
}

impl From<Dc6EncodeErrors> for CliErrors {
    fn from(value: Dc6EncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::GenericString(format!("Could not serialize metadata: {value}"))
    }
}
