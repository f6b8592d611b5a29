// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

use crate::error::QError;
use crate::formats::qc::QcFormat;
use crate::formats::xyz::XyzFormat;
use crate::structure::Structure;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Supported atom-list text formats.
///
/// - `Xyz`: plain-text XYZ coordinate format.
/// - `Qc`: charge-annotated fixed-width atom list.
/// - `Guess`: autodetect format from file extension.
#[derive(Clone, Copy)]
pub enum TextFormat {
    /// XYZ file format.
    Xyz,
    /// QC atom-list format.
    Qc,
    /// Automatically detect format from file extension.
    Guess,
}

/// Concrete file format strategy for reading and writing atom lists.
pub enum Format {
    /// Handler for the XYZ format.
    Xyz(XyzFormat),
    /// Handler for the QC format.
    Qc(QcFormat),
}

impl Format {
    /// Creates a new [`Format`] by inferring the format from the provided
    /// file `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file extension is unrecognized.
    pub fn new(path: &Path) -> Result<Self, QError> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        match ext.to_lowercase().as_str() {
            "xyz" => Ok(Format::Xyz(XyzFormat)),
            "qc" => Ok(Format::Qc(QcFormat)),
            other => Err(QError::UnknownFormat(other.to_string())),
        }
    }

    /// Creates a new `Format` using the specified `TextFormat` and file
    /// `path`. `TextFormat::Guess` delegates to [`Format::new`].
    ///
    /// # Errors
    ///
    /// Returns an error if guessing cannot detect the format.
    pub fn new_from_format(fmt: &TextFormat, path: &Path) -> Result<Self, QError> {
        match fmt {
            TextFormat::Xyz => Ok(Format::Xyz(XyzFormat)),
            TextFormat::Qc => Ok(Format::Qc(QcFormat)),
            TextFormat::Guess => Self::new(path),
        }
    }
}

/// Common interface for reading and writing atom-list file formats.
pub trait FileFormat {
    /// Reads a [`Structure`] from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O or parsing error occurs.
    fn read(&self, reader: &mut BufReader<File>) -> Result<Structure, QError>;

    /// Writes `structure` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, writer: &mut BufWriter<File>, structure: &Structure) -> Result<(), QError>;
}

impl FileFormat for Format {
    fn read(&self, reader: &mut BufReader<File>) -> Result<Structure, QError> {
        match self {
            Format::Xyz(format) => format.read(reader),
            Format::Qc(format) => format.read(reader),
        }
    }

    fn write(&self, writer: &mut BufWriter<File>, structure: &Structure) -> Result<(), QError> {
        match self {
            Format::Xyz(format) => format.write(writer, structure),
            Format::Qc(format) => format.write(writer, structure),
        }
    }
}
