pub mod atom;
pub mod element;
pub mod error;
pub mod format;
pub mod formats;
pub mod kind;
pub mod structure;
pub mod unit_cell;

use crate::error::QError;
use crate::format::{FileFormat, Format};
use crate::structure::Structure;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an atom-list file, guessing the format from the file extension.
pub fn read_structure(path: &Path) -> Result<Structure, QError> {
    let format = Format::new(path)?;
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    format.read(&mut reader)
}

/// Write a structure to a file, guessing the format from the file extension.
pub fn write_structure(path: &Path, structure: &Structure) -> Result<(), QError> {
    let format = Format::new(path)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    format.write(&mut writer, structure)
}
