//! Core IDX reader module

pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::Dimension;

pub use reader::IdxReader;
pub use types::error::{IdxError, Result};

use iter::{ArrayIter, ScalarIter};
use types::element::IdxElement;
use types::models::{Endian, IdxData, IdxHeader};

/// Reads only the header of the IDX file at `path`.
///
/// The file is closed before this returns.
pub fn read_header(path: impl AsRef<Path>, endian: Endian) -> Result<IdxHeader> {
    IdxReader::open(path, endian).map(|reader| reader.header().clone())
}

/// Opens `path` and returns a lazy iterator over its scalar elements.
///
/// The file stays open until the iterator is dropped.
pub fn read_scalars<T: IdxElement>(
    path: impl AsRef<Path>,
    endian: Endian,
) -> Result<ScalarIter<BufReader<File>, T>> {
    IdxReader::open(path, endian)?.into_scalars()
}

/// Opens `path` and returns a lazy iterator over its N-D elements.
///
/// The file stays open until the iterator is dropped.
pub fn read_arrays<T: IdxElement, D: Dimension>(
    path: impl AsRef<Path>,
    endian: Endian,
) -> Result<ArrayIter<BufReader<File>, T, D>> {
    IdxReader::open(path, endian)?.into_arrays()
}

/// Loads the whole IDX file at `path`, whatever its element type.
pub fn read_data(path: impl AsRef<Path>, endian: Endian) -> Result<IdxData> {
    IdxReader::open(path, endian)?.into_data()
}
