use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use ndarray::{ArrayD, Dimension, IxDyn};

use super::format::content::{self, ElementCursor, RequestedRank};
use super::format;
use super::iter::{ArrayIter, ScalarIter};
use super::types::element::IdxElement;
use super::types::error::{IdxError, Result};
use super::types::models::*;

/// Upper bound on values reserved up front when loading a whole dataset.
///
/// The header's sizes are untrusted until the data is actually read.
const MAX_PREALLOCATED_VALUES: usize = 1 << 24;

/// The main reader for IDX dataset files.
///
/// Owns the byte source for the whole decode session. The header is parsed
/// once in the constructor; the data section is only touched by the iterator
/// or loader the reader is turned into, so a session is single-pass. Decoding
/// the same file again means opening a new reader.
#[derive(Debug)]
pub struct IdxReader<R> {
    source: R,
    header: IdxHeader,
    endian: Endian,
}

impl IdxReader<BufReader<File>> {
    /// Open an IDX file from the given path and parse its header.
    ///
    /// # Arguments
    /// * `path` - File path to the IDX file
    /// * `endian` - Byte order the file was written in
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened
    /// - The header is truncated or malformed
    /// - The type tag is not one of the supported element types
    pub fn open(path: impl AsRef<Path>, endian: Endian) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening IDX file: {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file), endian)
    }
}

impl<R: Read> IdxReader<R> {
    /// Parse the header from any byte source positioned at the start of an IDX stream.
    pub fn new(mut source: R, endian: Endian) -> Result<Self> {
        let header = format::header::parse(&mut source, endian)?;
        Ok(Self {
            source,
            header,
            endian,
        })
    }

    pub fn header(&self) -> &IdxHeader {
        &self.header
    }

    /// The byte order this reader was told the file uses.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Returns a lazy iterator over the scalars of a rank-0 file.
    ///
    /// # Errors
    /// - [`IdxError::ShapeMismatch`] if the file's elements are N-D
    /// - [`IdxError::TypeMismatch`] if the file does not hold `T`
    pub fn into_scalars<T: IdxElement>(self) -> Result<ScalarIter<R, T>> {
        content::check_request::<T>(&self.header, RequestedRank::Scalar)?;
        Ok(ScalarIter::new(self.into_cursor()))
    }

    /// Returns a lazy iterator over the N-D elements of the file.
    ///
    /// The element rank is taken from `D`: `Ix2` requires a rank-2 file,
    /// while `IxDyn` accepts any rank above zero.
    ///
    /// # Errors
    /// - [`IdxError::ShapeMismatch`] if the file is scalar or its rank differs from `D`
    /// - [`IdxError::TypeMismatch`] if the file does not hold `T`
    pub fn into_arrays<T: IdxElement, D: Dimension>(self) -> Result<ArrayIter<R, T, D>> {
        let requested = match D::NDIM {
            Some(ndim) => RequestedRank::Exact(ndim),
            None => RequestedRank::AnyArray,
        };
        content::check_request::<T>(&self.header, requested)?;
        ArrayIter::new(self.into_cursor())
    }

    /// Like [`into_arrays`](Self::into_arrays) with a rank chosen at runtime.
    pub fn into_arrays_with_rank<T: IdxElement>(self, rank: usize) -> Result<ArrayIter<R, T, IxDyn>> {
        content::check_request::<T>(&self.header, RequestedRank::Exact(rank))?;
        ArrayIter::new(self.into_cursor())
    }

    /// Loads the whole dataset, with the element type picked from the header.
    ///
    /// The returned array has shape `[dataset_length, dims...]`.
    pub fn into_data(self) -> Result<IdxData> {
        let element_type = self.header.element_type;
        let data = match element_type {
            ElementType::UInt8 => IdxData::UInt8(load_all(self.into_cursor())?),
            ElementType::Int8 => IdxData::Int8(load_all(self.into_cursor())?),
            ElementType::Int16 => IdxData::Int16(load_all(self.into_cursor())?),
            ElementType::Int32 => IdxData::Int32(load_all(self.into_cursor())?),
            ElementType::Float32 => IdxData::Float32(load_all(self.into_cursor())?),
            ElementType::Float64 => IdxData::Float64(load_all(self.into_cursor())?),
        };
        Ok(data)
    }

    fn into_cursor(self) -> ElementCursor<R> {
        ElementCursor::new(self.source, self.header, self.endian)
    }
}

/// Drains a cursor into a single array shaped `[dataset_length, dims...]`.
fn load_all<R: Read, T: IdxElement>(mut cursor: ElementCursor<R>) -> Result<ArrayD<T>> {
    let shape = cursor.header().shape();
    let total = cursor.header().element_len() * cursor.header().dataset_length;
    debug!("Loading {} {} values into shape {:?}", total, T::ELEMENT_TYPE, shape);

    let mut values = Vec::with_capacity(total.min(MAX_PREALLOCATED_VALUES));
    while let Some(element) = cursor.next_element() {
        values.extend(element?.chunks_exact(T::SIZE).map(T::from_native_bytes));
    }

    ArrayD::from_shape_vec(IxDyn(&shape), values).map_err(|e| {
        IdxError::MalformedHeader(format!("dataset shape {:?} does not fit decoded data: {}", shape, e))
    })
}
