//! Iterators for sequential access to IDX dataset elements.
//!
//! Both iterators are pull-based: nothing past the header is read until
//! `next()` is called, and each call reads exactly one element.
//!
//! 1. [`ScalarIter`] - Yields one `T` per element of a rank-0 file
//! 2. [`ArrayIter`] - Yields one `ndarray::Array<T, D>` per element of an N-D file
//!
//! Each yields `dataset_length` items, then `None`. A short read yields a
//! single [`IdxError::TruncatedData`](crate::IdxError::TruncatedData), after
//! which the iterator is exhausted.
//!
//! # Example
//! ```no_run
//! # use idx_reader::{Endian, read_arrays};
//! # use ndarray::Ix2;
//! for image in read_arrays::<u8, Ix2>("train-images-idx3-ubyte", Endian::Big).unwrap() {
//!     let image = image.unwrap();
//!     println!("{:?}", image.dim());
//! }
//! ```

use std::io::Read;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use ndarray::{Array, Dimension};

use super::format::content::ElementCursor;
use super::types::element::IdxElement;
use super::types::error::{IdxError, Result};
use super::types::models::IdxHeader;

/// Iterator over the scalars of a rank-0 dataset.
///
/// Created by [`IdxReader::into_scalars()`](crate::IdxReader::into_scalars).
#[derive(Debug)]
pub struct ScalarIter<R, T> {
    cursor: ElementCursor<R>,
    _element: PhantomData<T>,
}

impl<R: Read, T: IdxElement> ScalarIter<R, T> {
    pub(super) fn new(cursor: ElementCursor<R>) -> Self {
        Self {
            cursor,
            _element: PhantomData,
        }
    }

    pub fn header(&self) -> &IdxHeader {
        self.cursor.header()
    }

    /// Number of elements not yet yielded.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Stops iterating and gives back the byte source.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }
}

impl<R: Read, T: IdxElement> Iterator for ScalarIter<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = match self.cursor.next_element()? {
            Ok(bytes) => bytes,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok(T::from_native_bytes(bytes)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<R: Read, T: IdxElement> FusedIterator for ScalarIter<R, T> {}

/// Iterator over the fixed-shape elements of an N-D dataset.
///
/// Every yielded array has shape `element_dims` and holds its values in
/// row-major order, exactly as they are stored in the file. `D` is the
/// element dimensionality, e.g. [`ndarray::Ix2`] for images or
/// [`ndarray::IxDyn`] when the rank is only known at runtime.
///
/// Created by [`IdxReader::into_arrays()`](crate::IdxReader::into_arrays).
#[derive(Debug)]
pub struct ArrayIter<R, T, D> {
    cursor: ElementCursor<R>,
    dim: D,
    _element: PhantomData<T>,
}

impl<R: Read, T: IdxElement, D: Dimension> ArrayIter<R, T, D> {
    pub(super) fn new(cursor: ElementCursor<R>) -> Result<Self> {
        let dims = &cursor.header().element_dims;
        // Fixed-rank `D::zeros` panics on any other length.
        if let Some(ndim) = D::NDIM.filter(|&ndim| ndim != dims.len()) {
            return Err(IdxError::ShapeMismatch {
                reason: "element rank differs from the file",
                expected: ndim.to_string(),
                found: dims.len(),
            });
        }
        let mut dim = D::zeros(dims.len());
        dim.slice_mut().copy_from_slice(dims);
        Ok(Self {
            cursor,
            dim,
            _element: PhantomData,
        })
    }

    pub fn header(&self) -> &IdxHeader {
        self.cursor.header()
    }

    /// Number of elements not yet yielded.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Stops iterating and gives back the byte source.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }
}

impl<R: Read, T: IdxElement, D: Dimension> Iterator for ArrayIter<R, T, D> {
    type Item = Result<Array<T, D>>;

    fn next(&mut self) -> Option<Self::Item> {
        let values = match self.cursor.next_values::<T>()? {
            Ok(values) => values,
            Err(e) => return Some(Err(e)),
        };
        let array = Array::from_shape_vec(self.dim.clone(), values).map_err(|e| {
            IdxError::MalformedHeader(format!(
                "element shape {:?} does not fit decoded data: {}",
                self.dim.slice(),
                e
            ))
        });
        Some(array)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<R: Read, T: IdxElement, D: Dimension> FusedIterator for ArrayIter<R, T, D> {}
