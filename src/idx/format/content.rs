//! # Element Data Decoding
//!
//! This module turns the data section that follows the header into typed
//! values. It sits between the high-level iterators (which decide what shape
//! an element takes) and the raw byte source.
//!
//! ## Responsibilities
//! 1.  **Gate the Request**: Compare the caller's element type and rank with
//!     the parsed header before any data is read.
//! 2.  **Read Elements**: Pull exactly one element's bytes per call, never
//!     more, and report a short read as truncation of that element.
//! 3.  **Normalize Byte Order**: Reverse each scalar slot independently when
//!     the declared order differs from the host's.
//! 4.  **Interpret Slots**: Convert host-order slots into scalars.

use std::io::Read;

use log::trace;

use crate::idx::types::element::IdxElement;
use crate::idx::types::error::{IdxError, Result};
use crate::idx::types::models::{Endian, IdxHeader};
use crate::idx::utils;

/// Upper bound on bytes reserved up front for the element buffer.
///
/// Element sizes come from the header and are untrusted until the bytes
/// actually arrive; the buffer grows past this only as data is read.
const MAX_PREALLOCATED_BYTES: usize = 1 << 20;

/// Rank a caller asks for when decoding a data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedRank {
    /// Each element is a single scalar.
    Scalar,
    /// Each element is an array of exactly this rank.
    Exact(usize),
    /// Each element is an array of any positive rank.
    AnyArray,
}

impl RequestedRank {
    fn describe(&self) -> String {
        match self {
            RequestedRank::Scalar => "0".to_string(),
            RequestedRank::Exact(rank) => rank.to_string(),
            RequestedRank::AnyArray => "N > 0".to_string(),
        }
    }
}

/// Validates that a file's header can satisfy a decode request for `T`.
///
/// Shape is checked before type, so a scalar request against an N-D file
/// always reports a shape mismatch.
pub fn check_request<T: IdxElement>(header: &IdxHeader, requested: RequestedRank) -> Result<()> {
    let shape_error = |reason: &'static str| IdxError::ShapeMismatch {
        reason,
        expected: requested.describe(),
        found: header.rank,
    };

    match requested {
        RequestedRank::Scalar if header.rank != 0 => {
            return Err(shape_error("file is N-D, not scalar"));
        }
        RequestedRank::Exact(_) | RequestedRank::AnyArray if header.rank == 0 => {
            return Err(shape_error("file is scalar, not N-D"));
        }
        RequestedRank::Exact(rank) if rank != header.rank => {
            return Err(shape_error("element rank differs from the file"));
        }
        _ => {}
    }

    if T::ELEMENT_TYPE != header.element_type {
        return Err(IdxError::TypeMismatch {
            expected: T::ELEMENT_TYPE,
            found: header.element_type,
        });
    }

    Ok(())
}

/// Forward-only reader over the elements of one data section.
///
/// Owns the byte source and a buffer reused for one element at a time. Once an
/// error has been returned, or all `dataset_length` elements have been read,
/// every further call returns `None`.
#[derive(Debug)]
pub struct ElementCursor<R> {
    source: R,
    header: IdxHeader,
    swap: bool,
    element_size: usize,
    next_index: usize,
    failed: bool,
    buf: Vec<u8>,
}

impl<R: Read> ElementCursor<R> {
    /// Creates a cursor positioned at the first data byte of `source`.
    pub fn new(source: R, header: IdxHeader, endian: Endian) -> Self {
        let element_size = header.element_size_bytes();
        let buf = Vec::with_capacity(element_size.min(MAX_PREALLOCATED_BYTES));
        Self {
            source,
            swap: endian.needs_swap(),
            element_size,
            header,
            next_index: 0,
            failed: false,
            buf,
        }
    }

    pub fn header(&self) -> &IdxHeader {
        &self.header
    }

    /// Number of elements still to be produced.
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.header.dataset_length - self.next_index
        }
    }

    /// Gives back the byte source, positioned after the last element read.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads the next element and returns its slots in host byte order.
    pub fn next_element(&mut self) -> Option<Result<&[u8]>> {
        if self.remaining() == 0 {
            return None;
        }

        let index = self.next_index;
        trace!("Reading element {} ({} bytes)", index, self.element_size);
        self.buf.clear();
        let read = (&mut self.source)
            .take(self.element_size as u64)
            .read_to_end(&mut self.buf);
        match read {
            Ok(n) if n == self.element_size => {}
            Ok(n) => {
                trace!("Element {} ended after {} of {} bytes", index, n, self.element_size);
                self.failed = true;
                return Some(Err(IdxError::TruncatedData {
                    index,
                    expected: self.header.dataset_length,
                }));
            }
            Err(e) => {
                self.failed = true;
                return Some(Err(IdxError::Io(e)));
            }
        }

        if self.swap {
            utils::swap_slots(&mut self.buf, self.header.element_type.size_bytes());
        }
        self.next_index += 1;
        Some(Ok(&self.buf))
    }

    /// Reads the next element and interprets every slot as `T`.
    pub fn next_values<T: IdxElement>(&mut self) -> Option<Result<Vec<T>>> {
        self.next_element().map(|result| result.map(decode_slots::<T>))
    }
}

/// Interprets a host-order buffer as consecutive `T` slots, in storage order.
pub fn decode_slots<T: IdxElement>(bytes: &[u8]) -> Vec<T> {
    bytes.chunks_exact(T::SIZE).map(T::from_native_bytes).collect()
}
