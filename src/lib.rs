//! # idx-reader
//!
//! A streaming reader for IDX dataset files, the headered binary format used by
//! the classic handwritten-digit datasets.
//!
//! Supports scalar (rank 0) and N-D datasets of `u8`, `i8`, `i16`, `i32`,
//! `f32` and `f64` elements, in either byte order. Elements are decoded one
//! at a time as the caller iterates; nothing past the header is buffered.
pub mod idx;

// Re-export the main types for convenience
pub use idx::{
    IdxError,
    IdxReader,
    Result,
    iter::{ArrayIter, ScalarIter},
    read_arrays,
    read_data,
    read_header,
    read_scalars,
    types::{
        element::IdxElement,
        models::{
            ElementType,
            Endian,
            IdxData,
            IdxHeader,
        },
    },
};
