//! Core data structures for the IDX format.
//!
//! This module defines the fundamental types used throughout the library:
//! - The declared byte order of a file
//! - Element type enumeration and its on-disk tags
//! - The parsed file header
//! - The dynamically typed dataset container

use std::fmt;

use ndarray::{ArrayD, Axis};

use super::error::{IdxError, Result};

/// Byte order the caller asserts the file was written in.
///
/// IDX files produced by the original dataset tooling are big-endian, which
/// is also the [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

impl Endian {
    /// The byte order of the host this code is running on.
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    /// Builds the declared order from a "written in little-endian" flag.
    pub const fn from_little_endian(little_endian: bool) -> Self {
        if little_endian { Endian::Little } else { Endian::Big }
    }

    /// Whether multi-byte fields must be reversed before interpretation.
    pub fn needs_swap(self) -> bool {
        self != Self::native()
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endian::Big => write!(f, "big-endian"),
            Endian::Little => write!(f, "little-endian"),
        }
    }
}

/// Element data type, as declared by the header's type tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    UInt8,
    Int8,
    Int16,
    Int32,
    Float32,
    Float64,
}

impl ElementType {
    /// The on-disk type tag for this element type.
    pub fn tag(&self) -> u8 {
        match self {
            ElementType::UInt8 => 0x08,
            ElementType::Int8 => 0x09,
            ElementType::Int16 => 0x0B,
            ElementType::Int32 => 0x0C,
            ElementType::Float32 => 0x0D,
            ElementType::Float64 => 0x0E,
        }
    }

    /// Width of one scalar slot in bytes.
    pub fn size_bytes(&self) -> usize {
        match self {
            ElementType::UInt8 | ElementType::Int8 => 1,
            ElementType::Int16 => 2,
            ElementType::Int32 | ElementType::Float32 => 4,
            ElementType::Float64 => 8,
        }
    }
}

impl TryFrom<u8> for ElementType {
    type Error = IdxError;
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x08 => Ok(Self::UInt8),
            0x09 => Ok(Self::Int8),
            0x0B => Ok(Self::Int16),
            0x0C => Ok(Self::Int32),
            0x0D => Ok(Self::Float32),
            0x0E => Ok(Self::Float64),
            _ => Err(IdxError::UnsupportedType(value)),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ElementType::UInt8 => "u8",
            ElementType::Int8 => "i8",
            ElementType::Int16 => "i16",
            ElementType::Int32 => "i32",
            ElementType::Float32 => "f32",
            ElementType::Float64 => "f64",
        };
        write!(f, "{}", name)
    }
}

/// Parsed header of an IDX file.
///
/// Built exactly once at the start of a decode session and never mutated.
/// All sizes have already been validated as non-negative and as fitting in
/// `usize` when multiplied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdxHeader {
    /// Number of dimensions of a single element (0 = scalar dataset).
    pub rank: usize,
    pub element_type: ElementType,
    /// Shape of one element; always `rank` entries long.
    pub element_dims: Vec<usize>,
    /// Number of elements in the dataset (not bytes).
    pub dataset_length: usize,
}

impl IdxHeader {
    /// Number of scalars in one element (1 for scalar datasets).
    pub fn element_len(&self) -> usize {
        self.element_dims.iter().product()
    }

    /// Number of bytes one element occupies in the data section.
    pub fn element_size_bytes(&self) -> usize {
        self.element_type.size_bytes() * self.element_len()
    }

    /// Byte offset of the first element, i.e. the header length.
    pub fn data_offset(&self) -> usize {
        8 + 4 * self.rank
    }

    /// Total size of the data section in bytes.
    pub fn data_size_bytes(&self) -> usize {
        self.element_size_bytes() * self.dataset_length
    }

    /// Shape of the whole dataset: `[dataset_length, dims...]`.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::with_capacity(self.rank + 1);
        shape.push(self.dataset_length);
        shape.extend_from_slice(&self.element_dims);
        shape
    }

    pub fn is_scalar(&self) -> bool {
        self.rank == 0
    }
}

/// A whole dataset loaded with its element type chosen at runtime.
///
/// The array shape is [`IdxHeader::shape`]: the outer axis indexes elements.
#[derive(Debug, Clone, PartialEq)]
pub enum IdxData {
    UInt8(ArrayD<u8>),
    Int8(ArrayD<i8>),
    Int16(ArrayD<i16>),
    Int32(ArrayD<i32>),
    Float32(ArrayD<f32>),
    Float64(ArrayD<f64>),
}

impl IdxData {
    pub fn element_type(&self) -> ElementType {
        match self {
            IdxData::UInt8(_) => ElementType::UInt8,
            IdxData::Int8(_) => ElementType::Int8,
            IdxData::Int16(_) => ElementType::Int16,
            IdxData::Int32(_) => ElementType::Int32,
            IdxData::Float32(_) => ElementType::Float32,
            IdxData::Float64(_) => ElementType::Float64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            IdxData::UInt8(a) => a.shape(),
            IdxData::Int8(a) => a.shape(),
            IdxData::Int16(a) => a.shape(),
            IdxData::Int32(a) => a.shape(),
            IdxData::Float32(a) => a.shape(),
            IdxData::Float64(a) => a.shape(),
        }
    }

    /// Number of elements along the outer axis.
    pub fn len(&self) -> usize {
        self.shape().first().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders element `index` as text, or `None` when out of range.
    pub fn format_element(&self, index: usize) -> Option<String> {
        fn render<T: fmt::Display>(array: &ArrayD<T>, index: usize) -> Option<String> {
            if index >= array.shape().first().copied().unwrap_or(0) {
                return None;
            }
            Some(array.index_axis(Axis(0), index).to_string())
        }
        match self {
            IdxData::UInt8(a) => render(a, index),
            IdxData::Int8(a) => render(a, index),
            IdxData::Int16(a) => render(a, index),
            IdxData::Int32(a) => render(a, index),
            IdxData::Float32(a) => render(a, index),
            IdxData::Float64(a) => render(a, index),
        }
    }
}
