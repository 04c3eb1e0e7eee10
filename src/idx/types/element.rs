//! Specialization logic for the scalar types an IDX file can hold.

use byteorder::{ByteOrder, NativeEndian};

use super::models::ElementType;

/// A Rust scalar type that an IDX element slot can be decoded into.
///
/// Each implementor is bound to exactly one [`ElementType`]; the decoder
/// compares [`IdxElement::ELEMENT_TYPE`] against the header before reading
/// any data, so a `u8` stream can never be produced from an `i32` file.
pub trait IdxElement: Copy + Sized {
    /// The on-disk element type this Rust type corresponds to.
    const ELEMENT_TYPE: ElementType;

    /// Width of one slot in bytes.
    const SIZE: usize;

    /// Interprets one slot whose bytes are already in host order.
    ///
    /// `bytes` is exactly [`IdxElement::SIZE`] bytes long.
    fn from_native_bytes(bytes: &[u8]) -> Self;
}

impl IdxElement for u8 {
    const ELEMENT_TYPE: ElementType = ElementType::UInt8;
    const SIZE: usize = 1;

    fn from_native_bytes(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl IdxElement for i8 {
    const ELEMENT_TYPE: ElementType = ElementType::Int8;
    const SIZE: usize = 1;

    fn from_native_bytes(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }
}

impl IdxElement for i16 {
    const ELEMENT_TYPE: ElementType = ElementType::Int16;
    const SIZE: usize = 2;

    fn from_native_bytes(bytes: &[u8]) -> Self {
        NativeEndian::read_i16(bytes)
    }
}

impl IdxElement for i32 {
    const ELEMENT_TYPE: ElementType = ElementType::Int32;
    const SIZE: usize = 4;

    fn from_native_bytes(bytes: &[u8]) -> Self {
        NativeEndian::read_i32(bytes)
    }
}

impl IdxElement for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::Float32;
    const SIZE: usize = 4;

    fn from_native_bytes(bytes: &[u8]) -> Self {
        NativeEndian::read_f32(bytes)
    }
}

impl IdxElement for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::Float64;
    const SIZE: usize = 8;

    fn from_native_bytes(bytes: &[u8]) -> Self {
        NativeEndian::read_f64(bytes)
    }
}
