//! Low-level byte reading utilities

use std::io::{self, Read};

use byteorder::{ByteOrder, NativeEndian};

use super::types::error::{IdxError, Result};

/// Read one 4-byte header word and return it in host byte order.
///
/// The word is reversed as a unit when `swap` is set. An early end of stream
/// is reported as a truncated header, naming the field being read.
pub fn read_header_word(reader: &mut impl Read, swap: bool, context: &'static str) -> Result<[u8; 4]> {
    let mut word = [0u8; 4];
    reader.read_exact(&mut word).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => IdxError::TruncatedHeader { context, needed: 4 },
        _ => IdxError::Io(e),
    })?;
    if swap {
        word.reverse();
    }
    Ok(word)
}

/// Read a signed 32-bit header field that must not be negative.
///
/// Used for the dataset length and each dimension.
pub fn read_size_field(reader: &mut impl Read, swap: bool, context: &'static str) -> Result<usize> {
    let word = read_header_word(reader, swap, context)?;
    let value = NativeEndian::read_i32(&word);
    usize::try_from(value)
        .map_err(|_| IdxError::MalformedHeader(format!("negative {}: {}", context, value)))
}

/// Reverse every `slot_size`-byte slot of `buf` in place.
///
/// Slots keep their position; only the bytes inside each slot are reordered.
pub fn swap_slots(buf: &mut [u8], slot_size: usize) {
    if slot_size < 2 {
        return;
    }
    for slot in buf.chunks_exact_mut(slot_size) {
        slot.reverse();
    }
}
