//! IDX file header parsing.
//!
//! # Header Structure
//! ```text
//! [4 bytes]        Magic word: two reserved zero bytes, type tag, rank + 1
//! [4 bytes]        Dataset length (signed 32-bit)
//! [4 * rank bytes] Element dimensions (signed 32-bit each)
//! ```
//!
//! Every field is stored in the byte order declared by the caller and is
//! reversed as a whole before interpretation when that order differs from the
//! host's.

use std::io::Read;

use byteorder::{ByteOrder, NativeEndian};
use log::{debug, info, trace, warn};

use crate::idx::types::{
    error::{IdxError, Result},
    models::{ElementType, Endian, IdxHeader},
};
use crate::idx::utils;

/// Parses the IDX header from the start of `source`.
///
/// On success the source is positioned at the first data byte.
///
/// # Errors
/// - [`IdxError::TruncatedHeader`] if the stream ends inside the header
/// - [`IdxError::MalformedHeader`] if the rank byte is zero, a size is
///   negative, or the element size does not fit in memory
/// - [`IdxError::UnsupportedType`] for an unknown type tag
pub fn parse<R: Read>(source: &mut R, endian: Endian) -> Result<IdxHeader> {
    let swap = endian.needs_swap();
    debug!(
        "Declared byte order: {}, host: {}, swapping header fields: {}",
        endian,
        Endian::native(),
        swap
    );

    // Step 1: Magic word (rank + type tag)
    let magic_word = utils::read_header_word(source, swap, "magic word")?;
    let magic = NativeEndian::read_u32(&magic_word);
    trace!("Magic word: {:#010x}", magic);
    let (rank_byte, type_tag) = split_magic(magic);

    let rank = (rank_byte as usize)
        .checked_sub(1)
        .ok_or_else(|| IdxError::MalformedHeader("rank byte is zero (negative rank)".to_string()))?;
    let element_type = ElementType::try_from(type_tag)?;

    // Step 2: Dataset length
    let dataset_length = utils::read_size_field(source, swap, "dataset length")?;
    trace!("Dataset length: {}", dataset_length);

    // Step 3: One dimension per rank
    let mut element_dims = Vec::with_capacity(rank);
    for _ in 0..rank {
        element_dims.push(utils::read_size_field(source, swap, "dimension")?);
    }

    // Step 4: Make sure the data section size is addressable
    element_dims
        .iter()
        .try_fold(element_type.size_bytes(), |acc, &dim| acc.checked_mul(dim))
        .and_then(|element_bytes| element_bytes.checked_mul(dataset_length))
        .ok_or_else(|| {
            IdxError::MalformedHeader(format!(
                "data section of {} x {:?} {} values overflows",
                dataset_length, element_dims, element_type
            ))
        })?;

    info!(
        "IDX header parsed: type={}, rank={}, dims={:?}, length={}",
        element_type, rank, element_dims, dataset_length
    );

    Ok(IdxHeader {
        rank,
        element_type,
        element_dims,
        dataset_length,
    })
}

/// Splits the host-order magic word into `(rank_byte, type_tag)`.
///
/// Canonical files keep the reserved zero bytes in the high half
/// (`0x0000TTRR`). A word whose high half is set but low half is zero was
/// written with the fields leading (`0xRRTT0000`) and is read that way.
/// With non-zero reserved bytes the placement whose tag byte is a known
/// type tag wins, canonical first.
fn split_magic(magic: u32) -> (u8, u8) {
    let [b0, b1, b2, b3] = magic.to_be_bytes();
    if magic & 0xFFFF_0000 == 0 {
        return (b3, b2);
    }
    if magic & 0x0000_FFFF == 0 {
        debug!("Magic word {:#010x} has fields in the leading half", magic);
        return (b0, b1);
    }

    let is_tag = |b: u8| ElementType::try_from(b).is_ok();
    if is_tag(b1) && !is_tag(b2) {
        warn!(
            "Magic word {:#010x} has non-zero reserved bytes; reading rank and type from the high half",
            magic
        );
        (b0, b1)
    } else {
        warn!(
            "Magic word {:#010x} has non-zero reserved bytes; reading rank and type from the low half",
            magic
        );
        (b3, b2)
    }
}
