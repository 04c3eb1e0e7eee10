#![allow(dead_code)]

use idx_reader::Endian;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds a canonical IDX header (`00 00 tag rank+1`, length, dims) in `endian` order.
pub fn header_bytes(tag: u8, dims: &[i32], length: i32, endian: Endian) -> Vec<u8> {
    let magic = u32::from_be_bytes([0, 0, tag, dims.len() as u8 + 1]);
    let mut out = Vec::new();
    push_u32(&mut out, magic, endian);
    push_i32(&mut out, length, endian);
    for &dim in dims {
        push_i32(&mut out, dim, endian);
    }
    out
}

pub fn push_u32(out: &mut Vec<u8>, value: u32, endian: Endian) {
    match endian {
        Endian::Big => out.extend_from_slice(&value.to_be_bytes()),
        Endian::Little => out.extend_from_slice(&value.to_le_bytes()),
    }
}

pub fn push_i32(out: &mut Vec<u8>, value: i32, endian: Endian) {
    push_u32(out, value as u32, endian);
}

pub fn i16_bytes(values: &[i16], endian: Endian) -> Vec<u8> {
    values
        .iter()
        .flat_map(|v| match endian {
            Endian::Big => v.to_be_bytes(),
            Endian::Little => v.to_le_bytes(),
        })
        .collect()
}

pub fn i32_bytes(values: &[i32], endian: Endian) -> Vec<u8> {
    values
        .iter()
        .flat_map(|v| match endian {
            Endian::Big => v.to_be_bytes(),
            Endian::Little => v.to_le_bytes(),
        })
        .collect()
}

pub fn f32_bytes(values: &[f32], endian: Endian) -> Vec<u8> {
    values
        .iter()
        .flat_map(|v| match endian {
            Endian::Big => v.to_be_bytes(),
            Endian::Little => v.to_le_bytes(),
        })
        .collect()
}

pub fn f64_bytes(values: &[f64], endian: Endian) -> Vec<u8> {
    values
        .iter()
        .flat_map(|v| match endian {
            Endian::Big => v.to_be_bytes(),
            Endian::Little => v.to_le_bytes(),
        })
        .collect()
}

/// Full file image: header followed by `data`.
pub fn idx_file(tag: u8, dims: &[i32], length: i32, data: &[u8], endian: Endian) -> Vec<u8> {
    let mut out = header_bytes(tag, dims, length, endian);
    out.extend_from_slice(data);
    out
}

pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
