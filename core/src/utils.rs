//! utils.rs
//! Cursor helpers shared by the header encoders and decoders.
//!
//! The writers work on fixed-size output arrays whose layout is known at
//! compile time, so offsets never run past the end.

use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;

use crate::constants::{CLIENT_NAME_PADDING, ZERO_U16_LE, ZERO_U32_LE};

#[inline]
pub fn put_u16(out: &mut [u8], i: &mut usize, v: u16) {
    if v == 0 {
        out[*i..*i + 2].copy_from_slice(&ZERO_U16_LE);
    } else {
        LittleEndian::write_u16(&mut out[*i..*i + 2], v);
    }
    *i += 2;
}

#[inline]
pub fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
    if v == 0 {
        out[*i..*i + 4].copy_from_slice(&ZERO_U32_LE);
    } else {
        LittleEndian::write_u32(&mut out[*i..*i + 4], v);
    }
    *i += 4;
}

#[inline]
pub fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
    out[*i..*i + b.len()].copy_from_slice(b);
    *i += b.len();
}

/// Write `name` into a `width`-byte field: the first `width` bytes if it is
/// long enough, otherwise the name followed by NUL padding.
#[inline]
pub fn put_client_name(out: &mut [u8], i: &mut usize, raw: &[u8], width: usize) {
    if raw.len() >= width {
        put_bytes(out, i, &raw[..width]);
    } else {
        put_bytes(out, i, raw);
        put_bytes(out, i, &CLIENT_NAME_PADDING[..width - raw.len()]);
    }
}

#[inline]
pub fn get_u16(buf: &[u8], i: &mut usize) -> u16 {
    let v = LittleEndian::read_u16(&buf[*i..*i + 2]);
    *i += 2;
    v
}

#[inline]
pub fn get_u32(buf: &[u8], i: &mut usize) -> u32 {
    let v = LittleEndian::read_u32(&buf[*i..*i + 4]);
    *i += 4;
    v
}

/// Read a `width`-byte client name field, dropping trailing NUL padding.
/// The bytes are copied out so the name outlives the source buffer.
#[inline]
pub fn get_client_name(buf: &[u8], i: &mut usize, width: usize) -> Bytes {
    let field = &buf[*i..*i + width];
    *i += width;
    trim_client_name(field)
}

/// Strip trailing NUL bytes. The remaining bytes are kept as they are,
/// whatever their encoding.
pub fn trim_client_name(field: &[u8]) -> Bytes {
    let end = field.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    Bytes::copy_from_slice(&field[..end])
}

/// Render bytes for log output.
pub fn fmt_bytes(b: &[u8]) -> String {
    if !b.is_empty() && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}
