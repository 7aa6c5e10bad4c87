//! head16/decode.rs
//!
//! Header decoding and discrimination.
//!
//! Design notes:
//! - The length check runs before anything is read.
//! - The magic number is validated before any other field is extracted.
//! - The returned `magic_num` is the wire value, never the sentinel.

use crate::constants::{magic_offsets, HEAD16_LEN};
use crate::head16::types::Head;
use crate::magic::{check_magic_num, is_magic_at};
use crate::types::{HeaderError, Result};
use crate::utils::{fmt_bytes, get_client_name, get_u16, get_u32};

/// Parse a 16-byte header, validating its magic number against `want`
/// (`0` accepts only the default magic number).
#[inline]
pub fn decode_head(buf: &[u8], want: u32) -> Result<Head> {
    if buf.len() != HEAD16_LEN {
        tracing::trace!(target: "fshead::head16::decode", have = buf.len(), need = HEAD16_LEN, "header length mismatch");
        return Err(HeaderError::LengthMismatch { have: buf.len(), need: HEAD16_LEN });
    }

    let mut i = 0usize;
    let magic_num = get_u32(buf, &mut i); // 0..4
    if !check_magic_num(magic_num, want) {
        tracing::trace!(
            target: "fshead::head16::decode",
            got = magic_num,
            want,
            bytes = %fmt_bytes(buf),
            "magic number mismatch"
        );
        return Err(HeaderError::MagicNumMismatch { got: magic_num, want });
    }

    let client_name = get_client_name(buf, &mut i, Head::CLIENT_NAME_LEN); // 4..10
    let meta_len = get_u16(buf, &mut i); // 10..12
    let body_len = get_u32(buf, &mut i); // 12..16

    debug_assert_eq!(i, HEAD16_LEN, "decoding read incorrect length");

    Ok(Head { magic_num, client_name, meta_len, body_len })
}

/// Same as [`decode_head`].
#[inline]
pub fn load(buf: &[u8], want: u32) -> Result<Head> {
    decode_head(buf, want)
}

/// Cheap check: does `buf` start with a magic number accepted for `want`?
/// Buffers shorter than 4 bytes are never a match.
#[inline]
pub fn is(buf: &[u8], want: u32) -> bool {
    is_magic_at(buf, magic_offsets::HEAD16, want)
}
