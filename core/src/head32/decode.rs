//! head32/decode.rs
//!
//! Deserializes a fixed 32-byte buffer into a `Head`.
//!
//! Design notes:
//! - The magic number is read from the tail (28..32) and validated before
//!   any other field is extracted.
//! - Version, user, log and reserve fields are opaque; only their width is
//!   enforced.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{magic_offsets, HEAD32_LEN, MAGIC_NUM_LEN};
use crate::head32::types::Head;
use crate::magic::{check_magic_num, is_magic_at};
use crate::types::{HeaderError, Result};
use crate::utils::{fmt_bytes, get_client_name, get_u16, get_u32};

/// Parse a 32-byte header, validating its magic number against `want`.
#[inline]
pub fn decode_head(buf: &[u8], want: u32) -> Result<Head> {
    if buf.len() != HEAD32_LEN {
        tracing::trace!(target: "fshead::head32::decode", have = buf.len(), need = HEAD32_LEN, "header length mismatch");
        return Err(HeaderError::LengthMismatch { have: buf.len(), need: HEAD32_LEN });
    }

    let magic_num = LittleEndian::read_u32(&buf[magic_offsets::HEAD32..magic_offsets::HEAD32 + MAGIC_NUM_LEN]);
    if !check_magic_num(magic_num, want) {
        tracing::trace!(
            target: "fshead::head32::decode",
            got = magic_num,
            want,
            bytes = %fmt_bytes(buf),
            "magic number mismatch"
        );
        return Err(HeaderError::MagicNumMismatch { got: magic_num, want });
    }

    let mut i = 0usize;
    let version = get_u16(buf, &mut i); // 0..2
    let client_name = get_client_name(buf, &mut i, Head::CLIENT_NAME_LEN); // 2..10
    let user_id = get_u32(buf, &mut i); // 10..14
    let log_id = get_u32(buf, &mut i); // 14..18
    let reserve = get_u32(buf, &mut i); // 18..22
    let meta_len = get_u16(buf, &mut i); // 22..24
    let body_len = get_u32(buf, &mut i); // 24..28

    debug_assert_eq!(i, magic_offsets::HEAD32);

    Ok(Head {
        version,
        client_name,
        user_id,
        log_id,
        reserve,
        meta_len,
        body_len,
        magic_num,
    })
}

/// Same as [`decode_head`].
#[inline]
pub fn load(buf: &[u8], want: u32) -> Result<Head> {
    decode_head(buf, want)
}

/// Check the magic number at 28..32. Anything shorter than a full header is
/// never a match.
#[inline]
pub fn is(buf: &[u8], want: u32) -> bool {
    is_magic_at(buf, magic_offsets::HEAD32, want)
}
