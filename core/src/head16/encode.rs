//! head16/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Output is always exactly 16 bytes; there is no failure path.
//! - A zero magic number is replaced by the default magic bytes.
//! - Client names longer than 6 bytes are cut, shorter ones NUL padded.

use bytes::BufMut;

use crate::constants::HEAD16_LEN;
use crate::head16::types::Head;
use crate::magic::resolve_magic_num;
use crate::utils::{put_client_name, put_u16, put_u32};

/// Serialize a compact header into its 16-byte little-endian form.
#[inline]
pub fn encode_head(h: &Head) -> [u8; HEAD16_LEN] {
    let mut out = [0u8; HEAD16_LEN];
    let mut i = 0usize;

    put_u32(&mut out, &mut i, resolve_magic_num(h.magic_num)); // 0..4
    put_client_name(&mut out, &mut i, &h.client_name, Head::CLIENT_NAME_LEN); // 4..10
    put_u16(&mut out, &mut i, h.meta_len); // 10..12
    put_u32(&mut out, &mut i, h.body_len); // 12..16

    debug_assert_eq!(i, HEAD16_LEN, "encoding wrote incorrect length");
    out
}

/// Append the encoded header to `dst`.
#[inline]
pub fn encode_head_into<B: BufMut>(h: &Head, dst: &mut B) {
    dst.put_slice(&encode_head(h));
}
