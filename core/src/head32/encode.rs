//! head32/encode.rs
//!
//! Serializes `Head` into a fixed 32-byte buffer in little-endian order.
//! Field order must match the layout in `types.rs`.

use bytes::BufMut;

use crate::constants::HEAD32_LEN;
use crate::head32::types::Head;
use crate::magic::resolve_magic_num;
use crate::utils::{put_client_name, put_u16, put_u32};

#[inline]
pub fn encode_head(h: &Head) -> [u8; HEAD32_LEN] {
    let mut out = [0u8; HEAD32_LEN];
    let mut i = 0usize;

    put_u16(&mut out, &mut i, h.version); // 0..2
    put_client_name(&mut out, &mut i, &h.client_name, Head::CLIENT_NAME_LEN); // 2..10
    put_u32(&mut out, &mut i, h.user_id); // 10..14
    put_u32(&mut out, &mut i, h.log_id); // 14..18
    put_u32(&mut out, &mut i, h.reserve); // 18..22
    put_u16(&mut out, &mut i, h.meta_len); // 22..24
    put_u32(&mut out, &mut i, h.body_len); // 24..28
    put_u32(&mut out, &mut i, resolve_magic_num(h.magic_num)); // 28..32

    debug_assert_eq!(i, HEAD32_LEN, "encoding wrote incorrect length");
    out
}

#[inline]
pub fn encode_head_into<B: BufMut>(h: &Head, dst: &mut B) {
    dst.put_slice(&encode_head(h));
}
