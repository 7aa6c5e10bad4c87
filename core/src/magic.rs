//! magic.rs
//! Magic-number validation shared by every header variant.
//!
//! The same rule runs during a full decode and during a cheap prefix check:
//! - a wire value of `0` is never valid;
//! - `want == 0` accepts only [`DEFAULT_MAGIC_NUM`];
//! - otherwise the wire value must equal `want`.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{DEFAULT_MAGIC_NUM, MAGIC_NUM_LEN};

/// Check a magic number read from the wire against the wanted one.
#[inline]
pub const fn check_magic_num(got: u32, want: u32) -> bool {
    if got == 0 {
        return false;
    }
    got == want || (want == 0 && got == DEFAULT_MAGIC_NUM)
}

/// Map the "caller didn't set one" sentinel to the default magic number.
#[inline]
pub const fn resolve_magic_num(magic_num: u32) -> u32 {
    if magic_num == 0 {
        DEFAULT_MAGIC_NUM
    } else {
        magic_num
    }
}

/// Read a little-endian magic number at `offset`, or `None` if `buf` ends first.
#[inline]
pub fn read_magic_num(buf: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(MAGIC_NUM_LEN)?;
    buf.get(offset..end).map(LittleEndian::read_u32)
}

/// Check `buf` for a valid magic number at `offset`.
/// Short buffers are a plain `false`.
#[inline]
pub fn is_magic_at(buf: &[u8], offset: usize, want: u32) -> bool {
    read_magic_num(buf, offset).is_some_and(|got| check_magic_num(got, want))
}
