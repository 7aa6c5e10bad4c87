//! head16/types.rs
//! Compact 16-byte header.
//!
//! Layout (little-endian):
//! ```text
//! 0..4    magic_num
//! 4..10   client_name (NUL padded)
//! 10..12  meta_len
//! 12..16  body_len
//! ```
//! A full message is `{Head}{Meta: meta_len bytes}{Body: body_len bytes}`.

use bytes::{BufMut, Bytes};

use crate::constants::{HEAD16_CLIENT_NAME_LEN, HEAD16_LEN, MAGIC_NUM_LEN};
use crate::head16::{decode, encode};
use crate::types::Result;

/// Compact protocol header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Head {
    /// Protocol magic number. `0` means "use the default" when encoding
    /// and "expect the default" when this value is used for validation.
    pub magic_num: u32,

    /// Caller name as raw bytes, only the first 6 go on the wire.
    pub client_name: Bytes,

    /// Length of the metadata segment following the header.
    pub meta_len: u16,

    /// Length of the body segment following the metadata.
    pub body_len: u32,
}

impl Head {
    /// Fixed wire length.
    pub const LEN: usize = HEAD16_LEN;

    /// Prefix needed to tell whether a buffer is this variant.
    pub const DISCERN_LEN: usize = MAGIC_NUM_LEN;

    /// Width of the client name field.
    pub const CLIENT_NAME_LEN: usize = HEAD16_CLIENT_NAME_LEN;

    /// Header with the default magic number.
    pub fn new(client_name: impl Into<Bytes>, meta_len: u16, body_len: u32) -> Self {
        Self {
            magic_num: 0,
            client_name: client_name.into(),
            meta_len,
            body_len,
        }
    }

    pub fn with_magic_num(mut self, magic_num: u32) -> Self {
        self.magic_num = magic_num;
        self
    }

    /// The client name as text, if it is valid UTF-8.
    pub fn client_name_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.client_name).ok()
    }

    /// Serialize to the 16-byte wire form.
    #[inline]
    pub fn to_bytes(&self) -> [u8; HEAD16_LEN] {
        encode::encode_head(self)
    }

    /// Append the 16-byte wire form to a transport buffer.
    #[inline]
    pub fn encode_into<B: BufMut>(&self, dst: &mut B) {
        encode::encode_head_into(self, dst)
    }

    /// Whether `buf` starts with a magic number this header accepts.
    #[inline]
    pub fn is(&self, buf: &[u8]) -> bool {
        decode::is(buf, self.magic_num)
    }

    /// Decode `buf` into `self`, validating against `self.magic_num`.
    /// `self` is left untouched on error.
    pub fn load(&mut self, buf: &[u8]) -> Result<()> {
        *self = decode::decode_head(buf, self.magic_num)?;
        Ok(())
    }

    /// Total number of bytes the metadata and body occupy after the header.
    #[inline]
    pub fn payload_len(&self) -> u64 {
        u64::from(self.meta_len) + u64::from(self.body_len)
    }
}
