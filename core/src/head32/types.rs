//! head32/types.rs
//! Extended 32-byte header.
//!
//! Layout (little-endian):
//! ```text
//! 0..2    version
//! 2..10   client_name (NUL padded)
//! 10..14  user_id
//! 14..18  log_id
//! 18..22  reserve
//! 22..24  meta_len
//! 24..28  body_len
//! 28..32  magic_num
//! ```
//! The magic number sits at the end, so telling this variant apart needs the
//! whole header.

use bytes::{BufMut, Bytes};

use crate::constants::{HEAD32_CLIENT_NAME_LEN, HEAD32_LEN};
use crate::head32::{decode, encode};
use crate::types::Result;

/// Extended protocol header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Head {
    /// Protocol version.
    pub version: u16,

    /// Caller name as raw bytes, only the first 8 go on the wire.
    pub client_name: Bytes,

    /// Caller id, `0` if unused. Servers may authenticate on it.
    pub user_id: u32,

    /// Log correlation id.
    pub log_id: u32,

    /// Reserved for application use, passed through untouched.
    pub reserve: u32,

    /// Length of the metadata segment following the header.
    pub meta_len: u16,

    /// Length of the body segment following the metadata.
    pub body_len: u32,

    /// Protocol magic number, `0` means the default.
    pub magic_num: u32,
}

impl Head {
    pub const LEN: usize = HEAD32_LEN;

    /// The magic number is the last field, so the full header is needed.
    pub const DISCERN_LEN: usize = HEAD32_LEN;

    pub const CLIENT_NAME_LEN: usize = HEAD32_CLIENT_NAME_LEN;

    /// Header with the default magic number and zeroed ids.
    pub fn new(client_name: impl Into<Bytes>, meta_len: u16, body_len: u32) -> Self {
        Self {
            client_name: client_name.into(),
            meta_len,
            body_len,
            ..Self::default()
        }
    }

    pub fn with_magic_num(mut self, magic_num: u32) -> Self {
        self.magic_num = magic_num;
        self
    }

    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn with_ids(mut self, user_id: u32, log_id: u32) -> Self {
        self.user_id = user_id;
        self.log_id = log_id;
        self
    }

    pub fn with_reserve(mut self, reserve: u32) -> Self {
        self.reserve = reserve;
        self
    }

    pub fn client_name_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.client_name).ok()
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; HEAD32_LEN] {
        encode::encode_head(self)
    }

    #[inline]
    pub fn encode_into<B: BufMut>(&self, dst: &mut B) {
        encode::encode_head_into(self, dst)
    }

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

    #[inline]
    pub fn payload_len(&self) -> u64 {
        u64::from(self.meta_len) + u64::from(self.body_len)
    }
}
