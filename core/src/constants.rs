//! constants.rs
//! Protocol-wide constants and precomputed byte patterns.
//!
//! Everything here is a `const`, so the patterns are baked into the binary and
//! can be read from any thread without synchronisation.

/// Default magic number, used whenever a caller passes `0`.
/// uint32 = 3458010488, on the wire as `78 0D 1D CE`.
pub const DEFAULT_MAGIC_NUM: u32 = 0xCE1D_0D78;

/// Little-endian wire form of [`DEFAULT_MAGIC_NUM`].
pub const DEFAULT_MAGIC_NUM_BYTES: [u8; 4] = DEFAULT_MAGIC_NUM.to_le_bytes();

/// Width of a magic number field on the wire.
pub const MAGIC_NUM_LEN: usize = 4;

/// Total length of the compact header.
pub const HEAD16_LEN: usize = 16;

/// Total length of the extended header.
pub const HEAD32_LEN: usize = 32;

/// Client name field width in the compact header.
pub const HEAD16_CLIENT_NAME_LEN: usize = 6;

/// Client name field width in the extended header.
pub const HEAD32_CLIENT_NAME_LEN: usize = 8;

/// Zero values, written verbatim instead of going through an integer encode.
pub const ZERO_U16_LE: [u8; 2] = [0u8; 2];
pub const ZERO_U32_LE: [u8; 4] = [0u8; 4];

/// NUL padding for the widest client name field.
pub const CLIENT_NAME_PADDING: [u8; HEAD32_CLIENT_NAME_LEN] = [0u8; HEAD32_CLIENT_NAME_LEN];

/// Byte offsets of the magic number inside each variant.
pub mod magic_offsets {
    pub const HEAD16: usize = 0;
    pub const HEAD32: usize = 28;
}
