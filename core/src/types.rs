//! types.rs
//! Error type shared by both header codecs.
//!
//! Only two things can go wrong while decoding a header: the buffer has the
//! wrong length, or the magic number does not pass validation. Encoding is
//! total and never fails.

use thiserror::Error;

/// Header decode error.
/// - `LengthMismatch`: framing is presumed corrupted; resynchronise or drop.
/// - `MagicNumMismatch`: not this variant (try the next one) or a foreign stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Buffer length is not the variant's fixed length.
    #[error("header bytes length wrong: expected {need}, got {have}")]
    LengthMismatch { have: usize, need: usize },

    /// Magic number read from the wire failed validation.
    /// `want == 0` means the default magic number was expected.
    #[error("magic number not match: got {got:#010x}, want {want:#010x}")]
    MagicNumMismatch { got: u32, want: u32 },
}

impl HeaderError {
    /// True when the buffer looked like a header but belongs to another
    /// protocol (or another variant of this one).
    pub fn is_magic_mismatch(&self) -> bool {
        matches!(self, HeaderError::MagicNumMismatch { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HeaderError>;
