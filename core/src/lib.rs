//! fshead-core
//!
//! Fixed-length framing headers for byte-oriented transports.
//! A message on the wire is `{Head}{Meta}{Body}`; the header carries a magic
//! number and the lengths of the two trailing segments.
//! No I/O happens here: callers hand in byte slices and get values back.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod magic;
pub mod utils;

// Header variants
pub mod head16;
pub mod head32;

// Discrimination
pub mod protocol;
pub mod config;

pub use constants::DEFAULT_MAGIC_NUM;
pub use magic::check_magic_num;
pub use types::{HeaderError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{HeadKind, ProtocolConfig};
    pub use crate::constants::DEFAULT_MAGIC_NUM;
    pub use crate::protocol::{Protocol, ProtocolSet};
    pub use crate::types::HeaderError;
    pub use crate::{head16, head32};
}
