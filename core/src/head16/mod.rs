//! head16/mod.rs
//! Compact 16-byte header: magic number first, 6-byte client name,
//! metadata and body lengths.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
