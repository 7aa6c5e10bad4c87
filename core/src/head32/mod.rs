//! head32/mod.rs
//! Extended 32-byte header: version, 8-byte client name, caller and log ids,
//! a reserved word, metadata and body lengths, magic number last.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
