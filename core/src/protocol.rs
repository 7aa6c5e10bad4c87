//! protocol.rs
//! Discrimination contract shared by every header variant.
//!
//! A transport that does not know which header an incoming stream uses keeps
//! a [`ProtocolSet`] of candidate templates. It reads `discern_len()` bytes,
//! asks each candidate `is()`, then reads up to `fixed_len()` and calls
//! `load()` on the candidate that matched. Reading the metadata and body that
//! follow is the transport's job.
//!
//! The 16-byte variant keeps its magic number at the front and the 32-byte
//! variant at the back, so there is no single offset that tells them apart;
//! every candidate checks its own offset.

use std::any::Any;
use std::fmt;

use crate::{head16, head32};
use crate::types::Result;

/// Capability exposed by every header variant.
pub trait Protocol: fmt::Debug + Send + Sync + Any {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// Serialize to the wire form.
    fn to_bytes(&self) -> Vec<u8>;

    /// Total wire length, `None` for a variable-length variant.
    fn fixed_len(&self) -> Option<usize>;

    /// Smallest prefix needed by [`Protocol::is`]. Never larger than
    /// `fixed_len()` when that is known.
    fn discern_len(&self) -> usize;

    /// Replace this value with one decoded from a full-length buffer,
    /// validated against this value's magic number.
    fn load(&mut self, buf: &[u8]) -> Result<()>;

    /// Check the first `discern_len()` bytes of `buf` for this variant.
    fn is(&self, buf: &[u8]) -> bool;

    /// Downcast support after a trait-object `load`.
    fn as_any(&self) -> &dyn Any;
}

impl Protocol for head16::Head {
    fn name(&self) -> &'static str {
        "head16"
    }

    fn to_bytes(&self) -> Vec<u8> {
        head16::Head::to_bytes(self).to_vec()
    }

    fn fixed_len(&self) -> Option<usize> {
        Some(head16::Head::LEN)
    }

    fn discern_len(&self) -> usize {
        head16::Head::DISCERN_LEN
    }

    fn load(&mut self, buf: &[u8]) -> Result<()> {
        head16::Head::load(self, buf)
    }

    fn is(&self, buf: &[u8]) -> bool {
        head16::Head::is(self, buf)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Protocol for head32::Head {
    fn name(&self) -> &'static str {
        "head32"
    }

    fn to_bytes(&self) -> Vec<u8> {
        head32::Head::to_bytes(self).to_vec()
    }

    fn fixed_len(&self) -> Option<usize> {
        Some(head32::Head::LEN)
    }

    fn discern_len(&self) -> usize {
        head32::Head::DISCERN_LEN
    }

    fn load(&mut self, buf: &[u8]) -> Result<()> {
        head32::Head::load(self, buf)
    }

    fn is(&self, buf: &[u8]) -> bool {
        head32::Head::is(self, buf)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Ordered list of candidate header variants.
///
/// Each candidate is a template: its `magic_num` is the value it accepts,
/// and after a successful `load` it holds the decoded header.
#[derive(Debug, Default)]
pub struct ProtocolSet {
    candidates: Vec<Box<dyn Protocol>>,
}

impl ProtocolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate. Candidates are tried in registration order.
    pub fn register(&mut self, candidate: Box<dyn Protocol>) -> &mut Self {
        self.candidates.push(candidate);
        self
    }

    pub fn with(mut self, candidate: Box<dyn Protocol>) -> Self {
        self.register(candidate);
        self
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Prefix length that lets every candidate be checked.
    pub fn discern_len(&self) -> usize {
        self.candidates.iter().map(|c| c.discern_len()).max().unwrap_or(0)
    }

    /// Prefix length that lets at least one candidate be checked.
    pub fn min_discern_len(&self) -> usize {
        self.candidates.iter().map(|c| c.discern_len()).min().unwrap_or(0)
    }

    /// Index of the first candidate whose `is` accepts `prefix`.
    /// Candidates needing more bytes than `prefix` holds are skipped.
    pub fn discern(&self, prefix: &[u8]) -> Option<usize> {
        let found = self
            .candidates
            .iter()
            .position(|c| prefix.len() >= c.discern_len() && c.is(prefix));

        match found {
            Some(index) => {
                tracing::debug!(
                    target: "fshead::protocol",
                    index,
                    variant = self.candidates[index].name(),
                    "protocol discerned"
                );
            }
            None => {
                tracing::trace!(
                    target: "fshead::protocol",
                    prefix_len = prefix.len(),
                    candidates = self.candidates.len(),
                    "no protocol matched"
                );
            }
        }
        found
    }

    /// Decode `buf` into the candidate at `index`, usually the one
    /// [`ProtocolSet::discern`] returned.
    ///
    /// `None` if `index` is out of range. On a decode error the candidate
    /// keeps its previous value, so its magic number still applies to the
    /// next attempt.
    pub fn load(&mut self, index: usize, buf: &[u8]) -> Option<Result<&dyn Protocol>> {
        let candidate = self.candidates.get_mut(index)?;
        match candidate.load(buf) {
            Ok(()) => Some(Ok(&**candidate)),
            Err(err) => {
                tracing::trace!(
                    target: "fshead::protocol",
                    index,
                    variant = candidate.name(),
                    error = %err,
                    "protocol load failed"
                );
                Some(Err(err))
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&dyn Protocol> {
        self.candidates.get(index).map(|c| &**c)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Protocol + 'static)> {
        self.candidates.get_mut(index).map(|c| &mut **c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Protocol> {
        self.candidates.iter().map(|c| &**c)
    }
}
