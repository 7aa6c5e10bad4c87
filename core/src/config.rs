//! config.rs
//! Deserialisable description of which header variants a transport accepts.
//!
//! ```json
//! { "magic_num": 0, "variants": ["head16", "head32"] }
//! ```
//! `magic_num: 0` accepts the compiled-in default magic number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{HEAD16_LEN, HEAD32_LEN, MAGIC_NUM_LEN};
use crate::protocol::ProtocolSet;
use crate::{head16, head32};

/// Header variant identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadKind {
    Head16,
    Head32,
}

impl HeadKind {
    pub const fn fixed_len(self) -> usize {
        match self {
            HeadKind::Head16 => HEAD16_LEN,
            HeadKind::Head32 => HEAD32_LEN,
        }
    }

    pub const fn discern_len(self) -> usize {
        match self {
            HeadKind::Head16 => MAGIC_NUM_LEN,
            HeadKind::Head32 => HEAD32_LEN,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid protocol config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("protocol config lists no header variants")]
    NoVariants,
}

/// Accepted magic number plus the ordered variants to try.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProtocolConfig {
    pub magic_num: u32,
    pub variants: Vec<HeadKind>,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            magic_num: 0,
            variants: vec![HeadKind::Head16, HeadKind::Head32],
        }
    }
}

impl ProtocolConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variants.is_empty() {
            return Err(ConfigError::NoVariants);
        }
        Ok(())
    }

    /// One candidate template per listed variant, in order, each accepting
    /// `magic_num`.
    pub fn build_set(&self) -> ProtocolSet {
        let mut set = ProtocolSet::new();
        for kind in &self.variants {
            match kind {
                HeadKind::Head16 => {
                    set.register(Box::new(head16::Head { magic_num: self.magic_num, ..Default::default() }));
                }
                HeadKind::Head32 => {
                    set.register(Box::new(head32::Head { magic_num: self.magic_num, ..Default::default() }));
                }
            }
        }
        set
    }
}
