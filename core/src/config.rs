//! Decoder configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Language-agnostic decoder settings. Language crates supply defaults
/// appropriate for their phonetic system (fuzzy pairs in particular).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Explicit syllable-boundary character typed by the user.
    pub separator: char,

    /// Fuzzy expansion pairs, underscore-joined (e.g. "z_zh").
    pub fuzzy: Vec<String>,

    /// Longest suffix, in characters, tested against the catalog while
    /// growing the lattice.
    pub max_token_len: usize,

    /// Defensive cap on enumerated paths per query.
    pub max_paths: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            separator: '\'',
            fuzzy: Vec::new(),
            max_token_len: 5,
            max_paths: 256,
        }
    }
}

impl DecoderConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid decoder config")
    }
}
