//! libsyllable-pinyin
//!
//! Mandarin pinyin frontend for the libsyllable decoder core: the full
//! syllable table, the initial set, the invalid standalone fragments, the
//! fuzzy-pair toggles, and a convenience constructor wiring them into a
//! [`TokenDecoder`].
//!
//! ```
//! use libsyllable_pinyin::{new_decoder, PinyinConfig};
//!
//! let mut decoder = new_decoder(PinyinConfig::default());
//! decoder.feed("nihao");
//! let best = decoder.get_best_token_path("nihao").unwrap();
//! assert_eq!(best.texts(), vec!["ni", "hao"]);
//! ```

pub mod catalog;
pub mod config;

pub use catalog::{catalog, INVALID_FRAGMENTS, MAX_SYLLABLE_LEN, PINYIN_INITIALS, PINYIN_SYLLABLES};
pub use config::PinyinConfig;

// Re-export the core types callers interact with.
pub use libsyllable_core::{DecoderConfig, Token, TokenDecoder, TokenPath, VowelLeadTieBreak};

/// Build a pinyin decoder session from a [`PinyinConfig`], with the
/// vowel-led tie-break this romanization calls for.
pub fn new_decoder(config: PinyinConfig) -> TokenDecoder {
    TokenDecoder::new(catalog(), config.into_decoder_config())
        .with_tie_break(Box::new(VowelLeadTieBreak::new()))
}
