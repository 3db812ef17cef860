//! Pinyin-specific configuration on top of the base decoder config.

use libsyllable_core::DecoderConfig;
use serde::{Deserialize, Serialize};

/// Decoder settings plus the pinyin fuzzy-matching toggles.
///
/// Each toggle contributes one underscore pair to the fuzzy map; pairs
/// listed directly in `base.fuzzy` are kept as well, so unusual regional
/// pairs can be configured without a dedicated toggle.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PinyinConfig {
    #[serde(flatten)]
    pub base: DecoderConfig,

    // Retroflex vs non-retroflex initials.
    pub fuzzy_z_zh: bool,
    pub fuzzy_c_ch: bool,
    pub fuzzy_s_sh: bool,

    // Common initial confusions.
    pub fuzzy_n_l: bool,
    pub fuzzy_f_h: bool,
    pub fuzzy_l_r: bool,
    pub fuzzy_k_g: bool,

    // Front vs back nasal finals.
    pub fuzzy_an_ang: bool,
    pub fuzzy_en_eng: bool,
    pub fuzzy_in_ing: bool,
    pub fuzzy_ian_iang: bool,
    pub fuzzy_uan_uang: bool,
}

impl Default for PinyinConfig {
    fn default() -> Self {
        Self {
            base: DecoderConfig {
                max_token_len: crate::catalog::MAX_SYLLABLE_LEN,
                ..DecoderConfig::default()
            },
            fuzzy_z_zh: false,
            fuzzy_c_ch: false,
            fuzzy_s_sh: false,
            fuzzy_n_l: false,
            fuzzy_f_h: false,
            fuzzy_l_r: false,
            fuzzy_k_g: false,
            fuzzy_an_ang: false,
            fuzzy_en_eng: false,
            fuzzy_in_ing: false,
            fuzzy_ian_iang: false,
            fuzzy_uan_uang: false,
        }
    }
}

impl PinyinConfig {
    /// All toggles on, for users who want maximal fuzzy matching.
    pub fn with_standard_fuzzy() -> Self {
        Self {
            fuzzy_z_zh: true,
            fuzzy_c_ch: true,
            fuzzy_s_sh: true,
            fuzzy_n_l: true,
            fuzzy_f_h: true,
            fuzzy_l_r: true,
            fuzzy_k_g: true,
            fuzzy_an_ang: true,
            fuzzy_en_eng: true,
            fuzzy_in_ing: true,
            fuzzy_ian_iang: true,
            fuzzy_uan_uang: true,
            ..Self::default()
        }
    }

    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        toml::from_str(text).context("invalid pinyin config")
    }

    /// The enabled fuzzy pairs, underscore-joined, plus any extras from
    /// `base.fuzzy`.
    pub fn fuzzy_pairs(&self) -> Vec<String> {
        let toggles = [
            (self.fuzzy_z_zh, "z_zh"),
            (self.fuzzy_c_ch, "c_ch"),
            (self.fuzzy_s_sh, "s_sh"),
            (self.fuzzy_n_l, "n_l"),
            (self.fuzzy_f_h, "f_h"),
            (self.fuzzy_l_r, "l_r"),
            (self.fuzzy_k_g, "k_g"),
            (self.fuzzy_an_ang, "an_ang"),
            (self.fuzzy_en_eng, "en_eng"),
            (self.fuzzy_in_ing, "in_ing"),
            (self.fuzzy_ian_iang, "ian_iang"),
            (self.fuzzy_uan_uang, "uan_uang"),
        ];
        let mut pairs: Vec<String> = toggles
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, pair)| pair.to_string())
            .collect();
        pairs.extend(self.base.fuzzy.iter().cloned());
        pairs
    }

    /// The base decoder config with the resolved fuzzy pair list.
    pub fn into_decoder_config(self) -> DecoderConfig {
        let fuzzy = self.fuzzy_pairs();
        DecoderConfig { fuzzy, ..self.base }
    }
}
