//! libsyllable-core
//!
//! Incremental phonetic-token decoder shared by language-specific input
//! method crates (e.g. the pinyin crate in this workspace).
//!
//! As a user types romanized text, the decoder re-segments the growing
//! string into plausible syllable-token sequences over an online lattice,
//! honoring explicit separator boundaries, and picks a best segmentation
//! for the downstream candidate-lookup stage. It produces token paths
//! only; dictionary matching, candidate ranking and UI wiring live
//! elsewhere.
//!
//! Public API:
//! - [`TokenDecoder`] - the per-session facade (feed / query / normalize)
//! - [`TokenCatalog`] - immutable syllable knowledge, built per activation
//! - [`FuzzyMap`] - confusable-fragment expansion
//! - [`DecoderConfig`] - separator, fuzzy pairs, limits
//! - [`TieBreak`] / [`VowelLeadTieBreak`] - pluggable best-path tie-break

pub mod catalog;
pub use catalog::{TokenCatalog, TokenCatalogBuilder};

pub mod fuzzy;
pub use fuzzy::FuzzyMap;

pub mod lattice;
pub use lattice::{IncrementalLattice, LatticeNode, INVALID_FRAGMENT_PENALTY};

pub mod separator;
pub use separator::SeparatorIndex;

pub mod path;
pub use path::{enumerate_paths, Token, TokenPath};

pub mod select;
pub use select::{select_best, TieBreak, VowelLeadTieBreak};

pub mod config;
pub use config::DecoderConfig;

pub mod decoder;
pub use decoder::TokenDecoder;
