//! The decoder facade.
//!
//! A [`TokenDecoder`] owns one composition session: the separator-stripped
//! buffer, the separator index, and the lattice, plus the immutable
//! catalog and the fuzzy map. The controller feeds it the current raw
//! source string and queries token paths over (sub)strings of it; the
//! candidate-lookup stage uses token normalization to expand initials,
//! tones and fuzzy spellings.
//!
//! The decoder is single-threaded and synchronous. All state grows
//! append-only; `clear` is the only operation that discards it.

use tracing::debug;

use crate::catalog::TokenCatalog;
use crate::config::DecoderConfig;
use crate::fuzzy::FuzzyMap;
use crate::lattice::IncrementalLattice;
use crate::path::{enumerate_paths, Token, TokenPath};
use crate::select::{select_best, TieBreak, VowelLeadTieBreak};
use crate::separator::SeparatorIndex;

/// Incremental phonetic-token decoder. See module docs.
pub struct TokenDecoder {
    catalog: TokenCatalog,
    fuzzy: FuzzyMap,
    stripped: Vec<char>,
    separators: SeparatorIndex,
    lattice: IncrementalLattice,
    tie_break: Box<dyn TieBreak>,
    max_token_len: usize,
    max_paths: usize,
}

impl TokenDecoder {
    /// Create a decoder for a catalog, with the vowel-led tie-break.
    pub fn new(catalog: TokenCatalog, config: DecoderConfig) -> Self {
        Self {
            catalog,
            fuzzy: FuzzyMap::from_pairs(&config.fuzzy),
            stripped: Vec::new(),
            separators: SeparatorIndex::new(config.separator),
            lattice: IncrementalLattice::new(),
            tie_break: Box::new(VowelLeadTieBreak::new()),
            max_token_len: config.max_token_len,
            max_paths: config.max_paths,
        }
    }

    /// Replace the residual tie-break heuristic.
    pub fn with_tie_break(mut self, tie_break: Box<dyn TieBreak>) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Replace the fuzzy map wholesale (e.g. when fuzzy settings change).
    pub fn set_fuzzy_pairs<S: AsRef<str>>(&mut self, pairs: &[S]) {
        self.fuzzy = FuzzyMap::from_pairs(pairs);
    }

    /// The catalog this decoder was configured with.
    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    /// Reset buffers and lattice to the empty state. The catalog and fuzzy
    /// map survive.
    pub fn clear(&mut self) {
        self.stripped.clear();
        self.separators.clear();
        self.lattice.clear();
    }

    /// The tracked external string (with separators re-inserted).
    pub fn reconstructed(&self) -> String {
        self.separators.reconstruct(&self.stripped)
    }

    /// Track the latest raw source string. If `source` extends the tracked
    /// state only the new suffix is decoded; otherwise the decoder resets
    /// and decodes `source` from scratch.
    pub fn feed(&mut self, source: &str) {
        let tracked = self.reconstructed();
        match source.strip_prefix(tracked.as_str()) {
            Some(suffix) => self.append(suffix),
            None => {
                debug!(source, %tracked, "source is not an extension; restarting");
                self.clear();
                self.append(source);
            }
        }
    }

    /// All token decompositions of `query`, which must be a substring of
    /// the fed source (typically the current composition). A query that
    /// extends the tracked state is fed first; a query not found in the
    /// tracked state clears the decoder and restarts from the query.
    pub fn get_token_paths(&mut self, query: &str) -> Vec<TokenPath> {
        if query.is_empty() {
            return Vec::new();
        }
        let tracked = self.reconstructed();
        if let Some(suffix) = query.strip_prefix(tracked.as_str()) {
            self.append(suffix);
        }

        if let Some(paths) = self.paths_in_tracked(query) {
            return paths;
        }

        // External state was edited out from under us; resynchronize.
        debug!(query, "query not within tracked source; resynchronizing");
        self.clear();
        self.append(query);
        match self.paths_in_tracked(query) {
            Some(paths) => paths,
            None => {
                // After a resync the query is the tracked string, so this
                // is a caller contract violation.
                debug_assert!(false, "query unresolvable after resynchronization");
                Vec::new()
            }
        }
    }

    /// The single best decomposition of `query`: fewest tokens, then the
    /// configured tie-break. `None` when no decomposition exists.
    pub fn get_best_token_path(&mut self, query: &str) -> Option<TokenPath> {
        select_best(self.get_token_paths(query), self.tie_break.as_ref())
    }

    /// All plausible full spellings of one decoded token: the token
    /// itself, its initial expansions, its toned variants (in tone-marked
    /// systems), and its fuzzy respellings. Pure expansion; the lattice is
    /// untouched.
    pub fn get_normalized_token(&self, token: &str) -> Vec<String> {
        let mut segments = vec![token.to_string()];

        if let Some(expansions) = self.catalog.initial_expansions(token) {
            segments.extend(expansions.iter().cloned());
        } else if self.catalog.has_tone_marks() && !self.catalog.ends_with_tone_mark(token) {
            for &tone in self.catalog.tone_marks() {
                segments.push(format!("{token}{tone}"));
            }
        }

        for (fragment, alternates) in self.fuzzy.entries() {
            if !token.contains(fragment) {
                continue;
            }
            // Downstream treats the head of a multi-entry list as an
            // identifier, so a still-bare token is re-seeded before its
            // respellings.
            if segments.len() == 1 {
                segments.push(token.to_string());
            }
            for alternate in alternates {
                segments.push(token.replacen(fragment, alternate, 1));
            }
        }

        segments
    }

    /// [`Self::get_normalized_token`] applied to each token of a path.
    pub fn get_normalized_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Vec<String>> {
        tokens
            .iter()
            .map(|t| self.get_normalized_token(t.as_ref()))
            .collect()
    }

    /// Whether every token is a bare initial (the whole composition is
    /// still ambiguous).
    pub fn is_all_initials<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().all(|t| self.catalog.is_initial(t.as_ref()))
    }

    fn append(&mut self, source: &str) {
        for ch in source.chars() {
            if ch == self.separators.separator() {
                self.separators.record(self.stripped.len());
                continue;
            }
            self.stripped.push(ch);
            self.lattice.advance(
                &self.stripped,
                &self.catalog,
                &self.separators,
                self.max_token_len,
            );
        }
    }

    /// Paths for a query known to live inside the tracked state; `None`
    /// when the query cannot be located at all. An empty exact range is
    /// retried with the query trimmed by one trailing character, because
    /// the newest character may not have produced a terminal node yet.
    fn paths_in_tracked(&mut self, query: &str) -> Option<Vec<TokenPath>> {
        let (start, end) = self.separators.resolve_range(&self.stripped, query)?;
        let boundary_paths = enumerate_paths(&self.lattice, start, end, self.max_paths);

        let mut paths = Vec::with_capacity(boundary_paths.len());
        for boundaries in boundary_paths {
            let mut tokens = Vec::with_capacity(boundaries.len());
            let mut index = start;
            for boundary in boundaries {
                tokens.push(Token {
                    text: self.stripped[index..boundary].iter().collect(),
                    ends_with_separator: self.separators.is_boundary(boundary),
                });
                index = boundary;
            }
            paths.push(TokenPath { tokens });
        }

        if paths.is_empty() {
            let mut trimmed = query.to_string();
            trimmed.pop();
            if trimmed.is_empty() {
                return Some(Vec::new());
            }
            return self.paths_in_tracked(&trimmed);
        }
        Some(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinyin_like() -> TokenDecoder {
        let catalog = TokenCatalog::builder()
            .syllables(["ni", "hao", "xi", "an", "xian", "zi", "zhi"])
            .initials(["n", "h", "x", "z", "zh"])
            .invalid_fragments(["i", "u", "v"])
            .build();
        let config = DecoderConfig {
            fuzzy: vec!["z_zh".to_string()],
            ..DecoderConfig::default()
        };
        TokenDecoder::new(catalog, config)
    }

    #[test]
    fn best_path_nihao() {
        let mut decoder = pinyin_like();
        decoder.feed("nihao");
        let best = decoder.get_best_token_path("nihao").unwrap();
        assert_eq!(best.texts(), vec!["ni", "hao"]);
        assert!(best.tokens.iter().all(|t| !t.ends_with_separator));
    }

    #[test]
    fn fewer_tokens_beats_more() {
        let mut decoder = pinyin_like();
        decoder.feed("xian");
        let best = decoder.get_best_token_path("xian").unwrap();
        assert_eq!(best.texts(), vec!["xian"]);
    }

    #[test]
    fn separator_forces_boundary() {
        // No path may merge across the separator into "xian".
        let catalog = TokenCatalog::builder()
            .syllables(["xi", "an", "ian", "xian"])
            .initials(["x"])
            .build();
        let mut decoder = TokenDecoder::new(catalog, DecoderConfig::default());
        decoder.feed("x'ian");
        let paths = decoder.get_token_paths("x'ian");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].texts(), vec!["x", "ian"]);
        assert!(paths[0].tokens[0].ends_with_separator);
        assert!(!paths[0].tokens[1].ends_with_separator);
        assert_eq!(paths[0].external_tokens('\''), vec!["x'", "ian"]);
    }

    #[test]
    fn incremental_feed_equals_batch_feed() {
        let mut incremental = pinyin_like();
        for end in 1..="nihao".len() {
            incremental.feed(&"nihao"[..end]);
        }
        let mut batch = pinyin_like();
        batch.feed("nihao");
        assert_eq!(
            incremental.get_token_paths("nihao"),
            batch.get_token_paths("nihao")
        );
    }

    #[test]
    fn feed_restarts_on_non_extension() {
        let mut decoder = pinyin_like();
        decoder.feed("nihao");
        decoder.feed("xian"); // not an extension: full restart
        assert_eq!(decoder.reconstructed(), "xian");
        assert_eq!(
            decoder.get_best_token_path("xian").unwrap().texts(),
            vec!["xian"]
        );
    }

    #[test]
    fn query_resynchronizes_unknown_state() {
        let mut decoder = pinyin_like();
        decoder.feed("nihao");
        // The host edited the composition without telling us.
        let best = decoder.get_best_token_path("xian").unwrap();
        assert_eq!(best.texts(), vec!["xian"]);
        assert_eq!(decoder.reconstructed(), "xian");
    }

    #[test]
    fn trailing_unfinished_chars_are_trimmed() {
        let catalog = TokenCatalog::builder()
            .syllables(["xi", "an", "ian", "xian"])
            .initials(["x"])
            .build();
        let mut decoder = TokenDecoder::new(catalog, DecoderConfig::default());
        // After "x'" the lone "i" has no terminal node yet (bare "i" is
        // not a token and "xi" may not cross the separator); the query is
        // trimmed until something resolves.
        decoder.feed("x'i");
        let paths = decoder.get_token_paths("x'i");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].texts(), vec!["x"]);
        assert!(paths[0].tokens[0].ends_with_separator);
    }

    #[test]
    fn query_ending_with_separator() {
        let mut decoder = pinyin_like();
        decoder.feed("ni'");
        let paths = decoder.get_token_paths("ni'");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].texts(), vec!["ni"]);
        assert!(paths[0].tokens[0].ends_with_separator);
    }

    #[test]
    fn empty_query_yields_no_paths() {
        let mut decoder = pinyin_like();
        decoder.feed("nihao");
        assert!(decoder.get_token_paths("").is_empty());
        assert!(decoder.get_best_token_path("").is_none());
    }

    #[test]
    fn normalization_expands_initials() {
        let decoder = pinyin_like();
        let expanded = decoder.get_normalized_token("n");
        assert_eq!(expanded[0], "n");
        assert!(expanded.contains(&"ni".to_string()));
    }

    #[test]
    fn normalization_expands_fuzzy_fragments() {
        let decoder = pinyin_like();
        let expanded = decoder.get_normalized_token("zi");
        assert!(expanded.contains(&"zi".to_string()));
        assert!(expanded.contains(&"zhi".to_string()));
    }

    #[test]
    fn normalization_expands_tones() {
        let catalog = TokenCatalog::builder()
            .syllables(["ㄋㄧˇ"])
            .tone_marks("ˉˊˇˋ˙")
            .build();
        let decoder = TokenDecoder::new(catalog, DecoderConfig::default());
        let expanded = decoder.get_normalized_token("ㄋㄧ");
        assert_eq!(expanded[0], "ㄋㄧ");
        assert!(expanded.contains(&"ㄋㄧˇ".to_string()));
        assert_eq!(expanded.len(), 6);
        // A token already carrying a tone is not re-toned.
        assert_eq!(decoder.get_normalized_token("ㄋㄧˇ"), vec!["ㄋㄧˇ"]);
    }

    #[test]
    fn all_initials_check() {
        let decoder = pinyin_like();
        assert!(decoder.is_all_initials(&["n", "h"]));
        assert!(!decoder.is_all_initials(&["ni", "h"]));
    }

    #[test]
    fn fuzzy_map_replacement() {
        let mut decoder = pinyin_like();
        decoder.set_fuzzy_pairs(&["n_l"]);
        let expanded = decoder.get_normalized_token("zi");
        assert!(!expanded.contains(&"zhi".to_string()));
    }
}
