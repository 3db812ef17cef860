//! Explicit syllable-boundary bookkeeping.
//!
//! Users may type a separator character (apostrophe by default) to force a
//! syllable boundary, e.g. `x'ian` vs `xian`. The separator never enters
//! the stripped buffer the lattice is built over; instead its position is
//! recorded here. The index translates between external coordinates (the
//! separator-containing string the user sees) and internal coordinates
//! (offsets into the stripped buffer), and forbids lattice edges from
//! crossing a recorded boundary.

/// Recorded separator positions plus coordinate translation.
///
/// Positions are stripped-buffer offsets, kept in non-decreasing order.
/// Two consecutive separators legitimately record the same offset, which
/// is why the order is non-decreasing rather than strictly increasing;
/// exact reconstruction of the typed string depends on keeping both.
#[derive(Debug, Clone)]
pub struct SeparatorIndex {
    positions: Vec<usize>,
    separator: char,
}

impl SeparatorIndex {
    /// Create an index for the given separator character.
    pub fn new(separator: char) -> Self {
        Self {
            positions: Vec::new(),
            separator,
        }
    }

    /// The separator character this index strips and re-inserts.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Forget all recorded positions.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Record a separator typed when the stripped buffer had `stripped_len`
    /// characters.
    pub fn record(&mut self, stripped_len: usize) {
        debug_assert!(self.positions.last().map_or(true, |&p| p <= stripped_len));
        self.positions.push(stripped_len);
    }

    /// The recorded positions, non-decreasing.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Whether a separator was typed right after stripped offset `pos`.
    pub fn is_boundary(&self, pos: usize) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }

    /// Whether no separator lies strictly between `a` and `b`. Lattice
    /// edges are only admitted when this holds. Binary search, not a scan.
    pub fn in_same_range(&self, a: usize, b: usize) -> bool {
        let lo = self.positions.partition_point(|&p| p <= a);
        let hi = self.positions.partition_point(|&p| p < b);
        lo == hi
    }

    /// Rebuild the external string by re-inserting separators into the
    /// stripped buffer.
    pub fn reconstruct(&self, stripped: &[char]) -> String {
        String::from_iter(self.external_chars(stripped))
    }

    /// Locate `query` inside the reconstructed external string and map its
    /// span to internal (stripped) coordinates. `None` when the query is
    /// not a substring of the tracked state.
    pub fn resolve_range(&self, stripped: &[char], query: &str) -> Option<(usize, usize)> {
        let query: Vec<char> = query.chars().collect();
        if query.is_empty() {
            return Some((0, 0));
        }
        let external: Vec<char> = self.external_chars(stripped).collect();
        if query.len() > external.len() {
            return None;
        }
        let ext_start = (0..=external.len() - query.len())
            .find(|&i| external[i..i + query.len()] == query[..])?;
        let ext_end = ext_start + query.len();

        let separators_before = |ext_pos: usize| {
            external[..ext_pos]
                .iter()
                .filter(|&&c| c == self.separator)
                .count()
        };
        Some((
            ext_start - separators_before(ext_start),
            ext_end - separators_before(ext_end),
        ))
    }

    fn external_chars<'a>(&'a self, stripped: &'a [char]) -> impl Iterator<Item = char> + 'a {
        let mut out = Vec::with_capacity(stripped.len() + self.positions.len());
        let mut idx = 0;
        for &pos in &self.positions {
            out.extend_from_slice(&stripped[idx..pos]);
            out.push(self.separator);
            idx = pos;
        }
        out.extend_from_slice(&stripped[idx..]);
        out.into_iter()
    }
}

impl Default for SeparatorIndex {
    fn default() -> Self {
        Self::new('\'')
    }
}
