//! The online segmentation lattice.
//!
//! One node per stripped-buffer offset. A node at position `p` records the
//! minimum number of "initial-only" tokens needed on any decomposition
//! reaching `p`, plus the start offsets of every candidate token ending at
//! `p` that attains that minimum. Nodes are committed append-only: growing
//! the buffer never revises earlier nodes, which is what makes the decoder
//! incremental.

use tracing::trace;

use crate::catalog::TokenCatalog;
use crate::separator::SeparatorIndex;

/// Cost added when a token is a known-invalid standalone fragment. Large
/// enough that such a path never beats a competing valid segmentation, yet
/// the path stays usable when it is the only option.
pub const INVALID_FRAGMENT_PENALTY: u32 = 100;

/// A populated lattice position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatticeNode {
    /// Minimum count of initial-only tokens over all paths reaching here.
    pub min_initials: u32,
    /// Start offsets of the in-edges attaining `min_initials`, ordered by
    /// increasing token length (ties are kept, not just the first).
    pub edges: Vec<usize>,
}

/// Growable lattice over the stripped buffer. Position 0 always exists.
#[derive(Debug)]
pub struct IncrementalLattice {
    nodes: Vec<Option<LatticeNode>>,
}

impl IncrementalLattice {
    /// A lattice over the empty buffer.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(LatticeNode::default())],
        }
    }

    /// Reset to the empty-buffer state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Some(LatticeNode::default()));
    }

    /// Highest valid position (== stripped buffer length).
    pub fn last_position(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The node at `pos`, `None` when no decomposition ends there (or the
    /// position is out of range).
    pub fn node(&self, pos: usize) -> Option<&LatticeNode> {
        self.nodes.get(pos).and_then(|n| n.as_ref())
    }

    /// Extend the lattice by one position for the newest stripped
    /// character. `stripped` must already contain that character; exactly
    /// one `advance` call is expected per appended character.
    pub fn advance(
        &mut self,
        stripped: &[char],
        catalog: &TokenCatalog,
        separators: &SeparatorIndex,
        max_token_len: usize,
    ) {
        let pos = stripped.len();
        debug_assert_eq!(self.nodes.len(), pos, "one advance per appended char");

        let mut candidates: Vec<(usize, u32)> = Vec::new();
        let mut min_cost = u32::MAX;

        for suffix in suffix_candidates(stripped, catalog, max_token_len) {
            let start = pos - suffix.chars().count();
            if !separators.in_same_range(start, pos) {
                continue;
            }
            // An unpopulated start has no finite-cost path; skip it and
            // let a longer suffix bridge the gap later.
            let Some(prev) = self.node(start) else {
                continue;
            };
            let mut cost = prev.min_initials;
            if catalog.is_initial(&suffix) && !catalog.is_full_syllable(&suffix) {
                cost += 1;
            }
            if catalog.is_invalid_fragment(&suffix) {
                cost += INVALID_FRAGMENT_PENALTY;
            }
            min_cost = min_cost.min(cost);
            candidates.push((start, cost));
        }

        if candidates.is_empty() {
            trace!(pos, "no reachable decomposition ends here yet");
            self.nodes.push(None);
            return;
        }

        let edges: Vec<usize> = candidates
            .into_iter()
            .filter(|&(_, cost)| cost == min_cost)
            .map(|(start, _)| start)
            .collect();
        trace!(pos, min_cost, ?edges, "lattice node committed");
        self.nodes.push(Some(LatticeNode {
            min_initials: min_cost,
            edges,
        }));
    }
}

impl Default for IncrementalLattice {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate tokens ending at the newest position: every suffix of length
/// 1..=`max_token_len` the catalog recognizes, longest last. Falls back to
/// the bare final character so that un-recognized input still advances.
fn suffix_candidates(
    stripped: &[char],
    catalog: &TokenCatalog,
    max_token_len: usize,
) -> Vec<String> {
    let pos = stripped.len();
    let mut out = Vec::new();
    for len in 1..=max_token_len.min(pos) {
        let suffix: String = stripped[pos - len..].iter().collect();
        if catalog.matches(&suffix) {
            out.push(suffix);
        }
    }
    if out.is_empty() {
        out.push(stripped[pos - 1].to_string());
    }
    out
}
