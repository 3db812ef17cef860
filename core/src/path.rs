//! Token paths and lattice path enumeration.
//!
//! A path through the lattice is a sequence of boundary positions; the
//! token texts are the stripped-buffer slices between consecutive
//! boundaries. Enumeration walks in-edges backward from the query's end
//! position, memoizing on the intermediate end so shared sub-paths are
//! computed once, and caps the result set as a defensive bound against
//! pathologically ambiguous regions.

use ahash::AHashMap;

use crate::lattice::IncrementalLattice;

/// One decoded token plus whether the user typed a separator right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub ends_with_separator: bool,
}

/// An ordered token decomposition of (part of) the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPath {
    pub tokens: Vec<Token>,
}

impl TokenPath {
    /// The token texts, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// The tokens rendered externally: the separator character is appended
    /// to every token the user terminated with one. Joining the result
    /// reproduces the corresponding slice of the typed string.
    pub fn external_tokens(&self, separator: char) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| {
                if t.ends_with_separator {
                    format!("{}{}", t.text, separator)
                } else {
                    t.text.clone()
                }
            })
            .collect()
    }
}

/// Enumerate every boundary-position path from `start` to `end`, capped at
/// `max_paths` per sub-problem. Each returned path lists the boundaries
/// after `start`, ending with `end` itself; an empty result means no
/// complete decomposition of the exact range exists.
pub fn enumerate_paths(
    lattice: &IncrementalLattice,
    start: usize,
    end: usize,
    max_paths: usize,
) -> Vec<Vec<usize>> {
    if end <= start {
        return Vec::new();
    }
    let mut enumerator = Enumerator {
        lattice,
        start,
        max_paths,
        memo: AHashMap::new(),
    };
    enumerator.paths_to(end)
}

struct Enumerator<'a> {
    lattice: &'a IncrementalLattice,
    start: usize,
    max_paths: usize,
    memo: AHashMap<usize, Vec<Vec<usize>>>,
}

impl Enumerator<'_> {
    fn paths_to(&mut self, end: usize) -> Vec<Vec<usize>> {
        if let Some(hit) = self.memo.get(&end) {
            return hit.clone();
        }
        let edges = match self.lattice.node(end) {
            Some(node) => node.edges.clone(),
            None => return Vec::new(),
        };

        let mut out: Vec<Vec<usize>> = Vec::new();
        'edges: for edge in edges {
            if edge < self.start {
                continue;
            }
            if edge == self.start {
                out.push(vec![end]);
            } else {
                for mut path in self.paths_to(edge) {
                    path.push(end);
                    out.push(path);
                    if out.len() >= self.max_paths {
                        break 'edges;
                    }
                }
            }
            if out.len() >= self.max_paths {
                break;
            }
        }
        self.memo.insert(end, out.clone());
        out
    }
}
