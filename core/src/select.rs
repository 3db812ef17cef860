//! Best-path selection.
//!
//! Stage one is fixed: among all decompositions, only those with the
//! fewest tokens survive. Stage two is a residual tie-break behind the
//! [`TieBreak`] trait, because the shipped heuristic (fewest vowel-led
//! tokens) is tuned for pinyin-like romanizations and other phonetic
//! systems may need a different rule.

use crate::path::TokenPath;

/// Residual disambiguation among paths that already share the minimal
/// token count.
pub trait TieBreak {
    /// Index of the preferred path. `paths` is never empty.
    fn pick(&self, paths: &[TokenPath]) -> usize;
}

/// Prefer the path with the fewest tokens whose first character is a
/// vowel. Among equally scored paths the first wins.
#[derive(Debug, Clone)]
pub struct VowelLeadTieBreak {
    vowels: Vec<char>,
}

impl VowelLeadTieBreak {
    pub fn new() -> Self {
        Self::with_vowels("aeiou")
    }

    /// Use a custom vowel set (e.g. for romanizations with other letters).
    pub fn with_vowels(vowels: &str) -> Self {
        Self {
            vowels: vowels.chars().collect(),
        }
    }

    fn vowel_lead_count(&self, path: &TokenPath) -> usize {
        path.tokens
            .iter()
            .filter(|t| {
                t.text
                    .chars()
                    .next()
                    .is_some_and(|c| self.vowels.contains(&c))
            })
            .count()
    }
}

impl Default for VowelLeadTieBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreak for VowelLeadTieBreak {
    fn pick(&self, paths: &[TokenPath]) -> usize {
        paths
            .iter()
            .enumerate()
            .min_by_key(|(_, path)| self.vowel_lead_count(path))
            .map(|(index, _)| index)
            .unwrap_or(0)
    }
}

/// Two-stage selection: fewest tokens, then the tie-break.
pub fn select_best(mut paths: Vec<TokenPath>, tie_break: &dyn TieBreak) -> Option<TokenPath> {
    match paths.len() {
        0 => return None,
        1 => return paths.pop(),
        _ => {}
    }

    let min_tokens = paths.iter().map(|p| p.tokens.len()).min()?;
    paths.retain(|p| p.tokens.len() <= min_tokens);
    if paths.len() == 1 {
        return paths.pop();
    }

    let index = tie_break.pick(&paths);
    Some(paths.swap_remove(index))
}
