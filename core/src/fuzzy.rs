//! Fuzzy expansion between phonetically confusable fragments.
//!
//! Regional pronunciation differences make certain fragments
//! interchangeable when querying a dictionary (the classic pinyin example
//! is "z" vs "zh"). The [`FuzzyMap`] holds those pairs symmetrically and
//! is consulted only during token normalization; it never changes the
//! lattice itself.

use std::collections::BTreeMap;

/// Symmetric fragment → alternates map built from `"a_b"` pair strings.
///
/// Iteration order over entries is the lexicographic order of the
/// fragments, so expansion output is deterministic.
///
/// # Example
/// ```
/// use libsyllable_core::FuzzyMap;
///
/// let fuzzy = FuzzyMap::from_pairs(&["z_zh", "an_ang"]);
/// assert_eq!(fuzzy.alternates("z"), &["zh".to_string()]);
/// assert_eq!(fuzzy.alternates("zh"), &["z".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FuzzyMap {
    map: BTreeMap<String, Vec<String>>,
}

impl FuzzyMap {
    /// An empty map: no fuzzy expansion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from underscore-joined pairs such as `"z_zh"`. Both directions
    /// are inserted. Malformed entries (no underscore, or an empty side)
    /// are skipped.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Self {
        let mut fuzzy = Self::new();
        for pair in pairs {
            let Some((a, b)) = pair.as_ref().split_once('_') else {
                continue;
            };
            let (a, b) = (a.trim(), b.trim());
            if a.is_empty() || b.is_empty() {
                continue;
            }
            fuzzy.insert(a, b);
            fuzzy.insert(b, a);
        }
        fuzzy
    }

    fn insert(&mut self, from: &str, to: &str) {
        let alts = self.map.entry(from.to_string()).or_default();
        if !alts.iter().any(|s| s == to) {
            alts.push(to.to_string());
        }
    }

    /// Whether no pairs are configured.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Alternates for a fragment, empty when none are configured.
    pub fn alternates(&self, fragment: &str) -> &[String] {
        self.map.get(fragment).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All `(fragment, alternates)` entries in deterministic order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
