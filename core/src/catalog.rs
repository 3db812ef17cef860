//! Static syllable knowledge for one phonetic system.
//!
//! A [`TokenCatalog`] answers three questions during lattice growth:
//! is a fragment a complete syllable, is it a syllable-initial prefix,
//! and is it a fragment that must never stand alone. It also carries the
//! initial → full-syllable expansion table used when normalizing tokens
//! for dictionary lookup, and (for tone-marked systems such as zhuyin)
//! the tone-stripped forms of every syllable.
//!
//! Catalogs are built once per input-method activation through
//! [`TokenCatalogBuilder`] and are immutable afterwards. Recognition is
//! trie/set based; no pattern objects are compiled from loaded data.

use ahash::{AHashMap, AHashSet};

/// A prefix trie over syllable strings.
///
/// # Example
/// ```
/// use libsyllable_core::catalog::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("ni");
/// assert!(trie.contains("ni"));
/// assert!(!trie.contains("n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: AHashMap<char, Box<TrieNode>>,
    is_end: bool,
}

impl TrieNode {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a syllable into the trie.
    pub fn insert(&mut self, syllable: &str) {
        let mut node = self;
        for ch in syllable.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_end = true;
    }

    /// Whether the trie contains exactly the given word, not just a prefix.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self;
        for ch in word.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_end
    }
}

/// Builder for [`TokenCatalog`].
#[derive(Debug, Default)]
pub struct TokenCatalogBuilder {
    syllables: Vec<String>,
    initials: Vec<String>,
    tone_marks: Vec<char>,
    invalid_fragments: Vec<String>,
}

impl TokenCatalogBuilder {
    /// Add full syllables (e.g. the complete pinyin table).
    pub fn syllables<I, S>(mut self, syllables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.syllables
            .extend(syllables.into_iter().map(|s| canonicalize(s.as_ref())));
        self
    }

    /// Add a single full syllable.
    pub fn syllable(mut self, syllable: &str) -> Self {
        self.syllables.push(canonicalize(syllable));
        self
    }

    /// Declare syllable-initial prefixes (e.g. "b", "zh"). An initial is a
    /// legal but incomplete token; paths through it cost one ambiguity unit.
    pub fn initials<I, S>(mut self, initials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.initials
            .extend(initials.into_iter().map(|s| canonicalize(s.as_ref())));
        self
    }

    /// Enable tone-stripped matching: every syllable also matches with its
    /// trailing tone marks removed, and normalization re-expands an untoned
    /// token to all toned variants.
    pub fn tone_marks(mut self, marks: &str) -> Self {
        self.tone_marks = marks.chars().collect();
        self
    }

    /// Declare fragments that are never valid standalone tokens (e.g. "i",
    /// "u", "v" in pinyin). They remain usable as last-resort one-character
    /// tokens but carry a heavy cost penalty.
    pub fn invalid_fragments<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.invalid_fragments
            .extend(fragments.into_iter().map(|s| canonicalize(s.as_ref())));
        self
    }

    /// Build the immutable catalog.
    pub fn build(self) -> TokenCatalog {
        let mut full = TrieNode::new();
        let mut untoned = AHashSet::new();
        let mut initial_map: AHashMap<String, Vec<String>> = AHashMap::new();

        for initial in &self.initials {
            initial_map.entry(initial.clone()).or_default();
        }

        for syllable in &self.syllables {
            full.insert(syllable);

            if !self.tone_marks.is_empty() {
                let stripped: String = syllable
                    .trim_end_matches(|c| self.tone_marks.contains(&c))
                    .to_string();
                if !stripped.is_empty() && stripped != *syllable {
                    untoned.insert(stripped);
                }
            }

            // An initial expands to every multi-char syllable it prefixes;
            // only one- and two-char prefixes can be initials.
            if syllable.chars().count() > 1 {
                for j in 1..=2 {
                    let prefix: String = syllable.chars().take(j).collect();
                    if let Some(expansions) = initial_map.get_mut(&prefix) {
                        if !expansions.contains(syllable) {
                            expansions.push(syllable.clone());
                        }
                    }
                }
            }
        }

        TokenCatalog {
            full,
            untoned,
            tone_marks: self.tone_marks,
            initial_map,
            invalid: self.invalid_fragments.into_iter().collect(),
        }
    }
}

/// Immutable per-session syllable knowledge. See module docs.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    full: TrieNode,
    untoned: AHashSet<String>,
    tone_marks: Vec<char>,
    initial_map: AHashMap<String, Vec<String>>,
    invalid: AHashSet<String>,
}

impl TokenCatalog {
    /// Start building a catalog.
    pub fn builder() -> TokenCatalogBuilder {
        TokenCatalogBuilder::default()
    }

    /// Whether `fragment` is a complete syllable (toned or tone-stripped).
    pub fn is_full_syllable(&self, fragment: &str) -> bool {
        self.full.contains(fragment) || self.untoned.contains(fragment)
    }

    /// Whether `fragment` is a declared syllable-initial prefix.
    pub fn is_initial(&self, fragment: &str) -> bool {
        self.initial_map.contains_key(fragment)
    }

    /// Whether `fragment` is recognized at all: full syllable, tone-stripped
    /// form, or initial.
    pub fn matches(&self, fragment: &str) -> bool {
        self.is_full_syllable(fragment) || self.is_initial(fragment)
    }

    /// Full syllables a declared initial expands to, in table order.
    /// `None` when `fragment` is not an initial.
    pub fn initial_expansions(&self, fragment: &str) -> Option<&[String]> {
        self.initial_map.get(fragment).map(|v| v.as_slice())
    }

    /// Whether `fragment` may never stand alone as a token.
    pub fn is_invalid_fragment(&self, fragment: &str) -> bool {
        self.invalid.contains(fragment)
    }

    /// Whether tone-stripped matching is enabled.
    pub fn has_tone_marks(&self) -> bool {
        !self.tone_marks.is_empty()
    }

    /// The tone marks of this system, empty unless tone matching is enabled.
    pub fn tone_marks(&self) -> &[char] {
        &self.tone_marks
    }

    /// Whether the token already carries a trailing tone mark.
    pub fn ends_with_tone_mark(&self, token: &str) -> bool {
        token
            .chars()
            .last()
            .is_some_and(|c| self.tone_marks.contains(&c))
    }
}

fn canonicalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_catalog() -> TokenCatalog {
        TokenCatalog::builder()
            .syllables(["ni", "hao", "zhong", "guo"])
            .initials(["n", "h", "zh", "g"])
            .invalid_fragments(["i", "u"])
            .build()
    }

    #[test]
    fn full_syllable_and_initial_recognition() {
        let catalog = demo_catalog();
        assert!(catalog.is_full_syllable("ni"));
        assert!(catalog.is_full_syllable("zhong"));
        assert!(!catalog.is_full_syllable("n"));
        assert!(catalog.is_initial("n"));
        assert!(catalog.is_initial("zh"));
        assert!(!catalog.is_initial("ni"));
        assert!(catalog.matches("n"));
        assert!(catalog.matches("hao"));
        assert!(!catalog.matches("x"));
    }

    #[test]
    fn initial_expansions_follow_table_order() {
        let catalog = TokenCatalog::builder()
            .syllables(["na", "ni", "nu", "hao"])
            .initials(["n"])
            .build();
        assert_eq!(
            catalog.initial_expansions("n").unwrap(),
            &["na".to_string(), "ni".to_string(), "nu".to_string()]
        );
        assert!(catalog.initial_expansions("h").is_none());
    }

    #[test]
    fn two_char_initials_collect_expansions() {
        let catalog = TokenCatalog::builder()
            .syllables(["zha", "zhong", "za"])
            .initials(["z", "zh"])
            .build();
        assert_eq!(
            catalog.initial_expansions("zh").unwrap(),
            &["zha".to_string(), "zhong".to_string()]
        );
        // "z" is a one-char prefix of all three.
        assert_eq!(catalog.initial_expansions("z").unwrap().len(), 3);
    }

    #[test]
    fn single_char_syllables_do_not_expand_initials() {
        let catalog = TokenCatalog::builder()
            .syllables(["e", "en"])
            .initials(["e"])
            .build();
        assert_eq!(catalog.initial_expansions("e").unwrap(), &["en".to_string()]);
    }

    #[test]
    fn invalid_fragments() {
        let catalog = demo_catalog();
        assert!(catalog.is_invalid_fragment("i"));
        assert!(!catalog.is_invalid_fragment("ni"));
    }

    #[test]
    fn tone_stripped_matching() {
        let catalog = TokenCatalog::builder()
            .syllables(["ㄋㄧˇ", "ㄏㄠˇ"])
            .tone_marks("ˉˊˇˋ˙")
            .build();
        assert!(catalog.is_full_syllable("ㄋㄧˇ"));
        assert!(catalog.is_full_syllable("ㄋㄧ"));
        assert!(!catalog.is_full_syllable("ㄋ"));
        assert!(catalog.ends_with_tone_mark("ㄋㄧˇ"));
        assert!(!catalog.ends_with_tone_mark("ㄋㄧ"));
    }
}
