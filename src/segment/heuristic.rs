//! Affix-table segmentation
//!
//! Produces an immediate guess from known prefixes and suffixes, before any
//! remote analysis is available.

use super::{ends_with_ignore_case, starts_with_ignore_case};
use crate::affixes::AffixTable;
use crate::core::{Fragment, Role};

/// Byte spans of a heuristic split: `word[..prefix_len]`, core, `word[len - suffix_len..]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicSplit {
    pub prefix_len: usize,
    pub suffix_len: usize,
}

/// Splits words using the longest matching known prefix and suffix
#[derive(Debug, Clone, Default)]
pub struct HeuristicSegmenter {
    table: AffixTable,
}

impl HeuristicSegmenter {
    #[must_use]
    pub const fn new(table: AffixTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &AffixTable {
        &self.table
    }

    /// Find the prefix/suffix boundaries for `word`
    ///
    /// The prefix is the longest known prefix matching case-insensitively.
    /// The suffix is the longest known suffix that matches, is strictly
    /// shorter than the word, and does not reach back into the prefix.
    #[must_use]
    pub fn split(&self, word: &str) -> HeuristicSplit {
        let prefix_len = self
            .table
            .prefixes()
            .iter()
            .find_map(|p| starts_with_ignore_case(word, p))
            .unwrap_or(0);

        let suffix_len = self
            .table
            .suffixes()
            .iter()
            .filter_map(|s| ends_with_ignore_case(word, s))
            .find(|&len| len < word.len() && prefix_len + len <= word.len())
            .unwrap_or(0);

        HeuristicSplit {
            prefix_len,
            suffix_len,
        }
    }

    /// Segment `word` into at most three fragments: prefix, root, suffix
    ///
    /// Only non-empty parts are emitted. Texts are sliced from `word`, so the
    /// original casing is kept and the fragments concatenate back to `word`.
    /// A result with fewer than two fragments means no useful split was found.
    ///
    /// # Examples
    /// ```
    /// use morpheme_lab::segment::HeuristicSegmenter;
    ///
    /// let segmenter = HeuristicSegmenter::default();
    /// let parts = segmenter.segment("Unhelpful");
    /// let texts: Vec<&str> = parts.iter().map(|f| f.text()).collect();
    /// assert_eq!(texts, ["Un", "help", "ful"]);
    /// ```
    #[must_use]
    pub fn segment(&self, word: &str) -> Vec<Fragment> {
        let HeuristicSplit {
            prefix_len,
            suffix_len,
        } = self.split(word);
        let end = word.len() - suffix_len;

        let mut fragments = Vec::with_capacity(3);
        if prefix_len > 0 {
            fragments.push(Fragment::new(&word[..prefix_len], Role::Prefix));
        }
        if end > prefix_len {
            fragments.push(Fragment::new(&word[prefix_len..end], Role::Root));
        }
        if suffix_len > 0 {
            fragments.push(Fragment::new(&word[end..], Role::Suffix));
        }
        fragments
    }

    /// Segment and discard results that are not a real split
    #[must_use]
    pub fn useful_split(&self, word: &str) -> Option<Vec<Fragment>> {
        let fragments = self.segment(word);
        (fragments.len() >= 2).then_some(fragments)
    }
}
