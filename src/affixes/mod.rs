//! Affix tables for heuristic segmentation
//!
//! Provides embedded prefix/suffix lists and decoy vocabularies, plus an
//! `AffixTable` that keeps affixes ordered longest-first for matching.

mod embedded;
pub mod loader;

pub use embedded::{
    PREFIX_DECOYS, PREFIX_DECOYS_COUNT, PREFIXES, PREFIXES_COUNT, SUFFIX_DECOYS,
    SUFFIX_DECOYS_COUNT, SUFFIXES, SUFFIXES_COUNT,
};

/// Known prefixes and suffixes, each sorted by descending length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixTable {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl AffixTable {
    /// Build a table from arbitrary affix lists
    ///
    /// Entries are trimmed and lowercased; blanks and duplicates are dropped.
    /// The sort is stable, so equal-length affixes keep their input order.
    pub fn new<P, S>(prefixes: P, suffixes: S) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            prefixes: normalize_list(prefixes),
            suffixes: normalize_list(suffixes),
        }
    }

    /// Table built from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(PREFIXES.iter(), SUFFIXES.iter())
    }

    /// Prefixes, longest first
    #[inline]
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Suffixes, longest first
    #[inline]
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.suffixes.is_empty()
    }
}

impl Default for AffixTable {
    fn default() -> Self {
        Self::embedded()
    }
}

fn normalize_list<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let affix = item.as_ref().trim().to_lowercase();
        if !affix.is_empty() && !out.contains(&affix) {
            out.push(affix);
        }
    }
    out.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(PREFIXES.len(), PREFIXES_COUNT);
        assert_eq!(SUFFIXES.len(), SUFFIXES_COUNT);
        assert_eq!(PREFIX_DECOYS.len(), PREFIX_DECOYS_COUNT);
        assert_eq!(SUFFIX_DECOYS.len(), SUFFIX_DECOYS_COUNT);
    }

    #[test]
    fn embedded_lists_are_lowercase() {
        for &affix in PREFIXES.iter().chain(SUFFIXES).chain(PREFIX_DECOYS).chain(SUFFIX_DECOYS) {
            assert!(
                affix.chars().all(|c| c.is_ascii_lowercase()),
                "Affix '{affix}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn decoy_vocabularies_in_order() {
        assert_eq!(PREFIX_DECOYS, &["re", "pre", "mis", "non"]);
        assert_eq!(SUFFIX_DECOYS, &["ness", "ment", "less", "ful", "ize", "ity"]);
    }

    #[test]
    fn table_sorted_longest_first() {
        let table = AffixTable::embedded();
        let lens: Vec<usize> = table.suffixes().iter().map(String::len).collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(table.prefixes()[0].len(), 5); // trans / inter / under
    }

    #[test]
    fn table_normalizes_entries() {
        let table = AffixTable::new([" UN", "un", "", "re"], ["ness"]);
        assert_eq!(table.prefixes(), &["un".to_string(), "re".to_string()]);
        assert!(!table.is_empty());
    }
}
