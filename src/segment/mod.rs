//! Word segmentation
//!
//! Two segmenters feed one merge policy:
//! - `HeuristicSegmenter`: instant split from known affix tables
//! - `align`: places remote morpheme fragments onto the word
//!
//! All matching is case-insensitive and works on char boundaries, so spans
//! returned here are always valid byte ranges of the original word.

mod alignment;
mod heuristic;
mod merge;

pub use alignment::align;
pub use heuristic::{HeuristicSegmenter, HeuristicSplit};
pub use merge::{merge, prefers};

use crate::core::{Fragment, Role};

/// Keep at most one fragment per role, in prefix/root/suffix order
///
/// The first fragment of each role wins.
#[must_use]
pub fn compact_by_role(fragments: &[Fragment]) -> Vec<Fragment> {
    Role::ALL
        .into_iter()
        .filter_map(|role| fragments.iter().find(|f| f.role() == role).cloned())
        .collect()
}

#[inline]
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length consumed from `hay` if it starts with `needle`, ignoring case
fn match_chars(
    mut hay: impl Iterator<Item = char>,
    needle: impl Iterator<Item = char>,
) -> Option<usize> {
    let mut consumed = 0;
    for n in needle {
        let h = hay.next()?;
        if !chars_eq_ignore_case(h, n) {
            return None;
        }
        consumed += h.len_utf8();
    }
    Some(consumed)
}

/// Length in bytes of `word`'s prefix matching `affix`, ignoring case
pub(crate) fn starts_with_ignore_case(word: &str, affix: &str) -> Option<usize> {
    match_chars(word.chars(), affix.chars())
}

/// Length in bytes of `word`'s suffix matching `affix`, ignoring case
pub(crate) fn ends_with_ignore_case(word: &str, affix: &str) -> Option<usize> {
    match_chars(word.chars().rev(), affix.chars().rev())
}

/// First case-insensitive occurrence of `needle` in `hay` at or after byte `from`
///
/// `from` must lie on a char boundary. Returns the matched byte span.
pub(crate) fn find_ignore_case(hay: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let tail = hay.get(from..)?;
    tail.char_indices().find_map(|(offset, _)| {
        let start = from + offset;
        match_chars(hay[start..].chars(), needle.chars()).map(|len| (start, start + len))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_respects_cursor() {
        assert_eq!(find_ignore_case("rere", "re", 0), Some((0, 2)));
        assert_eq!(find_ignore_case("rere", "re", 1), Some((2, 4)));
        assert_eq!(find_ignore_case("rere", "re", 3), None);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find_ignore_case("UnHappy", "happy", 0), Some((2, 7)));
    }

    #[test]
    fn find_handles_multibyte() {
        assert_eq!(find_ignore_case("café au lait", "au", 0), Some((6, 8)));
        assert_eq!(find_ignore_case("ÉCLAIR", "é", 0), Some((0, 2)));
    }

    #[test]
    fn find_past_end_is_none() {
        assert_eq!(find_ignore_case("abc", "a", 10), None);
    }

    #[test]
    fn affix_matching() {
        assert_eq!(starts_with_ignore_case("Unable", "un"), Some(2));
        assert_eq!(starts_with_ignore_case("u", "un"), None);
        assert_eq!(ends_with_ignore_case("HOPEFUL", "ful"), Some(3));
        assert_eq!(ends_with_ignore_case("hope", "ful"), None);
    }

    #[test]
    fn compact_keeps_first_of_each_role() {
        let frags = vec![
            Fragment::new("ful", Role::Suffix),
            Fragment::new("dis", Role::Prefix),
            Fragment::new("respect", Role::Root),
            Fragment::new("ly", Role::Suffix),
        ];
        let compact = compact_by_role(&frags);
        let texts: Vec<&str> = compact.iter().map(Fragment::text).collect();
        assert_eq!(texts, ["dis", "respect", "ful"]);
    }
}
