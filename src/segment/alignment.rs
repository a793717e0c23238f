//! Fragment alignment against the original word
//!
//! Remote analysis returns morphemes as free text. Alignment walks them
//! left to right over the word, keeping only what can be located and filling
//! every uncovered stretch with an inferred root, so the output always
//! concatenates back to the exact input word.

use super::find_ignore_case;
use crate::core::{Fragment, Role};

/// Align `fragments` against `word`
///
/// Each fragment is searched case-insensitively from the current cursor.
/// Fragments that cannot be found (or are blank) are skipped. Matched spans
/// take their text from `word`, keeping its casing, and carry over the
/// fragment's role and meaning.
///
/// # Examples
/// ```
/// use morpheme_lab::core::{Fragment, Role};
/// use morpheme_lab::segment::align;
///
/// let remote = [Fragment::new("un", Role::Prefix), Fragment::new("ness", Role::Suffix)];
/// let aligned = align("unhappiness", &remote);
/// let texts: Vec<&str> = aligned.iter().map(|f| f.text()).collect();
/// assert_eq!(texts, ["un", "happi", "ness"]);
/// ```
#[must_use]
pub fn align(word: &str, fragments: &[Fragment]) -> Vec<Fragment> {
    let mut out: Vec<Fragment> = Vec::with_capacity(fragments.len() + 1);
    let mut cursor = 0;
    let mut matched_any = false;

    for fragment in fragments {
        let needle = fragment.text().trim();
        if needle.is_empty() {
            continue;
        }

        let Some((start, end)) = find_ignore_case(word, needle, cursor) else {
            log::trace!("fragment '{needle}' not found in '{word}' after {cursor}");
            continue;
        };

        if start > cursor {
            out.push(Fragment::new(&word[cursor..start], Role::Root));
        }
        out.push(match fragment.meaning() {
            Some(meaning) => Fragment::with_meaning(&word[start..end], fragment.role(), meaning),
            None => Fragment::new(&word[start..end], fragment.role()),
        });
        matched_any = true;
        cursor = end;
    }

    if !matched_any {
        return vec![Fragment::new(word, Role::Root)];
    }

    if cursor < word.len() {
        out.push(Fragment::new(&word[cursor..], Role::Root));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::joined_text;

    fn parts(fragments: &[Fragment]) -> Vec<(&str, Role)> {
        fragments.iter().map(|f| (f.text(), f.role())).collect()
    }

    #[test]
    fn empty_input_gives_whole_word_root() {
        assert_eq!(parts(&align("rest", &[])), vec![("rest", Role::Root)]);
    }

    #[test]
    fn gap_is_filled_with_inferred_root() {
        let input = [
            Fragment::new("un", Role::Prefix),
            Fragment::new("ness", Role::Suffix),
        ];
        assert_eq!(
            parts(&align("unhappiness", &input)),
            vec![
                ("un", Role::Prefix),
                ("happi", Role::Root),
                ("ness", Role::Suffix)
            ]
        );
    }

    #[test]
    fn unmatched_fragment_is_skipped() {
        // Service normalized "happy" but the word has "happi"
        let input = [
            Fragment::new("un", Role::Prefix),
            Fragment::new("happy", Role::Root),
            Fragment::new("ness", Role::Suffix),
        ];
        assert_eq!(
            parts(&align("unhappiness", &input)),
            vec![
                ("un", Role::Prefix),
                ("happi", Role::Root),
                ("ness", Role::Suffix)
            ]
        );
    }

    #[test]
    fn trailing_remainder_becomes_root() {
        let input = [Fragment::new("dis", Role::Prefix)];
        assert_eq!(
            parts(&align("distrust", &input)),
            vec![("dis", Role::Prefix), ("trust", Role::Root)]
        );
    }

    #[test]
    fn nothing_found_gives_whole_word() {
        let input = [Fragment::new("xyz", Role::Root)];
        assert_eq!(parts(&align("rest", &input)), vec![("rest", Role::Root)]);
    }

    #[test]
    fn matching_is_case_insensitive_and_keeps_word_casing() {
        let input = [
            Fragment::with_meaning("UN", Role::Prefix, "not"),
            Fragment::new("BELIEV", Role::Root),
        ];
        let aligned = align("Unbelievable", &input);
        assert_eq!(aligned[0].text(), "Un");
        assert_eq!(aligned[0].meaning(), Some("not"));
        assert_eq!(aligned[1].text(), "believ");
        assert_eq!(aligned[2].text(), "able");
    }

    #[test]
    fn fragments_before_cursor_are_not_reused() {
        // second "re" must be found after the first match
        let input = [
            Fragment::new("re", Role::Prefix),
            Fragment::new("re", Role::Root),
        ];
        assert_eq!(
            parts(&align("rere", &input)),
            vec![("re", Role::Prefix), ("re", Role::Root)]
        );
    }

    #[test]
    fn out_of_order_fragment_is_skipped() {
        let input = [
            Fragment::new("able", Role::Suffix),
            Fragment::new("un", Role::Prefix),
        ];
        assert_eq!(
            parts(&align("unable", &input)),
            vec![("un", Role::Root), ("able", Role::Suffix)]
        );
    }

    #[test]
    fn blank_fragments_are_ignored() {
        let input = [Fragment::new("  ", Role::Prefix), Fragment::new(" ed ", Role::Suffix)];
        assert_eq!(
            parts(&align("jumped", &input)),
            vec![("jump", Role::Root), ("ed", Role::Suffix)]
        );
    }

    #[test]
    fn output_always_concatenates_to_word() {
        let words = ["unbelievable", "rest", "", "Éclair", "a", "straße", "ABBA"];
        let inputs: Vec<Vec<Fragment>> = vec![
            vec![],
            vec![Fragment::new("un", Role::Prefix)],
            vec![Fragment::new("a", Role::Root), Fragment::new("b", Role::Suffix)],
            vec![Fragment::new("é", Role::Prefix), Fragment::new("air", Role::Suffix)],
            vec![Fragment::new("ss", Role::Root)],
            vec![
                Fragment::new("b", Role::Prefix),
                Fragment::new("b", Role::Root),
                Fragment::new("a", Role::Suffix),
            ],
            vec![Fragment::new("zzz", Role::Root), Fragment::new("e", Role::Suffix)],
        ];

        for word in words {
            for input in &inputs {
                let aligned = align(word, input);
                assert_eq!(joined_text(&aligned), word, "word {word:?} input {input:?}");
                assert!(!aligned.is_empty() || word.is_empty());
            }
        }
    }
}
