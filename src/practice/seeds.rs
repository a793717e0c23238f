//! Built-in practice words used when nothing is selected

use crate::core::{Fragment, Role};
use crate::game::PracticeEntry;

const SEEDS: &[(&str, [(&str, &str); 3], &[&str])] = &[
    (
        "unbelievable",
        [
            ("un", "not"),
            ("believe", "to consider true"),
            ("able", "capable of"),
        ],
        &["believe", "believer", "believable", "disbelief"],
    ),
    (
        "construction",
        [
            ("con", "together/with"),
            ("struct", "build"),
            ("ion", "act or result"),
        ],
        &["construct", "instruct", "structure", "reconstruction"],
    ),
    (
        "dysfunctional",
        [
            ("dys", "bad/abnormal"),
            ("function", "purpose/work"),
            ("al", "relating to"),
        ],
        &["function", "functional", "malfunction"],
    ),
];

/// Seed entries with gold prefix, root and suffix plus word families
#[must_use]
pub fn seed_entries() -> Vec<PracticeEntry> {
    SEEDS
        .iter()
        .map(|(word, parts, families)| {
            let morphemes = Role::ALL
                .into_iter()
                .zip(parts)
                .map(|(role, (text, meaning))| Fragment::with_meaning(*text, role, *meaning))
                .collect();
            PracticeEntry::new(*word, morphemes).with_families(families.iter().copied())
        })
        .collect()
}

/// Seed entry for `word`, ignoring case
#[must_use]
pub fn seed_entry(word: &str) -> Option<PracticeEntry> {
    seed_entries()
        .into_iter()
        .find(|e| e.word.eq_ignore_ascii_case(word.trim()))
}

#[must_use]
pub fn seed_words() -> Vec<String> {
    SEEDS.iter().map(|(word, ..)| (*word).to_string()).collect()
}
