//! Turning selected words into a practice queue
//!
//! Each word is analyzed by the remote service; thin or failed results fall
//! back to the heuristic segmenter and finally to the whole word as a root.
//! Words are prepared in parallel and one word's failure never affects the
//! others.

use super::seeds::{seed_entry, seed_words};
use crate::core::{Fragment, Role, hyphenated};
use crate::game::{PracticeEntry, shuffle};
use crate::segment::{HeuristicSegmenter, compact_by_role};
use crate::service::{AnalysisService, ServiceError};
use rand::Rng;
use rayon::prelude::*;

/// Where an entry's gold segmentation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Service,
    Heuristic,
    WholeWord,
}

/// A prepared entry and the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    pub entry: PracticeEntry,
    pub source: Source,
}

fn whole_word(word: &str) -> Vec<Fragment> {
    vec![Fragment::new(word, Role::Root)]
}

/// Prepare one word
///
/// A service answer with fewer than two fragments is replaced by a heuristic
/// split of two or more; an empty result becomes the whole word as a root.
/// The result is compacted to at most one fragment per role. When the
/// service fails outright, a heuristic split of two or more is used, else
/// the whole word as a root.
pub fn prepare_entry<S>(word: &str, service: &S, segmenter: &HeuristicSegmenter) -> Prepared
where
    S: AnalysisService + ?Sized,
{
    let word = word.trim();

    let (morphemes, source) = match service.morphemes(word) {
        Ok(fragments) => {
            let (fragments, source) = if fragments.len() >= 2 {
                (fragments, Source::Service)
            } else if let Some(split) = segmenter.useful_split(word) {
                (split, Source::Heuristic)
            } else if fragments.is_empty() {
                (whole_word(word), Source::WholeWord)
            } else {
                (fragments, Source::Service)
            };
            let compact = compact_by_role(&fragments);
            if compact.is_empty() {
                (fragments, source)
            } else {
                (compact, source)
            }
        }
        Err(e) => {
            if e == ServiceError::Unavailable {
                log::debug!("offline, using heuristic for '{word}'");
            } else {
                log::warn!("falling back to heuristic for '{word}': {e}");
            }
            segmenter.useful_split(word).map_or_else(
                || (whole_word(word), Source::WholeWord),
                |split| (split, Source::Heuristic),
            )
        }
    };
    log::debug!("prepared '{word}' as {} ({source:?})", hyphenated(&morphemes));

    Prepared {
        entry: PracticeEntry::new(word, morphemes),
        source,
    }
}

/// Prepare many words concurrently, keeping input order
///
/// `on_prepared` runs once per finished word, from whichever worker thread
/// finished it.
pub fn prepare_entries<S, F>(
    words: &[String],
    service: &S,
    segmenter: &HeuristicSegmenter,
    on_prepared: F,
) -> Vec<Prepared>
where
    S: AnalysisService + ?Sized,
    F: Fn(&Prepared) + Sync,
{
    words
        .par_iter()
        .map(|word| {
            let prepared = prepare_entry(word, service, segmenter);
            on_prepared(&prepared);
            prepared
        })
        .collect()
}

/// Build the shuffled queue for a game
///
/// With no selected words the seed words are used. A seed word the service
/// could not analyze keeps its built-in gold segmentation, and seeds always
/// carry their word families.
pub fn prepare_queue<S, F, R>(
    selected: &[String],
    service: &S,
    segmenter: &HeuristicSegmenter,
    rng: &mut R,
    on_prepared: F,
) -> Vec<PracticeEntry>
where
    S: AnalysisService + ?Sized,
    F: Fn(&Prepared) + Sync,
    R: Rng,
{
    let use_seeds = selected.is_empty();
    let words = if use_seeds {
        seed_words()
    } else {
        selected.to_vec()
    };

    let mut queue: Vec<PracticeEntry> = prepare_entries(&words, service, segmenter, on_prepared)
        .into_iter()
        .map(|prepared| {
            let Some(seed) = use_seeds.then(|| seed_entry(&prepared.entry.word)).flatten() else {
                return prepared.entry;
            };
            if prepared.source == Source::Service {
                PracticeEntry {
                    families: seed.families,
                    ..prepared.entry
                }
            } else {
                seed
            }
        })
        .collect();

    shuffle(&mut queue, rng);
    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{AnalysisType, OfflineService, ServiceError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers from a fixed table; unknown words fail with a 500
    struct Table(Vec<(&'static str, Value)>);

    impl AnalysisService for Table {
        fn analyze(&self, word: &str, _t: AnalysisType) -> Result<Value, ServiceError> {
            self.0
                .iter()
                .find(|(w, _)| *w == word)
                .map(|(_, v)| v.clone())
                .ok_or(ServiceError::Status(500))
        }
    }

    fn texts(entry: &PracticeEntry) -> Vec<&str> {
        entry.morphemes.iter().map(Fragment::text).collect()
    }

    #[test]
    fn service_result_is_used_and_compacted() {
        let service = Table(vec![(
            "unhelpfully",
            json!({"morphemes": [
                {"morpheme": "un", "type": "prefix", "meaning": "not"},
                {"morpheme": "help", "type": "root"},
                {"morpheme": "ful", "type": "suffix"},
                {"morpheme": "ly", "type": "suffix"},
            ]}),
        )]);
        let prepared = prepare_entry("unhelpfully", &service, &HeuristicSegmenter::default());
        assert_eq!(prepared.source, Source::Service);
        assert_eq!(texts(&prepared.entry), vec!["un", "help", "ful"]);
        assert_eq!(prepared.entry.morphemes[0].meaning(), Some("not"));
    }

    #[test]
    fn thin_service_result_uses_heuristic() {
        let service = Table(vec![(
            "unhappy",
            json!({"morphemes": [{"morpheme": "unhappy", "type": "root"}]}),
        )]);
        let prepared = prepare_entry("unhappy", &service, &HeuristicSegmenter::default());
        assert_eq!(prepared.source, Source::Heuristic);
        assert_eq!(texts(&prepared.entry), vec!["un", "happy"]);
    }

    #[test]
    fn thin_result_without_useful_split_is_kept() {
        let service = Table(vec![("tree", json!([{"morpheme": "tree", "type": "root"}]))]);
        let prepared = prepare_entry("tree", &service, &HeuristicSegmenter::default());
        assert_eq!(prepared.source, Source::Service);
        assert_eq!(texts(&prepared.entry), vec!["tree"]);
    }

    #[test]
    fn empty_result_becomes_whole_word() {
        let service = Table(vec![("tree", json!({"morphemes": []}))]);
        let prepared = prepare_entry("tree", &service, &HeuristicSegmenter::default());
        assert_eq!(prepared.source, Source::WholeWord);
        assert_eq!(prepared.entry.morphemes, vec![Fragment::new("tree", Role::Root)]);
    }

    #[test]
    fn failure_falls_back_per_word() {
        let service = Table(vec![(
            "rebuild",
            json!({"prefix": {"part": "re", "meaning": "again"}, "root": {"part": "build"}}),
        )]);
        let words = vec!["rebuild".to_string(), "unhappy".to_string()];
        let prepared = prepare_entries(&words, &service, &HeuristicSegmenter::default(), |_| {});

        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared[0].entry.word, "rebuild");
        assert_eq!(prepared[0].source, Source::Service);
        assert_eq!(prepared[1].entry.word, "unhappy");
        assert_eq!(prepared[1].source, Source::Heuristic);
    }

    #[test]
    fn failure_with_bare_prefix_word_gives_whole_word_root() {
        let prepared = prepare_entry("under", &OfflineService, &HeuristicSegmenter::default());
        assert_eq!(prepared.source, Source::WholeWord);
        assert_eq!(prepared.entry.morphemes, vec![Fragment::new("under", Role::Root)]);
    }

    #[test]
    fn failure_uses_heuristic_split_of_two_or_more() {
        let prepared = prepare_entry("unhappy", &OfflineService, &HeuristicSegmenter::default());
        assert_eq!(prepared.source, Source::Heuristic);
        assert_eq!(texts(&prepared.entry), vec!["un", "happy"]);
    }

    #[test]
    fn callback_runs_once_per_word() {
        let words: Vec<String> = (0..20).map(|i| format!("word{i}")).collect();
        let count = AtomicUsize::new(0);
        let prepared = prepare_entries(&words, &OfflineService, &HeuristicSegmenter::default(), |_| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(count.load(Ordering::Relaxed), 20);
        assert!(prepared.iter().zip(&words).all(|(p, w)| p.entry.word == *w));
    }

    #[test]
    fn empty_selection_uses_seeds() {
        let mut rng = StdRng::seed_from_u64(9);
        let queue = prepare_queue(&[], &OfflineService, &HeuristicSegmenter::default(), &mut rng, |_| {});

        assert_eq!(queue.len(), 3);
        let unbelievable = queue.iter().find(|e| e.word == "unbelievable").unwrap();
        assert_eq!(texts(unbelievable), vec!["un", "believe", "able"]);
        assert_eq!(unbelievable.families.len(), 4);
    }

    #[test]
    fn selected_words_are_all_queued() {
        let mut rng = StdRng::seed_from_u64(9);
        let selected = vec!["unhappy".to_string(), "rest".to_string(), "rebuild".to_string()];
        let queue = prepare_queue(
            &selected,
            &OfflineService,
            &HeuristicSegmenter::default(),
            &mut rng,
            |_| {},
        );

        let mut words: Vec<&str> = queue.iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["rebuild", "rest", "unhappy"]);
        assert!(queue.iter().all(|e| e.families.is_empty()));
    }
}
