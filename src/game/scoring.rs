//! Trial scoring, score events and session summaries

use crate::core::{Fragment, Role, RoleMap};
use serde::{Deserialize, Serialize};

/// Result of checking one trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialScore {
    pub correct: bool,
    pub per_slot: RoleMap<bool>,
    pub latency_ms: u64,
}

/// First gold text for each role, if the word has one
#[must_use]
pub fn gold_by_role(gold: &[Fragment]) -> RoleMap<Option<String>> {
    RoleMap::from_fn(|role| {
        gold.iter()
            .find(|f| f.role() == role)
            .map(|f| f.text().to_string())
    })
}

fn comparable(text: Option<&str>) -> Option<String> {
    text.map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
}

/// Compare placements against gold, slot by slot
///
/// A role the gold word does not have is always satisfied, whatever is
/// placed there. Returns overall correctness (every required role correct)
/// and the per-slot map. Comparison ignores case and surrounding whitespace.
///
/// # Examples
/// ```
/// use morpheme_lab::core::{Fragment, Role, RoleMap};
/// use morpheme_lab::game::score_placement;
///
/// let gold = [Fragment::new("re", Role::Prefix), Fragment::new("build", Role::Root)];
/// let placed = RoleMap::new(Some("RE"), Some(" build "), None);
/// let (correct, per_slot) = score_placement(&gold, &placed);
/// assert!(correct);
/// assert!(per_slot.suffix);
/// ```
#[must_use]
pub fn score_placement(gold: &[Fragment], placed: &RoleMap<Option<&str>>) -> (bool, RoleMap<bool>) {
    let gold = gold_by_role(gold);
    let per_slot = RoleMap::from_fn(|role| match comparable(gold.get(role).as_deref()) {
        Some(expected) => comparable(*placed.get(role)).is_some_and(|got| got == expected),
        None => true,
    });
    let correct = Role::ALL.into_iter().all(|role| *per_slot.get(role));
    (correct, per_slot)
}

/// One checked trial, as appended to the session log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEvent {
    /// 1-based position in the session
    pub trial: usize,
    pub word: String,
    pub placed: RoleMap<Option<String>>,
    pub gold: RoleMap<Option<String>>,
    pub correct: bool,
    pub per_slot: RoleMap<bool>,
    pub latency_ms: u64,
    pub hint_used: bool,
}

/// Aggregate statistics over a session's events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub items: usize,
    pub correct: usize,
    /// Rounded percentage, 0 when there are no items
    pub accuracy_pct: u32,
    /// Rounded mean latency, 0 when there are no items
    pub avg_latency_ms: u64,
}

impl SessionSummary {
    #[must_use]
    pub fn from_events(events: &[ScoreEvent]) -> Self {
        let items = events.len();
        if items == 0 {
            return Self::default();
        }

        let correct = events.iter().filter(|e| e.correct).count();
        let total_latency: u64 = events.iter().map(|e| e.latency_ms).sum();

        Self {
            items,
            correct,
            accuracy_pct: ((correct as f64 / items as f64) * 100.0).round() as u32,
            avg_latency_ms: (total_latency as f64 / items as f64).round() as u64,
        }
    }
}
