//! Practice trials: tile sets, decoys and slot placement

use super::scoring::{TrialScore, score_placement};
use super::{GameError, PracticeEntry};
use crate::affixes::{PREFIX_DECOYS, SUFFIX_DECOYS};
use crate::core::{Fragment, Role, RoleMap};
use chrono::{DateTime, Utc};
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A draggable tile: one fragment with a trial-unique id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub fragment: Fragment,
}

impl Tile {
    #[must_use]
    pub fn text(&self) -> &str {
        self.fragment.text()
    }

    #[must_use]
    pub fn is_decoy(&self) -> bool {
        self.id.starts_with("decoy-")
    }
}

/// Uniform in-place shuffle (Fisher–Yates)
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Decoys for a trial: one prefix and up to two suffixes
///
/// Vocabulary entries whose text equals any gold fragment (ignoring case)
/// are skipped; the earliest remaining entries are used.
#[must_use]
pub fn build_decoys(gold: &[Fragment]) -> Vec<Fragment> {
    let used: FxHashSet<String> = gold.iter().map(Fragment::key).collect();
    let pick = |vocab: &[&str], n: usize, role: Role| -> Vec<Fragment> {
        vocab
            .iter()
            .filter(|d| !used.contains(&d.to_lowercase()))
            .take(n)
            .map(|d| Fragment::new(*d, role))
            .collect()
    };

    let mut decoys = pick(PREFIX_DECOYS, 1, Role::Prefix);
    decoys.extend(pick(SUFFIX_DECOYS, 2, Role::Suffix));
    decoys
}

/// One round of the practice game for a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    word: String,
    correct: Vec<Fragment>,
    tiles: Vec<Tile>,
    placed: RoleMap<Option<Tile>>,
    hint_used: bool,
    started_at: DateTime<Utc>,
}

impl Trial {
    /// Build a trial for `entry`, starting the clock now
    pub fn new<R: Rng>(entry: &PracticeEntry, rng: &mut R) -> Self {
        Self::started_at(entry, rng, Utc::now())
    }

    /// Build a trial with an explicit start time
    pub fn started_at<R: Rng>(
        entry: &PracticeEntry,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        let gold_tiles = entry.morphemes.iter().enumerate().map(|(i, f)| Tile {
            id: format!("gold-{i}-{}", f.text()),
            fragment: f.clone(),
        });
        let decoy_tiles = build_decoys(&entry.morphemes)
            .into_iter()
            .enumerate()
            .map(|(i, f)| Tile {
                id: format!("decoy-{i}-{}", f.text()),
                fragment: f,
            });

        let mut tiles: Vec<Tile> = gold_tiles.chain(decoy_tiles).collect();
        shuffle(&mut tiles, rng);

        Self {
            word: entry.word.clone(),
            correct: entry.morphemes.clone(),
            tiles,
            placed: RoleMap::default(),
            hint_used: false,
            started_at,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Gold fragments in word order
    #[must_use]
    pub fn correct(&self) -> &[Fragment] {
        &self.correct
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, id: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn placed(&self, role: Role) -> Option<&Tile> {
        self.placed.get(role).as_ref()
    }

    /// Slot currently holding the tile with `id`
    #[must_use]
    pub fn slot_of(&self, id: &str) -> Option<Role> {
        self.placed
            .iter()
            .find(|(_, tile)| tile.as_ref().is_some_and(|t| t.id == id))
            .map(|(role, _)| role)
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[must_use]
    pub const fn started(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Roles the gold word actually has
    #[must_use]
    pub fn required(&self) -> RoleMap<bool> {
        RoleMap::from_fn(|role| self.correct.iter().any(|f| f.role() == role))
    }

    /// Every required slot holds a tile
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let required = self.required();
        Role::ALL
            .into_iter()
            .all(|role| !*required.get(role) || self.placed.get(role).is_some())
    }

    /// Put the tile `id` into `role`'s slot
    ///
    /// A tile already sitting in another slot moves. Whatever occupied the
    /// target slot goes back to the bank.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownTile` if no tile has that id.
    pub fn place(&mut self, role: Role, id: &str) -> Result<(), GameError> {
        let tile = self
            .tile(id)
            .cloned()
            .ok_or_else(|| GameError::UnknownTile(id.to_string()))?;

        if let Some(previous) = self.slot_of(id) {
            *self.placed.get_mut(previous) = None;
        }
        *self.placed.get_mut(role) = Some(tile);
        Ok(())
    }

    /// Empty `role`'s slot, returning the tile that was there
    pub fn remove(&mut self, role: Role) -> Option<Tile> {
        self.placed.get_mut(role).take()
    }

    /// Tiles not currently placed in any slot
    pub fn bank(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| self.slot_of(&t.id).is_none())
    }

    /// Reveal the gold fragment for the first required slot that is not yet right
    ///
    /// Marks the trial as hinted even when everything is already correct.
    pub fn hint(&mut self) -> Option<&Fragment> {
        self.hint_used = true;
        let placed = self.placed_texts();
        let (_, per_slot) = score_placement(&self.correct, &placed);
        let role = Role::ALL.into_iter().find(|role| !*per_slot.get(*role))?;
        self.correct.iter().find(|f| f.role() == role)
    }

    fn placed_texts(&self) -> RoleMap<Option<&str>> {
        RoleMap::from_fn(|role| self.placed(role).map(Tile::text))
    }

    /// Score against the current clock
    #[must_use]
    pub fn score(&self) -> TrialScore {
        self.score_at(Utc::now())
    }

    /// Score with latency measured up to `now`
    #[must_use]
    pub fn score_at(&self, now: DateTime<Utc>) -> TrialScore {
        let (correct, per_slot) = score_placement(&self.correct, &self.placed_texts());
        let latency_ms = (now - self.started_at).num_milliseconds().max(0) as u64;
        TrialScore {
            correct,
            per_slot,
            latency_ms,
        }
    }
}
