//! Morpheme-sorting practice game
//!
//! Each trial shows a word's gold fragments plus decoys as shuffled tiles;
//! the player sorts them into prefix, root and suffix slots.

pub mod engine;
pub mod export;
pub mod scoring;
pub mod trial;

pub use engine::{Game, GameState, SessionSnapshot};
pub use export::{CSV_HEADER, to_csv, write_csv};
pub use scoring::{ScoreEvent, SessionSummary, TrialScore, gold_by_role, score_placement};
pub use trial::{Tile, Trial, build_decoys, shuffle};

use crate::core::Fragment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A word queued for practice with its gold segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeEntry {
    pub word: String,
    pub morphemes: Vec<Fragment>,
    /// Related words shown on the feedback screen
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub families: Vec<String>,
}

impl PracticeEntry {
    pub fn new(word: impl Into<String>, morphemes: Vec<Fragment>) -> Self {
        Self {
            word: word.into(),
            morphemes,
            families: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.families = families.into_iter().map(Into::into).collect();
        self
    }
}

/// Rejected game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    WrongState { expected: GameState, actual: GameState },
    EmptyQueue,
    IncompleteTrial,
    NoActiveTrial,
    UnknownTile(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongState { expected, actual } => {
                write!(f, "Game is {actual}, expected {expected}")
            }
            Self::EmptyQueue => write!(f, "No words to practice"),
            Self::IncompleteTrial => write!(f, "Fill every slot before checking"),
            Self::NoActiveTrial => write!(f, "No trial in progress"),
            Self::UnknownTile(id) => write!(f, "No tile with id '{id}'"),
        }
    }
}

impl std::error::Error for GameError {}
