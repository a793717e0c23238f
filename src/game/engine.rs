//! Practice game state machine
//!
//! READY → IN_TRIAL → FEEDBACK → IN_TRIAL … → DONE. `restart` returns to
//! READY from anywhere and clears the score and event log.

use super::scoring::{ScoreEvent, SessionSummary, TrialScore, gold_by_role};
use super::trial::{Tile, Trial};
use super::{GameError, PracticeEntry};
use crate::core::{Fragment, Role, RoleMap};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Ready,
    InTrial,
    Feedback,
    Done,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ready => "READY",
            Self::InTrial => "IN_TRIAL",
            Self::Feedback => "FEEDBACK",
            Self::Done => "DONE",
        })
    }
}

/// Everything needed to resume a game later
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub queue: Vec<PracticeEntry>,
    #[serde(rename = "idx")]
    pub index: usize,
    pub trial: Option<Trial>,
    pub score: usize,
    pub events: Vec<ScoreEvent>,
    #[serde(rename = "gameState")]
    pub state: GameState,
}

/// A practice session over a fixed queue of words
#[derive(Debug, Clone)]
pub struct Game {
    queue: Vec<PracticeEntry>,
    index: usize,
    state: GameState,
    trial: Option<Trial>,
    score: usize,
    events: Vec<ScoreEvent>,
    last_result: Option<TrialScore>,
}

impl Game {
    #[must_use]
    pub const fn new(queue: Vec<PracticeEntry>) -> Self {
        Self {
            queue,
            index: 0,
            state: GameState::Ready,
            trial: None,
            score: 0,
            events: Vec::new(),
            last_result: None,
        }
    }

    /// Resume from a snapshot whose index still points into its queue
    ///
    /// Snapshots without an active trial, or of a finished session, are not
    /// resumable.
    #[must_use]
    pub fn resume(snapshot: SessionSnapshot) -> Option<Self> {
        if snapshot.index >= snapshot.queue.len() || snapshot.state == GameState::Done {
            return None;
        }
        let trial = snapshot.trial?;
        let last_result = match snapshot.state {
            GameState::Feedback => snapshot.events.last().map(|e| TrialScore {
                correct: e.correct,
                per_slot: e.per_slot.clone(),
                latency_ms: e.latency_ms,
            }),
            _ => None,
        };

        Some(Self {
            queue: snapshot.queue,
            index: snapshot.index,
            state: snapshot.state,
            trial: Some(trial),
            score: snapshot.score,
            events: snapshot.events,
            last_result,
        })
    }

    /// Snapshot for persistence, or `None` when no trial is active
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.trial.as_ref().map(|trial| SessionSnapshot {
            queue: self.queue.clone(),
            index: self.index,
            trial: Some(trial.clone()),
            score: self.score,
            events: self.events.clone(),
            state: self.state,
        })
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn queue(&self) -> &[PracticeEntry] {
        &self.queue
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn events(&self) -> &[ScoreEvent] {
        &self.events
    }

    #[must_use]
    pub const fn trial(&self) -> Option<&Trial> {
        self.trial.as_ref()
    }

    /// Word currently being practiced
    #[must_use]
    pub fn entry(&self) -> Option<&PracticeEntry> {
        match self.state {
            GameState::Ready => None,
            _ => self.queue.get(self.index),
        }
    }

    /// Score of the last checked trial while in FEEDBACK or DONE
    #[must_use]
    pub const fn last_result(&self) -> Option<&TrialScore> {
        self.last_result.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_events(&self.events)
    }

    fn expect_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::WrongState {
                expected,
                actual: self.state,
            })
        }
    }

    fn active_trial(&mut self) -> Result<&mut Trial, GameError> {
        self.expect_state(GameState::InTrial)?;
        self.trial.as_mut().ok_or(GameError::NoActiveTrial)
    }

    /// READY → IN_TRIAL with the first queued word
    ///
    /// # Errors
    ///
    /// `WrongState` unless READY; `EmptyQueue` if there is nothing to play.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_state(GameState::Ready)?;
        let first = self.queue.first().ok_or(GameError::EmptyQueue)?;

        self.trial = Some(Trial::new(first, rng));
        self.index = 0;
        self.score = 0;
        self.events.clear();
        self.last_result = None;
        self.state = GameState::InTrial;
        Ok(())
    }

    /// Place a tile into a slot of the active trial
    ///
    /// # Errors
    ///
    /// `WrongState` outside IN_TRIAL; `UnknownTile` for a bad id.
    pub fn place(&mut self, role: Role, tile_id: &str) -> Result<(), GameError> {
        self.active_trial()?.place(role, tile_id)
    }

    /// Clear a slot of the active trial
    ///
    /// # Errors
    ///
    /// `WrongState` outside IN_TRIAL.
    pub fn remove(&mut self, role: Role) -> Result<Option<Tile>, GameError> {
        Ok(self.active_trial()?.remove(role))
    }

    /// Mark the active trial as hinted and reveal one gold fragment
    ///
    /// # Errors
    ///
    /// `WrongState` outside IN_TRIAL.
    pub fn hint(&mut self) -> Result<Option<Fragment>, GameError> {
        Ok(self.active_trial()?.hint().cloned())
    }

    /// Whether `check` would be accepted now
    #[must_use]
    pub fn can_check(&self) -> bool {
        self.state == GameState::InTrial && self.trial.as_ref().is_some_and(Trial::is_complete)
    }

    /// IN_TRIAL → FEEDBACK, scoring against the current clock
    ///
    /// # Errors
    ///
    /// See [`Game::check_at`].
    pub fn check(&mut self) -> Result<&ScoreEvent, GameError> {
        self.check_at(Utc::now())
    }

    /// IN_TRIAL → FEEDBACK, appending a score event
    ///
    /// # Errors
    ///
    /// `WrongState` outside IN_TRIAL; `IncompleteTrial` while a slot the
    /// gold word needs is still empty.
    pub fn check_at(&mut self, now: DateTime<Utc>) -> Result<&ScoreEvent, GameError> {
        self.expect_state(GameState::InTrial)?;
        let trial = self.trial.as_ref().ok_or(GameError::NoActiveTrial)?;
        if !trial.is_complete() {
            return Err(GameError::IncompleteTrial);
        }

        let result = trial.score_at(now);
        let event = ScoreEvent {
            trial: self.index + 1,
            word: trial.word().to_string(),
            placed: RoleMap::from_fn(|role| trial.placed(role).map(|t| t.text().to_string())),
            gold: gold_by_role(trial.correct()),
            correct: result.correct,
            per_slot: result.per_slot.clone(),
            latency_ms: result.latency_ms,
            hint_used: trial.hint_used(),
        };

        if result.correct {
            self.score += 1;
        }
        log::debug!(
            "trial {} '{}' correct={} latency={}ms",
            event.trial,
            event.word,
            event.correct,
            event.latency_ms
        );
        self.last_result = Some(result);
        self.events.push(event);
        self.state = GameState::Feedback;
        self.events.last().ok_or(GameError::NoActiveTrial)
    }

    /// FEEDBACK → IN_TRIAL with the next word, or DONE when the queue is spent
    ///
    /// # Errors
    ///
    /// `WrongState` unless FEEDBACK.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> Result<GameState, GameError> {
        self.expect_state(GameState::Feedback)?;

        let next_index = self.index + 1;
        match self.queue.get(next_index) {
            Some(entry) => {
                self.trial = Some(Trial::new(entry, rng));
                self.index = next_index;
                self.last_result = None;
                self.state = GameState::InTrial;
            }
            None => self.state = GameState::Done,
        }
        Ok(self.state)
    }

    /// Back to READY with score, log and trial cleared
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.events.clear();
        self.trial = None;
        self.last_result = None;
        self.state = GameState::Ready;
    }
}
