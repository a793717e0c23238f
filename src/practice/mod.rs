//! Practice setup: tray selection, seed words and queue preparation

pub mod prepare;
pub mod seeds;
pub mod setup;

pub use prepare::{Prepared, Source, prepare_entries, prepare_entry, prepare_queue};
pub use seeds::{seed_entries, seed_entry, seed_words};
pub use setup::{PracticeSetup, SortOrder};
