//! Command implementations

pub mod analyze;
pub mod export;
pub mod practice;
pub mod read;
pub mod segment;
pub mod simple;
pub mod tray;

pub use analyze::{AnalyzeResult, analyze_word};
pub use export::export_session;
pub use practice::{LoadedGame, load_game, persist_session, prepare_practice};
pub use read::{ReadResult, WordLookup, read_passage};
pub use segment::{SegmentResult, segment_word};
pub use simple::{Action, parse_action, run_simple};
pub use tray::{
    SelectMode, TrayRow, TrayView, add_words, remove_words, select_words, tray_view,
};
