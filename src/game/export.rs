//! CSV export of a session's score events

use super::ScoreEvent;
use std::fs;
use std::io;
use std::path::Path;

pub const CSV_HEADER: &str = "trial,word,prefix,root,suffix,correct,latencyMs,hintUsed";

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render events as CSV, one row per trial
///
/// Every field is double-quoted; booleans are written as `1`/`0` and the
/// slot columns hold what the player placed. Rows are joined with `\n`.
///
/// # Examples
/// ```
/// use morpheme_lab::game::to_csv;
///
/// assert_eq!(to_csv(&[]), "trial,word,prefix,root,suffix,correct,latencyMs,hintUsed");
/// ```
#[must_use]
pub fn to_csv(events: &[ScoreEvent]) -> String {
    let flag = |b: bool| if b { "1" } else { "0" };

    let rows = events.iter().map(|e| {
        [
            e.trial.to_string(),
            e.word.clone(),
            e.placed.prefix.clone().unwrap_or_default(),
            e.placed.root.clone().unwrap_or_default(),
            e.placed.suffix.clone().unwrap_or_default(),
            flag(e.correct).to_string(),
            e.latency_ms.to_string(),
            flag(e.hint_used).to_string(),
        ]
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(",")
    });

    std::iter::once(CSV_HEADER.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the CSV export to `path`
///
/// # Errors
///
/// Returns an `io::Error` if the file cannot be written.
pub fn write_csv<P: AsRef<Path>>(path: P, events: &[ScoreEvent]) -> io::Result<()> {
    fs::write(path, to_csv(events))
}
