//! Export the saved session's score log as CSV

use crate::game::write_csv;
use crate::store::Store;
use std::path::Path;

/// Write the saved session's events to `path`, returning the row count
///
/// # Errors
///
/// Returns an error if there is no saved session with checked trials, or
/// the file cannot be written.
pub fn export_session(store: &Store, path: &Path) -> Result<usize, String> {
    let snapshot = store
        .session()
        .ok_or_else(|| "No saved session to export".to_string())?;
    if snapshot.events.is_empty() {
        return Err("Saved session has no checked trials yet".to_string());
    }

    write_csv(path, &snapshot.events)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    Ok(snapshot.events.len())
}
