//! Tray listing and practice selection

use crate::practice::{PracticeSetup, SortOrder};
use crate::store::Store;

/// One tray word as listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayRow {
    pub word: String,
    pub selected: bool,
}

/// Filtered, sorted view of the tray
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayView {
    pub rows: Vec<TrayRow>,
    pub total: usize,
    /// Selected words across the whole tray, not only visible ones
    pub chosen: Vec<String>,
    pub all_visible_selected: bool,
}

fn setup_for(store: &Store, filter: Option<&str>, sort: SortOrder) -> PracticeSetup {
    let mut setup = PracticeSetup::new(store.tray_words(), &store.selected_words());
    if let Some(filter) = filter {
        setup.set_filter(filter);
    }
    setup.set_sort(sort);
    setup
}

fn view(setup: &PracticeSetup) -> TrayView {
    TrayView {
        rows: setup
            .visible()
            .into_iter()
            .map(|w| TrayRow {
                word: w.to_string(),
                selected: setup.is_selected(w),
            })
            .collect(),
        total: setup.tray().len(),
        chosen: setup.chosen(),
        all_visible_selected: setup.all_visible_selected(),
    }
}

#[must_use]
pub fn tray_view(store: &Store, filter: Option<&str>, sort: SortOrder) -> TrayView {
    view(&setup_for(store, filter, sort))
}

/// How `select_words` changes the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Flip each named word
    Toggle,
    /// Select all visible words, or deselect them if all are selected
    ToggleVisible,
    /// Clear the whole selection
    Clear,
}

/// Update the saved practice selection and return the new view
///
/// Only words present in the tray can end up selected.
pub fn select_words(
    store: &mut Store,
    words: &[String],
    mode: SelectMode,
    filter: Option<&str>,
) -> TrayView {
    let mut setup = setup_for(store, filter, SortOrder::default());
    match mode {
        SelectMode::Toggle => {
            for word in words {
                setup.toggle(word);
            }
        }
        SelectMode::ToggleVisible => setup.toggle_all_visible(),
        SelectMode::Clear => {
            store.clear_selected();
            return tray_view(store, filter, SortOrder::default());
        }
    }

    store.set_selected_words(&setup.chosen());
    view(&setup)
}

/// Add words to the tray, returning those that were new
pub fn add_words(store: &mut Store, words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|w| store.add_tray_word(w))
        .cloned()
        .collect()
}

/// Remove words from the tray and the selection, returning how many left the tray
pub fn remove_words(store: &mut Store, words: &[String]) -> usize {
    let removed = words.iter().filter(|w| store.remove_tray_word(w)).count();
    if removed > 0 {
        // Selection only keeps words that are still in the tray
        let setup = setup_for(store, None, SortOrder::default());
        store.set_selected_words(&setup.chosen());
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_tray() -> Store {
        let mut store = Store::in_memory();
        for word in ["unhappy", "rebuild", "rest", "construction"] {
            store.add_tray_word(word);
        }
        store
    }

    #[test]
    fn listing_marks_selection() {
        let mut store = store_with_tray();
        store.set_selected_words(&["rest".to_string()]);

        let view = tray_view(&store, None, SortOrder::Length);
        assert_eq!(view.total, 4);
        assert_eq!(view.rows[0].word, "construction");
        assert!(view.rows.iter().any(|r| r.word == "rest" && r.selected));
        assert_eq!(view.chosen, vec!["rest".to_string()]);
    }

    #[test]
    fn toggling_words_persists_tray_order() {
        let mut store = store_with_tray();
        let view = select_words(
            &mut store,
            &["rest".to_string(), "unhappy".to_string(), "missing".to_string()],
            SelectMode::Toggle,
            None,
        );
        assert_eq!(view.chosen, vec!["unhappy".to_string(), "rest".to_string()]);
        assert_eq!(store.selected_words(), view.chosen);
    }

    #[test]
    fn toggle_visible_respects_filter() {
        let mut store = store_with_tray();
        let view = select_words(&mut store, &[], SelectMode::ToggleVisible, Some("re"));
        assert!(view.all_visible_selected);
        assert_eq!(view.chosen, vec!["rebuild".to_string(), "rest".to_string()]);

        let view = select_words(&mut store, &[], SelectMode::Clear, None);
        assert!(view.chosen.is_empty());
        assert!(store.selected_words().is_empty());
    }

    #[test]
    fn removing_a_word_unselects_it() {
        let mut store = store_with_tray();
        store.set_selected_words(&["rest".to_string(), "rebuild".to_string()]);

        assert_eq!(remove_words(&mut store, &["REST".to_string(), "nope".to_string()]), 1);
        assert_eq!(store.tray_words().len(), 3);
        assert_eq!(store.selected_words(), vec!["rebuild".to_string()]);
    }

    #[test]
    fn adding_reports_only_new_words() {
        let mut store = store_with_tray();
        let added = add_words(&mut store, &["Rest".to_string(), "prefix".to_string()]);
        assert_eq!(added, vec!["prefix".to_string()]);
    }
}
