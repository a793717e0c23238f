//! Choosing which tray words to practice

use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Display order of the tray word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// A → Z, ignoring case
    #[default]
    Alpha,
    /// Longest first
    Length,
}

fn alpha_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Filterable, sortable selection over the tray
///
/// Selection is tracked by lowercased word, so it survives re-sorting and
/// filtering.
#[derive(Debug, Clone)]
pub struct PracticeSetup {
    tray: Vec<String>,
    filter: String,
    sort: SortOrder,
    selected: FxHashSet<String>,
}

impl PracticeSetup {
    /// Start from the tray and a previously saved selection
    #[must_use]
    pub fn new(tray: Vec<String>, selected: &[String]) -> Self {
        Self {
            tray,
            filter: String::new(),
            sort: SortOrder::default(),
            selected: selected.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    #[must_use]
    pub fn tray(&self) -> &[String] {
        &self.tray
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub const fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Tray words matching the filter (case-insensitive substring), sorted
    #[must_use]
    pub fn visible(&self) -> Vec<&str> {
        let needle = self.filter.trim().to_lowercase();
        let mut list: Vec<&str> = self
            .tray
            .iter()
            .map(String::as_str)
            .filter(|w| needle.is_empty() || w.to_lowercase().contains(&needle))
            .collect();

        match self.sort {
            SortOrder::Alpha => list.sort_by(|a, b| alpha_order(a, b)),
            SortOrder::Length => list.sort_by_key(|w| std::cmp::Reverse(w.chars().count())),
        }
        list
    }

    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selected.contains(&word.trim().to_lowercase())
    }

    /// Flip one word's selection; returns the new state
    pub fn toggle(&mut self, word: &str) -> bool {
        let key = word.trim().to_lowercase();
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Whether every visible word is selected (false when nothing is visible)
    #[must_use]
    pub fn all_visible_selected(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|w| self.is_selected(w))
    }

    pub fn select_all_visible(&mut self) {
        let keys: Vec<String> = self.visible().iter().map(|w| w.to_lowercase()).collect();
        self.selected.extend(keys);
    }

    /// Deselects only visible words; hidden selections are kept
    pub fn deselect_all_visible(&mut self) {
        let keys: Vec<String> = self.visible().iter().map(|w| w.to_lowercase()).collect();
        for key in keys {
            self.selected.remove(&key);
        }
    }

    /// Select all visible, or deselect them if they are all selected already
    pub fn toggle_all_visible(&mut self) {
        if self.all_visible_selected() {
            self.deselect_all_visible();
        } else {
            self.select_all_visible();
        }
    }

    /// Selected tray words, in tray order
    #[must_use]
    pub fn chosen(&self) -> Vec<String> {
        self.tray
            .iter()
            .filter(|w| self.is_selected(w))
            .cloned()
            .collect()
    }
}
