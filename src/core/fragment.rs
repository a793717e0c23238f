//! Morpheme fragment representation
//!
//! A Fragment is a contiguous piece of a word tagged with a grammatical role.

use super::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A morpheme fragment: text, role and optional meaning
///
/// Serialized with the same field names the analysis service uses
/// (`morpheme`, `type`, `meaning`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    #[serde(rename = "morpheme")]
    text: String,
    #[serde(rename = "type")]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meaning: Option<String>,
}

impl Fragment {
    /// Create a fragment without a meaning
    ///
    /// # Examples
    /// ```
    /// use morpheme_lab::core::{Fragment, Role};
    ///
    /// let root = Fragment::new("believe", Role::Root);
    /// assert_eq!(root.text(), "believe");
    /// assert!(root.meaning().is_none());
    /// ```
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
            meaning: None,
        }
    }

    /// Create a fragment with a meaning
    ///
    /// Blank meanings are stored as absent.
    pub fn with_meaning(text: impl Into<String>, role: Role, meaning: impl Into<String>) -> Self {
        let meaning: String = meaning.into();
        Self {
            text: text.into(),
            role,
            meaning: (!meaning.trim().is_empty()).then_some(meaning),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    #[must_use]
    pub fn meaning(&self) -> Option<&str> {
        self.meaning.as_deref()
    }

    /// Trimmed, lowercased text used for all comparisons
    #[must_use]
    pub fn key(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.role)
    }
}

/// Concatenate fragment texts in order
#[must_use]
pub fn joined_text(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::text).collect()
}

/// Render fragments as `un-believe-able`
#[must_use]
pub fn hyphenated(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(Fragment::text)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_meaning_is_absent() {
        let frag = Fragment::with_meaning("un", Role::Prefix, "  ");
        assert!(frag.meaning().is_none());

        let frag = Fragment::with_meaning("un", Role::Prefix, "not");
        assert_eq!(frag.meaning(), Some("not"));
    }

    #[test]
    fn key_is_trimmed_lowercase() {
        let frag = Fragment::new(" Able ", Role::Suffix);
        assert_eq!(frag.key(), "able");
    }

    #[test]
    fn serializes_with_service_field_names() {
        let frag = Fragment::with_meaning("un", Role::Prefix, "not");
        let json = serde_json::to_value(&frag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"morpheme": "un", "type": "prefix", "meaning": "not"})
        );
    }

    #[test]
    fn joined_and_hyphenated() {
        let frags = vec![
            Fragment::new("un", Role::Prefix),
            Fragment::new("believ", Role::Root),
            Fragment::new("able", Role::Suffix),
        ];
        assert_eq!(joined_text(&frags), "unbelievable");
        assert_eq!(hyphenated(&frags), "un-believ-able");
    }
}
