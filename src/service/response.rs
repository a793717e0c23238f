//! Analysis service response shapes
//!
//! The morpheme endpoint has answered in several shapes over time. Each is a
//! variant of `MorphemeResponse`; `normalize` turns any of them into the
//! canonical fragment list.

use crate::core::{Fragment, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Why a response could not be turned into fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The JSON matched none of the known shapes
    UnrecognizedShape,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedShape => write!(f, "Unrecognized morpheme response shape"),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// One morpheme entry as sent by the service
///
/// Every field is optional; incomplete entries are dropped during
/// normalization instead of failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMorpheme {
    #[serde(default)]
    pub morpheme: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
}

/// A `{part, meaning}` entry from the legacy keyed shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyPart {
    #[serde(default)]
    pub part: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
}

/// Known morpheme response shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MorphemeResponse {
    /// `{ "morphemes": [ {morpheme, type, meaning?}, ... ] }`
    Listed { morphemes: Vec<RawMorpheme> },
    /// `[ {morpheme, type, meaning?}, ... ]`
    Bare(Vec<RawMorpheme>),
    /// `{ prefix?, root?, suffix? | suffix1?, suffix2? }`, each `{part, meaning}`
    Keyed {
        #[serde(default)]
        prefix: Option<LegacyPart>,
        #[serde(default)]
        root: Option<LegacyPart>,
        #[serde(default)]
        suffix: Option<LegacyPart>,
        #[serde(default)]
        suffix1: Option<LegacyPart>,
        #[serde(default)]
        suffix2: Option<LegacyPart>,
    },
}

impl MorphemeResponse {
    /// Classify a JSON value into one of the known shapes
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnrecognizedShape` for non-object, non-array
    /// values and for objects carrying none of the known keys.
    pub fn parse(value: &Value) -> Result<Self, NormalizeError> {
        let parsed: Self = serde_json::from_value(value.clone())
            .map_err(|_| NormalizeError::UnrecognizedShape)?;

        if let Self::Keyed { .. } = parsed {
            let keyed = ["prefix", "root", "suffix", "suffix1", "suffix2"];
            let has_any = value
                .as_object()
                .is_some_and(|obj| keyed.iter().any(|k| obj.contains_key(*k)));
            if !has_any {
                return Err(NormalizeError::UnrecognizedShape);
            }
        }

        Ok(parsed)
    }

    /// Canonical fragment list in service order
    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> {
        match self {
            Self::Listed { morphemes } | Self::Bare(morphemes) => {
                morphemes.into_iter().filter_map(raw_to_fragment).collect()
            }
            Self::Keyed {
                prefix,
                root,
                suffix,
                suffix1,
                suffix2,
            } => [
                (prefix, Role::Prefix),
                (root, Role::Root),
                (suffix, Role::Suffix),
                (suffix1, Role::Suffix),
                (suffix2, Role::Suffix),
            ]
            .into_iter()
            .filter_map(|(part, role)| legacy_to_fragment(part?, role))
            .collect(),
        }
    }
}

fn raw_to_fragment(raw: RawMorpheme) -> Option<Fragment> {
    let text = raw.morpheme?;
    if text.trim().is_empty() {
        return None;
    }
    let role: Role = raw.kind?.parse().ok()?;
    Some(Fragment::with_meaning(text, role, raw.meaning.unwrap_or_default()))
}

fn legacy_to_fragment(part: LegacyPart, role: Role) -> Option<Fragment> {
    let text = part.part?;
    if text.trim().is_empty() {
        return None;
    }
    Some(Fragment::with_meaning(text, role, part.meaning.unwrap_or_default()))
}

/// Normalize any known morpheme response into fragments
///
/// # Errors
///
/// Returns `NormalizeError` if the value matches no known shape.
///
/// # Examples
/// ```
/// use morpheme_lab::service::normalize;
/// use serde_json::json;
///
/// let legacy = json!({"root": {"part": "happy", "meaning": "feeling joy"},
///                     "suffix1": {"part": "ness", "meaning": "state of"}});
/// let fragments = normalize(&legacy).unwrap();
/// assert_eq!(fragments.len(), 2);
/// assert_eq!(fragments[1].text(), "ness");
/// ```
pub fn normalize(value: &Value) -> Result<Vec<Fragment>, NormalizeError> {
    MorphemeResponse::parse(value).map(MorphemeResponse::into_fragments)
}

/// Display-only fields from meaning/etymology/graphemes/relatives analyses
///
/// Unknown fields are ignored. A field of the wrong type yields empty details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisDetails {
    pub meaning: Option<String>,
    pub historical_origin: Option<String>,
    pub etymology: Option<String>,
    pub morphological_relatives: Vec<String>,
    pub etymological_relatives: Vec<String>,
    pub graphemes: Option<Value>,
}

impl AnalysisDetails {
    /// Extract details from any response, ignoring what does not fit
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Take every field `other` provides, keeping ours where it has none
    pub fn absorb(&mut self, other: Self) {
        if other.meaning.is_some() {
            self.meaning = other.meaning;
        }
        if other.historical_origin.is_some() {
            self.historical_origin = other.historical_origin;
        }
        if other.etymology.is_some() {
            self.etymology = other.etymology;
        }
        if !other.morphological_relatives.is_empty() {
            self.morphological_relatives = other.morphological_relatives;
        }
        if !other.etymological_relatives.is_empty() {
            self.etymological_relatives = other.etymological_relatives;
        }
        if other.graphemes.is_some() {
            self.graphemes = other.graphemes;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parts(fragments: &[Fragment]) -> Vec<(&str, Role)> {
        fragments.iter().map(|f| (f.text(), f.role())).collect()
    }

    #[test]
    fn listed_shape() {
        let value = json!({
            "word": "unbelievable",
            "morphemes": [
                {"morpheme": "un", "type": "prefix", "meaning": "not"},
                {"morpheme": "believe", "type": "root"},
                {"morpheme": "able", "type": "suffix", "meaning": "capable of"}
            ],
            "meaning": "cannot be believed"
        });
        let fragments = normalize(&value).unwrap();
        assert_eq!(
            parts(&fragments),
            vec![
                ("un", Role::Prefix),
                ("believe", Role::Root),
                ("able", Role::Suffix)
            ]
        );
        assert_eq!(fragments[0].meaning(), Some("not"));
        assert_eq!(fragments[1].meaning(), None);
    }

    #[test]
    fn bare_array_shape() {
        let value = json!([{"morpheme": "re", "type": "prefix"}, {"morpheme": "do", "type": "root"}]);
        assert_eq!(
            parts(&normalize(&value).unwrap()),
            vec![("re", Role::Prefix), ("do", Role::Root)]
        );
    }

    #[test]
    fn keyed_legacy_shape() {
        let value = json!({
            "prefix": {"part": "dis", "meaning": "not"},
            "root": {"part": "respect", "meaning": "to show regard"},
            "suffix1": {"part": "ful", "meaning": "full of"},
            "suffix2": {"part": "ly", "meaning": "in a way"},
            "related": ["respect"]
        });
        assert_eq!(
            parts(&normalize(&value).unwrap()),
            vec![
                ("dis", Role::Prefix),
                ("respect", Role::Root),
                ("ful", Role::Suffix),
                ("ly", Role::Suffix)
            ]
        );
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let value = json!({"morphemes": [
            {"morpheme": "un", "type": "infix"},
            {"type": "root"},
            {"morpheme": "  ", "type": "root"},
            {"morpheme": "happy", "type": "ROOT"},
            {"morpheme": "ness"}
        ]});
        assert_eq!(parts(&normalize(&value).unwrap()), vec![("happy", Role::Root)]);
    }

    #[test]
    fn empty_morpheme_list_is_not_an_error() {
        assert!(normalize(&json!({"morphemes": []})).unwrap().is_empty());
    }

    #[test]
    fn unknown_shapes_are_errors() {
        assert_eq!(normalize(&json!(null)), Err(NormalizeError::UnrecognizedShape));
        assert_eq!(normalize(&json!("un-happy")), Err(NormalizeError::UnrecognizedShape));
        assert_eq!(
            normalize(&json!({"error": "Failed to analyze word"})),
            Err(NormalizeError::UnrecognizedShape)
        );
    }

    #[test]
    fn details_are_extracted_defensively() {
        let value = json!({
            "meaning": "Something that cannot be believed",
            "morphological_relatives": ["believable", "unbelievably"],
            "etymological_relatives": "not-a-list",
        });
        assert!(AnalysisDetails::from_value(&value).is_empty());

        let value = json!({
            "meaning": "Something that cannot be believed",
            "historical_origin": "Old English",
            "morphological_relatives": ["believable", "unbelievably"]
        });
        let details = AnalysisDetails::from_value(&value);
        assert_eq!(details.meaning.as_deref(), Some("Something that cannot be believed"));
        assert_eq!(details.morphological_relatives.len(), 2);
        assert!(details.etymological_relatives.is_empty());
    }

    #[test]
    fn absorb_keeps_existing_when_other_is_empty() {
        let mut details = AnalysisDetails {
            meaning: Some("not believable".into()),
            ..AnalysisDetails::default()
        };
        details.absorb(AnalysisDetails {
            etymology: Some("Latin".into()),
            ..AnalysisDetails::default()
        });
        assert_eq!(details.meaning.as_deref(), Some("not believable"));
        assert_eq!(details.etymology.as_deref(), Some("Latin"));
    }
}
