//! Splitting reading text into clickable words

/// One whitespace-separated token of the passage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token as written, punctuation included
    pub raw: String,
    /// Lookup form with leading and trailing punctuation removed
    pub word: String,
}

impl Token {
    #[must_use]
    pub fn is_word(&self) -> bool {
        !self.word.is_empty()
    }
}

/// Strip non-alphanumeric characters from both ends
///
/// # Examples
/// ```
/// use morpheme_lab::reader::clean_word;
///
/// assert_eq!(clean_word("\"Unhappily,\""), "Unhappily");
/// assert_eq!(clean_word("well-known."), "well-known");
/// assert_eq!(clean_word("--"), "");
/// ```
#[must_use]
pub fn clean_word(raw: &str) -> &str {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Tokenize on whitespace; token indices are what the reader clicks
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|raw| Token {
            raw: raw.to_string(),
            word: clean_word(raw).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens = tokenize("  The\tunhappy\n\nreader,  ");
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["The", "unhappy", "reader"]);
        assert_eq!(tokens[2].raw, "reader,");
    }

    #[test]
    fn punctuation_only_token_is_not_a_word() {
        let tokens = tokenize("wait — what?");
        assert_eq!(tokens.len(), 3);
        assert!(!tokens[1].is_word());
        assert_eq!(tokens[2].word, "what");
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }
}
