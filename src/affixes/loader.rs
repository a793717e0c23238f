//! Affix table loading utilities
//!
//! Custom tables use one affix per line with hyphen notation:
//! `un-` is a prefix, `-able` is a suffix. Blank lines and `#` comments are
//! ignored, as are lines without a hyphen.

use super::AffixTable;
use std::fs;
use std::io;
use std::path::Path;

/// Load an affix table from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use morpheme_lab::affixes::loader::load_from_file;
///
/// let table = load_from_file("my_affixes.txt").unwrap();
/// println!("{} prefixes", table.prefixes().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<AffixTable> {
    let content = fs::read_to_string(path)?;
    Ok(parse_table(&content))
}

/// Parse hyphen-notation affix lines into a table
#[must_use]
pub fn parse_table(content: &str) -> AffixTable {
    let mut prefixes = Vec::new();
    let mut suffixes = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(suffix) = trimmed.strip_prefix('-') {
            suffixes.push(suffix.to_string());
        } else if let Some(prefix) = trimmed.strip_suffix('-') {
            prefixes.push(prefix.to_string());
        }
    }

    AffixTable::new(prefixes, suffixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphen_notation() {
        let table = parse_table("un-\n-able\n# comment\n\nre-\n-ness\nbare\n");
        assert_eq!(table.prefixes(), &["un".to_string(), "re".to_string()]);
        assert_eq!(table.suffixes(), &["able".to_string(), "ness".to_string()]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        assert!(parse_table("").is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("affixes.txt");
        fs::write(&path, "pre-\n-ful\n").unwrap();

        let table = load_from_file(&path).unwrap();
        assert_eq!(table.prefixes(), &["pre".to_string()]);
        assert_eq!(table.suffixes(), &["ful".to_string()]);
    }

    #[test]
    fn missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
