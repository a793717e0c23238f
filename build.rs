//! Build script to generate embedded affix tables
//!
//! Reads affix list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out = Path::new(&out_dir);

    // Known affixes for heuristic segmentation
    generate_affix_list(
        "data/prefixes.txt",
        &out.join("prefixes.rs"),
        "PREFIXES",
        "Known English prefixes for heuristic segmentation",
    );
    generate_affix_list(
        "data/suffixes.txt",
        &out.join("suffixes.rs"),
        "SUFFIXES",
        "Known English suffixes for heuristic segmentation",
    );

    // Decoy vocabularies for practice trials (order matters: earliest wins)
    generate_affix_list(
        "data/prefix_decoys.txt",
        &out.join("prefix_decoys.rs"),
        "PREFIX_DECOYS",
        "Prefix decoys offered in practice trials",
    );
    generate_affix_list(
        "data/suffix_decoys.txt",
        &out.join("suffix_decoys.rs"),
        "SUFFIX_DECOYS",
        "Suffix decoys offered in practice trials",
    );

    for file in [
        "data/prefixes.txt",
        "data/suffixes.txt",
        "data/prefix_decoys.txt",
        "data/suffix_decoys.txt",
    ] {
        println!("cargo:rerun-if-changed={file}");
    }
}

fn generate_affix_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let affixes: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = affixes.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated affix list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} entries)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for affix in &affixes {
        writeln!(output, "    \"{affix}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
