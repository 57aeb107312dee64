//! Build script to generate the embedded dictionary
//!
//! Reads the default word list and generates Rust source code with a const array.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words_ru.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    // Blank lines and `#` comments never reach the binary
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    // Malformed entries are skipped by the loader at runtime; flag them early
    for word in words.iter().filter(|word| word.chars().count() != 5) {
        println!("cargo:warning={WORD_LIST}: '{word}' is not a five-letter word");
    }

    let source = render_word_list(
        "WORDS",
        "Default Russian dictionary of five-letter nouns",
        &words,
    );
    let output_path = Path::new(&out_dir).join("words_ru.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}

fn render_word_list(const_name: &str, doc_comment: &str, words: &[&str]) -> String {
    let mut source = String::new();

    writeln!(source, "// Generated from {WORD_LIST}\n").unwrap();
    writeln!(source, "/// {doc_comment}").unwrap();
    writeln!(source, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(source, "    \"{}\",", word.escape_default()).unwrap();
    }
    writeln!(source, "];\n").unwrap();
    writeln!(source, "/// Number of words in {const_name}").unwrap();
    writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();

    source
}
