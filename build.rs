//! Build script to embed the word lists
//!
//! Each data file becomes a `&[&str]` const plus its length. Entries must be
//! six lowercase ASCII letters; anything else fails the build.

use std::env;
use std::fs;
use std::path::Path;

/// (data file, const name, doc line)
const LISTS: &[(&str, &str, &str)] = &[
    (
        "data/answers.txt",
        "ANSWERS",
        "Words that can be chosen as the hidden answer",
    ),
    ("data/vocab.txt", "VOCAB", "Every word accepted as a guess"),
];

const WORD_LENGTH: usize = 6;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for &(input, const_name, doc) in LISTS {
        println!("cargo:rerun-if-changed={input}");

        let source = render(input, const_name, doc);
        let file_name = format!("{}.rs", const_name.to_lowercase());
        let output = Path::new(&out_dir).join(file_name);
        fs::write(&output, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output.display()));
    }
}

fn render(input: &str, const_name: &str, doc: &str) -> String {
    let content =
        fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for (i, word) in words.iter().enumerate() {
        let valid = word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase());
        assert!(valid, "{input}:{}: '{word}' is not a six-letter word", i + 1);
    }

    let entries: String = words.iter().map(|word| format!("    \"{word}\",\n")).collect();
    let count = words.len();

    format!(
        "// Generated from {input} ({count} words)\n\n\
         /// {doc}\n\
         pub const {const_name}: &[&str] = &[\n{entries}];\n\n\
         /// Number of words in {const_name}\n\
         pub const {const_name}_COUNT: usize = {count};\n"
    )
}
