//! Build script to generate embedded word lists
//!
//! Turns the plain-text lists under `data/` into const arrays, dropping
//! anything that is not a 5-letter lowercase word so a stray edit cannot
//! poison the embedded dictionary.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // The secret-word pool
    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words the secret can be drawn from",
    );

    // The dictionary (every accepted guess, answers included)
    generate_word_list(
        "data/guesses.txt",
        &Path::new(&out_dir).join("guesses.rs"),
        "GUESSES",
        "All words accepted as guesses",
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/guesses.txt");
}

fn is_playable(word: &str) -> bool {
    word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut seen = BTreeSet::new();
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| is_playable(w))
        .filter(|w| seen.insert(*w))
        .collect();

    assert!(
        !words.is_empty(),
        "{input_path} contains no playable 5-letter words"
    );

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(
        output,
        "pub const {const_name}_COUNT: usize = {};",
        words.len()
    )
    .unwrap();
}
