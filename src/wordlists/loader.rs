//! Word list loading utilities
//!
//! Reads raw word lists from disk. Lines are trimmed and blank lines are
//! skipped; validation happens at [`LexiconIndex::build`] so a malformed
//! entry fails the whole load rather than being silently dropped.
//!
//! [`LexiconIndex::build`]: crate::lexicon::LexiconIndex::build

use std::fs;
use std::io;
use std::path::Path;

/// Load raw word entries from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_pilot::lexicon::LexiconIndex;
/// use wordle_pilot::wordlists::loader::load_from_file;
///
/// let raw = load_from_file("data/words.txt").unwrap();
/// let index = LexiconIndex::build(raw).unwrap();
/// println!("Loaded {} words", index.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect();

    Ok(words)
}
