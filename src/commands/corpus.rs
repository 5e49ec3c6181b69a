//! Commonality table builder
//!
//! Offline batch job: scans plain-text corpus files for 5-letter words,
//! counts occurrences of lexicon words, and produces the static
//! `commonality.json` artifact the positional scorer consumes at runtime.
//! Not a runtime dependency of the engine.

use crate::core::Word;
use crate::lexicon::LexiconIndex;
use crate::solver::CommonalityTable;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Build a commonality table from a directory of `.txt` corpus files
///
/// Tokens are lowercased; exact 5-letter tokens count directly, and
/// 6-letter tokens ending in `s` are folded to their 5-letter singular.
/// Only words present in the lexicon are counted.
///
/// # Errors
///
/// Returns an error if the directory or a corpus file cannot be read.
pub fn build_commonality(dir: &Path, index: &LexiconIndex) -> Result<CommonalityTable, String> {
    let lexicon_texts: FxHashSet<&str> = index.words().iter().map(Word::text).collect();

    let mut table = CommonalityTable::new();
    let mut files = 0;

    let entries =
        fs::read_dir(dir).map_err(|e| format!("cannot read corpus dir {}: {e}", dir.display()))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("cannot read corpus dir entry: {e}"))?;
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("cannot read corpus file {}: {e}", path.display()))?;

        let mut hits = 0usize;
        for token in content.split_whitespace() {
            if let Some(word) = normalize_token(token) {
                if lexicon_texts.contains(word.text()) {
                    table.record(&word);
                    hits += 1;
                }
            }
        }

        debug!("scanned {}: {hits} lexicon hits", path.display());
        files += 1;
    }

    info!(
        "corpus scan: {files} files, {} distinct words attested",
        table.len()
    );

    Ok(table)
}

/// Normalize a corpus token to a candidate 5-letter word
///
/// Accepts exact 5-letter alphabetic tokens and 6-letter plurals ending in
/// `s` (folded to the 5-letter stem). Everything else is skipped.
fn normalize_token(token: &str) -> Option<Word> {
    let lower = token.to_lowercase();
    let stem = match lower.len() {
        5 => lower.as_str(),
        6 if lower.ends_with('s') => &lower[..5],
        _ => return None,
    };
    Word::new(stem).ok()
}
