//! Frequency scorers
//!
//! Two deterministic scoring strategies for ranking candidate words:
//! a static English letter-weight table, and positional letter frequency
//! over the current candidate set multiplied by corpus commonality. Both
//! are pure functions of their inputs; the strategy is resolved
//! configuration data, never module-level state.

use crate::core::{InvalidWord, Letter, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Commonality factor for a word the corpus never attested
///
/// Small and positive so the positional score is dampened, not zeroed.
pub const NEUTRAL_COMMONALITY: f64 = 0.5;

/// A scoring strategy: higher is a better guess
pub trait Scorer {
    /// Score a word; non-negative, monotonic in letter frequency
    fn score(&self, word: &Word) -> f64;
}

/// Static per-letter weights
///
/// A word's score is the sum of its 5 letters' weights. The default table
/// is empirical English letter frequency, useful when no corpus data is
/// available.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterWeights([f64; 26]);

impl LetterWeights {
    /// Empirical English letter frequencies, indexed a-z
    pub const ENGLISH: Self = Self([
        43.31, // a
        10.56, // b
        23.13, // c
        17.25, // d
        56.88, // e
        9.24,  // f
        12.59, // g
        15.31, // h
        38.45, // i
        1.01,  // j
        5.61,  // k
        27.98, // l
        15.36, // m
        33.92, // n
        36.51, // o
        16.14, // p
        1.00,  // q
        38.64, // r
        29.23, // s
        35.43, // t
        18.51, // u
        5.13,  // v
        6.57,  // w
        1.48,  // x
        9.06,  // y
        1.39,  // z
    ]);

    /// Create a weight table from explicit per-letter values, indexed a-z
    #[must_use]
    pub const fn new(weights: [f64; 26]) -> Self {
        Self(weights)
    }

    /// Weight of a single letter
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: Letter) -> f64 {
        self.0[letter.index()]
    }
}

impl Default for LetterWeights {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl Scorer for LetterWeights {
    fn score(&self, word: &Word) -> f64 {
        word.letters().iter().map(|&l| self.weight(l)).sum()
    }
}

/// Per-position letter counts over a candidate set
///
/// Rebuilt from the *current* candidates each turn, not the full lexicon,
/// so scores track the narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCounts([[u32; 26]; 5]);

impl PositionCounts {
    /// Tally letter counts per position over the given words
    #[must_use]
    pub fn tally(words: &[&Word]) -> Self {
        let mut counts = [[0u32; 26]; 5];
        for word in words {
            for (pos, &letter) in word.letters().iter().enumerate() {
                counts[pos][letter.index()] += 1;
            }
        }
        Self(counts)
    }

    /// Number of tallied words with `letter` at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn count(&self, position: usize, letter: Letter) -> u32 {
        self.0[position][letter.index()]
    }

    /// Sum of a word's per-position counts
    #[must_use]
    pub fn positional_score(&self, word: &Word) -> u32 {
        word.letters()
            .iter()
            .enumerate()
            .map(|(pos, &letter)| self.count(pos, letter))
            .sum()
    }
}

/// Corpus-derived word usage frequencies
///
/// Maps a 5-letter word to a non-negative count. Serialized as a bare JSON
/// object, the artifact the offline corpus tool produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommonalityTable {
    counts: FxHashMap<String, f64>,
}

/// Error loading a commonality table
#[derive(Debug)]
pub enum CommonalityError {
    /// The artifact is not valid JSON
    Parse(serde_json::Error),
    /// An entry is not a valid word or has a bad frequency
    Entry(InvalidWord),
}

impl fmt::Display for CommonalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "commonality table is not valid JSON: {e}"),
            Self::Entry(e) => write!(f, "bad commonality entry: {e}"),
        }
    }
}

impl std::error::Error for CommonalityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Entry(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CommonalityError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<InvalidWord> for CommonalityError {
    fn from(e: InvalidWord) -> Self {
        Self::Entry(e)
    }
}

impl CommonalityTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from its JSON artifact
    ///
    /// Every key must be a valid 5-letter word (normalized to lowercase)
    /// and every count non-negative and finite.
    ///
    /// # Errors
    /// Returns [`CommonalityError`] for malformed JSON or a bad entry.
    pub fn from_json(json: &str) -> Result<Self, CommonalityError> {
        let raw: FxHashMap<String, f64> = serde_json::from_str(json)?;

        let mut counts = FxHashMap::default();
        for (key, count) in raw {
            let word = Word::new(key)?;
            if !(count.is_finite() && count >= 0.0) {
                return Err(InvalidWord::Frequency {
                    word: word.text().to_owned(),
                }
                .into());
            }
            counts.insert(word.text().to_owned(), count);
        }

        Ok(Self { counts })
    }

    /// Serialize the table to its JSON artifact
    ///
    /// # Errors
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Count one attested occurrence of a word
    pub fn record(&mut self, word: &Word) {
        *self.counts.entry(word.text().to_owned()).or_insert(0.0) += 1.0;
    }

    /// Commonality factor for a word; [`NEUTRAL_COMMONALITY`] if unattested
    #[must_use]
    pub fn factor(&self, word: &Word) -> f64 {
        self.counts
            .get(word.text())
            .copied()
            .unwrap_or(NEUTRAL_COMMONALITY)
    }

    /// Number of attested words
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no words are attested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Positional-frequency × commonality scorer
///
/// Final score = (sum of per-position counts) × commonality factor. With no
/// table loaded every word gets the same unit factor, leaving the positional
/// ranking unchanged.
pub struct PositionalScorer<'a> {
    counts: PositionCounts,
    commonality: Option<&'a CommonalityTable>,
}

impl<'a> PositionalScorer<'a> {
    /// Build a scorer from the current candidate set
    #[must_use]
    pub fn new(candidates: &[&Word], commonality: Option<&'a CommonalityTable>) -> Self {
        Self {
            counts: PositionCounts::tally(candidates),
            commonality,
        }
    }

    /// The tallied per-position counts
    #[must_use]
    pub const fn counts(&self) -> &PositionCounts {
        &self.counts
    }
}

impl Scorer for PositionalScorer<'_> {
    fn score(&self, word: &Word) -> f64 {
        let positional = f64::from(self.counts.positional_score(word));
        let factor = self.commonality.map_or(1.0, |table| table.factor(word));
        positional * factor
    }
}

/// Scoring strategy selection, resolved from configuration
pub enum Scoring {
    /// Static letter weights (no corpus data required)
    Letters(LetterWeights),
    /// Positional frequency over current candidates × commonality
    Positional,
}

impl Scoring {
    /// Create a strategy from its configured name
    ///
    /// Supported names: "letters", "weights", "positional". Defaults to
    /// positional if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "letters" | "weights" => Self::Letters(LetterWeights::default()),
            _ => Self::Positional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn letter_weights_sum_over_word() {
        let weights = LetterWeights::default();
        let expected = 23.13 + 38.64 + 43.31 + 33.92 + 56.88; // c r a n e
        assert!((weights.score(&word("crane")) - expected).abs() < 1e-9);
    }

    #[test]
    fn letter_weights_prefer_frequent_letters() {
        let weights = LetterWeights::default();
        // "eerie" is all high-frequency vowels plus r; "jazzy" is fringe
        assert!(weights.score(&word("eerie")) > weights.score(&word("jazzy")));
    }

    #[test]
    fn custom_weight_table() {
        let mut table = [0.0; 26];
        table[Letter::A.index()] = 2.0;
        let weights = LetterWeights::new(table);

        assert!((weights.score(&word("aaaaa")) - 10.0).abs() < 1e-9);
        assert!((weights.score(&word("bbbbb")) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn position_counts_tally() {
        let words = [word("crane"), word("crepe"), word("slate")];
        let refs: Vec<&Word> = words.iter().collect();
        let counts = PositionCounts::tally(&refs);

        assert_eq!(counts.count(0, Letter::C), 2);
        assert_eq!(counts.count(0, Letter::S), 1);
        assert_eq!(counts.count(4, Letter::E), 3);
        assert_eq!(counts.count(2, Letter::Z), 0);
    }

    #[test]
    fn positional_score_sums_per_position() {
        let words = [word("crane"), word("crepe")];
        let refs: Vec<&Word> = words.iter().collect();
        let counts = PositionCounts::tally(&refs);

        // crane: c@0=2, r@1=2, a@2=1, n@3=1, e@4=2
        assert_eq!(counts.positional_score(&word("crane")), 8);
    }

    #[test]
    fn commonality_defaults_to_neutral() {
        let table = CommonalityTable::new();
        assert!((table.factor(&word("crane")) - NEUTRAL_COMMONALITY).abs() < 1e-9);
    }

    #[test]
    fn commonality_record_and_factor() {
        let mut table = CommonalityTable::new();
        table.record(&word("crane"));
        table.record(&word("crane"));

        assert!((table.factor(&word("crane")) - 2.0).abs() < 1e-9);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn commonality_json_round_trip() {
        let mut table = CommonalityTable::new();
        table.record(&word("crane"));
        table.record(&word("slate"));

        let json = table.to_json().unwrap();
        let loaded = CommonalityTable::from_json(&json).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn commonality_rejects_bad_entries() {
        assert!(matches!(
            CommonalityTable::from_json(r#"{"abcdef": 3.0}"#),
            Err(CommonalityError::Entry(InvalidWord::Length { .. }))
        ));
        assert!(matches!(
            CommonalityTable::from_json(r#"{"crane": -1.0}"#),
            Err(CommonalityError::Entry(InvalidWord::Frequency { .. }))
        ));
        assert!(matches!(
            CommonalityTable::from_json("not json"),
            Err(CommonalityError::Parse(_))
        ));
    }

    #[test]
    fn positional_scorer_multiplies_commonality() {
        let words = [word("crane"), word("crate")];
        let refs: Vec<&Word> = words.iter().collect();

        let mut table = CommonalityTable::new();
        table.record(&word("crate")); // factor 1.0 vs neutral 0.5

        let scorer = PositionalScorer::new(&refs, Some(&table));

        // Identical positional profile except position 3 (n vs t), so the
        // commonality factor decides the ordering
        assert!(scorer.score(&word("crate")) > scorer.score(&word("crane")));
    }

    #[test]
    fn positional_scorer_without_table_is_pure_frequency() {
        let words = [word("crane"), word("crate"), word("slate")];
        let refs: Vec<&Word> = words.iter().collect();
        let scorer = PositionalScorer::new(&refs, None);

        let counts = PositionCounts::tally(&refs);
        for w in &words {
            let expected = f64::from(counts.positional_score(w));
            assert!((scorer.score(w) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn scoring_from_name() {
        assert!(matches!(Scoring::from_name("letters"), Scoring::Letters(_)));
        assert!(matches!(Scoring::from_name("weights"), Scoring::Letters(_)));
        assert!(matches!(Scoring::from_name("positional"), Scoring::Positional));
        assert!(matches!(Scoring::from_name("anything"), Scoring::Positional));
    }
}
