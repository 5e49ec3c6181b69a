//! Main engine interface
//!
//! Orchestrates filter and scorer to pick one word per turn. The engine
//! itself is stateless across calls: the caller owns the [`GuessState`]
//! lifecycle and decides when the session ends.

use super::filter;
use super::score::{CommonalityTable, PositionalScorer, Scoring};
use super::select;
use crate::core::{GuessState, Letter, Word};
use crate::lexicon::LexiconIndex;
use log::debug;
use std::fmt;

/// Error from a single engine turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The filter produced an empty candidate set; a terminal condition the
    /// caller can recover from (broaden spelling, fall back to a heuristic)
    NoCandidatesRemaining,
    /// A letter is listed both absent and correct/present; a caller error
    ContradictoryState(Letter),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidatesRemaining => write!(f, "no candidate words remaining"),
            Self::ContradictoryState(letter) => {
                write!(f, "letter '{letter}' is marked absent but also correct or present")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Candidate-filtering and ranking engine
///
/// Borrows the shared read-only lexicon index (and optional commonality
/// table); many sessions can use one engine concurrently, each with its own
/// `GuessState`.
pub struct Engine<'a> {
    index: &'a LexiconIndex,
    commonality: Option<&'a CommonalityTable>,
    scoring: Scoring,
}

impl<'a> Engine<'a> {
    /// Create an engine over a lexicon index with a scoring strategy
    #[must_use]
    pub const fn new(index: &'a LexiconIndex, scoring: Scoring) -> Self {
        Self {
            index,
            commonality: None,
            scoring,
        }
    }

    /// Attach a corpus commonality table (positional scoring only)
    #[must_use]
    pub const fn with_commonality(mut self, table: &'a CommonalityTable) -> Self {
        self.commonality = Some(table);
        self
    }

    /// The lexicon index this engine runs over
    #[must_use]
    pub const fn index(&self) -> &'a LexiconIndex {
        self.index
    }

    /// Words consistent with the accumulated feedback, in lexicon order
    #[must_use]
    pub fn candidates(&self, state: &GuessState) -> Vec<&'a Word> {
        filter::candidates(self.index, state)
    }

    /// Number of words consistent with the accumulated feedback
    #[must_use]
    pub fn count_candidates(&self, state: &GuessState) -> usize {
        self.candidates(state).len()
    }

    /// Pick the next guess for the given feedback state
    ///
    /// Validates the state, filters the lexicon, ranks the survivors with
    /// the configured scorer, and returns the top candidate.
    ///
    /// # Errors
    /// - [`EngineError::ContradictoryState`] if a letter is both absent and
    ///   correct/present
    /// - [`EngineError::NoCandidatesRemaining`] if no word survives the
    ///   filter
    pub fn next_guess(&self, state: &GuessState) -> Result<&'a Word, EngineError> {
        if let Some(letter) = state.contradiction() {
            return Err(EngineError::ContradictoryState(letter));
        }

        let candidates = self.candidates(state);
        debug!("{} candidates after filtering", candidates.len());

        match &self.scoring {
            Scoring::Letters(weights) => select::select_next(&candidates, weights),
            Scoring::Positional => {
                let scorer = PositionalScorer::new(&candidates, self.commonality);
                select::select_next(&candidates, &scorer)
            }
        }
    }
}
