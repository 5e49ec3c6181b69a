//! Guess selection
//!
//! Picks the highest-scoring candidate. Ties go to the earlier candidate in
//! iteration order, which keeps fixtures reproducible across runs.

use super::engine::EngineError;
use super::score::Scorer;
use crate::core::Word;

/// Select the best next guess from the candidates
///
/// The candidate with the strictly greatest score wins; on exact ties the
/// first candidate encountered is kept.
///
/// # Errors
/// Returns [`EngineError::NoCandidatesRemaining`] if `candidates` is empty.
pub fn select_next<'a, S: Scorer + ?Sized>(
    candidates: &[&'a Word],
    scorer: &S,
) -> Result<&'a Word, EngineError> {
    let mut best: Option<(&'a Word, f64)> = None;

    for &candidate in candidates {
        let score = scorer.score(candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(word, _)| word)
        .ok_or(EngineError::NoCandidatesRemaining)
}
