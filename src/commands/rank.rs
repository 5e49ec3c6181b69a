//! Word ranking command
//!
//! Shows how a word scores under both strategies against the full lexicon.

use crate::core::Word;
use crate::solver::{
    CommonalityTable, Engine, LetterWeights, NEUTRAL_COMMONALITY, PositionCounts, Scorer,
};

/// Result of ranking a word
pub struct RankResult {
    pub word: String,
    pub positional_score: u32,
    pub commonality_factor: f64,
    pub combined_score: f64,
    pub letter_weight_score: f64,
    pub lexicon_size: usize,
    pub rank: usize,
}

/// Score a word against the engine's full lexicon
///
/// # Errors
///
/// Returns an error if the word is invalid or not in the lexicon.
pub fn rank_word(
    raw: &str,
    engine: &Engine,
    commonality: Option<&CommonalityTable>,
) -> Result<RankResult, String> {
    let word = super::solve::find_in_lexicon(engine, raw)?.clone();

    let words = engine.index().words();
    let refs: Vec<&Word> = words.iter().collect();
    let counts = PositionCounts::tally(&refs);

    let positional_score = counts.positional_score(&word);
    let commonality_factor =
        commonality.map_or(NEUTRAL_COMMONALITY, |table| table.factor(&word));
    let combined_score = f64::from(positional_score) * commonality_factor;
    let letter_weight_score = LetterWeights::default().score(&word);

    // 1-based position of the word when the whole lexicon is ranked by
    // combined score, ties broken by lexicon order
    let score_of = |w: &Word| {
        f64::from(counts.positional_score(w))
            * commonality.map_or(NEUTRAL_COMMONALITY, |table| table.factor(w))
    };
    let my_pos = words
        .iter()
        .position(|w| w.text() == word.text())
        .unwrap_or(0);
    let rank = 1 + words
        .iter()
        .enumerate()
        .filter(|&(i, w)| {
            let score = score_of(w);
            score > combined_score || (score == combined_score && i < my_pos)
        })
        .count();

    Ok(RankResult {
        word: word.text().to_owned(),
        positional_score,
        commonality_factor,
        combined_score,
        letter_weight_score,
        lexicon_size: words.len(),
        rank,
    })
}
