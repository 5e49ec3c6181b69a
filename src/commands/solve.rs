//! Word solving command
//!
//! Self-play against a known target: judge each guess, fold the tiles into
//! the session's feedback state, and loop until solved or out of turns.

use crate::core::{GuessState, Tile, Word, judge};
use crate::solver::Engine;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub first_word: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            first_word: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub turns: Vec<TurnReport>,
    pub target: String,
}

/// A single turn in the solution path
pub struct TurnReport {
    pub word: String,
    pub tiles: [Tile; 5],
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific target word with the given engine
///
/// # Errors
///
/// Returns an error if:
/// - The target or forced first word is invalid or not in the lexicon
/// - The engine runs out of candidates (contradiction cannot occur here:
///   the state is built from judged feedback)
pub fn solve_word(config: SolveConfig, engine: &Engine) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let first_word = config
        .first_word
        .as_deref()
        .map(|raw| find_in_lexicon(engine, raw))
        .transpose()?;

    let mut state = GuessState::new();
    let mut turns: Vec<TurnReport> = Vec::new();

    for turn in 0..config.max_guesses {
        let candidates_before = engine.count_candidates(&state);

        let guess = match (turn, first_word) {
            (0, Some(forced)) => forced,
            _ => engine.next_guess(&state).map_err(|e| e.to_string())?,
        };

        let tiles = judge(guess, &target);
        state.record(guess, &tiles);

        let candidates_after = engine.count_candidates(&state);

        let solved = tiles == [Tile::Correct; 5];
        turns.push(TurnReport {
            word: guess.text().to_owned(),
            tiles,
            candidates_before,
            candidates_after,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                turns,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        turns,
        target: config.target,
    })
}

/// Resolve a raw word against the engine's lexicon
pub(crate) fn find_in_lexicon<'a>(engine: &Engine<'a>, raw: &str) -> Result<&'a Word, String> {
    let word = Word::new(raw).map_err(|e| format!("Invalid word: {e}"))?;
    engine
        .index()
        .words()
        .iter()
        .find(|w| w.text() == word.text())
        .ok_or_else(|| format!("Word '{raw}' not in lexicon"))
}
