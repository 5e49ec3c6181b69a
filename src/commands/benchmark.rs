//! Benchmark command
//!
//! Runs self-play across a sample of lexicon words in parallel and reports
//! guess statistics.

use crate::core::{GuessState, Tile, Word, judge};
use crate::solver::Engine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick a random sample of target words from the lexicon
#[must_use]
pub fn sample_targets(words: &[Word], count: usize) -> Vec<Word> {
    if count >= words.len() {
        return words.to_vec();
    }
    words
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect()
}

/// Run the benchmark over a set of target words
///
/// Each target is solved independently in parallel; the engine is shared
/// read-only, each play owns its own `GuessState`.
pub fn run_benchmark(engine: &Engine, target_words: &[Word]) -> BenchmarkResult {
    let start = Instant::now();

    let bar = ProgressBar::new(target_words.len() as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} ({per_sec})")
    {
        bar.set_style(style);
    }

    let plays: Vec<(usize, bool)> = target_words
        .par_iter()
        .map(|target| {
            let play = play_out(engine, target);
            bar.inc(1);
            play
        })
        .collect();

    bar.finish_and_clear();

    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for &(guesses, success) in &plays {
        total_guesses += guesses;
        solved += usize::from(success);
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: total_guesses as f64 / total_words as f64,
        min_guesses,
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}

/// Play one game to completion; (guesses used, solved within six)
fn play_out(engine: &Engine, target: &Word) -> (usize, bool) {
    let mut state = GuessState::new();
    let mut guesses = 0;

    loop {
        guesses += 1;

        let Ok(guess) = engine.next_guess(&state) else {
            return (guesses, false);
        };

        let tiles = judge(guess, target);
        if tiles == [Tile::Correct; 5] {
            return (guesses, guesses <= 6);
        }

        if guesses >= 6 {
            return (guesses, false);
        }

        state.record(guess, &tiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconIndex;
    use crate::solver::Scoring;

    fn lexicon() -> LexiconIndex {
        LexiconIndex::build([
            "crane", "slate", "irate", "crate", "grate", "brave", "pilot", "sound",
        ])
        .unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let index = lexicon();
        let engine = Engine::new(&index, Scoring::Positional);
        let targets: Vec<Word> = index.words().to_vec();

        let result = run_benchmark(&engine, &targets);

        assert_eq!(result.total_words, 8);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let index = lexicon();
        let engine = Engine::new(&index, Scoring::Positional);
        let targets: Vec<Word> = index.words().to_vec();

        let result = run_benchmark(&engine, &targets);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
    }

    #[test]
    fn benchmark_solves_all_targets_from_own_lexicon() {
        // Every target is in the lexicon and the guess is always a
        // consistent candidate, so self-play must converge
        let index = lexicon();
        let engine = Engine::new(&index, Scoring::Positional);
        let targets: Vec<Word> = index.words().to_vec();

        let result = run_benchmark(&engine, &targets);
        assert_eq!(result.solved, result.total_words);
    }

    #[test]
    fn sample_targets_caps_at_lexicon_size() {
        let index = lexicon();
        let sample = sample_targets(index.words(), 100);
        assert_eq!(sample.len(), 8);

        let sample = sample_targets(index.words(), 3);
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn metrics_consistency() {
        let index = lexicon();
        let engine = Engine::new(&index, Scoring::Positional);
        let targets: Vec<Word> = index.words().to_vec();

        let result = run_benchmark(&engine, &targets);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }
}
