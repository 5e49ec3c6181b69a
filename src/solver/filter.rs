//! Constraint filter
//!
//! Narrows the lexicon to the words consistent with an accumulated
//! [`GuessState`]. Pure and deterministic: never mutates the index, and
//! returns candidates in lexicon insertion order so downstream tie-breaks
//! are reproducible.

use crate::core::{GuessState, Word};
use crate::lexicon::{LexiconIndex, WordId};
use log::debug;
use rustc_hash::FxHashSet;

/// Candidate words consistent with every fact in `state`
///
/// An empty result is a legitimate outcome (contradictory feedback or an
/// exhausted lexicon), reported upstream as `NoCandidatesRemaining` by the
/// selector rather than handled here.
#[must_use]
pub fn candidates<'a>(index: &'a LexiconIndex, state: &GuessState) -> Vec<&'a Word> {
    let mut ids: Vec<WordId> = candidate_ids(index, state).into_iter().collect();
    ids.sort_unstable();
    ids.into_iter().map(|id| index.word(id)).collect()
}

fn candidate_ids(index: &LexiconIndex, state: &GuessState) -> FxHashSet<WordId> {
    // Stage 1: correct-position narrowing. Intersect the position bucket of
    // every confirmed (letter, position); the whole lexicon when nothing is
    // confirmed yet.
    let mut current: FxHashSet<WordId> = match state.correct().split_first() {
        None => (0..index.len() as WordId).collect(),
        Some((&(letter, position), rest)) => {
            let mut set = index.position_bucket(position, letter).clone();
            for &(letter, position) in rest {
                let bucket = index.position_bucket(position, letter);
                set.retain(|id| bucket.contains(id));
            }
            set
        }
    };
    debug!("correct stage: {} candidates", current.len());

    // Stage 2: presence narrowing. The letter must occur somewhere, but not
    // at any of its excluded positions.
    for entry in state.present() {
        let contains = index.contains_bucket(entry.letter);
        current.retain(|id| {
            contains.contains(id)
                && !entry
                    .excluded
                    .iter()
                    .any(|&pos| index.position_bucket(pos, entry.letter).contains(id))
        });
    }
    debug!("present stage: {} candidates", current.len());

    // Stage 3: absence narrowing, reconciled per occurrence. An occurrence
    // of an absent letter is tolerated only when a correct entry covers that
    // exact index; a letter that is independently known present is exempt
    // entirely (duplicate-letter feedback).
    for &letter in state.absent() {
        if state.present().iter().any(|e| e.letter == letter) {
            continue;
        }
        current.retain(|&id| {
            index.word(id).positions_of(letter).all(|occurrence| {
                state
                    .correct()
                    .iter()
                    .any(|&(l, p)| l == letter && p == occurrence)
            })
        });
    }
    debug!("absent stage: {} candidates", current.len());

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn index(words: &[&str]) -> LexiconIndex {
        LexiconIndex::build(words).unwrap()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_state_returns_whole_lexicon_in_order() {
        let index = index(&["slate", "crane", "irate"]);
        let state = GuessState::new();

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["slate", "crane", "irate"]);
    }

    #[test]
    fn correct_narrowing_requires_letter_at_position() {
        let index = index(&["apple", "eerie", "crepe"]);
        let mut state = GuessState::new();
        state.add_correct(Letter::E, 1);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["eerie"]);
    }

    #[test]
    fn multiple_correct_entries_intersect() {
        let index = index(&["crane", "crepe", "crate", "slate"]);
        let mut state = GuessState::new();
        state.add_correct(Letter::C, 0);
        state.add_correct(Letter::E, 4);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["crane", "crepe", "crate"]);
    }

    #[test]
    fn present_and_absent_narrowing() {
        // present ('a', excluded [0]) + absent ['z']
        let index = index(&["abcde", "zabcd", "bcdea"]);
        let mut state = GuessState::new();
        state.add_present(Letter::A, 0);
        state.add_absent(Letter::Z);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["bcdea"]);
    }

    #[test]
    fn present_requires_letter_somewhere() {
        let index = index(&["crane", "built", "slate"]);
        let mut state = GuessState::new();
        state.add_present(Letter::A, 4);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["crane", "slate"]);
    }

    #[test]
    fn present_excludes_all_listed_positions() {
        let index = index(&["abide", "blade", "cable"]);
        let mut state = GuessState::new();
        state.add_present(Letter::A, 0);
        state.add_present(Letter::A, 2);

        // 'a' at 0 (abide) and at 2 (blade) both excluded; cable has a at 1
        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["cable"]);
    }

    #[test]
    fn absent_excludes_words_containing_letter() {
        let index = index(&["crane", "built", "slate"]);
        let mut state = GuessState::new();
        state.add_absent(Letter::A);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["built"]);
    }

    #[test]
    fn absent_occurrence_covered_by_correct_survives() {
        // 'e' confirmed at position 1, and also marked absent (duplicate
        // feedback). Words whose only e is at position 1 survive; an extra
        // uncovered e is disqualifying.
        let index = index(&["beast", "belly", "fence", "eerie"]);
        let mut state = GuessState::new();
        state.add_correct(Letter::E, 1);
        state.add_absent(Letter::E);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["beast", "belly"]);
    }

    #[test]
    fn absent_letter_known_present_is_exempt() {
        // 'e' present-but-not-at-0 and absent simultaneously: the present
        // fact wins, words keep their e occurrences
        let index = index(&["crane", "eagle", "built"]);
        let mut state = GuessState::new();
        state.add_present(Letter::E, 0);
        state.add_absent(Letter::E);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["crane"]);
    }

    #[test]
    fn absent_with_correct_same_letter_keeps_covered_words() {
        // absent 'c' with correct 'c' at 0: crane's only c is covered
        let index = index(&["crane", "slate"]);
        let mut state = GuessState::new();
        state.add_correct(Letter::C, 0);
        state.add_absent(Letter::X);
        state.add_absent(Letter::C);

        let result = candidates(&index, &state);
        assert_eq!(texts(&result), vec!["crane"]);
    }

    #[test]
    fn narrowing_is_monotonic() {
        let index = index(&["crane", "crate", "crepe", "slate", "irate"]);

        let mut state = GuessState::new();
        let full = candidates(&index, &state).len();

        state.add_correct(Letter::C, 0);
        let after_correct = candidates(&index, &state).len();

        state.add_present(Letter::E, 2);
        let after_present = candidates(&index, &state).len();

        state.add_absent(Letter::T);
        let after_absent = candidates(&index, &state).len();

        assert!(after_correct <= full);
        assert!(after_present <= after_correct);
        assert!(after_absent <= after_present);
    }

    #[test]
    fn filter_is_idempotent() {
        let index = index(&["crane", "crate", "crepe", "slate"]);
        let mut state = GuessState::new();
        state.add_correct(Letter::C, 0);
        state.add_present(Letter::E, 4);

        let first = candidates(&index, &state);
        let narrowed = LexiconIndex::build(first.iter().map(|w| w.text())).unwrap();
        let second = candidates(&narrowed, &state);

        assert_eq!(texts(&first), texts(&second));
    }
}
