//! Accumulated guess feedback
//!
//! [`GuessState`] collects the three kinds of per-letter facts a game
//! reveals: letters confirmed at a position, letters present but not at
//! certain positions, and letters absent from the answer. Facts are only
//! ever added; a session discards the whole state when it ends.

use super::{Letter, Word};

/// Per-tile feedback for one guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Letter not in the answer (subject to duplicate-letter exceptions)
    Absent,
    /// Letter in the answer, but not at this position
    Present,
    /// Letter at exactly this position
    Correct,
}

impl Tile {
    /// Parse a single feedback character
    ///
    /// Accepts `g` (green), `y` (yellow), and `x`/`-`/`_` (gray).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Self::Correct),
            'y' => Some(Self::Present),
            'x' | '-' | '_' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Parse a 5-character feedback row like `"gyx-g"`
#[must_use]
pub fn parse_tiles(input: &str) -> Option<[Tile; 5]> {
    let mut tiles = [Tile::Absent; 5];
    let mut count = 0;

    for (i, c) in input.chars().enumerate() {
        if i >= 5 {
            return None;
        }
        tiles[i] = Tile::from_char(c)?;
        count += 1;
    }

    if count == 5 { Some(tiles) } else { None }
}

/// Judge a guess against a known answer
///
/// Standard Wordle semantics: exact matches first, then misplaced letters
/// consume remaining answer occurrences left to right, everything else is
/// absent. Duplicate guess letters beyond the answer's count come back
/// absent.
#[must_use]
pub fn judge(guess: &Word, answer: &Word) -> [Tile; 5] {
    let mut tiles = [Tile::Absent; 5];
    let mut remaining = [0u8; 26];

    for i in 0..5 {
        if guess.letter_at(i) == answer.letter_at(i) {
            tiles[i] = Tile::Correct;
        } else {
            remaining[answer.letter_at(i).index()] += 1;
        }
    }

    for i in 0..5 {
        if tiles[i] == Tile::Correct {
            continue;
        }
        let idx = guess.letter_at(i).index();
        if remaining[idx] > 0 {
            tiles[i] = Tile::Present;
            remaining[idx] -= 1;
        }
    }

    tiles
}

/// A letter known to be in the answer, with the positions it is not at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentEntry {
    /// The confirmed-present letter
    pub letter: Letter,
    /// Positions the letter is known not to occupy
    pub excluded: Vec<usize>,
}

/// Accumulated feedback for one solving session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessState {
    correct: Vec<(Letter, usize)>,
    present: Vec<PresentEntry>,
    absent: Vec<Letter>,
}

impl GuessState {
    /// Create an empty state (start of a session)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no facts have been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.present.is_empty() && self.absent.is_empty()
    }

    /// Letters confirmed at an exact position
    #[must_use]
    pub fn correct(&self) -> &[(Letter, usize)] {
        &self.correct
    }

    /// Letters confirmed present with their excluded positions
    #[must_use]
    pub fn present(&self) -> &[PresentEntry] {
        &self.present
    }

    /// Letters confirmed absent
    #[must_use]
    pub fn absent(&self) -> &[Letter] {
        &self.absent
    }

    /// Record a confirmed (letter, position) fact
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn add_correct(&mut self, letter: Letter, position: usize) {
        assert!(position < 5, "position must be 0-4");
        if !self.correct.contains(&(letter, position)) {
            self.correct.push((letter, position));
        }
    }

    /// Record that a letter is present but not at the given position
    ///
    /// A letter accumulates excluded positions across turns.
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn add_present(&mut self, letter: Letter, excluded_position: usize) {
        assert!(excluded_position < 5, "position must be 0-4");
        if let Some(entry) = self.present.iter_mut().find(|e| e.letter == letter) {
            if !entry.excluded.contains(&excluded_position) {
                entry.excluded.push(excluded_position);
            }
        } else {
            self.present.push(PresentEntry {
                letter,
                excluded: vec![excluded_position],
            });
        }
    }

    /// Record that a letter is absent from the answer
    pub fn add_absent(&mut self, letter: Letter) {
        if !self.absent.contains(&letter) {
            self.absent.push(letter);
        }
    }

    /// True if the letter has a confirmed occurrence (correct or present)
    #[must_use]
    pub fn knows_occurrence(&self, letter: Letter) -> bool {
        self.correct.iter().any(|&(l, _)| l == letter)
            || self.present.iter().any(|e| e.letter == letter)
    }

    /// Find a letter listed both absent and correct/present, if any
    ///
    /// Such a state is a caller error: absent only applies to letters with
    /// no confirmed occurrence anywhere in the answer.
    #[must_use]
    pub fn contradiction(&self) -> Option<Letter> {
        self.absent
            .iter()
            .copied()
            .find(|&letter| self.knows_occurrence(letter))
    }

    /// Fold a judged guess row into the state
    ///
    /// Correct and present tiles are recorded first so that an absent tile
    /// for a duplicated letter does not mark a confirmed letter absent.
    pub fn record(&mut self, guess: &Word, tiles: &[Tile; 5]) {
        for (i, tile) in tiles.iter().enumerate() {
            let letter = guess.letter_at(i);
            match tile {
                Tile::Correct => self.add_correct(letter, i),
                Tile::Present => self.add_present(letter, i),
                Tile::Absent => {}
            }
        }

        for (i, tile) in tiles.iter().enumerate() {
            if *tile != Tile::Absent {
                continue;
            }
            let letter = guess.letter_at(i);
            if !self.knows_occurrence(letter) {
                self.add_absent(letter);
            }
        }
    }
}
