//! Wordle word representation
//!
//! A Word is an exact sequence of 5 [`Letter`]s. Construction from raw text
//! is the only place the alphabet invariant is checked; everything downstream
//! can rely on it.

use super::Letter;
use std::fmt;

/// A validated 5-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [Letter; 5],
    text: String,
}

/// Error for a lexicon or corpus entry that is not a valid 5-letter word
///
/// Always carries the offending string so load failures can name the entry.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidWord {
    /// Entry is not exactly 5 characters long
    Length {
        /// The offending entry
        word: String,
        /// Its actual length
        len: usize,
    },
    /// Entry contains something outside `a-z`
    Character {
        /// The offending entry
        word: String,
        /// The first character outside the alphabet
        found: char,
    },
    /// Corpus entry has a negative or non-finite frequency
    Frequency {
        /// The offending entry
        word: String,
    },
}

impl fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { word, len } => {
                write!(f, "'{word}' must be exactly 5 letters, got {len}")
            }
            Self::Character { word, found } => {
                write!(f, "'{word}' contains '{found}', expected only letters a-z")
            }
            Self::Frequency { word } => {
                write!(f, "'{word}' has a negative or non-finite frequency")
            }
        }
    }
}

impl std::error::Error for InvalidWord {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns [`InvalidWord`] if the length is not exactly 5 or any
    /// character falls outside `a-z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_pilot::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("abcdef").is_err());
    /// assert!(Word::new("ab1de").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidWord> {
        let text: String = text.into().to_lowercase();

        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 5 {
            return Err(InvalidWord::Length {
                word: text,
                len: chars.len(),
            });
        }

        let mut letters = [Letter::A; 5];
        for (i, &c) in chars.iter().enumerate() {
            match Letter::from_char(c) {
                Some(letter) => letters[i] = letter,
                None => {
                    return Err(InvalidWord::Character {
                        word: text,
                        found: c,
                    });
                }
            }
        }

        Ok(Self { letters, text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a letter array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; 5] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate over the positions where a letter occurs
    pub fn positions_of(&self, letter: Letter) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == letter)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
