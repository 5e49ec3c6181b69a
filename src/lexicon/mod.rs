//! Lexicon index
//!
//! Bulk-loads a word list once and derives the two lookup structures the
//! constraint filter needs: per-position letter buckets and a contains
//! bucket per letter. The index is immutable after [`LexiconIndex::build`];
//! concurrent sessions can share it read-only.

use crate::core::{InvalidWord, Letter, Word};
use log::debug;
use rustc_hash::FxHashSet;

/// Index of a word within the lexicon's insertion order
pub type WordId = u32;

/// The loaded lexicon with its derived letter-bucket indices
#[derive(Debug)]
pub struct LexiconIndex {
    words: Vec<Word>,
    position: [[FxHashSet<WordId>; 26]; 5],
    contains: [FxHashSet<WordId>; 26],
}

impl LexiconIndex {
    /// Build the index from raw word strings
    ///
    /// Validate-then-commit: every entry is parsed before any index state
    /// exists, so a malformed entry fails the whole load and nothing is
    /// committed. Duplicate entries collapse to one, keeping first-seen
    /// order.
    ///
    /// # Errors
    /// Returns [`InvalidWord`] naming the first offending entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_pilot::lexicon::LexiconIndex;
    ///
    /// let index = LexiconIndex::build(["crane", "slate", "crane"]).unwrap();
    /// assert_eq!(index.len(), 2);
    ///
    /// assert!(LexiconIndex::build(["crane", "abcdef"]).is_err());
    /// ```
    pub fn build<I, S>(raw_words: I) -> Result<Self, InvalidWord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed: Vec<Word> = raw_words
            .into_iter()
            .map(|raw| Word::new(raw.as_ref()))
            .collect::<Result<_, _>>()?;

        let total = parsed.len();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut words: Vec<Word> = Vec::with_capacity(total);
        for word in parsed {
            if seen.insert(word.text().to_owned()) {
                words.push(word);
            }
        }

        let mut position: [[FxHashSet<WordId>; 26]; 5] =
            std::array::from_fn(|_| std::array::from_fn(|_| FxHashSet::default()));
        let mut contains: [FxHashSet<WordId>; 26] =
            std::array::from_fn(|_| FxHashSet::default());

        for (id, word) in words.iter().enumerate() {
            let id = id as WordId;
            for (pos, &letter) in word.letters().iter().enumerate() {
                position[pos][letter.index()].insert(id);
                contains[letter.index()].insert(id);
            }
        }

        debug!(
            "indexed {} words ({} duplicates dropped)",
            words.len(),
            total - words.len()
        );

        Ok(Self {
            words,
            position,
            contains,
        })
    }

    /// Number of unique words in the lexicon
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the lexicon is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Look up a word by id
    ///
    /// # Panics
    /// Panics if the id is out of range.
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id as usize]
    }

    /// Words with `letter` at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn position_bucket(&self, position: usize, letter: Letter) -> &FxHashSet<WordId> {
        &self.position[position][letter.index()]
    }

    /// Words containing `letter` anywhere
    #[must_use]
    pub fn contains_bucket(&self, letter: Letter) -> &FxHashSet<WordId> {
        &self.contains[letter.index()]
    }
}
