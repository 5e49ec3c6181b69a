//! Filtering, scoring, and guess selection
//!
//! The engine proper: constraint filtering over the lexicon index, the two
//! scoring strategies, and top-candidate selection.

mod engine;
pub mod filter;
pub mod score;
pub mod select;

pub use engine::{Engine, EngineError};
pub use filter::candidates;
pub use score::{
    CommonalityError, CommonalityTable, LetterWeights, NEUTRAL_COMMONALITY, PositionCounts,
    PositionalScorer, Scorer, Scoring,
};
pub use select::select_next;
