//! Core domain types
//!
//! Letters, validated words, judged feedback tiles, and the accumulated
//! per-session guess state. Everything here is pure data with no I/O.

mod letter;
mod state;
mod word;

pub use letter::Letter;
pub use state::{GuessState, PresentEntry, Tile, judge, parse_tiles};
pub use word::{InvalidWord, Word};
