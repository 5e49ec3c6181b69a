//! Word lists
//!
//! Provides the embedded default lexicon compiled into the binary, plus a
//! file loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
