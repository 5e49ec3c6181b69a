//! Letter alphabet
//!
//! A closed enumeration of the 26 lowercase ASCII letters. Using an enum
//! instead of raw chars means letter-indexed tables can be exhaustive
//! `[T; 26]` arrays with no membership checks at lookup time.

use std::fmt;

/// One of the 26 lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// All 26 letters in alphabetical order.
    pub const ALL: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Convert a char to a Letter
    ///
    /// Returns `None` unless the char is a lowercase ASCII letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Self::ALL[(c as u8 - b'a') as usize])
        } else {
            None
        }
    }

    /// Convert a byte to a Letter
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_char(b as char)
    }

    /// Dense index in `0..26`, suitable for array lookups
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The lowercase char this letter represents
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
