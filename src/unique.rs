use std::fmt::Display;

pub mod frequency;
pub mod pairwise;
pub mod presence;

/// Number of slots in the presence table (7-bit code points, 0-127).
pub const PRESENCE_TABLE_SIZE: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniqueCharsError {
    CodePointOutOfRange { ch: char, index: usize },
}

impl Display for UniqueCharsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CodePointOutOfRange { ch, index } => {
                write!(f, "Character {ch:?} at index {index} is out of range (0-127)")
            }
        }
    }
}

impl std::error::Error for UniqueCharsError {}
