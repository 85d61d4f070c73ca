use crate::cube::{Color, Face};
use thiserror::Error;

/// A scramble or solution token that is not one of the 18 face turns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid move token {token:?}")]
pub struct InvalidMoveToken {
    pub token: String,
}

impl InvalidMoveToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        InvalidMoveToken {
            token: token.into(),
        }
    }
}

/// A cube state that cannot be mapped to or from the face-label encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("centers of {first} and {second} are both {color}")]
    DuplicateCenter {
        color: Color,
        first: Face,
        second: Face,
    },
    #[error("sticker {face}{index} is {color}, which is not the color of any center")]
    UnknownColor {
        face: Face,
        index: usize,
        color: Color,
    },
    #[error("encoded state has {0} characters, expected 54")]
    WrongLength(usize),
    #[error("unknown face label {label:?} at position {position}")]
    UnknownLabel { label: char, position: usize },
    #[error("face {0} is missing")]
    MissingFace(Face),
    #[error("face {face} has {count} stickers, expected 9")]
    StickerCount { face: Face, count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveFailure {
    #[error("no solution within {max_depth} moves")]
    NoSolution { max_depth: u8 },
    #[error("solver rejected the state: {0}")]
    Malformed(#[from] EncodingError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no scramble provided")]
    EmptyScramble,
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveToken),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("solving failed: {0}")]
    Solve(#[from] SolveFailure),
}
