//! Error types shared by every cover medium.

use thiserror::Error;

/// Why a stego medium could not be decoded under the strict policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("terminator not found")]
    TerminatorNotFound,

    #[error("invalid character code {code} at byte {position}")]
    InvalidCharacterCode { code: u8, position: usize },
}

/// Errors that can occur while hiding or revealing a message.
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Cover too small to hide message: need {required} units, have {available}")]
    InsufficientCapacity { required: usize, available: usize },

    #[error("Unsupported medium format: {0}")]
    UnsupportedMediumFormat(String),

    #[error("Malformed stego medium: {0}")]
    MalformedStego(MalformedReason),

    #[error("Character {character:?} at position {position} does not fit in 8 bits")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MalformedReason> for StegoError {
    fn from(reason: MalformedReason) -> Self {
        StegoError::MalformedStego(reason)
    }
}
