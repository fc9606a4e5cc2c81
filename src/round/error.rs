//! Guess submission errors
//!
//! Every variant is a user-correctable input problem. The `Display` text is
//! shown to the player verbatim.

use crate::core::CodeError;
use std::fmt;

/// Why a submitted guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Not exactly 4 characters in `0`-`9`
    InvalidFormat,
    /// A digit appears more than once
    DuplicateDigits,
    /// The round is already won; only a restart is accepted
    RoundWon,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "Please enter a valid 4-digit code."),
            Self::DuplicateDigits => write!(f, "The digits must be different."),
            Self::RoundWon => write!(f, "The code is already cracked. Start a new round."),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<CodeError> for GuessError {
    fn from(err: CodeError) -> Self {
        match err {
            CodeError::InvalidFormat => Self::InvalidFormat,
            CodeError::DuplicateDigits => Self::DuplicateDigits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_errors_map_one_to_one() {
        assert_eq!(
            GuessError::from(CodeError::InvalidFormat),
            GuessError::InvalidFormat
        );
        assert_eq!(
            GuessError::from(CodeError::DuplicateDigits),
            GuessError::DuplicateDigits
        );
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            GuessError::InvalidFormat.to_string(),
            "Please enter a valid 4-digit code."
        );
        assert_eq!(
            GuessError::DuplicateDigits.to_string(),
            "The digits must be different."
        );
    }
}
