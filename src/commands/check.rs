//! Check command
//!
//! Evaluates one guess against a secret supplied on the command line.

use crate::core::{CODE_LENGTH, Code, DigitMark, Feedback};
use crate::round::GuessError;
use std::fmt;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Code,
    pub secret: Code,
    pub feedback: Feedback,
    pub marks: [DigitMark; CODE_LENGTH],
}

/// A rejected `check` argument, tagged with which one it was
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    Guess { input: String, error: GuessError },
    Secret { input: String, error: GuessError },
}

impl CheckError {
    #[must_use]
    pub const fn guess_error(&self) -> GuessError {
        match self {
            Self::Guess { error, .. } | Self::Secret { error, .. } => *error,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess { input, error } => write!(f, "Invalid guess '{input}': {error}"),
            Self::Secret { input, error } => write!(f, "Invalid secret '{input}': {error}"),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Guess { error, .. } | Self::Secret { error, .. } => Some(error),
        }
    }
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns [`CheckError`] naming the first argument that is not 4 distinct
/// digits.
pub fn check_guess(guess: &str, secret: &str) -> Result<CheckResult, CheckError> {
    let guess = Code::parse(guess.trim()).map_err(|e| CheckError::Guess {
        input: guess.to_string(),
        error: e.into(),
    })?;
    let secret = Code::parse(secret.trim()).map_err(|e| CheckError::Secret {
        input: secret.to_string(),
        error: e.into(),
    })?;

    Ok(CheckResult {
        guess,
        secret,
        feedback: Feedback::evaluate(&guess, &secret),
        marks: DigitMark::classify(&guess, &secret),
    })
}
