//! Round state machine
//!
//! `RoundState` is an immutable value: `submit_guess` returns the next state
//! and `restart` replaces it wholesale. The caller stores whichever value it
//! gets back.

use super::GuessError;
use crate::core::{CODE_LENGTH, Code, DigitMark, Feedback};
use rand::Rng;
use std::fmt;

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
}

/// One evaluated attempt
///
/// The per-digit marks are computed when the guess is evaluated, so readers
/// of the history never need the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Code,
    feedback: Feedback,
    marks: [DigitMark; CODE_LENGTH],
}

impl GuessRecord {
    fn new(guess: Code, secret: &Code) -> Self {
        Self {
            guess,
            feedback: Feedback::evaluate(&guess, secret),
            marks: DigitMark::classify(&guess, secret),
        }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> [DigitMark; CODE_LENGTH] {
        self.marks
    }

    /// Guess digits paired with their marks, in position order
    pub fn digits_with_marks(&self) -> impl Iterator<Item = (u8, DigitMark)> + '_ {
        self.guess.digits().into_iter().zip(self.marks)
    }
}

/// State of a single round
///
/// Owns the secret exclusively. While the round is being played no accessor
/// exposes it, and `Debug` output redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundState {
    secret: Code,
    history: Vec<GuessRecord>,
    status: RoundStatus,
}

impl RoundState {
    /// Start a round with a freshly generated secret
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(Code::generate(rng))
    }

    /// Start a round with a known secret
    #[must_use]
    pub const fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            history: Vec::new(),
            status: RoundStatus::Playing,
        }
    }

    /// Validate and evaluate a guess, returning the next state
    ///
    /// `self` is left untouched, so a rejected guess needs no rollback. On a
    /// win the history is cleared and the status flag is the only record of
    /// the victory until the next restart.
    ///
    /// # Errors
    /// - `GuessError::RoundWon` if the round is already won
    /// - `GuessError::InvalidFormat` / `DuplicateDigits` if `input` is not a
    ///   valid code
    ///
    /// # Examples
    /// ```
    /// use codecrack::core::Code;
    /// use codecrack::round::{GuessError, RoundState, RoundStatus};
    ///
    /// let round = RoundState::with_secret(Code::parse("1234").unwrap());
    ///
    /// let round = round.submit_guess("5678").unwrap();
    /// assert_eq!(round.history().len(), 1);
    ///
    /// assert_eq!(round.submit_guess("12a4"), Err(GuessError::InvalidFormat));
    ///
    /// let round = round.submit_guess("1234").unwrap();
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// assert!(round.history().is_empty());
    /// ```
    pub fn submit_guess(&self, input: &str) -> Result<Self, GuessError> {
        if self.status == RoundStatus::Won {
            return Err(GuessError::RoundWon);
        }

        let guess = Code::parse(input)?;
        let record = GuessRecord::new(guess, &self.secret);

        let mut next = self.clone();
        if record.feedback().is_solved() {
            next.history.clear();
            next.status = RoundStatus::Won;
        } else {
            next.history.push(record);
        }

        Ok(next)
    }

    /// Discard this round and start a new one
    #[must_use]
    pub fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self::new(rng)
    }

    /// Evaluated attempts, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The most recent evaluated attempt, if any
    #[must_use]
    pub fn last_record(&self) -> Option<&GuessRecord> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    /// The secret, but only once the round is won
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.is_won().then_some(&self.secret)
    }
}

impl fmt::Debug for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = self
            .revealed_secret()
            .map_or_else(|| "****".to_string(), Code::to_string);

        f.debug_struct("RoundState")
            .field("secret", &secret)
            .field("history", &self.history)
            .field("status", &self.status)
            .finish()
    }
}
