//! Game session
//!
//! Holds the one mutable slot the presentation layer needs: the current
//! round, the RNG that seeds new rounds, and the standing error message.
//! Events are processed one at a time; each session is independent.

use super::{GuessError, RoundState};
use crate::core::Feedback;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A player's session across any number of rounds
pub struct Session<R: Rng = StdRng> {
    rng: R,
    round: RoundState,
    error: Option<GuessError>,
    rounds_started: usize,
}

impl Session<StdRng> {
    /// Create a session from an optional seed
    ///
    /// With `Some(seed)` every round of the session is reproducible; with
    /// `None` the RNG is seeded from OS entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!("Seeding session RNG with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Session<R> {
    /// Create a session and start its first round
    pub fn new(mut rng: R) -> Self {
        let round = RoundState::new(&mut rng);
        Self::from_round(rng, round)
    }

    /// Create a session around an existing round
    ///
    /// Later restarts draw from `rng` as usual.
    pub fn from_round(rng: R, round: RoundState) -> Self {
        info!("Round 1 started");

        Self {
            rng,
            round,
            error: None,
            rounds_started: 1,
        }
    }

    /// Submit a guess typed by the player
    ///
    /// Surrounding whitespace is ignored. A rejected guess becomes the
    /// standing error and leaves the round untouched; an accepted one clears
    /// the standing error.
    ///
    /// # Errors
    /// Returns the `GuessError` that was also stored as the standing error.
    pub fn submit(&mut self, input: &str) -> Result<Feedback, GuessError> {
        let input = input.trim();

        match self.round.submit_guess(input) {
            Ok(next) => {
                let feedback = next
                    .last_record()
                    .map_or(Feedback::SOLVED, |record| record.feedback());

                debug!(
                    "Guess {input}: {} exact, {} misplaced, {} absent",
                    feedback.exact_matches, feedback.present_wrong_position, feedback.absent
                );
                if next.is_won() {
                    info!("Round {} won", self.rounds_started);
                }

                self.round = next;
                self.error = None;
                Ok(feedback)
            }
            Err(err) => {
                debug!("Rejected guess {input:?}: {err}");
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Throw away the current round and start a fresh one
    pub fn restart(&mut self) {
        self.round = RoundState::new(&mut self.rng);
        self.error = None;
        self.rounds_started += 1;
        info!("Round {} started", self.rounds_started);
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// The last rejection, until the next accepted guess or restart
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<GuessError> {
        self.error
    }

    /// Number of rounds started in this session, including the current one
    #[inline]
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    fn session_with_secret(secret: &str) -> Session {
        let round = RoundState::with_secret(Code::parse(secret).unwrap());
        Session::from_round(StdRng::seed_from_u64(0), round)
    }

    #[test]
    fn seeded_sessions_draw_the_same_rounds() {
        let a = Session::from_seed(Some(1234));
        let b = Session::from_seed(Some(1234));
        assert_eq!(a.round(), b.round());
    }

    #[test]
    fn submit_trims_input() {
        let mut session = session_with_secret("1234");
        let feedback = session.submit("  5671 \n").unwrap();

        assert_eq!(feedback.exact_matches, 0);
        assert_eq!(feedback.present_wrong_position, 1);
        assert_eq!(feedback.absent, 3);
        assert_eq!(session.round().history().len(), 1);
    }

    #[test]
    fn rejected_guess_sets_standing_error() {
        let mut session = session_with_secret("1234");
        session.submit("5678").unwrap();

        assert_eq!(session.submit("1123"), Err(GuessError::DuplicateDigits));
        assert_eq!(session.error(), Some(GuessError::DuplicateDigits));
        assert_eq!(session.round().history().len(), 1);

        session.submit("9876").unwrap();
        assert_eq!(session.error(), None);
        assert_eq!(session.round().history().len(), 2);
    }

    #[test]
    fn winning_guess_reports_solved_feedback() {
        let mut session = session_with_secret("4071");
        session.submit("4170").unwrap();

        assert_eq!(session.submit("4071"), Ok(Feedback::SOLVED));
        assert!(session.round().is_won());
        assert!(session.round().history().is_empty());
        assert_eq!(session.submit("4071"), Err(GuessError::RoundWon));
    }

    #[test]
    fn restart_clears_error_and_counts_rounds() {
        let mut session = session_with_secret("1234");
        session.submit("1234").unwrap();
        let _ = session.submit("12");
        assert!(session.error().is_some());

        session.restart();
        assert_eq!(session.error(), None);
        assert!(!session.round().is_won());
        assert!(session.round().history().is_empty());
        assert_eq!(session.rounds_started(), 2);
    }
}
