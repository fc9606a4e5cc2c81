//! CodeCrack
//!
//! A deduction game: crack a 4-digit lock code whose digits are all
//! different, guided by feedback on every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use codecrack::core::{Code, Feedback};
//! use codecrack::round::RoundState;
//!
//! // Evaluate a guess directly
//! let secret = Code::parse("1234").unwrap();
//! let guess = Code::parse("4321").unwrap();
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.present_wrong_position, 4);
//!
//! // Or drive a round
//! let round = RoundState::with_secret(secret);
//! let round = round.submit_guess("1234").unwrap();
//! assert!(round.is_won());
//! ```

// Core domain types
pub mod core;

// Round state machine and session
pub mod round;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
