//! Core domain types for the lock code game
//!
//! This module contains the fundamental domain types and performs no I/O.
//! Everything here is pure and deterministic apart from `Code::generate`,
//! which only consumes the randomness it is handed.

mod code;
mod feedback;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use feedback::{DigitMark, Feedback};
