//! Round orchestration
//!
//! `RoundState` is the pure transition layer; `Session` is the single
//! mutable owner a front end keeps between events.

mod error;
mod session;
mod state;

pub use error::GuessError;
pub use session::Session;
pub use state::{GuessRecord, RoundState, RoundStatus};
