//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;

pub use audit::{AuditResult, run_audit};
pub use check::{CheckError, CheckResult, check_guess};
pub use simple::run_simple;
