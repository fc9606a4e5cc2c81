//! Logger setup
//!
//! Uses the `log` facade with `env_logger`. `RUST_LOG` overrides the default
//! level. Terminal modes that own the screen (the TUI) only log when
//! `CODECRACK_LOG` names a file, so log lines never corrupt the display.

use env_logger::{Builder, Env, Target};
use std::fs::File;

/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "CODECRACK_LOG";

/// Where log output is allowed to go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// stderr, or the `CODECRACK_LOG` file when set
    Stderr,
    /// only the `CODECRACK_LOG` file; disabled when it is unset
    FileOnly,
}

/// Default filter for a verbosity flag
#[must_use]
pub const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Initialise the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, sink: LogSink) {
    let env = Env::default().default_filter_or(default_level(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_secs();

    match std::env::var(LOG_FILE_ENV).ok() {
        Some(path) => match File::create(&path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
                builder.write_style(env_logger::WriteStyle::Never);
            }
            Err(err) => {
                eprintln!("Warning: failed to create log file {path}: {err}");
                if sink == LogSink::FileOnly {
                    return;
                }
            }
        },
        None if sink == LogSink::FileOnly => return,
        None => {}
    }

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "warn");
    }
}
