//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI. Reads from any `BufRead` and
//! writes to any `Write`, so it can be driven from tests.

use crate::core::Feedback;
use crate::output::format_record;
use crate::output::formatters::feedback_summary;
use crate::round::Session;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

enum Command<'a> {
    Quit,
    Restart,
    History,
    Help,
    Guess(&'a str),
}

fn parse_command(input: &str) -> Command<'_> {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" | "restart" => Command::Restart,
        "history" | "h" => Command::History,
        "help" | "?" => Command::Help,
        _ => Command::Guess(input),
    }
}

/// Run the simple interactive CLI mode
///
/// Returns when the player quits, declines another round, or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, W>(session: &mut Session<R>, mut input: I, out: &mut W) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════╗")?;
    writeln!(out, "║               CodeCrack - Text Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════╝\n")?;
    print_help(out)?;

    loop {
        if session.round().is_won() {
            let answer = prompt(&mut input, out, "Play again? (yes/no)")?;
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    session.restart();
                    writeln!(out, "\n🔄 New round started!\n")?;
                    continue;
                }
                _ => break,
            }
        }

        let attempt = session.round().history().len() + 1;
        let Some(line) = prompt(&mut input, out, &format!("Attempt {attempt}"))? else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::Restart => {
                session.restart();
                writeln!(out, "\n🔄 New round started! A fresh code is locked in.\n")?;
            }
            Command::History => print_history(session, out)?,
            Command::Help => print_help(out)?,
            Command::Guess(guess) => match session.submit(guess) {
                Ok(_) if session.round().is_won() => print_win(session, out)?,
                Ok(_) => {
                    if let Some(record) = session.round().last_record() {
                        writeln!(out, "{}", format_record(attempt, record))?;
                    }
                }
                Err(err) => writeln!(out, "❌ {err}")?,
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Guess the 4-digit lock code. Every digit is different.")?;
    writeln!(out, "After each guess every digit is marked:")?;
    writeln!(out, "  - green: right digit, right place")?;
    writeln!(out, "  - blue:  digit is in the code somewhere else")?;
    writeln!(out, "  - gray:  digit is not in the code")?;
    writeln!(
        out,
        "Commands: 'new' to restart, 'history' to list guesses, 'quit' to exit\n"
    )
}

fn print_history<R: Rng, W: Write>(session: &Session<R>, out: &mut W) -> io::Result<()> {
    let history = session.round().history();
    if history.is_empty() {
        return writeln!(out, "No guesses yet this round.");
    }

    for (i, record) in history.iter().enumerate() {
        writeln!(out, "{}", format_record(i + 1, record))?;
    }
    Ok(())
}

fn print_win<R: Rng, W: Write>(session: &Session<R>, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "   🔓  You successfully cracked the code!  🔓   "
            .bright_green()
            .bold()
    )?;
    if let Some(secret) = session.round().revealed_secret() {
        writeln!(
            out,
            "   The code was {}",
            secret.to_string().bright_yellow().bold()
        )?;
    }
    writeln!(out, "   {}", feedback_summary(Feedback::SOLVED))?;
    writeln!(out, "{}\n", "═".repeat(50).bright_cyan())
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
