//! CodeCrack - CLI
//!
//! Lock code deduction game with TUI and text modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use codecrack::{
    commands::{check_guess, run_audit, run_simple},
    logging::{self, LogSink},
    output::{print_audit_result, print_check_result},
    round::Session,
};
use std::io;

#[derive(Parser)]
#[command(
    name = "codecrack",
    about = "Crack a 4-digit lock code with distinct digits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the code generator (reproducible rounds)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging (to stderr, or the file named by CODECRACK_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line-based, no TUI)
    Simple,

    /// Evaluate a guess against a known secret
    Check {
        /// The guessed code
        guess: String,

        /// The secret code
        secret: String,
    },

    /// Draw many codes and verify the generator
    Audit {
        /// Number of codes to draw
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let sink = match command {
        Commands::Play => LogSink::FileOnly,
        _ => LogSink::Stderr,
    };
    logging::init(cli.verbose, sink);

    match command {
        Commands::Play => run_play_command(cli.seed),
        Commands::Simple => run_simple_command(cli.seed),
        Commands::Check { guess, secret } => run_check_command(&guess, &secret),
        Commands::Audit { count } => {
            run_audit_command(count, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use codecrack::interactive::{App, run_tui};

    let app = App::new(Session::from_seed(seed));
    run_tui(app)
}

fn run_simple_command(seed: Option<u64>) -> Result<()> {
    let mut session = Session::from_seed(seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    run_simple(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_check_command(guess: &str, secret: &str) -> Result<()> {
    let result = check_guess(guess, secret)?;
    print_check_result(&result);
    Ok(())
}

fn run_audit_command(count: usize, seed: Option<u64>) {
    println!("Drawing {count} codes...");
    let result = run_audit(count, seed, true);
    print_audit_result(&result);
}
