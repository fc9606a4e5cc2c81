//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_summary, marks_to_emoji};
use crate::commands::{AuditResult, CheckResult};
use crate::core::DigitMark;
use crate::round::GuessRecord;
use colored::{ColoredString, Colorize};

/// Colour a single digit by its mark
#[must_use]
pub fn colored_digit(digit: u8, mark: DigitMark) -> ColoredString {
    let tile = format!(" {digit} ");
    match mark {
        DigitMark::Exact => tile.black().on_green().bold(),
        DigitMark::Present => tile.white().on_blue().bold(),
        DigitMark::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as coloured digit tiles
#[must_use]
pub fn colored_tiles(digits: impl IntoIterator<Item = (u8, DigitMark)>) -> String {
    digits
        .into_iter()
        .map(|(d, m)| colored_digit(d, m).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One history line: tiles followed by the counts
#[must_use]
pub fn format_record(index: usize, record: &GuessRecord) -> String {
    format!(
        "{:>3}. {}  {}",
        index,
        colored_tiles(record.digits_with_marks()),
        feedback_summary(record.feedback())
    )
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Guess {} against secret {}",
        result.guess.to_string().bright_yellow().bold(),
        result.secret.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(50).cyan());

    let tiles = colored_tiles(result.guess.digits().into_iter().zip(result.marks));
    println!("\n  {tiles}   {}", marks_to_emoji(&result.marks));
    println!("  {}", feedback_summary(result.feedback));

    if result.feedback.is_solved() {
        println!("\n{}", "✅ Code cracked!".green().bold());
    }
}

/// Print the result of a generator audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Codes drawn:      {}", result.total);
    println!(
        "   Invalid codes:    {}",
        if result.invalid == 0 {
            "0".green()
        } else {
            result.invalid.to_string().red().bold()
        }
    );
    println!(
        "   Distinct codes:   {} of {}",
        result.distinct,
        crate::commands::audit::DISTINCT_CODES
    );
    println!(
        "   Max deviation:    {}",
        format!("{:.2}%", result.max_deviation_pct()).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.0}", result.codes_per_second);

    println!("\n📈 {}", "Digit frequency by position:".bright_cyan().bold());
    let max = result
        .position_counts
        .iter()
        .flatten()
        .copied()
        .max()
        .unwrap_or(0) as f64;

    for (position, counts) in result.position_counts.iter().enumerate() {
        println!("   Position {}:", position + 1);
        for (digit, &count) in counts.iter().enumerate() {
            let bar = create_progress_bar(count as f64, max, 30);
            println!("     {digit}: {} {count:7}", bar.green());
        }
    }

    println!();
    if result.passed() {
        println!("{}", "✅ Every code had 4 distinct digits".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} invalid codes generated", result.invalid)
                .red()
                .bold()
        );
    }
}
