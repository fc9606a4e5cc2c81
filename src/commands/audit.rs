//! Generator audit
//!
//! Draws many codes and checks that every one is valid and that digits are
//! spread evenly over positions.

use crate::core::{CODE_LENGTH, Code};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Number of distinct 4-digit codes with no repeated digit (10·9·8·7)
pub const DISTINCT_CODES: usize = 5040;

/// Codes drawn from one RNG stream
const CHUNK_SIZE: usize = 1024;

/// Result of an audit run
#[derive(Debug)]
pub struct AuditResult {
    pub total: usize,
    pub invalid: usize,
    pub distinct: usize,
    /// `position_counts[position][digit]`
    pub position_counts: [[usize; 10]; CODE_LENGTH],
    pub duration: Duration,
    pub codes_per_second: f64,
}

impl AuditResult {
    /// Largest relative deviation of any (position, digit) count from the
    /// uniform expectation of `total / 10`, as a percentage
    #[must_use]
    pub fn max_deviation_pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let expected = self.total as f64 / 10.0;
        self.position_counts
            .iter()
            .flatten()
            .map(|&count| ((count as f64 - expected).abs() / expected) * 100.0)
            .fold(0.0, f64::max)
    }

    /// Every generated code satisfied the code invariant
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.invalid == 0
    }
}

/// Generate `count` codes in parallel and tally them
///
/// The range is split into fixed-size chunks, each drawn from its own
/// `StdRng` seeded with `seed + chunk index`. With `Some(seed)` the result is
/// the same whatever the thread count; with `None` a base seed is drawn from
/// the thread RNG.
#[must_use]
pub fn run_audit(count: usize, seed: Option<u64>, show_progress: bool) -> AuditResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let base_seed = seed.unwrap_or_else(|| rand::rng().random());
    debug!("Audit base seed {base_seed}");

    let start = Instant::now();

    let codes: Vec<Code> = (0..count.div_ceil(CHUNK_SIZE))
        .into_par_iter()
        .flat_map_iter(|chunk| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(chunk as u64));
            let len = CHUNK_SIZE.min(count - chunk * CHUNK_SIZE);
            let drawn: Vec<Code> = (0..len).map(|_| Code::generate(&mut rng)).collect();
            pb.inc(len as u64);
            drawn
        })
        .collect();

    pb.finish_and_clear();

    let mut invalid = 0;
    let mut seen: FxHashSet<Code> = FxHashSet::default();
    let mut position_counts = [[0usize; 10]; CODE_LENGTH];

    for code in &codes {
        let text = code.to_string();
        if text.len() != CODE_LENGTH || Code::parse(&text).as_ref() != Ok(code) {
            invalid += 1;
            continue;
        }

        seen.insert(*code);
        for (position, digit) in code.digits().into_iter().enumerate() {
            position_counts[position][usize::from(digit)] += 1;
        }
    }

    let duration = start.elapsed();
    debug!("Audited {count} codes in {duration:?}, {invalid} invalid");

    AuditResult {
        total: count,
        invalid,
        distinct: seen.len(),
        position_counts,
        duration,
        codes_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_ten_thousand_codes() {
        let result = run_audit(10_000, Some(42), false);

        assert_eq!(result.total, 10_000);
        assert!(result.passed());
        assert!(result.distinct <= DISTINCT_CODES);

        for counts in &result.position_counts {
            assert_eq!(counts.iter().sum::<usize>(), 10_000);
        }
    }

    #[test]
    fn audit_empty_run() {
        let result = run_audit(0, Some(42), false);
        assert_eq!(result.total, 0);
        assert_eq!(result.distinct, 0);
        assert!(result.max_deviation_pct().abs() < f64::EPSILON);
    }

    #[test]
    fn audit_reaches_every_code_eventually() {
        // 200k draws over 5040 codes leaves a vanishing chance of a miss
        let result = run_audit(200_000, Some(7), false);
        assert_eq!(result.distinct, DISTINCT_CODES);
        assert!(result.max_deviation_pct() < 5.0);
    }

    #[test]
    fn audit_same_seed_same_tallies() {
        let a = run_audit(5_000, Some(2025), false);
        let b = run_audit(5_000, Some(2025), false);

        assert_eq!(a.position_counts, b.position_counts);
        assert_eq!(a.distinct, b.distinct);
    }

    #[test]
    fn audit_different_seeds_differ() {
        let a = run_audit(5_000, Some(1), false);
        let b = run_audit(5_000, Some(2), false);
        assert_ne!(a.position_counts, b.position_counts);
    }

    #[test]
    fn audit_partial_last_chunk() {
        let result = run_audit(CHUNK_SIZE + 3, Some(9), false);
        assert_eq!(result.total, CHUNK_SIZE + 3);
        for counts in &result.position_counts {
            assert_eq!(counts.iter().sum::<usize>(), CHUNK_SIZE + 3);
        }
    }
}
