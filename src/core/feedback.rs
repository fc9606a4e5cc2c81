//! Guess evaluation
//!
//! Two views of the same comparison:
//! - `Feedback`: aggregate counts (exact, present elsewhere, absent) that
//!   always sum to 4
//! - `DigitMark`: a per-position classification used to colour each digit

use super::{CODE_LENGTH, Code};
use rustc_hash::FxHashMap;

/// Aggregate result of comparing a guess with the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub exact_matches: u8,
    pub present_wrong_position: u8,
    pub absent: u8,
}

impl Feedback {
    /// All four digits in place
    pub const SOLVED: Self = Self {
        exact_matches: 4,
        present_wrong_position: 0,
        absent: 0,
    };

    /// Evaluate `guess` against `secret`
    ///
    /// Exact matches are counted first. The remaining digits of each side go
    /// into a multiset; every distinct leftover guess digit then contributes
    /// `min(guess count, secret count)` to `present_wrong_position`, or its
    /// full count to `absent` when the secret has none left.
    ///
    /// Both codes are assumed valid; nothing is validated here.
    ///
    /// # Examples
    /// ```
    /// use codecrack::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1243").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.exact_matches, 2);
    /// assert_eq!(feedback.present_wrong_position, 2);
    /// assert_eq!(feedback.absent, 0);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Code, secret: &Code) -> Self {
        let mut exact_matches = 0u8;
        let mut pending_guess: FxHashMap<u8, u8> = FxHashMap::default();
        let mut pending_secret: FxHashMap<u8, u8> = FxHashMap::default();

        for (g, s) in guess.digits().into_iter().zip(secret.digits()) {
            if g == s {
                exact_matches += 1;
            } else {
                *pending_guess.entry(g).or_insert(0) += 1;
                *pending_secret.entry(s).or_insert(0) += 1;
            }
        }

        let mut present_wrong_position = 0u8;
        let mut absent = 0u8;

        for (digit, &guess_count) in &pending_guess {
            match pending_secret.get(digit) {
                Some(&secret_count) => present_wrong_position += guess_count.min(secret_count),
                None => absent += guess_count,
            }
        }

        Self {
            exact_matches,
            present_wrong_position,
            absent,
        }
    }

    /// Check if every digit is in place
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact_matches == CODE_LENGTH as u8
    }

    /// Sum of all three counts
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact_matches + self.present_wrong_position + self.absent
    }
}

/// Per-digit classification of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitMark {
    /// Same digit at the same position
    Exact,
    /// Digit occurs somewhere else in the secret
    Present,
    /// Digit does not occur in the secret
    Absent,
}

impl DigitMark {
    /// Classify each digit of `guess` on its own
    ///
    /// Unlike `Feedback::evaluate` this does no multiset bookkeeping: a digit
    /// is `Present` whenever the secret contains it at another position.
    ///
    /// # Examples
    /// ```
    /// use codecrack::core::{Code, DigitMark};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1456").unwrap();
    ///
    /// assert_eq!(
    ///     DigitMark::classify(&guess, &secret),
    ///     [DigitMark::Exact, DigitMark::Present, DigitMark::Absent, DigitMark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn classify(guess: &Code, secret: &Code) -> [Self; CODE_LENGTH] {
        let mut marks = [Self::Absent; CODE_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            let digit = guess.digit_at(i);
            if digit == secret.digit_at(i) {
                *mark = Self::Exact;
            } else if secret.contains(digit) {
                *mark = Self::Present;
            }
        }

        marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    fn counts(feedback: Feedback) -> (u8, u8, u8) {
        (
            feedback.exact_matches,
            feedback.present_wrong_position,
            feedback.absent,
        )
    }

    #[test]
    fn feedback_solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.total(), 4);
    }

    #[test]
    fn evaluate_self_is_solved() {
        let mut rng = StdRng::seed_from_u64(4040);
        for _ in 0..1000 {
            let c = Code::generate(&mut rng);
            assert_eq!(Feedback::evaluate(&c, &c), Feedback::SOLVED, "code {c}");
        }
    }

    #[test]
    fn evaluate_disjoint_codes() {
        let feedback = Feedback::evaluate(&code("5678"), &code("1234"));
        assert_eq!(counts(feedback), (0, 0, 4));
        assert!(!feedback.is_solved());
    }

    #[test]
    fn evaluate_reversed_code() {
        let feedback = Feedback::evaluate(&code("1234"), &code("4321"));
        assert_eq!(counts(feedback), (0, 4, 0));
    }

    #[test]
    fn evaluate_swapped_pair() {
        let feedback = Feedback::evaluate(&code("1243"), &code("1234"));
        assert_eq!(counts(feedback), (2, 2, 0));
    }

    #[test]
    fn evaluate_mixed() {
        // 1 exact, 7 and 0 misplaced, 9 absent
        let feedback = Feedback::evaluate(&code("1709"), &code("1072"));
        assert_eq!(counts(feedback), (1, 2, 1));
    }

    #[test]
    fn evaluate_counts_always_sum_to_four() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..2_000 {
            let guess = Code::generate(&mut rng);
            let secret = Code::generate(&mut rng);
            assert_eq!(Feedback::evaluate(&guess, &secret).total(), 4);
        }
    }

    #[test]
    fn evaluate_order_independent_for_misplaced_counts() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let guess = Code::generate(&mut rng);
            let secret = Code::generate(&mut rng);
            let feedback = Feedback::evaluate(&guess, &secret);

            // Applying the same permutation to both sides keeps every count
            let rotate = |c: &Code| {
                let mut d = c.digits();
                d.rotate_left(1);
                Code::from_digits(d).unwrap()
            };
            let rotated = Feedback::evaluate(&rotate(&guess), &rotate(&secret));
            assert_eq!(feedback, rotated);

            // Shared digits are a property of the digit sets alone
            let shared = guess
                .digits()
                .iter()
                .filter(|&&d| secret.contains(d))
                .count() as u8;
            assert_eq!(
                feedback.exact_matches + feedback.present_wrong_position,
                shared
            );
        }
    }

    #[test]
    fn classify_all_exact() {
        let c = code("2468");
        assert_eq!(DigitMark::classify(&c, &c), [DigitMark::Exact; 4]);
    }

    #[test]
    fn classify_all_present() {
        assert_eq!(
            DigitMark::classify(&code("1234"), &code("4321")),
            [DigitMark::Present; 4]
        );
    }

    #[test]
    fn classify_all_absent() {
        assert_eq!(
            DigitMark::classify(&code("5678"), &code("1234")),
            [DigitMark::Absent; 4]
        );
    }

    #[test]
    fn classify_agrees_with_counts_for_distinct_codes() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let guess = Code::generate(&mut rng);
            let secret = Code::generate(&mut rng);
            let feedback = Feedback::evaluate(&guess, &secret);
            let marks = DigitMark::classify(&guess, &secret);

            let count = |m: DigitMark| marks.iter().filter(|&&x| x == m).count() as u8;
            assert_eq!(count(DigitMark::Exact), feedback.exact_matches);
            assert_eq!(count(DigitMark::Present), feedback.present_wrong_position);
            assert_eq!(count(DigitMark::Absent), feedback.absent);
        }
    }
}
