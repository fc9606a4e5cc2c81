//! Lock code representation
//!
//! A Code is four decimal digits with no digit repeated. Both the secret and
//! every player guess share this shape.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// A 4-digit code with pairwise distinct digits
///
/// Digits are stored as values 0-9, not as ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// Not exactly 4 characters, or a character outside `0`-`9`
    InvalidFormat,
    /// Some digit appears more than once
    DuplicateDigits,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "Code must be exactly 4 digits (0-9)"),
            Self::DuplicateDigits => write!(f, "Code digits must all be different"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from its textual form
    ///
    /// The format check runs before the uniqueness check, so `"1a1a"` is a
    /// format error. No whitespace is trimmed here.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The input is not exactly 4 ASCII digits (`InvalidFormat`)
    /// - A digit is repeated (`DuplicateDigits`)
    ///
    /// # Examples
    /// ```
    /// use codecrack::core::{Code, CodeError};
    ///
    /// let code = Code::parse("0427").unwrap();
    /// assert_eq!(code.to_string(), "0427");
    ///
    /// assert_eq!(Code::parse("12a4"), Err(CodeError::InvalidFormat));
    /// assert_eq!(Code::parse("1123"), Err(CodeError::DuplicateDigits));
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let mut digits = [0u8; CODE_LENGTH];
        let mut len = 0;

        for ch in text.chars() {
            if len == CODE_LENGTH {
                return Err(CodeError::InvalidFormat);
            }
            // to_digit only accepts ASCII 0-9 for radix 10
            let Some(value) = ch.to_digit(10) else {
                return Err(CodeError::InvalidFormat);
            };
            digits[len] = value as u8;
            len += 1;
        }

        if len != CODE_LENGTH {
            return Err(CodeError::InvalidFormat);
        }

        Self::from_digits(digits)
    }

    /// Build a code from digit values
    ///
    /// # Errors
    /// Returns `InvalidFormat` if a value is above 9 and `DuplicateDigits` if
    /// a value repeats.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if digits.iter().any(|&d| d > 9) {
            return Err(CodeError::InvalidFormat);
        }

        let mut seen = 0u16;
        for &d in &digits {
            let bit = 1u16 << d;
            if seen & bit != 0 {
                return Err(CodeError::DuplicateDigits);
            }
            seen |= bit;
        }

        Ok(Self(digits))
    }

    /// Draw a random code
    ///
    /// Draws a number in `0..10_000`, treats it as four zero-padded digits
    /// and redraws until no digit repeats. Every one of the 5040 valid codes
    /// is equally likely. Not suitable for anything security related.
    ///
    /// # Examples
    /// ```
    /// use codecrack::core::Code;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let code = Code::generate(&mut rng);
    /// assert_eq!(code.to_string().len(), 4);
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut value: u16 = rng.random_range(0..10_000);
            let mut digits = [0u8; CODE_LENGTH];
            for slot in digits.iter_mut().rev() {
                *slot = (value % 10) as u8;
                value /= 10;
            }

            if let Ok(code) = Self::from_digits(digits) {
                return code;
            }
        }
    }

    /// Get the digit values
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> [u8; CODE_LENGTH] {
        self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the code contains a digit anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn code_parse_valid() {
        let code = Code::parse("1234").unwrap();
        assert_eq!(code.digits(), [1, 2, 3, 4]);
        assert_eq!(code.to_string(), "1234");
    }

    #[test]
    fn code_parse_leading_zero() {
        let code = Code::parse("0987").unwrap();
        assert_eq!(code.digit_at(0), 0);
        assert_eq!(code.to_string(), "0987");
    }

    #[test]
    fn code_parse_invalid_format() {
        assert_eq!(Code::parse("12a4"), Err(CodeError::InvalidFormat));
        assert_eq!(Code::parse("123"), Err(CodeError::InvalidFormat));
        assert_eq!(Code::parse("12345"), Err(CodeError::InvalidFormat));
        assert_eq!(Code::parse(""), Err(CodeError::InvalidFormat));
        assert_eq!(Code::parse(" 123"), Err(CodeError::InvalidFormat));
        assert_eq!(Code::parse("-123"), Err(CodeError::InvalidFormat));
    }

    #[test]
    fn code_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not 0-9
        assert_eq!(Code::parse("١٢٣٤"), Err(CodeError::InvalidFormat));
    }

    #[test]
    fn code_parse_duplicates() {
        assert_eq!(Code::parse("1123"), Err(CodeError::DuplicateDigits));
        assert_eq!(Code::parse("0000"), Err(CodeError::DuplicateDigits));
        assert_eq!(Code::parse("1231"), Err(CodeError::DuplicateDigits));
    }

    #[test]
    fn code_format_checked_before_duplicates() {
        assert_eq!(Code::parse("1a1a"), Err(CodeError::InvalidFormat));
        assert_eq!(Code::parse("111"), Err(CodeError::InvalidFormat));
    }

    #[test]
    fn code_from_digits_out_of_range() {
        assert_eq!(
            Code::from_digits([1, 2, 3, 10]),
            Err(CodeError::InvalidFormat)
        );
    }

    #[test]
    fn code_contains() {
        let code = Code::parse("5803").unwrap();
        assert!(code.contains(5));
        assert!(code.contains(0));
        assert!(!code.contains(9));
    }

    #[test]
    fn code_from_str_trait() {
        let code: Code = "4321".parse().unwrap();
        assert_eq!(code.digits(), [4, 3, 2, 1]);
    }

    #[test]
    fn generate_always_valid() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let code = Code::generate(&mut rng);
            let text = code.to_string();

            assert_eq!(text.chars().count(), 4);
            assert!(text.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(Code::parse(&text), Ok(code));
        }
    }

    #[test]
    fn generate_is_deterministic_for_seed() {
        let a = Code::generate(&mut StdRng::seed_from_u64(99));
        let b = Code::generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn generate_can_lead_with_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let found = (0..10_000).any(|_| Code::generate(&mut rng).digit_at(0) == 0);
        assert!(found, "leading zero never produced in 10,000 draws");
    }
}
