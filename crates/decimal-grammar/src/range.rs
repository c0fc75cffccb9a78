//! Range stage: decides whether a lexically valid prefix can still land in
//! `[min, max]`.
//!
//! Feasibility is judged by digit counts rather than by exact reachability.
//! While fewer integer digits have been typed than the constraining bound
//! has, the prefix stays a placeholder, even after the separator has fixed
//! the integer part. `8` against `[30, 70]` is a placeholder under this rule
//! although no completion of it lands in range.

use core::fmt::{self, Write};

use crate::{
    classification::Admissible,
    error::Rejection,
    lexer::{Lexeme, Sign},
};

/// Digits in the integer part of `f64::MAX`.
const MAX_BOUND_DIGITS: usize = 309;

/// `2^64`; below it a magnitude truncates exactly into a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Bounds specialised once per grammar instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RangePolicy {
    min: Option<f64>,
    max: Option<f64>,
    negative_allowed: bool,
    positive_allowed: bool,
    /// Integer digits of `min`, when `min > 0` constrains nonnegative input.
    min_digits: Option<usize>,
    /// Integer digits of `|max|`, when `max < 0` constrains negative input.
    max_digits: Option<usize>,
}

impl RangePolicy {
    pub(crate) fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            negative_allowed: !matches!(min, Some(m) if m >= 0.0),
            positive_allowed: !matches!(max, Some(m) if m < 0.0),
            min_digits: min.filter(|&m| m > 0.0).map(integer_digit_count),
            max_digits: max.filter(|&m| m < 0.0).map(integer_digit_count),
        }
    }

    pub(crate) fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Admits `lexeme`, whose value is `value`.
    pub(crate) fn admit(&self, lexeme: &Lexeme<'_>, value: f64) -> Result<Admissible, Rejection> {
        if self.is_unbounded() {
            return Ok(Admissible::Complete(value));
        }

        let negative = lexeme.sign.is_negative();
        if negative && !self.negative_allowed {
            return Err(Rejection::SignExcluded(Sign::Negative));
        }
        if !negative && !self.positive_allowed && lexeme.has_nonzero_digit() {
            return Err(Rejection::SignExcluded(Sign::Positive));
        }

        let bound_digits = if negative {
            self.max_digits
        } else {
            self.min_digits
        };
        if bound_digits.is_some_and(|digits| lexeme.integer_digits() < digits) {
            return Ok(Admissible::Placeholder);
        }

        // More digits push a negative value down and a nonnegative one up.
        if let Some(max) = self.max.filter(|&max| value > max) {
            return if negative {
                Ok(Admissible::Placeholder)
            } else {
                Err(Rejection::AboveMaximum { value, max })
            };
        }
        if let Some(min) = self.min.filter(|&min| value < min) {
            return if negative {
                Err(Rejection::BelowMinimum { value, min })
            } else {
                Ok(Admissible::Placeholder)
            };
        }

        Ok(Admissible::Complete(value))
    }
}

/// Number of digits in the integer part of `|bound|`; `0.5` has one.
///
/// Counted on the exact decimal expansion of the `f64`, so `1e23` (stored as
/// `99999999999999991611392`) has 23.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integer_digit_count(bound: f64) -> usize {
    let magnitude = if bound < 0.0 { -bound } else { bound };
    if !magnitude.is_finite() {
        return MAX_BOUND_DIGITS;
    }
    if magnitude < U64_LIMIT {
        return (magnitude as u64).checked_ilog10().map_or(1, |d| d as usize + 1);
    }

    // Every f64 this large is an integer, so `{:.0}` prints it exactly.
    let mut counter = CharCount(0);
    match write!(counter, "{magnitude:.0}") {
        Ok(()) => counter.0.min(MAX_BOUND_DIGITS),
        Err(fmt::Error) => MAX_BOUND_DIGITS,
    }
}

struct CharCount(usize);

impl Write for CharCount {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}
