use thiserror::Error;

use crate::lexer::Sign;

/// Why a prefix is not the start of a decimal literal at all.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A character outside `+`, `-`, `.`, and `0-9`.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// A sign after another sign, a digit, or the separator.
    #[error("sign '{0}' must be the first character")]
    MisplacedSign(char),
    /// A second decimal separator.
    #[error("a decimal literal has at most one separator")]
    DuplicateSeparator,
}

/// Why a prefix was classified as [`Rejected`](crate::Classification::Rejected).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// The prefix fails the character grammar.
    #[error("syntax error: {0}")]
    Lexical(#[from] LexError),
    /// The configured bounds exclude every number carrying this sign.
    #[error("{0:?} numbers are excluded by the configured bounds")]
    SignExcluded(Sign),
    /// Further digits can only move the value further above `max`.
    #[error("{value} is above the maximum {max}")]
    AboveMaximum {
        /// The value typed so far.
        value: f64,
        /// The configured upper bound.
        max: f64,
    },
    /// Further digits can only move the value further below `min`.
    #[error("{value} is below the minimum {min}")]
    BelowMinimum {
        /// The value typed so far.
        value: f64,
        /// The configured lower bound.
        min: f64,
    },
}
