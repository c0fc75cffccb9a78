//! Lexical stage: the character grammar of a (possibly unfinished) decimal
//! literal.
//!
//! ```text
//! literal ::= sign? digit* ( '.' digit* )?
//! sign    ::= '+' | '-'
//! ```
//!
//! Every prefix of a valid literal is itself accepted here, including the
//! empty string. Whether a prefix carries a value at all is answered by
//! [`Lexeme::value`].

use crate::error::LexError;

/// The sign typed in front of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// No sign typed; the literal reads as nonnegative.
    #[default]
    Unset,
    /// A leading `+`.
    Positive,
    /// A leading `-`.
    Negative,
}

impl Sign {
    /// Whether the literal reads as negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// The fields of a lexically valid prefix.
///
/// Digit runs borrow from the prefix they were lexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// The leading sign, if any.
    pub sign: Sign,
    /// Digits before the separator.
    pub integer: &'a str,
    /// Whether the separator has been typed.
    pub decimal_seen: bool,
    /// Digits after the separator.
    pub fraction: &'a str,
    /// Everything after the sign; always a valid `f64` literal once
    /// `has_digits()` holds.
    unsigned: &'a str,
}

impl Lexeme<'_> {
    /// Whether at least one digit has been typed on either side of the
    /// separator.
    #[must_use]
    pub fn has_digits(&self) -> bool {
        !self.integer.is_empty() || !self.fraction.is_empty()
    }

    /// Whether any typed digit is not `0`.
    #[must_use]
    pub fn has_nonzero_digit(&self) -> bool {
        self.integer
            .bytes()
            .chain(self.fraction.bytes())
            .any(|b| b != b'0')
    }

    /// Number of digits typed before the separator, leading zeros included.
    #[must_use]
    pub fn integer_digits(&self) -> usize {
        self.integer.len()
    }

    /// The numeric value of the prefix, or `None` while no digit has been
    /// typed.
    ///
    /// Zero is always reported as positive zero. Integer parts too long for
    /// an `f64` saturate to infinity.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        if !self.has_digits() {
            return None;
        }

        // `unsigned` is `digit* ('.' digit*)?` with at least one digit, which
        // the float parser always accepts.
        let magnitude = self.unsigned.parse::<f64>().unwrap_or_default();
        if magnitude == 0.0 {
            Some(0.0)
        } else if self.sign.is_negative() {
            Some(-magnitude)
        } else {
            Some(magnitude)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Signed,
    Integer,
    Fraction,
}

/// Runs the lexical stage over `prefix`.
///
/// # Errors
///
/// Returns a [`LexError`] when no extension of `prefix` can ever be a decimal
/// literal.
pub fn lex(prefix: &str) -> Result<Lexeme<'_>, LexError> {
    let mut state = State::Start;
    let mut sign = Sign::Unset;
    let mut separator = None;

    for (idx, ch) in prefix.char_indices() {
        state = match (state, ch) {
            (State::Start, '+') => {
                sign = Sign::Positive;
                State::Signed
            }
            (State::Start, '-') => {
                sign = Sign::Negative;
                State::Signed
            }
            (_, '+' | '-') => return Err(LexError::MisplacedSign(ch)),
            (State::Start | State::Signed | State::Integer, '0'..='9') => State::Integer,
            (State::Fraction, '0'..='9') => State::Fraction,
            (State::Start | State::Signed | State::Integer, '.') => {
                separator = Some(idx);
                State::Fraction
            }
            (State::Fraction, '.') => return Err(LexError::DuplicateSeparator),
            (_, other) => return Err(LexError::InvalidCharacter(other)),
        };
    }

    let sign_len = usize::from(sign != Sign::Unset);
    let unsigned = &prefix[sign_len..];
    let (integer, fraction) = match separator {
        Some(sep) => (&prefix[sign_len..sep], &prefix[sep + 1..]),
        None => (unsigned, ""),
    };

    Ok(Lexeme {
        sign,
        integer,
        decimal_seen: separator.is_some(),
        fraction,
        unsigned,
    })
}
