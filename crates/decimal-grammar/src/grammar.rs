use alloc::borrow::Cow;
use core::{iter::FusedIterator, str::CharIndices};

use crate::{
    classification::{Admissible, Classification, Suggestion},
    error::Rejection,
    lexer::lex,
    options::DecimalOptions,
    range::RangePolicy,
};

/// A decimal-literal grammar with fixed bounds.
///
/// Every method takes the prefix typed so far and holds no state between
/// calls, so a host exploring several parses can classify them in any order
/// and from any thread.
///
/// ```rust
/// use decimal_grammar::{Decimal, DecimalOptions, Suggestion};
///
/// let grammar = Decimal::new(DecimalOptions::default().with_min(30.0).with_max(70.0));
///
/// assert_eq!(grammar.suggest("8"), Some(Suggestion::Placeholder { label: "number" }));
/// assert_eq!(grammar.suggest("42"), Some(Suggestion::Match { text: "42", value: 42.0 }));
/// assert_eq!(grammar.suggest("71"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    policy: RangePolicy,
    label: Cow<'static, str>,
}

impl Default for Decimal {
    fn default() -> Self {
        Self::new(DecimalOptions::default())
    }
}

impl Decimal {
    /// Builds a grammar, specialising the sign and digit-count rules for the
    /// configured bounds.
    #[must_use]
    pub fn new(options: DecimalOptions) -> Self {
        let DecimalOptions { min, max, label } = options;
        let policy = RangePolicy::new(min, max);
        tracing::debug!(?policy, "built decimal grammar");
        Self { policy, label }
    }

    /// Classifies `prefix`, keeping the reason for a rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] when no extension of `prefix` can become an
    /// in-range number.
    pub fn check(&self, prefix: &str) -> Result<Admissible, Rejection> {
        let lexeme = lex(prefix)?;
        match lexeme.value() {
            // Nothing to range-check until a digit arrives.
            None => Ok(Admissible::Placeholder),
            Some(value) => self.policy.admit(&lexeme, value),
        }
    }

    /// Classifies `prefix` as rejected, a placeholder, or a complete number.
    #[must_use]
    pub fn classify(&self, prefix: &str) -> Classification {
        match self.check(prefix) {
            Ok(admissible) => {
                let classification = Classification::from(admissible);
                tracing::trace!(prefix, ?classification, "classified decimal prefix");
                classification
            }
            Err(reason) => {
                tracing::trace!(prefix, %reason, "rejected decimal prefix");
                Classification::Rejected
            }
        }
    }

    /// The report the host shows for `prefix`, or `None` when the prefix
    /// contributes no candidate parse.
    #[must_use]
    pub fn suggest<'a>(&'a self, prefix: &'a str) -> Option<Suggestion<'a>> {
        match self.classify(prefix) {
            Classification::Rejected => None,
            Classification::Placeholder => Some(Suggestion::Placeholder {
                label: &self.label,
            }),
            Classification::Complete(value) => Some(Suggestion::Match {
                text: prefix,
                value,
            }),
        }
    }

    /// Classifies every non-empty prefix of `input`, one per character, the
    /// way a host sees them while the user types.
    pub fn keystrokes<'a>(&'a self, input: &'a str) -> Keystrokes<'a> {
        Keystrokes {
            grammar: self,
            input,
            chars: input.char_indices(),
        }
    }

    /// The prompt shown for placeholders.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Iterator returned by [`Decimal::keystrokes`].
#[derive(Debug, Clone)]
pub struct Keystrokes<'a> {
    grammar: &'a Decimal,
    input: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Iterator for Keystrokes<'a> {
    type Item = (&'a str, Classification);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, ch) = self.chars.next()?;
        let prefix = &self.input[..idx + ch.len_utf8()];
        Some((prefix, self.grammar.classify(prefix)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for Keystrokes<'_> {}
