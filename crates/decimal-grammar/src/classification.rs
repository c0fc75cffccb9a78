/// The verdict on one prefix.
///
/// Exactly one variant applies to every character sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// No further input can make this prefix a valid, in-range number.
    Rejected,
    /// Not a number yet, but still the viable start of one.
    Placeholder,
    /// A complete number within the configured bounds.
    Complete(f64),
}

impl Classification {
    /// Returns `true` for [`Classification::Rejected`].
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Classification::Rejected)
    }

    /// Returns `true` for [`Classification::Placeholder`].
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Classification::Placeholder)
    }

    /// The parsed value of a complete number.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Classification::Complete(value) => Some(*value),
            _ => None,
        }
    }
}

/// A classification that still contributes a candidate parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admissible {
    /// See [`Classification::Placeholder`].
    Placeholder,
    /// See [`Classification::Complete`].
    Complete(f64),
}

impl From<Admissible> for Classification {
    fn from(admissible: Admissible) -> Self {
        match admissible {
            Admissible::Placeholder => Classification::Placeholder,
            Admissible::Complete(value) => Classification::Complete(value),
        }
    }
}

/// What the host shows for a prefix that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suggestion<'a> {
    /// The prefix is a complete number.
    Match {
        /// The matched text; always the whole prefix.
        text: &'a str,
        /// The parsed value.
        value: f64,
    },
    /// The host should keep prompting for input.
    Placeholder {
        /// The configured prompt label.
        label: &'a str,
    },
}

impl Suggestion<'_> {
    /// The text the host renders for this suggestion.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Suggestion::Match { text, .. } => text,
            Suggestion::Placeholder { label } => label,
        }
    }
}
