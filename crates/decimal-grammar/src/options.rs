use alloc::borrow::Cow;

/// Configuration for a [`Decimal`](crate::Decimal) grammar instance.
///
/// Options are read once, when the grammar is constructed.
///
/// # Examples
///
/// ```rust
/// use decimal_grammar::{Decimal, DecimalOptions};
///
/// let grammar = Decimal::new(DecimalOptions {
///     min: Some(-50.0),
///     max: Some(50.0),
///     ..Default::default()
/// });
/// ```
///
/// # Default
///
/// Unbounded on both sides, prompting with `"number"`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecimalOptions {
    /// Inclusive lower bound of a completed value.
    ///
    /// Callers must keep `min <= max`; the grammar does not check it.
    ///
    /// # Default
    ///
    /// `None`
    pub min: Option<f64>,

    /// Inclusive upper bound of a completed value.
    ///
    /// # Default
    ///
    /// `None`
    pub max: Option<f64>,

    /// Prompt shown by the host while a prefix is still a placeholder.
    ///
    /// # Default
    ///
    /// `"number"`
    pub label: Cow<'static, str>,
}

impl Default for DecimalOptions {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            label: Cow::Borrowed("number"),
        }
    }
}

impl DecimalOptions {
    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the placeholder prompt.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}
