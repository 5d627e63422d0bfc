//! Declarative input validation.
//!
//! A [`Check`] bundles a value with the constraints that apply to it and
//! answers a single yes/no question. Constraints that do not match the value
//! type are skipped, so a length bound on a number silently passes.

/// A value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

/// A named value plus the constraints to check it against.
///
/// Built with [`Check::text`] or [`Check::number`] and the chained constraint
/// methods. Evaluation never panics and never errors; the only outcome is the
/// boolean from [`Check::is_valid`].
///
/// # Examples
///
/// ```
/// use plank_core::Check;
///
/// assert!(Check::text("title", "Learn Rust").required().is_valid());
/// assert!(!Check::number("people", 0.0).required().min(1.0).is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    label: String,
    value: Value,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Check {
    /// Starts a check against a text value.
    #[must_use]
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, Value::Text(value.into()))
    }

    /// Starts a check against a numeric value.
    #[must_use]
    pub fn number(label: impl Into<String>, value: f64) -> Self {
        Self::new(label, Value::Number(value))
    }

    fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// The label this check was created with.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Requires the value to be present: non-blank text, any number.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires text of at least `n` characters. Ignored for numbers.
    #[must_use]
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Requires text of at most `n` characters. Ignored for numbers.
    #[must_use]
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Requires a number of at least `bound`. Ignored for text.
    #[must_use]
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires a number of at most `bound`. Ignored for text.
    #[must_use]
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }

    /// Evaluates every applicable constraint.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut valid = true;
        if self.required {
            valid = valid
                && match &self.value {
                    Value::Text(text) => !text.trim().is_empty(),
                    Value::Number(number) => !number.to_string().is_empty(),
                };
        }
        if let (Some(min_length), Value::Text(text)) = (self.min_length, &self.value) {
            valid = valid && text.chars().count() >= min_length;
        }
        if let (Some(max_length), Value::Text(text)) = (self.max_length, &self.value) {
            valid = valid && text.chars().count() <= max_length;
        }
        if let (Some(min), Value::Number(number)) = (self.min, &self.value) {
            valid = valid && *number >= min;
        }
        if let (Some(max), Value::Number(number)) = (self.max, &self.value) {
            valid = valid && *number <= max;
        }
        valid
    }
}
