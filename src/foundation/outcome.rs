//! Parse outcome type
//!
//! Every schema produces a [`ParseOutcome`]: an immutable record of whether
//! parsing succeeded, the typed value (when one was produced), and the ordered
//! list of human-readable error messages (when it was not).
//!
//! The invariant `success == errors.is_empty()` always holds. A successful
//! outcome normally carries a value; the one exception is an optional schema
//! matching absent input, which succeeds with no value.

use serde::Serialize;
use std::fmt::{self, Display};

// ============================================================================
// PARSE OUTCOME
// ============================================================================

/// The result of validating a single input against a schema.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let schema = string().min_length(3, None);
///
/// let ok = schema.safe_parse(&json!("hello"));
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&"hello".to_string()));
///
/// let bad = schema.safe_parse(&json!("hi"));
/// assert!(!bad.is_success());
/// assert_eq!(bad.errors(), ["String too short: 2 < 3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome<T> {
    success: bool,
    value: Option<T>,
    errors: Vec<String>,
}

impl<T> ParseOutcome<T> {
    /// Creates a successful outcome carrying a value.
    #[must_use]
    pub fn success(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            errors: Vec::new(),
        }
    }

    /// Creates a successful outcome with no value.
    ///
    /// Used by optional schemas to represent valid absence.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            success: true,
            value: None,
            errors: Vec::new(),
        }
    }

    /// Creates a failed outcome from an ordered list of error messages.
    #[must_use]
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            value: None,
            errors,
        }
    }

    /// Creates a failed outcome from a single error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::failure(vec![message.into()])
    }

    /// Returns true if validation succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns true if validation failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Returns a reference to the parsed value, if one was produced.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the outcome and returns the parsed value, if any.
    ///
    /// `None` both on failure and for the valid-absence case.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns the error messages in the order they were recorded.
    ///
    /// Empty exactly when the outcome is successful.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the outcome and returns its error messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Splits the outcome into its value and errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Vec<String>) {
        (self.value, self.errors)
    }

    /// Maps the parsed value, leaving errors untouched.
    pub fn map<U, F>(self, f: F) -> ParseOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        ParseOutcome {
            success: self.success,
            value: self.value.map(f),
            errors: self.errors,
        }
    }

    /// Runs a closure against the value on success, returning `self`.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            f(value);
        }
        self
    }

    /// Runs a closure against the errors on failure, returning `self`.
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&[String]),
    {
        if !self.success {
            f(&self.errors);
        }
        self
    }
}

impl<T: Display> Display for ParseOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            match &self.value {
                Some(value) => write!(f, "Ok({value})"),
                None => write!(f, "Ok(<absent>)"),
            }
        } else {
            write!(f, "Err({})", self.errors.join(" | "))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_errors() {
        let outcome = ParseOutcome::success(42);
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Some(&42));
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn absent_succeeds_without_value() {
        let outcome: ParseOutcome<bool> = ParseOutcome::absent();
        assert!(outcome.is_success());
        assert_eq!(outcome.into_value(), None);
    }

    #[test]
    fn failure_preserves_error_order() {
        let outcome: ParseOutcome<i32> =
            ParseOutcome::failure(vec!["first".into(), "second".into()]);
        assert!(outcome.is_failure());
        assert_eq!(outcome.errors(), ["first", "second"]);
    }

    #[test]
    fn map_transforms_value_only() {
        let outcome = ParseOutcome::success(2).map(|n| n * 10);
        assert_eq!(outcome.value(), Some(&20));

        let failed: ParseOutcome<i32> = ParseOutcome::error("bad");
        let mapped = failed.map(|n| n * 10);
        assert!(mapped.is_failure());
        assert_eq!(mapped.errors(), ["bad"]);
    }

    #[test]
    fn display_joins_errors() {
        let outcome: ParseOutcome<i32> =
            ParseOutcome::failure(vec!["a".into(), "b".into()]);
        assert_eq!(outcome.to_string(), "Err(a | b)");
    }
}
