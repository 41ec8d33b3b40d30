//! Error types for the throw-on-failure parse channel
//!
//! Expected validation failures travel through
//! [`ParseOutcome`](super::ParseOutcome) and are never raised. The types here
//! exist for the opt-in `parse`/`into_values` call sites that convert a failed
//! outcome into a hard error.

use thiserror::Error;

// ============================================================================
// PARSE ERROR
// ============================================================================

/// Raised by [`Schema::parse`](super::Schema::parse) when validation fails.
///
/// Carries the full ordered error list; `Display` joins the messages with
/// `" | "`, matching the failed outcome it was built from.
#[derive(Debug, Clone, Error)]
#[error("{}", errors.join(" | "))]
pub struct ParseError {
    errors: Vec<String>,
}

impl ParseError {
    /// Creates a parse error from an ordered list of messages.
    #[must_use]
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Returns the individual error messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

// ============================================================================
// BATCH ERROR
// ============================================================================

/// Raised by [`BatchOutcome::into_values`](crate::batch::BatchOutcome::into_values)
/// when any registered field failed.
///
/// Field errors are flattened as `"[<field>] <message>"`, preserving field
/// registration order, then joined with `" | "` for `Display`.
#[derive(Debug, Clone, Error)]
#[error("{}", errors.join(" | "))]
pub struct BatchError {
    errors: Vec<String>,
}

impl BatchError {
    /// Creates a batch error from flattened per-field messages.
    #[must_use]
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Returns the flattened `"[field] message"` entries.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_joins_with_pipe() {
        let err = ParseError::new(vec!["too short".into(), "bad pattern".into()]);
        assert_eq!(err.to_string(), "too short | bad pattern");
    }

    #[test]
    fn batch_error_keeps_flattened_entries() {
        let err = BatchError::new(vec!["[age] Value is required".into()]);
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.to_string(), "[age] Value is required");
    }
}
