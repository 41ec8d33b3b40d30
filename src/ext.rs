//! Inline validation sugar
//!
//! Lets a plain value be validated against a schema without building a
//! `serde_json::Value` by hand: `"70".validate_with(&schema)`.

use serde_json::Value;

use crate::foundation::{ParseError, ParseOutcome, Schema};

// ============================================================================
// VALIDATE EXT
// ============================================================================

/// Validates `self` against a schema, converting through `Value` first.
///
/// Implemented for every cloneable type convertible into `serde_json::Value`
/// (`&str`, `String`, integers, floats, booleans, `Vec`s of those, and
/// `Value` itself).
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
///
/// let age = coerce::int().min(0, None);
///
/// assert!("70".validate_with(&age).is_success());
/// assert_eq!("70".parse_with(&age).unwrap(), 70);
/// assert!((-3).validate_with(&age).is_failure());
/// ```
pub trait ValidateExt {
    /// Validates against `schema`, reporting failures in the outcome.
    fn validate_with<S: Schema>(&self, schema: &S) -> ParseOutcome<S::Output>;

    /// Validates against `schema`, raising a [`ParseError`] on failure.
    fn parse_with<S: Schema>(&self, schema: &S) -> Result<S::Output, ParseError> {
        let outcome = self.validate_with(schema);
        if outcome.is_failure() {
            return Err(ParseError::new(outcome.into_errors()));
        }
        outcome
            .into_value()
            .ok_or_else(|| ParseError::new(vec!["Value is required".to_string()]))
    }
}

impl<T> ValidateExt for T
where
    T: Clone + Into<Value>,
{
    fn validate_with<S: Schema>(&self, schema: &S) -> ParseOutcome<S::Output> {
        schema.safe_parse(&self.clone().into())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{coerce, string};
    use serde_json::json;

    #[test]
    fn str_validates_inline() {
        let schema = coerce::int().min(0, None);
        assert_eq!("70".validate_with(&schema).into_value(), Some(70));
        assert_eq!(
            "x".validate_with(&schema).errors(),
            ["Cannot parse 'x' as int"]
        );
    }

    #[test]
    fn numbers_and_booleans_validate_inline() {
        assert!(42.validate_with(&coerce::int()).is_success());
        assert!(true.validate_with(&coerce::boolean()).is_success());
    }

    #[test]
    fn json_values_validate_inline() {
        let schema = string().min_length(2, None);
        assert!(json!("ok").validate_with(&schema).is_success());
    }

    #[test]
    fn parse_with_raises_on_failure() {
        let schema = string().min_length(5, None);
        let err = "hi".parse_with(&schema).unwrap_err();
        assert_eq!(err.to_string(), "String too short: 2 < 5");
    }
}
