//! The schema capability contract
//!
//! Every engine implements [`Schema`]: one required method (`safe_parse`) and
//! two derived operations with default implementations. There is no shared
//! state across engine kinds, only this shared shape.

use serde_json::Value;

use super::error::ParseError;
use super::outcome::ParseOutcome;
use super::value::IntoJson;

// ============================================================================
// SCHEMA TRAIT
// ============================================================================

/// The common operation surface of every schema engine.
///
/// `safe_parse` is the primary, total operation: expected validation failures
/// are reported through the returned [`ParseOutcome`], never raised. The two
/// derived operations wrap it for call sites that prefer a hard error or a
/// best-effort `Option`.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let age = coerce::int().min(0, None).max(150, None);
///
/// assert!(age.safe_parse(&json!("42")).is_success());
/// assert_eq!(age.parse(&json!("42")).unwrap(), 42);
/// assert_eq!(age.parse_optional(&json!("-3")), None);
/// ```
pub trait Schema {
    /// The typed value this schema produces.
    type Output;

    /// Validates the input, producing a typed value or an ordered error list.
    fn safe_parse(&self, input: &Value) -> ParseOutcome<Self::Output>;

    /// Validates the input and returns the value, or a [`ParseError`] whose
    /// message is every error joined with `" | "`.
    ///
    /// On success the value is guaranteed present; an optional schema that
    /// matched absent input is reported as an error here, since this call
    /// site demands a value.
    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        let outcome = self.safe_parse(input);
        if outcome.is_failure() {
            return Err(ParseError::new(outcome.into_errors()));
        }
        outcome
            .into_value()
            .ok_or_else(|| ParseError::new(vec!["Value is required".to_string()]))
    }

    /// Validates the input and returns the value on success, discarding all
    /// error detail on failure.
    ///
    /// `None` is returned both for failures and for an optional schema's
    /// valid absence.
    fn parse_optional(&self, input: &Value) -> Option<Self::Output> {
        self.safe_parse(input).into_value()
    }
}

// ============================================================================
// ERASED SCHEMA
// ============================================================================

/// Object-safe view of a schema whose output has been erased to `Value`.
///
/// The batch aggregator stores heterogeneous schemas behind this trait.
/// Implemented automatically for every [`Schema`] whose output is
/// [`IntoJson`].
pub trait ErasedSchema {
    /// Validates the input, erasing the typed value to JSON.
    fn safe_parse_json(&self, input: &Value) -> ParseOutcome<Value>;
}

impl<S> ErasedSchema for S
where
    S: Schema,
    S::Output: IntoJson,
{
    fn safe_parse_json(&self, input: &Value) -> ParseOutcome<Value> {
        self.safe_parse(input).map(IntoJson::into_json)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedString(&'static str);

    impl Schema for FixedString {
        type Output = String;

        fn safe_parse(&self, input: &Value) -> ParseOutcome<String> {
            match input {
                Value::String(s) if s == self.0 => ParseOutcome::success(s.clone()),
                _ => ParseOutcome::error(format!("expected '{}'", self.0)),
            }
        }
    }

    struct AlwaysAbsent;

    impl Schema for AlwaysAbsent {
        type Output = bool;

        fn safe_parse(&self, _input: &Value) -> ParseOutcome<bool> {
            ParseOutcome::absent()
        }
    }

    #[test]
    fn parse_returns_value_on_success() {
        let schema = FixedString("ok");
        assert_eq!(schema.parse(&json!("ok")).unwrap(), "ok");
    }

    #[test]
    fn parse_joins_errors_on_failure() {
        let schema = FixedString("ok");
        let err = schema.parse(&json!("nope")).unwrap_err();
        assert_eq!(err.to_string(), "expected 'ok'");
    }

    #[test]
    fn parse_rejects_valid_absence() {
        let schema = AlwaysAbsent;
        assert!(schema.parse(&json!(null)).is_err());
    }

    #[test]
    fn parse_optional_discards_errors() {
        let schema = FixedString("ok");
        assert_eq!(schema.parse_optional(&json!("ok")), Some("ok".to_string()));
        assert_eq!(schema.parse_optional(&json!(1)), None);
    }

    #[test]
    fn erased_schema_produces_json() {
        let schema = FixedString("ok");
        let outcome = schema.safe_parse_json(&json!("ok"));
        assert_eq!(outcome.into_value(), Some(json!("ok")));
    }
}
