//! Helpers for working with untyped input values
//!
//! Input is modelled as `serde_json::Value`: `Null` is the absent case, and
//! the remaining variants are the native kinds a strict schema can match
//! against. This module provides the shared vocabulary for talking about
//! those kinds in error messages, the stringification used by coercion, and
//! the [`IntoJson`] erasure used by the batch aggregator.

use serde_json::{Number, Value};

// ============================================================================
// TYPE NAMES
// ============================================================================

/// Returns the JSON kind name of a value, for type-mismatch messages.
///
/// # Examples
///
/// ```
/// use fluent_schema::foundation::json_type_name;
/// use serde_json::json;
///
/// assert_eq!(json_type_name(&json!("hi")), "string");
/// assert_eq!(json_type_name(&json!(42)), "number");
/// assert_eq!(json_type_name(&json!(null)), "null");
/// ```
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders a value as plain text for coercion.
///
/// Strings yield their content unquoted; everything else uses its compact
/// JSON rendering (`5`, `5.5`, `true`, `[1,2]`).
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// OUTPUT ERASURE
// ============================================================================

/// Conversion from a schema's typed output back into a `Value`.
///
/// The batch aggregator stores heterogeneous parsed values in one map, so
/// every schema output type must be representable as JSON. Implemented for
/// all built-in output types; implement it for custom schema outputs to make
/// them batch-compatible.
pub trait IntoJson {
    /// Converts the value into its JSON representation.
    fn into_json(self) -> Value;
}

impl IntoJson for Value {
    fn into_json(self) -> Value {
        self
    }
}

impl IntoJson for String {
    fn into_json(self) -> Value {
        Value::String(self)
    }
}

impl IntoJson for bool {
    fn into_json(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoJson for i32 {
    fn into_json(self) -> Value {
        Value::Number(self.into())
    }
}

impl IntoJson for i64 {
    fn into_json(self) -> Value {
        Value::Number(self.into())
    }
}

impl IntoJson for f32 {
    fn into_json(self) -> Value {
        f64::from(self).into_json()
    }
}

impl IntoJson for f64 {
    fn into_json(self) -> Value {
        // Non-finite floats have no JSON representation.
        Number::from_f64(self).map_or(Value::Null, Value::Number)
    }
}

impl<T: IntoJson> IntoJson for Vec<T> {
    fn into_json(self) -> Value {
        Value::Array(self.into_iter().map(IntoJson::into_json).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_names_cover_all_kinds() {
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
        assert_eq!(json_type_name(&json!(1.5)), "number");
    }

    #[test]
    fn stringify_unquotes_strings() {
        assert_eq!(stringify(&json!("abc")), "abc");
        assert_eq!(stringify(&json!(5)), "5");
        assert_eq!(stringify(&json!(5.5)), "5.5");
        assert_eq!(stringify(&json!(true)), "true");
    }

    #[test]
    fn into_json_round_trips_primitives() {
        assert_eq!(42i32.into_json(), json!(42));
        assert_eq!("x".to_string().into_json(), json!("x"));
        assert_eq!(vec![1i64, 2].into_json(), json!([1, 2]));
        assert_eq!(2.5f64.into_json(), json!(2.5));
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(f64::NAN.into_json(), Value::Null);
        assert_eq!(f64::INFINITY.into_json(), Value::Null);
    }
}
