//! Boolean schema engine
//!
//! The only engine with an `optional()` flag: absence is valid and produces
//! no value rather than an error. Coercion accepts native booleans, numbers
//! (true iff the value equals exactly 1.0), and a fixed case-insensitive
//! word table.

use serde_json::Value;

use crate::foundation::{json_type_name, ParseOutcome, Schema};

use super::REQUIRED_MESSAGE;

// ============================================================================
// BOOLEAN SCHEMA
// ============================================================================

/// Validates and coerces boolean input.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let flag = coerce::boolean();
/// assert_eq!(flag.parse(&json!("YES")).unwrap(), true);
/// assert_eq!(flag.parse(&json!(0)).unwrap(), false);
/// assert!(flag.safe_parse(&json!("maybe")).is_failure());
///
/// // Absence is valid for optional schemas.
/// let opt = boolean().optional();
/// assert!(opt.safe_parse(&json!(null)).is_success());
/// assert_eq!(opt.parse_optional(&json!(null)), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    coerce: bool,
    message: Option<String>,
    default: Option<bool>,
    optional: bool,
    // None = either value allowed, Some(expected) = must equal expected.
    must_be: Option<bool>,
    true_message: Option<String>,
    false_message: Option<String>,
}

impl BooleanSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            coerce,
            ..<Self as Default>::default()
        }
    }

    /// Overrides the generic required/type-mismatch message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Substitutes this value when the input is absent or empty.
    #[must_use]
    pub fn default(mut self, value: bool) -> Self {
        self.default = Some(value);
        self
    }

    /// Makes absence valid: `safe_parse(null)` succeeds with no value.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Requires the parsed value to be `true`.
    #[must_use]
    pub fn is_true<'a>(mut self, message: impl Into<Option<&'a str>>) -> Self {
        self.must_be = Some(true);
        self.true_message = message.into().map(str::to_string);
        self
    }

    /// Requires the parsed value to be `false`.
    #[must_use]
    pub fn is_false<'a>(mut self, message: impl Into<Option<&'a str>>) -> Self {
        self.must_be = Some(false);
        self.false_message = message.into().map(str::to_string);
        self
    }

    fn coerce_input(input: &Value) -> Option<bool> {
        match input {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(n.as_f64() == Some(1.0)),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "t" => Some(true),
                "false" | "0" | "no" | "off" | "f" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Schema for BooleanSchema {
    type Output = bool;

    fn safe_parse(&self, input: &Value) -> ParseOutcome<bool> {
        let is_empty = matches!(input, Value::Null)
            || matches!(input, Value::String(s) if s.is_empty());

        let value = if is_empty {
            match self.default {
                Some(default) => default,
                None if self.optional => return ParseOutcome::absent(),
                None => {
                    return ParseOutcome::error(
                        self.message
                            .clone()
                            .unwrap_or_else(|| REQUIRED_MESSAGE.to_string()),
                    );
                }
            }
        } else {
            let parsed = if self.coerce {
                Self::coerce_input(input)
            } else {
                input.as_bool()
            };

            match parsed {
                Some(value) => value,
                None => {
                    return ParseOutcome::error(self.message.clone().unwrap_or_else(|| {
                        format!("Expected a boolean, got {}", json_type_name(input))
                    }));
                }
            }
        };

        if let Some(expected) = self.must_be {
            if value != expected {
                let message = if expected {
                    self.true_message
                        .clone()
                        .unwrap_or_else(|| "Must be true".to_string())
                } else {
                    self.false_message
                        .clone()
                        .unwrap_or_else(|| "Must be false".to_string())
                };
                return ParseOutcome::error(message);
            }
        }

        ParseOutcome::success(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{boolean, coerce};
    use serde_json::json;

    #[test]
    fn null_without_default_is_required() {
        let outcome = boolean().safe_parse(&json!(null));
        assert_eq!(outcome.errors(), ["Value is required"]);
    }

    #[test]
    fn empty_string_counts_as_absent() {
        assert!(boolean().safe_parse(&json!("")).is_failure());
        // But a whitespace string does not: it reaches the type stage.
        let outcome = boolean().safe_parse(&json!(" "));
        assert_eq!(outcome.errors(), ["Expected a boolean, got string"]);
    }

    #[test]
    fn optional_absence_succeeds_without_value() {
        let schema = boolean().optional();
        let outcome = schema.safe_parse(&json!(null));
        assert!(outcome.is_success());
        assert_eq!(outcome.into_value(), None);
    }

    #[test]
    fn default_wins_over_optional() {
        let schema = boolean().optional().default(true);
        assert_eq!(schema.safe_parse(&json!(null)).into_value(), Some(true));
    }

    #[test]
    fn strict_accepts_only_native_booleans() {
        assert_eq!(boolean().safe_parse(&json!(true)).into_value(), Some(true));
        assert_eq!(
            boolean().safe_parse(&json!(1)).errors(),
            ["Expected a boolean, got number"]
        );
        assert_eq!(
            boolean().safe_parse(&json!("true")).errors(),
            ["Expected a boolean, got string"]
        );
    }

    #[test]
    fn coercion_word_table() {
        let schema = coerce::boolean();
        for truthy in ["true", "1", "yes", "on", "t", "YES", " on ", "True"] {
            assert_eq!(
                schema.safe_parse(&json!(truthy)).into_value(),
                Some(true),
                "{truthy:?} should coerce to true"
            );
        }
        for falsy in ["false", "0", "no", "off", "f", "NO", " Off "] {
            assert_eq!(
                schema.safe_parse(&json!(falsy)).into_value(),
                Some(false),
                "{falsy:?} should coerce to false"
            );
        }
    }

    #[test]
    fn coercion_rejects_unknown_words() {
        let outcome = coerce::boolean().safe_parse(&json!("maybe"));
        assert_eq!(outcome.errors(), ["Expected a boolean, got string"]);
    }

    #[test]
    fn numeric_coercion_is_exactly_one() {
        let schema = coerce::boolean();
        assert_eq!(schema.safe_parse(&json!(1)).into_value(), Some(true));
        assert_eq!(schema.safe_parse(&json!(1.0)).into_value(), Some(true));
        assert_eq!(schema.safe_parse(&json!(0)).into_value(), Some(false));
        assert_eq!(schema.safe_parse(&json!(2)).into_value(), Some(false));
        assert_eq!(schema.safe_parse(&json!(0.99)).into_value(), Some(false));
    }

    #[test]
    fn truthiness_refinement() {
        let consent = boolean().is_true("Consent is mandatory");
        assert!(consent.safe_parse(&json!(true)).is_success());
        assert_eq!(
            consent.safe_parse(&json!(false)).errors(),
            ["Consent is mandatory"]
        );

        let off = boolean().is_false(None);
        assert_eq!(off.safe_parse(&json!(true)).errors(), ["Must be false"]);
    }

    #[test]
    fn truthiness_applies_to_default() {
        let outcome = boolean().default(false).is_true(None).safe_parse(&json!(null));
        assert_eq!(outcome.errors(), ["Must be true"]);
    }
}
