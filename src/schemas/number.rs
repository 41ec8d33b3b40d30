//! Number schema engine
//!
//! One generic engine shared by every numeric subtype. The subtype is picked
//! by the [`NumberKind`] implementation: it supplies the kind name used in
//! messages, strict extraction from a native number, and the exact-format
//! text parser used by coercion.
//!
//! There is no cross-subtype coercion: a strict int schema rejects `5.0`
//! even though it is integral, and a coercing int schema fails to parse
//! `"5.5"`.

use std::fmt::Display;

use serde_json::Value;

use crate::foundation::{json_type_name, stringify, ParseOutcome, Schema};

use super::REQUIRED_MESSAGE;

// ============================================================================
// NUMBER KIND
// ============================================================================

/// A numeric subtype a [`NumberSchema`] can be parameterized over.
///
/// Implemented for `i32` (int), `i64` (long), `f32` (float) and `f64`
/// (double). Implement it for your own type to plug a new subtype into the
/// shared engine.
pub trait NumberKind: Copy + PartialOrd + Display {
    /// Kind name used in error messages ("int", "long", "float", "double").
    const KIND: &'static str;

    /// Extracts a native value of this subtype, without coercion.
    fn extract(value: &Value) -> Option<Self>;

    /// Parses trimmed text using this subtype's exact format.
    fn parse_text(text: &str) -> Option<Self>;
}

impl NumberKind for i32 {
    const KIND: &'static str = "int";

    fn extract(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| n.try_into().ok())
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl NumberKind for i64 {
    const KIND: &'static str = "long";

    fn extract(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl NumberKind for f32 {
    const KIND: &'static str = "float";

    #[allow(clippy::cast_possible_truncation)]
    fn extract(value: &Value) -> Option<Self> {
        value.as_f64().map(|f| f as f32)
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl NumberKind for f64 {
    const KIND: &'static str = "double";

    fn extract(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

// ============================================================================
// NUMBER SCHEMA
// ============================================================================

/// Validates and coerces numeric input for one subtype.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let age = coerce::int().min(0, None).max(150, None);
/// assert_eq!(age.parse(&json!("42")).unwrap(), 42);
/// assert!(age.safe_parse(&json!("-3")).is_failure());
/// assert!(age.safe_parse(&json!("4.5")).is_failure());
///
/// let price = double().min(0.0, None);
/// assert_eq!(price.parse(&json!(9.99)).unwrap(), 9.99);
/// ```
#[derive(Debug, Clone)]
pub struct NumberSchema<T: NumberKind> {
    coerce: bool,
    message: Option<String>,
    default: Option<T>,
    min: Option<T>,
    min_message: Option<String>,
    max: Option<T>,
    max_message: Option<String>,
}

/// Schema for 32-bit integers.
pub type IntSchema = NumberSchema<i32>;
/// Schema for 64-bit integers.
pub type LongSchema = NumberSchema<i64>;
/// Schema for single-precision floats.
pub type FloatSchema = NumberSchema<f32>;
/// Schema for double-precision floats.
pub type DoubleSchema = NumberSchema<f64>;

impl<T: NumberKind> NumberSchema<T> {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            coerce,
            message: None,
            default: None,
            min: None,
            min_message: None,
            max: None,
            max_message: None,
        }
    }

    /// Overrides the generic required/type-mismatch message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Substitutes this value when the input is absent or empty.
    ///
    /// The default still flows through the min/max refinement stage.
    #[must_use]
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Requires the value to be at least `value` (inclusive).
    #[must_use]
    pub fn min<'a>(mut self, value: T, message: impl Into<Option<&'a str>>) -> Self {
        self.min = Some(value);
        self.min_message = message.into().map(str::to_string);
        self
    }

    /// Requires the value to be at most `value` (inclusive).
    #[must_use]
    pub fn max<'a>(mut self, value: T, message: impl Into<Option<&'a str>>) -> Self {
        self.max = Some(value);
        self.max_message = message.into().map(str::to_string);
        self
    }

    fn coerce_input(&self, input: &Value) -> Result<T, String> {
        if !matches!(input, Value::Number(_) | Value::String(_)) {
            return Err(self.message.clone().unwrap_or_else(|| {
                format!(
                    "Cannot coerce from {} to {}. Expected number or string.",
                    json_type_name(input),
                    T::KIND
                )
            }));
        }

        let text = stringify(input).trim().to_string();
        if text.is_empty() {
            return Err(self
                .message
                .clone()
                .unwrap_or_else(|| format!("Cannot coerce empty string to {}", T::KIND)));
        }

        T::parse_text(&text).ok_or_else(|| {
            self.message
                .clone()
                .unwrap_or_else(|| format!("Cannot parse '{text}' as {}", T::KIND))
        })
    }
}

impl<T: NumberKind> Schema for NumberSchema<T> {
    type Output = T;

    fn safe_parse(&self, input: &Value) -> ParseOutcome<T> {
        let is_empty = matches!(input, Value::Null)
            || matches!(input, Value::String(s) if s.is_empty());

        let value = if is_empty {
            match self.default {
                Some(default) => default,
                None => {
                    return ParseOutcome::error(
                        self.message
                            .clone()
                            .unwrap_or_else(|| REQUIRED_MESSAGE.to_string()),
                    );
                }
            }
        } else if self.coerce {
            match self.coerce_input(input) {
                Ok(value) => value,
                Err(message) => return ParseOutcome::error(message),
            }
        } else {
            match T::extract(input) {
                Some(value) => value,
                None => {
                    return ParseOutcome::error(self.message.clone().unwrap_or_else(|| {
                        format!("Expected a {}, got {}", T::KIND, json_type_name(input))
                    }));
                }
            }
        };

        // Both bounds are evaluated; neither suppresses the other.
        let mut errors = Vec::new();

        if let Some(min) = self.min {
            if value < min {
                errors.push(
                    self.min_message
                        .clone()
                        .unwrap_or_else(|| format!("Value must be >= {min}")),
                );
            }
        }

        if let Some(max) = self.max {
            if value > max {
                errors.push(
                    self.max_message
                        .clone()
                        .unwrap_or_else(|| format!("Value must be <= {max}")),
                );
            }
        }

        if errors.is_empty() {
            ParseOutcome::success(value)
        } else {
            ParseOutcome::failure(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
