//! Array schema engine
//!
//! Generic over the item schema, so element outputs stay typed:
//! `array(coerce::int())` yields `Vec<i32>`. [`AnySchema`] is the identity
//! item schema for arrays whose elements need no validation.
//!
//! Coercion turns comma-separated text into elements before item validation:
//! `"[1, 2, 3]"` and `"1,2,3"` both become three string elements, which the
//! item schema then parses.

use std::fmt;

use serde_json::Value;

use crate::foundation::{json_type_name, ParseOutcome, Schema};

use super::REQUIRED_MESSAGE;

// ============================================================================
// ANY SCHEMA
// ============================================================================

/// Pass-through schema: every input succeeds as-is.
///
/// Used as the item schema of [`any_array`](crate::schemas::any_array), where
/// elements are collected without per-item validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySchema;

impl Schema for AnySchema {
    type Output = Value;

    fn safe_parse(&self, input: &Value) -> ParseOutcome<Value> {
        ParseOutcome::success(input.clone())
    }
}

// ============================================================================
// ARRAY SCHEMA
// ============================================================================

/// Validates ordered collections, delegating elements to an item schema.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let tags = coerce::array(coerce::string().min_length(1, None)).max_size(5, None);
/// assert_eq!(
///     tags.parse(&json!("[a, b, c]")).unwrap(),
///     vec!["a".to_string(), "b".to_string(), "c".to_string()],
/// );
///
/// let scores = array(int().min(0, None));
/// let outcome = scores.safe_parse(&json!([10, -1, 30]));
/// assert_eq!(outcome.errors(), ["[1]: Value must be >= 0"]);
/// ```
pub struct ArraySchema<S: Schema> {
    item: S,
    coerce: bool,
    message: Option<String>,
    default: Option<Vec<S::Output>>,
    min_size: Option<usize>,
    min_message: Option<String>,
    max_size: Option<usize>,
    max_message: Option<String>,
}

impl<S: Schema> ArraySchema<S> {
    pub(crate) fn new(item: S, coerce: bool) -> Self {
        Self {
            item,
            coerce,
            message: None,
            default: None,
            min_size: None,
            min_message: None,
            max_size: None,
            max_message: None,
        }
    }

    /// Overrides the generic required/type-mismatch message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Substitutes these elements when the input is blank.
    ///
    /// The default still flows through the size refinement stage.
    #[must_use]
    pub fn default(mut self, values: Vec<S::Output>) -> Self {
        self.default = Some(values);
        self
    }

    /// Requires at least `size` elements.
    #[must_use]
    pub fn min_size<'a>(mut self, size: usize, message: impl Into<Option<&'a str>>) -> Self {
        self.min_size = Some(size);
        self.min_message = message.into().map(str::to_string);
        self
    }

    /// Requires at most `size` elements.
    #[must_use]
    pub fn max_size<'a>(mut self, size: usize, message: impl Into<Option<&'a str>>) -> Self {
        self.max_size = Some(size);
        self.max_message = message.into().map(str::to_string);
        self
    }

    /// Shorthand for `min_size(1, ...)`.
    #[must_use]
    pub fn nonempty<'a>(self, message: impl Into<Option<&'a str>>) -> Self {
        self.min_size(1, message)
    }

    /// Splits comma-separated text into string elements.
    ///
    /// Bracketed text (`"[a, b]"`) is unwrapped first and its elements lose
    /// one layer of surrounding quotes; plain text is a bare CSV split.
    fn coerce_to_list(text: &str) -> Vec<Value> {
        let trimmed = text.trim();

        if let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if inner.trim().is_empty() {
                return Vec::new();
            }
            return inner
                .split(',')
                .map(|part| {
                    let part = part.trim();
                    let part = strip_quotes(part, '"');
                    let part = strip_quotes(part, '\'');
                    Value::String(part.to_string())
                })
                .collect();
        }

        trimmed
            .split(',')
            .map(|part| Value::String(part.trim().to_string()))
            .collect()
    }
}

// Derives would bound `S` alone; these fields also need `S::Output` bounds.
impl<S: Schema + Clone> Clone for ArraySchema<S>
where
    S::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            item: self.item.clone(),
            coerce: self.coerce,
            message: self.message.clone(),
            default: self.default.clone(),
            min_size: self.min_size,
            min_message: self.min_message.clone(),
            max_size: self.max_size,
            max_message: self.max_message.clone(),
        }
    }
}

impl<S: Schema + fmt::Debug> fmt::Debug for ArraySchema<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArraySchema")
            .field("item", &self.item)
            .field("coerce", &self.coerce)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

fn strip_quotes(text: &str, quote: char) -> &str {
    if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

impl<S: Schema> Schema for ArraySchema<S>
where
    S::Output: Clone,
{
    type Output = Vec<S::Output>;

    fn safe_parse(&self, input: &Value) -> ParseOutcome<Vec<S::Output>> {
        let is_blank = matches!(input, Value::Null)
            || matches!(input, Value::String(s) if s.trim().is_empty());

        let values = if is_blank {
            match &self.default {
                Some(values) => values.clone(),
                None => {
                    return ParseOutcome::error(
                        self.message
                            .clone()
                            .unwrap_or_else(|| REQUIRED_MESSAGE.to_string()),
                    );
                }
            }
        } else {
            let owned;
            let elements: &[Value] = match input {
                Value::Array(items) => items,
                Value::String(text) if self.coerce => {
                    owned = Self::coerce_to_list(text);
                    &owned
                }
                other => {
                    return ParseOutcome::error(self.message.clone().unwrap_or_else(|| {
                        format!("Expected an array, got {}", json_type_name(other))
                    }));
                }
            };

            let mut values = Vec::with_capacity(elements.len());
            let mut errors = Vec::new();

            for (index, element) in elements.iter().enumerate() {
                let outcome = self.item.safe_parse(element);
                if outcome.is_success() {
                    if let Some(value) = outcome.into_value() {
                        values.push(value);
                    }
                } else {
                    errors.push(format!("[{index}]: {}", outcome.errors().join(" | ")));
                }
            }

            // Size checks on a partially parsed array would be misleading.
            if !errors.is_empty() {
                return ParseOutcome::failure(errors);
            }

            values
        };

        let mut errors = Vec::new();
        let size = values.len();

        if let Some(min) = self.min_size {
            if size < min {
                errors.push(
                    self.min_message
                        .clone()
                        .unwrap_or_else(|| format!("Array too short: {size} < {min}")),
                );
            }
        }

        if let Some(max) = self.max_size {
            if size > max {
                errors.push(
                    self.max_message
                        .clone()
                        .unwrap_or_else(|| format!("Array too long: {size} > {max}")),
                );
            }
        }

        if errors.is_empty() {
            ParseOutcome::success(values)
        } else {
            ParseOutcome::failure(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
