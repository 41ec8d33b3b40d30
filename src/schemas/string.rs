//! String schema engine
//!
//! Pipeline: normalize (trim, detect emptiness) → default substitution or
//! required failure → strict/coercive typing → accumulated refinements
//! (min/max length, full-match pattern).
//!
//! Length is counted in Unicode scalar values. Presets (`email`, `uuid`,
//! `url`, `phone`) install a pattern plus a default message in one call.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{json_type_name, stringify, ParseOutcome, Schema};

use super::REQUIRED_MESSAGE;

// ============================================================================
// PRESET PATTERNS
// ============================================================================

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}\z").unwrap());

// RFC-4122 shape: version 1-5, variant 8/9/a/b.
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}\z",
    )
    .unwrap()
});

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(https?://)?[\w.-]+(\.[\w.-]+)+[\w.,@?^=%&:/~+#-]*\z").unwrap());

// Permissive, best-effort for mixed international/local separators.
// Accepts e.g. +55 11 99999-9999 | 11999999999 | 9999-9999.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(\+?\d{1,4}?[ \-\(\)]?)?(\d{2,5}[ \-\)]?)?(\d{4,5}[- ]?\d{4})\z").unwrap()
});

/// Rewraps a pattern so it must match the whole input, not a substring.
fn anchor(pattern: &Regex) -> Regex {
    let source = pattern.as_str();
    // Wrapping a valid pattern in a non-capturing group stays valid; the
    // fallback only guards against pathological patterns.
    Regex::new(&format!(r"\A(?:{source})\z")).unwrap_or_else(|_| pattern.clone())
}

// ============================================================================
// STRING SCHEMA
// ============================================================================

/// Validates and coerces string input.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let username = string().min_length(3, None).max_length(20, None);
/// assert!(username.safe_parse(&json!("alice")).is_success());
/// assert!(username.safe_parse(&json!("ab")).is_failure());
///
/// // Coercing schemas stringify any input.
/// assert_eq!(coerce::string().parse(&json!(42)).unwrap(), "42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    coerce: bool,
    message: Option<String>,
    default: Option<String>,
    min_length: Option<usize>,
    min_length_message: Option<String>,
    max_length: Option<usize>,
    max_length_message: Option<String>,
    pattern: Option<Regex>,
    pattern_message: Option<String>,
}

impl StringSchema {
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
    ///
    /// The default still flows through the refinement stage.
    #[must_use]
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Requires at least `length` characters.
    #[must_use]
    pub fn min_length<'a>(mut self, length: usize, message: impl Into<Option<&'a str>>) -> Self {
        self.min_length = Some(length);
        self.min_length_message = message.into().map(str::to_string);
        self
    }

    /// Allows at most `length` characters.
    #[must_use]
    pub fn max_length<'a>(mut self, length: usize, message: impl Into<Option<&'a str>>) -> Self {
        self.max_length = Some(length);
        self.max_length_message = message.into().map(str::to_string);
        self
    }

    /// Requires the whole value to match `pattern`.
    ///
    /// Matching is full-match regardless of anchors in the pattern.
    #[must_use]
    pub fn matches<'a>(mut self, pattern: &Regex, message: impl Into<Option<&'a str>>) -> Self {
        self.pattern = Some(anchor(pattern));
        self.pattern_message = message.into().map(str::to_string);
        self
    }

    /// Preset: email address shape.
    #[must_use]
    pub fn email<'a>(mut self, message: impl Into<Option<&'a str>>) -> Self {
        self.pattern = Some(EMAIL_PATTERN.clone());
        self.pattern_message =
            Some(message.into().unwrap_or("Invalid email address").to_string());
        self
    }

    /// Preset: RFC-4122-shaped UUID (version 1-5, variant 8/9/a/b).
    #[must_use]
    pub fn uuid<'a>(mut self, message: impl Into<Option<&'a str>>) -> Self {
        self.pattern = Some(UUID_PATTERN.clone());
        self.pattern_message = Some(message.into().unwrap_or("Invalid UUID format").to_string());
        self
    }

    /// Preset: http(s) URL shape.
    #[must_use]
    pub fn url<'a>(mut self, message: impl Into<Option<&'a str>>) -> Self {
        self.pattern = Some(URL_PATTERN.clone());
        self.pattern_message = Some(message.into().unwrap_or("Invalid URL").to_string());
        self
    }

    /// Preset: permissive phone number shape.
    ///
    /// Best-effort across locale formats; not an authority on what a valid
    /// phone number is.
    #[must_use]
    pub fn phone<'a>(mut self, message: impl Into<Option<&'a str>>) -> Self {
        self.pattern = Some(PHONE_PATTERN.clone());
        self.pattern_message = Some(message.into().unwrap_or("Invalid phone number").to_string());
        self
    }

    fn required_error(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| REQUIRED_MESSAGE.to_string())
    }
}

impl Schema for StringSchema {
    type Output = String;

    fn safe_parse(&self, input: &Value) -> ParseOutcome<String> {
        let trimmed = match input {
            Value::Null => None,
            other => Some(stringify(other).trim().to_string()),
        };
        let is_empty = trimmed.as_deref().is_none_or(str::is_empty);

        // Presence and type stage: short-circuits.
        let value = if is_empty {
            match &self.default {
                Some(default) => default.clone(),
                None => return ParseOutcome::error(self.required_error()),
            }
        } else if self.coerce {
            trimmed.unwrap_or_default()
        } else {
            match input {
                Value::String(s) => s.trim().to_string(),
                other => {
                    return ParseOutcome::error(self.message.clone().unwrap_or_else(|| {
                        format!("Expected a string, got {}", json_type_name(other))
                    }));
                }
            }
        };

        // Refinement stage: accumulates.
        let mut errors = Vec::new();
        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                errors.push(
                    self.min_length_message
                        .clone()
                        .unwrap_or_else(|| format!("String too short: {length} < {min}")),
                );
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                errors.push(
                    self.max_length_message
                        .clone()
                        .unwrap_or_else(|| format!("String too long: {length} > {max}")),
                );
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(&value) {
                errors.push(
                    self.pattern_message
                        .clone()
                        .unwrap_or_else(|| "Does not match pattern".to_string()),
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
