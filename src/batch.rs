//! Batch validation of named fields
//!
//! A [`BatchValidator`] pairs field names with erased schemas and validates
//! them all against one JSON object input. Fields are independent: every
//! registered schema runs, and the outcome collects per-field values and
//! per-field error lists in registration order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::foundation::{BatchError, ErasedSchema};

// ============================================================================
// BATCH VALIDATOR
// ============================================================================

/// An ordered collection of named field schemas.
///
/// Registration order is preserved; registering a name twice replaces the
/// schema in place. Each field is validated against the matching key of the
/// input object, with missing keys (and non-object inputs) treated as absent.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let validator = BatchValidator::new()
///     .field("name", string().min_length(1, None))
///     .field("age", coerce::int().min(0, None));
///
/// let outcome = validator.validate(&json!({"name": "Ada", "age": "36"}));
/// assert!(outcome.is_success());
/// assert_eq!(outcome.value("age"), Some(&json!(36)));
///
/// let outcome = validator.validate(&json!({"name": "", "age": -5}));
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.field_errors("age"), ["Value must be >= 0"]);
/// ```
#[derive(Default)]
pub struct BatchValidator {
    fields: IndexMap<String, Box<dyn ErasedSchema>>,
}

impl BatchValidator {
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under `name`, replacing any previous one in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, schema: impl ErasedSchema + 'static) -> Self {
        self.fields.insert(name.into(), Box::new(schema));
        self
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates every registered field against the matching key of `input`.
    ///
    /// A non-object input leaves every field absent; per-schema defaults and
    /// optionality then decide whether that is an error.
    #[must_use]
    pub fn validate(&self, input: &Value) -> BatchOutcome {
        let object = input.as_object();
        let mut values = IndexMap::new();
        let mut errors = IndexMap::new();

        for (name, schema) in &self.fields {
            let field_input = object
                .and_then(|fields| fields.get(name))
                .unwrap_or(&Value::Null);

            let (value, field_errors) = schema.safe_parse_json(field_input).into_parts();
            if field_errors.is_empty() {
                // Valid absence (optional schema) records no value.
                if let Some(value) = value {
                    values.insert(name.clone(), value);
                }
            } else {
                errors.insert(name.clone(), field_errors);
            }
        }

        BatchOutcome { values, errors }
    }
}

// ============================================================================
// BATCH OUTCOME
// ============================================================================

/// The result of validating every field of a [`BatchValidator`].
///
/// Successful fields land in `values` (erased to JSON), failed fields in
/// `errors`, both keyed by field name in registration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    values: IndexMap<String, Value>,
    errors: IndexMap<String, Vec<String>>,
}

impl BatchOutcome {
    /// True when every field validated successfully.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when at least one field failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Parsed values of successful fields, in registration order.
    #[must_use]
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// The parsed value of one field, if it succeeded with a value.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Error lists of failed fields, in registration order.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    /// The error messages of one field; empty when it succeeded.
    #[must_use]
    pub fn field_errors(&self, name: &str) -> &[String] {
        self.errors.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns all values, or a [`BatchError`] flattening every field error
    /// as `"[<field>] <message>"` in registration order.
    pub fn into_values(self) -> Result<IndexMap<String, Value>, BatchError> {
        if self.errors.is_empty() {
            return Ok(self.values);
        }

        let flattened = self
            .errors
            .iter()
            .flat_map(|(name, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("[{name}] {message}"))
            })
            .collect();
        Err(BatchError::new(flattened))
    }
}

// ============================================================================
// MACRO
// ============================================================================

/// Builds a [`BatchValidator`] from `name => schema` pairs.
///
/// # Examples
///
/// ```
/// use fluent_schema::prelude::*;
/// use serde_json::json;
///
/// let validator = batch! {
///     "name" => string().min_length(1, None),
///     "age" => coerce::int().min(0, None),
/// };
///
/// assert!(validator.validate(&json!({"name": "Ada", "age": 36})).is_success());
/// ```
#[macro_export]
macro_rules! batch {
    ($($name:expr => $schema:expr),* $(,)?) => {
        $crate::batch::BatchValidator::new()$(.field($name, $schema))*
    };
}

// ============================================================================
// TESTS
// ============================================================================
