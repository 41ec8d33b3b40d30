//! Schema engines and their constructors
//!
//! Two parallel constructor namespaces select the typing mode up front:
//! the root functions build strict schemas (native JSON types only), and
//! [`coerce`] builds coercing ones (text and scalar conversions applied
//! before refinements). Everything else about a schema is configured by
//! chaining builder methods.
//!
//! ```
//! use fluent_schema::prelude::*;
//! use serde_json::json;
//!
//! let strict = int();
//! let lenient = coerce::int();
//!
//! assert!(strict.safe_parse(&json!("42")).is_failure());
//! assert_eq!(lenient.parse(&json!("42")).unwrap(), 42);
//! ```

pub mod array;
pub mod boolean;
pub mod number;
pub mod string;

pub use array::{AnySchema, ArraySchema};
pub use boolean::BooleanSchema;
pub use number::{DoubleSchema, FloatSchema, IntSchema, LongSchema, NumberKind, NumberSchema};
pub use string::StringSchema;

use crate::foundation::Schema;

pub(crate) const REQUIRED_MESSAGE: &str = "Value is required";

// ============================================================================
// STRICT CONSTRUCTORS
// ============================================================================

/// Strict string schema: accepts native strings only.
#[must_use]
pub fn string() -> StringSchema {
    StringSchema::new(false)
}

/// Strict 32-bit integer schema.
#[must_use]
pub fn int() -> IntSchema {
    NumberSchema::new(false)
}

/// Strict 64-bit integer schema.
#[must_use]
pub fn long() -> LongSchema {
    NumberSchema::new(false)
}

/// Strict single-precision float schema.
#[must_use]
pub fn float() -> FloatSchema {
    NumberSchema::new(false)
}

/// Strict double-precision float schema.
#[must_use]
pub fn double() -> DoubleSchema {
    NumberSchema::new(false)
}

/// Strict boolean schema: accepts native booleans only.
#[must_use]
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new(false)
}

/// Strict array schema validating each element with `item`.
#[must_use]
pub fn array<S: Schema>(item: S) -> ArraySchema<S> {
    ArraySchema::new(item, false)
}

/// Strict array schema whose elements pass through unvalidated.
#[must_use]
pub fn any_array() -> ArraySchema<AnySchema> {
    ArraySchema::new(AnySchema, false)
}

// ============================================================================
// COERCING CONSTRUCTORS
// ============================================================================

/// Coercing constructors: text and scalar inputs are converted to the
/// schema's type before refinements run.
pub mod coerce {
    use super::{
        AnySchema, ArraySchema, BooleanSchema, DoubleSchema, FloatSchema, IntSchema, LongSchema,
        NumberSchema, Schema, StringSchema,
    };

    /// Coercing string schema: any scalar is stringified and trimmed.
    #[must_use]
    pub fn string() -> StringSchema {
        StringSchema::new(true)
    }

    /// Coercing 32-bit integer schema: parses exact integer text.
    #[must_use]
    pub fn int() -> IntSchema {
        NumberSchema::new(true)
    }

    /// Coercing 64-bit integer schema: parses exact integer text.
    #[must_use]
    pub fn long() -> LongSchema {
        NumberSchema::new(true)
    }

    /// Coercing single-precision float schema.
    #[must_use]
    pub fn float() -> FloatSchema {
        NumberSchema::new(true)
    }

    /// Coercing double-precision float schema.
    #[must_use]
    pub fn double() -> DoubleSchema {
        NumberSchema::new(true)
    }

    /// Coercing boolean schema: word table plus numeric one-check.
    #[must_use]
    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new(true)
    }

    /// Coercing array schema: comma-separated text becomes elements.
    #[must_use]
    pub fn array<S: Schema>(item: S) -> ArraySchema<S> {
        ArraySchema::new(item, true)
    }

    /// Coercing array schema whose elements pass through unvalidated.
    #[must_use]
    pub fn any_array() -> ArraySchema<AnySchema> {
        ArraySchema::new(AnySchema, true)
    }
}
