//! # fluent-schema
//!
//! Fluent runtime validation and coercion for untyped values.
//!
//! Schemas declare the expected shape of a primitive value (string, number,
//! boolean, array) through a chained builder, then validate `serde_json::Value`
//! input against it. Validation is total: expected failures come back as an
//! ordered list of human-readable messages, never as a panic.
//!
//! ## Quick start
//!
//! ```
//! use fluent_schema::prelude::*;
//! use serde_json::json;
//!
//! // Strict: the input must already be the right JSON type.
//! let name = string().min_length(1, None).max_length(50, None);
//! assert_eq!(name.parse(&json!("Ada")).unwrap(), "Ada");
//!
//! // Coercing: text and scalars are converted before refinements.
//! let age = coerce::int().min(0, None).max(150, None);
//! assert_eq!(age.parse(&json!("36")).unwrap(), 36);
//!
//! // Failures are ordered message lists, not exceptions.
//! let outcome = age.safe_parse(&json!("-5"));
//! assert_eq!(outcome.errors(), ["Value must be >= 0"]);
//! ```
//!
//! ## Validating many fields at once
//!
//! ```
//! use fluent_schema::prelude::*;
//! use serde_json::json;
//!
//! let validator = batch! {
//!     "name" => string().min_length(1, None),
//!     "age" => coerce::int().min(0, None),
//!     "email" => coerce::string().email(None),
//! };
//!
//! let outcome = validator.validate(&json!({
//!     "name": "Ada",
//!     "age": "36",
//!     "email": "ada@example.com",
//! }));
//! assert!(outcome.is_success());
//! ```
//!
//! ## Design
//!
//! - **Total by default**: [`Schema::safe_parse`] reports failures in a
//!   [`ParseOutcome`]; [`Schema::parse`] is the opt-in hard-error channel.
//! - **Strict vs coercing** is chosen at construction via the constructor
//!   namespace ([`schemas`] root vs [`schemas::coerce`]), not a builder flag.
//! - **Absence** is `Value::Null` (each engine also treats certain empty
//!   strings as absent); defaults substitute for absence and still face
//!   refinements, so an out-of-range default is rejected.
//! - Configured schemas are immutable and shareable across threads.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod ext;
pub mod foundation;
pub mod prelude;
pub mod schemas;

pub use batch::{BatchOutcome, BatchValidator};
pub use ext::ValidateExt;
pub use foundation::{BatchError, ErasedSchema, ParseError, ParseOutcome, Schema};
pub use schemas::{
    coerce, AnySchema, ArraySchema, BooleanSchema, DoubleSchema, FloatSchema, IntSchema,
    LongSchema, NumberKind, NumberSchema, StringSchema,
};
