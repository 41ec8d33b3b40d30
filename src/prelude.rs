//! Convenience re-exports
//!
//! ```
//! use fluent_schema::prelude::*;
//! ```

pub use crate::batch::{BatchOutcome, BatchValidator};
pub use crate::ext::ValidateExt;
pub use crate::foundation::{
    json_type_name, stringify, BatchError, ErasedSchema, IntoJson, ParseError, ParseOutcome,
    Schema,
};
pub use crate::schemas::{
    any_array, array, boolean, coerce, double, float, int, long, string, AnySchema, ArraySchema,
    BooleanSchema, DoubleSchema, FloatSchema, IntSchema, LongSchema, NumberKind, NumberSchema,
    StringSchema,
};

pub use crate::batch;
