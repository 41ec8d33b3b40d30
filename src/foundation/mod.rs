//! Core types shared by every schema engine
//!
//! - **Outcome**: [`ParseOutcome`] — success flag, optional value, ordered
//!   error strings
//! - **Contract**: [`Schema`], [`ErasedSchema`]
//! - **Errors**: [`ParseError`], [`BatchError`] — the opt-in raised channel
//! - **Values**: [`json_type_name`], [`stringify`], [`IntoJson`]

pub mod error;
pub mod outcome;
pub mod traits;
pub mod value;

pub use error::{BatchError, ParseError};
pub use outcome::ParseOutcome;
pub use traits::{ErasedSchema, Schema};
pub use value::{json_type_name, stringify, IntoJson};
