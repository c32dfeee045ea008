//! # Fieldcheck
//!
//! Rule-based field validation with accumulated structured errors.
//!
//! ## Philosophy
//!
//! Validation errors are data, not failure signals. Running a rule set over a
//! record cannot fail: every applicable validator classifies its field's
//! value, and the flat, ordered list of [`ValidationError`]s is the whole
//! result. An empty list means the record is valid.
//!
//! The entire computation is pure and synchronous: no component keeps state
//! between calls, and nothing mutates the record under validation.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let person = Record::new().with("name", "Bert").with("age", 30);
//!
//! let rules = vec![
//!     FieldRule::new(["name"], vec![no_blank().boxed(), is_string().boxed()]),
//!     FieldRule::new(["age"], vec![no_blank().boxed(), is_number().boxed()]),
//! ];
//!
//! assert!(validate(&person, &rules).is_empty());
//!
//! let broken = Record::new().with("name", "").with("age", "thirty");
//! let errors = validate(&broken, &rules);
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].message(), "Value '' is blank!");
//! assert_eq!(errors[1].message(), "Value 'thirty' is no number!");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for values, records, and errors.
//! - `tracing`: debug-level events from the orchestrator and rule executor.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod rule;
pub mod validator;
pub mod value;

// Re-exports
pub use error::{ErrorKind, ValidationError};
pub use rule::{validate, FieldRule};
pub use validator::{
    is_number, is_string, no_blank, NoBlankValidator, NumberValidator, StringValidator, Validator,
};
pub use value::{Record, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorKind, ValidationError};
    pub use crate::rule::{validate, FieldRule};
    pub use crate::validator::{
        is_number, is_string, no_blank, NoBlankValidator, NumberValidator, StringValidator,
        Validator,
    };
    pub use crate::value::{Record, Value};
}
