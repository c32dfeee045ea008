//! The `Validator` trait and its built-in variants
//!
//! A validator classifies a single value and reports zero or one structured
//! error. Validators are stateless unit structs: cheap to construct, freely
//! reusable, and composable into [`FieldRule`](crate::FieldRule) lists via
//! [`Validator::boxed`].

use std::fmt;

use crate::error::ValidationError;
use crate::value::Value;

/// A stateless check over a single value.
///
/// Implementations never fail and never mutate anything: they classify the
/// value and return an error list with zero or one element.
///
/// # Examples
///
/// ```
/// use fieldcheck::{no_blank, Validator, Value};
///
/// let errors = no_blank().validate(&Value::String(String::new()));
/// assert_eq!(errors.len(), 1);
///
/// let errors = no_blank().validate(&Value::from("x"));
/// assert!(errors.is_empty());
/// ```
pub trait Validator: fmt::Debug + Send + Sync {
    /// Check the value, returning zero or one error.
    fn validate(&self, value: &Value) -> Vec<ValidationError>;

    /// Box this validator for storage in a rule's validator list.
    fn boxed(self) -> Box<dyn Validator>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl Validator for Box<dyn Validator> {
    #[inline]
    fn validate(&self, value: &Value) -> Vec<ValidationError> {
        (**self).validate(value)
    }
}

/// Validator that rejects blank values.
///
/// Blankness follows [`Value::is_blank`]: `null`, `false`, `0`, `NaN`, the
/// empty string, and the empty array are blank.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoBlankValidator;

impl Validator for NoBlankValidator {
    #[inline]
    fn validate(&self, value: &Value) -> Vec<ValidationError> {
        if value.is_blank() {
            vec![ValidationError::blank(value)]
        } else {
            vec![]
        }
    }
}

/// Validator that rejects anything that is not a string.
#[derive(Clone, Copy, Default, Debug)]
pub struct StringValidator;

impl Validator for StringValidator {
    #[inline]
    fn validate(&self, value: &Value) -> Vec<ValidationError> {
        match value {
            Value::String(_) => vec![],
            other => vec![ValidationError::no_string(other)],
        }
    }
}

/// Validator that rejects anything that is not a (non-NaN) number.
///
/// `NaN` carries the number tag but is still rejected.
#[derive(Clone, Copy, Default, Debug)]
pub struct NumberValidator;

impl Validator for NumberValidator {
    #[inline]
    fn validate(&self, value: &Value) -> Vec<ValidationError> {
        match value {
            Value::Number(n) if !n.is_nan() => vec![],
            other => vec![ValidationError::no_number(other)],
        }
    }
}

/// Create a validator that rejects blank values.
///
/// # Example
///
/// ```
/// use fieldcheck::{no_blank, Validator, Value};
///
/// assert!(no_blank().validate(&Value::from(1)).is_empty());
/// assert_eq!(no_blank().validate(&Value::Number(0.0)).len(), 1);
/// ```
pub fn no_blank() -> NoBlankValidator {
    NoBlankValidator
}

/// Create a validator that rejects non-strings.
///
/// # Example
///
/// ```
/// use fieldcheck::{is_string, Validator, Value};
///
/// assert!(is_string().validate(&Value::from("42")).is_empty());
/// assert_eq!(is_string().validate(&Value::from(42)).len(), 1);
/// ```
pub fn is_string() -> StringValidator {
    StringValidator
}

/// Create a validator that rejects non-numbers.
///
/// # Example
///
/// ```
/// use fieldcheck::{is_number, Validator, Value};
///
/// assert!(is_number().validate(&Value::from(42)).is_empty());
/// assert_eq!(is_number().validate(&Value::from("42")).len(), 1);
/// ```
pub fn is_number() -> NumberValidator {
    NumberValidator
}
