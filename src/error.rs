//! Structured validation errors
//!
//! Validation errors are plain domain data, not failure signals: a validator
//! that finds nothing wrong returns no errors, and the API itself never
//! fails. Each error pairs a category with a human-readable message.

use std::error::Error;
use std::fmt;

use crate::value::Value;

/// The category of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The value was blank where a non-blank value was required.
    #[cfg_attr(feature = "serde", serde(rename = "blank"))]
    Blank,
    /// The value had the wrong type.
    #[cfg_attr(feature = "serde", serde(rename = "type error"))]
    TypeError,
}

impl ErrorKind {
    /// The category's canonical string form.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::Blank.as_str(), "blank");
    /// assert_eq!(ErrorKind::TypeError.as_str(), "type error");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Blank => "blank",
            ErrorKind::TypeError => "type error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check: an error category plus a human-readable message.
///
/// Created by a validator at the moment a violation is detected, then
/// appended to the flat result sequence. Immutable once created.
///
/// # Examples
///
/// ```
/// use fieldcheck::{ErrorKind, ValidationError, Value};
///
/// let error = ValidationError::blank(&Value::String(String::new()));
/// assert_eq!(error.kind(), ErrorKind::Blank);
/// assert_eq!(error.message(), "Value '' is blank!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    /// Create an error from a category and message.
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            kind,
            message: message.into(),
        }
    }

    /// The error reported for a blank value.
    pub fn blank(value: &Value) -> Self {
        Self::new(ErrorKind::Blank, format!("Value '{value}' is blank!"))
    }

    /// The error reported for a value that is not a string.
    pub fn no_string(value: &Value) -> Self {
        Self::new(ErrorKind::TypeError, format!("Value '{value}' is no string!"))
    }

    /// The error reported for a value that is not a number.
    pub fn no_number(value: &Value) -> Self {
        Self::new(ErrorKind::TypeError, format!("Value '{value}' is no number!"))
    }

    /// The error's category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The error's human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ValidationError {}
