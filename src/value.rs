//! Dynamically typed field values and ordered records
//!
//! This module provides the `Value` tagged union that validators inspect, and
//! the `Record` type that holds a validation target's fields in insertion
//! order.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Record, Value};
//!
//! let person = Record::new().with("name", "Bert").with("age", 30);
//!
//! assert_eq!(person.get("name"), Some(&Value::String("Bert".to_string())));
//! assert_eq!(person.get("age"), Some(&Value::Number(30.0)));
//! assert_eq!(person.get("email"), None);
//! ```

use std::fmt;

/// A dynamically typed value held by a record field.
///
/// Each validator pattern-matches on the variant tag instead of probing the
/// runtime type of an opaque value. `Number` carries an `f64`, so `NaN` is a
/// representable (and rejectable) number.
///
/// # Examples
///
/// ```
/// use fieldcheck::Value;
///
/// let v = Value::from("hello");
/// assert!(matches!(v, Value::String(_)));
/// assert!(!v.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. `NaN` and infinities are representable.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A nested record.
    Object(Record),
}

impl Value {
    /// Check whether this value counts as blank.
    ///
    /// The blank table is deliberately value-based rather than type-based:
    /// `Null`, `false`, `0`, `NaN`, the empty string, and the empty array are
    /// blank; everything else is not. In particular the string `"0"` is not
    /// blank (it has length 1) and objects are never blank, not even empty
    /// ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Value;
    ///
    /// assert!(Value::Null.is_blank());
    /// assert!(Value::Number(0.0).is_blank());
    /// assert!(Value::String(String::new()).is_blank());
    ///
    /// assert!(!Value::Number(1.0).is_blank());
    /// assert!(!Value::String("0".to_string()).is_blank());
    /// ```
    #[inline]
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(_) => false,
        }
    }
}

/// Renders the value the way it appears inside error messages: bare, without
/// quotes or brackets. Integral numbers print without a decimal point.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => {
                if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object]"),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Record> for Value {
    #[inline]
    fn from(record: Record) -> Self {
        Value::Object(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

/// An ordered mapping from field names to values.
///
/// Fields enumerate in insertion order, and re-inserting an existing field
/// replaces its value without moving it. That order is what the rule executor
/// walks, so it determines the order of reported errors.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Record, Value};
///
/// let record = Record::new()
///     .with("name", "Bert")
///     .with("age", 30);
///
/// let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    #[inline]
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Add or replace a field, returning the record for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{Record, Value};
    ///
    /// let record = Record::new().with("active", true);
    /// assert_eq!(record.get("active"), Some(&Value::Bool(true)));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a field, or replace the value of an existing field in place.
    ///
    /// Replacement keeps the field's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field's value by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Check whether a field with the given name exists.
    #[inline]
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(existing, _)| existing == name)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
