//! Property values.
//!
//! A property line carries a list of values; each value is a quoted string,
//! a run of integers or a run of floats. Numeric runs are never empty.

use std::fmt;
use std::ops::Deref;

use crate::util::{Error, Result, Vec3};

use super::constants::{FLOAT_PRECISION, VALUE_SEPARATOR};

/// Non-empty run of numbers.
///
/// Only the checked constructors on [`Value`] can build one, so a numeric
/// value always writes at least one number.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<T>(Vec<T>);

impl<T> Run<T> {
    fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyValue);
        }
        Ok(Self(values))
    }

    fn one(value: T) -> Self {
        Self(vec![value])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for Run<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

/// One value on a property line.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Rendered as `"text"`.
    String(String),
    /// Rendered as `1, 2, 3`.
    Ints(Run<i64>),
    /// Rendered with three decimals, `1.000, 2.500`.
    Floats(Run<f32>),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn int(v: i64) -> Self {
        Value::Ints(Run::one(v))
    }

    pub fn float(v: f32) -> Self {
        Value::Floats(Run::one(v))
    }

    /// Integer run; fails on an empty input.
    pub fn ints(values: impl IntoIterator<Item = i64>) -> Result<Self> {
        Ok(Value::Ints(Run::new(values.into_iter().collect())?))
    }

    /// Float run; fails on an empty input.
    pub fn floats(values: impl IntoIterator<Item = f32>) -> Result<Self> {
        Ok(Value::Floats(Run::new(values.into_iter().collect())?))
    }

    /// Float run of flattened `x, y, z` triples.
    pub fn vec3s(values: impl IntoIterator<Item = Vec3>) -> Result<Self> {
        Self::floats(values.into_iter().flat_map(|v| v.to_array()))
    }

    /// Number of scalars (1 for strings).
    pub fn len(&self) -> usize {
        match self {
            Value::String(_) => 1,
            Value::Ints(v) => v.len(),
            Value::Floats(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canonical text form.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

fn write_joined<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(VALUE_SEPARATOR)?;
        }
        item(f, v)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Ints(v) => write_joined(f, v.as_slice(), |f, n| write!(f, "{}", n)),
            Value::Floats(v) => {
                write_joined(f, v.as_slice(), |f, n| write!(f, "{:.*}", FLOAT_PRECISION, n))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::int(v as i64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::float(v)
    }
}
