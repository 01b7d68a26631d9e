//! Scalar helper types shared across API groups.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ModelError, ModelResult};
use crate::schema::{FieldValue, ToFieldValue};

fn quantity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Decimal number followed by an optional binary SI, decimal SI or exponent suffix
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)(Ki|Mi|Gi|Ti|Pi|Ei|n|u|m|k|M|G|T|P|E|[eE][+-]?\d+)?$")
            .expect("quantity pattern is a valid regex")
    })
}

/// A resource quantity such as `500m`, `128Mi` or `2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quantity(String);

impl Quantity {
    /// Parse and validate a quantity string.
    pub fn parse(value: impl Into<String>) -> ModelResult<Self> {
        let value = value.into();
        if quantity_pattern().is_match(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidQuantity(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Quantity {
    type Error = ModelError;

    fn try_from(value: &str) -> ModelResult<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ToFieldValue for Quantity {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(&self.0)
    }
}

/// A value that is either an integer or a string, e.g. a port number or name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

impl From<i32> for IntOrString {
    fn from(value: i32) -> Self {
        IntOrString::Int(value)
    }
}

impl From<&str> for IntOrString {
    fn from(value: &str) -> Self {
        IntOrString::String(value.to_string())
    }
}

impl From<String> for IntOrString {
    fn from(value: String) -> Self {
        IntOrString::String(value)
    }
}

impl fmt::Display for IntOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntOrString::Int(i) => write!(f, "{}", i),
            IntOrString::String(s) => f.write_str(s),
        }
    }
}

impl ToFieldValue for IntOrString {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            IntOrString::Int(i) => FieldValue::Int((*i).into()),
            IntOrString::String(s) => FieldValue::Str(s),
        }
    }
}
