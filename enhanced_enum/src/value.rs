//! Value kinds an enhanced enum can hold

use std::fmt::{self, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A number-or-string value, the default value kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// Numeric value, auto-derived or an explicit numeric alias
    Number(i64),
    /// String value, derived from a key or an explicit string alias
    Text(String),
}

impl EnumValue {
    /// The numeric value, if any
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The string value, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// String representation, numbers rendered in decimal
    pub fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

impl Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EnumValue {
    fn from(n: i64) -> Self { Self::Number(n) }
}

impl From<i32> for EnumValue {
    fn from(n: i32) -> Self { Self::Number(n.into()) }
}

impl From<&str> for EnumValue {
    fn from(s: &str) -> Self { Self::Text(s.to_string()) }
}

impl From<String> for EnumValue {
    fn from(s: String) -> Self { Self::Text(s) }
}

/// A type usable as the value of an enhanced enum
///
/// The builder produces [`EnumValue`]s internally and converts them with
/// [`ValueKind::from_value`]; a conversion returning `None` fails the build.
pub trait ValueKind: Clone + Eq + Hash + fmt::Debug + Display {
    /// Name of the kind, used in error messages
    const KIND: &'static str;

    /// Convert a resolved value into this kind
    fn from_value(value: EnumValue) -> Option<Self>;

    /// The numeric value, used to continue auto-increment after an alias
    fn as_number(&self) -> Option<i64>;
}

impl ValueKind for EnumValue {
    const KIND: &'static str = "number or string";

    fn from_value(value: EnumValue) -> Option<Self> { Some(value) }

    fn as_number(&self) -> Option<i64> { Self::as_number(self) }
}

impl ValueKind for String {
    const KIND: &'static str = "string";

    fn from_value(value: EnumValue) -> Option<Self> {
        match value {
            EnumValue::Text(s) => Some(s),
            EnumValue::Number(_) => None,
        }
    }

    fn as_number(&self) -> Option<i64> { None }
}

impl ValueKind for i64 {
    const KIND: &'static str = "number";

    fn from_value(value: EnumValue) -> Option<Self> { value.as_number() }

    fn as_number(&self) -> Option<i64> { Some(*self) }
}
