//! Entry definitions
//!
//! An entry is the right-hand side of one key in the input mapping: a label,
//! optionally with an explicit value (an alias) and/or metadata.

use std::convert::Infallible;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::value::EnumValue;

/// Metadata type for entries read from JSON
pub type Metadata = Map<String, Value>;

/// Entry definition as read from JSON
pub type JsonEntry = EntryDef<EnumValue, Metadata>;

/// Definition of a single entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDef<V, E = ()> {
    /// Label only; the value is auto-derived
    Label(String),
    /// Label with an explicit value
    Value(String, V),
    /// Label with metadata; the value is auto-derived
    Extra(String, E),
    /// Label with an explicit value and metadata
    Full(String, V, E),
}

/// An entry after its value has been decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry<V, E> {
    /// Display label
    pub label: String,
    /// Resolved value
    pub value: V,
    /// Metadata, if the entry carried any
    pub extra: Option<E>,
}

impl<V, E> EntryDef<V, E> {
    /// Label-only entry
    pub fn label(label: impl Into<String>) -> Self { Self::Label(label.into()) }

    /// Attach an explicit value, keeping any metadata
    #[must_use]
    pub fn with_value(self, value: impl Into<V>) -> Self {
        match self {
            Self::Label(label) | Self::Value(label, _) => Self::Value(label, value.into()),
            Self::Extra(label, extra) | Self::Full(label, _, extra) => {
                Self::Full(label, value.into(), extra)
            }
        }
    }

    /// Attach metadata, keeping any explicit value
    #[must_use]
    pub fn with_extra(self, extra: E) -> Self {
        match self {
            Self::Label(label) | Self::Extra(label, _) => Self::Extra(label, extra),
            Self::Value(label, value) | Self::Full(label, value, _) => {
                Self::Full(label, value, extra)
            }
        }
    }

    /// The display label
    pub fn label_text(&self) -> &str {
        match self {
            Self::Label(label)
            | Self::Value(label, _)
            | Self::Extra(label, _)
            | Self::Full(label, _, _) => label,
        }
    }

    /// The explicit value, if this entry is an alias
    pub const fn explicit_value(&self) -> Option<&V> {
        match self {
            Self::Value(_, value) | Self::Full(_, value, _) => Some(value),
            Self::Label(_) | Self::Extra(_, _) => None,
        }
    }

    /// Resolve against the default value computed for this entry's position
    ///
    /// An explicit value wins over `default`.
    pub fn resolve(self, default: V) -> ResolvedEntry<V, E> {
        let Ok(resolved) = self.try_resolve(|| Ok::<_, Infallible>(default));
        resolved
    }

    /// Like [`EntryDef::resolve`], computing the default only when it is needed
    pub fn try_resolve<F, Err>(self, default: F) -> std::result::Result<ResolvedEntry<V, E>, Err>
    where
        F: FnOnce() -> std::result::Result<V, Err>,
    {
        let (label, value, extra) = match self {
            Self::Label(label) => (label, default()?, None),
            Self::Value(label, value) => (label, value, None),
            Self::Extra(label, extra) => (label, default()?, Some(extra)),
            Self::Full(label, value, extra) => (label, value, Some(extra)),
        };
        Ok(ResolvedEntry { label, value, extra })
    }
}

impl<V, E> From<&str> for EntryDef<V, E> {
    fn from(label: &str) -> Self { Self::Label(label.to_string()) }
}

impl<V, E> From<String> for EntryDef<V, E> {
    fn from(label: String) -> Self { Self::Label(label) }
}

impl JsonEntry {
    /// Read an entry from its JSON form
    ///
    /// - `"label"`
    /// - `["label", value]` where `value` is a string or an integer
    /// - `["label", {metadata}]`
    /// - `["label", value, {metadata}]`, with `value` null to keep the default
    ///
    /// Numeric values must be integers that fit in an `i64`; `["label", 1.5]`
    /// fails with [`Error::EntryShape`].
    pub fn from_json(key: &str, json: &Value) -> Result<Self> {
        let items = match json {
            Value::String(label) => return Ok(Self::Label(label.clone())),
            Value::Array(items) => items,
            other => {
                return Err(Error::entry_shape(
                    key,
                    format!("expected a label or an array, found {other}"),
                ));
            }
        };

        let Some(Value::String(label)) = items.first() else {
            return Err(Error::entry_shape(key, "first element must be the label string"));
        };
        let label = label.clone();

        match items.as_slice() {
            [_, Value::Object(extra)] => Ok(Self::Extra(label, extra.clone())),
            [_, middle] => Ok(Self::Value(label, json_value(key, middle)?)),
            [_, Value::Null, Value::Object(extra)] => Ok(Self::Extra(label, extra.clone())),
            [_, middle, Value::Object(extra)] => {
                Ok(Self::Full(label, json_value(key, middle)?, extra.clone()))
            }
            [_, _, other] => Err(Error::entry_shape(
                key,
                format!("metadata must be an object, found {other}"),
            )),
            _ => Err(Error::entry_shape(
                key,
                format!("expected 2 or 3 elements, found {}", items.len()),
            )),
        }
    }
}

fn json_value(key: &str, json: &Value) -> Result<EnumValue> {
    match json {
        Value::String(s) => Ok(EnumValue::Text(s.clone())),
        Value::Number(n) => n.as_i64().map(EnumValue::Number).ok_or_else(|| {
            Error::entry_shape(key, format!("numeric value {n} is not an integer"))
        }),
        other => Err(Error::entry_shape(
            key,
            format!("value must be a string or an integer, found {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_resolve_variants() {
        let label: EntryDef<i64> = EntryDef::label("first");
        assert_eq!(label.resolve(3).value, 3);

        let alias: EntryDef<i64> = EntryDef::label("nth").with_value(1000);
        let resolved = alias.resolve(3);
        assert_eq!((resolved.value, resolved.extra), (1000, None));

        let extra: EntryDef<i64, &str> = EntryDef::label("red").with_extra("color");
        let resolved = extra.resolve(0);
        assert_eq!((resolved.value, resolved.extra), (0, Some("color")));

        let full: EntryDef<i64, &str> = EntryDef::label("n").with_extra("meta").with_value(4000);
        assert_eq!(full, EntryDef::Full("n".to_string(), 4000, "meta"));
        assert_eq!(full.explicit_value(), Some(&4000));
        assert_eq!(full.label_text(), "n");
    }

    #[test]
    fn test_from_json_shapes() {
        assert_eq!(
            JsonEntry::from_json("A", &json!("first")),
            Ok(EntryDef::Label("first".to_string()))
        );
        assert_eq!(
            JsonEntry::from_json("B", &json!(["nth", 1000])),
            Ok(EntryDef::Value("nth".to_string(), EnumValue::Number(1000)))
        );
        assert_eq!(
            JsonEntry::from_json("B", &json!(["nth", "alias"])),
            Ok(EntryDef::Value("nth".to_string(), EnumValue::from("alias")))
        );

        let meta = json!({ "color": "red" });
        let Value::Object(meta) = meta else {
            return;
        };
        assert_eq!(
            JsonEntry::from_json("C", &json!(["red", { "color": "red" }])),
            Ok(EntryDef::Extra("red".to_string(), meta.clone()))
        );
        assert_eq!(
            JsonEntry::from_json("C", &json!(["red", 4, { "color": "red" }])),
            Ok(EntryDef::Full("red".to_string(), EnumValue::Number(4), meta.clone()))
        );
        assert_eq!(
            JsonEntry::from_json("C", &json!(["red", null, { "color": "red" }])),
            Ok(EntryDef::Extra("red".to_string(), meta))
        );
    }

    #[test]
    fn test_from_json_rejects_fractional_values() {
        assert!(matches!(
            JsonEntry::from_json("A", &json!(["a", 1.5])),
            Err(Error::EntryShape { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        for bad in [
            json!(1),
            json!([]),
            json!([1, 2]),
            json!(["label"]),
            json!(["label", true]),
            json!(["label", 1.5]),
            json!(["label", 1, 2]),
            json!(["label", 1, {}, 4]),
        ] {
            assert!(
                matches!(JsonEntry::from_json("K", &bad), Err(Error::EntryShape { .. })),
                "{bad} should be rejected"
            );
        }
    }
}
