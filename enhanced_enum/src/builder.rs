//! The builder orchestrator
//!
//! [`Builder::build`] walks the input in order, asks [`DefaultValues`] for each
//! entry's default, resolves the entry and records it in every table.

use std::marker::PhantomData;

use serde_json::Value;

use crate::config::EnumConfig;
use crate::entry::{EntryDef, JsonEntry, Metadata};
use crate::error::{Error, Result};
use crate::key::validate_key;
use crate::sequence::DefaultValues;
use crate::table::EnhancedEnum;
use crate::value::{EnumValue, ValueKind};

/// Builds enhanced enums with metadata of type `E` and values of kind `V`
#[derive(Debug, Clone, Copy, Default)]
pub struct Builder<E = (), V = EnumValue> {
    marker: PhantomData<fn() -> (E, V)>,
}

/// Create a builder for a chosen metadata type and value kind
pub const fn make_builder<E, V>() -> Builder<E, V> {
    Builder {
        marker: PhantomData,
    }
}

impl<E: Clone, V: ValueKind> Builder<E, V> {
    /// Build the lookup tables for `entries`, taken in iteration order
    ///
    /// `config` is an [`EnumConfig`] or a bare offset. Fails on the first
    /// illegal key, on a value the kind `V` cannot hold, on a numeric default
    /// past `i64::MAX`, and on a value already used by an earlier key.
    pub fn build<I, K>(&self, entries: I, config: impl Into<EnumConfig>) -> Result<EnhancedEnum<V, E>>
    where
        I: IntoIterator<Item = (K, EntryDef<V, E>)>,
        K: AsRef<str>,
    {
        let config = config.into();
        let entries = entries.into_iter();
        let mut table = EnhancedEnum::with_capacity(entries.size_hint().0);
        let mut defaults = DefaultValues::new(config);

        for (key, def) in entries {
            let key = key.as_ref();
            validate_key(key)?;

            let default = defaults.next_default(key)?;
            // the cursor follows the value before string coercion
            let number = def
                .explicit_value()
                .map_or_else(|| default.as_number(), ValueKind::as_number);

            let default = if config.use_string_number_value {
                EnumValue::Text(default.into_text())
            } else {
                default
            };
            let mut resolved = def.try_resolve(|| convert(key, default))?;
            if config.use_string_number_value {
                resolved.value = convert(key, EnumValue::Text(resolved.value.to_string()))?;
            }

            tracing::trace!(key, value = %resolved.value, label = %resolved.label, "resolved entry");
            table.insert(key, resolved)?;
            defaults.advance(number);
        }

        tracing::debug!(entries = table.len(), ?config, "built enhanced enum");
        Ok(table)
    }
}

impl Builder<Metadata, EnumValue> {
    /// Build from a JSON object, keeping member order
    ///
    /// Each member is read with [`EntryDef::from_json`].
    pub fn build_json(
        &self,
        mapping: &Value,
        config: impl Into<EnumConfig>,
    ) -> Result<EnhancedEnum<EnumValue, Metadata>> {
        let Value::Object(members) = mapping else {
            return Err(Error::InvalidInput(format!(
                "mapping must be a JSON object, found {mapping}"
            )));
        };

        let entries = members
            .iter()
            .map(|(key, json)| JsonEntry::from_json(key, json).map(|def| (key.as_str(), def)))
            .collect::<Result<Vec<_>>>()?;
        self.build(entries, config)
    }
}

fn convert<V: ValueKind>(key: &str, value: EnumValue) -> Result<V> {
    let found = value.to_string();
    V::from_value(value).ok_or_else(|| Error::value_type(key, V::KIND, found))
}

/// Build an enum holding number-or-string values
pub fn build_enum<I, K>(entries: I, config: impl Into<EnumConfig>) -> Result<EnhancedEnum>
where
    I: IntoIterator<Item = (K, EntryDef<EnumValue>)>,
    K: AsRef<str>,
{
    make_builder::<(), EnumValue>().build(entries, config)
}

/// Build an enum holding string values
///
/// Numeric defaults need `use_string_number_value` or `use_key_as_value`.
pub fn build_string_enum<I, K>(
    entries: I,
    config: impl Into<EnumConfig>,
) -> Result<EnhancedEnum<String>>
where
    I: IntoIterator<Item = (K, EntryDef<String>)>,
    K: AsRef<str>,
{
    make_builder::<(), String>().build(entries, config)
}

/// Build an enum holding numeric values
pub fn build_number_enum<I, K>(entries: I, config: impl Into<EnumConfig>) -> Result<EnhancedEnum<i64>>
where
    I: IntoIterator<Item = (K, EntryDef<i64>)>,
    K: AsRef<str>,
{
    make_builder::<(), i64>().build(entries, config)
}

/// Build an enum from a JSON object of entry definitions
pub fn build_enum_from_json(
    mapping: &Value,
    config: impl Into<EnumConfig>,
) -> Result<EnhancedEnum<EnumValue, Metadata>> {
    make_builder::<Metadata, EnumValue>().build_json(mapping, config)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::case::CaseStyle;

    fn labels(keys: &[&'static str]) -> Vec<(&'static str, EntryDef<EnumValue>)> {
        keys.iter().map(|key| (*key, EntryDef::label(key.to_lowercase()))).collect()
    }

    #[test]
    fn test_positional_values_from_offset() -> Result<()> {
        let status = build_enum(labels(&["A", "B", "C"]), 2)?;
        let values: Vec<_> = status.values().values().cloned().collect();
        assert_eq!(values, vec![2.into(), 3.into(), 4.into()]);
        assert_eq!(status.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        Ok(())
    }

    #[test]
    fn test_invalid_key_fails_without_key_derivation() {
        let result = build_enum(labels(&["A", "b"]), 0);
        assert_eq!(result, Err(Error::illegal_key("b")));
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let result = build_enum(
            [
                ("A", EntryDef::label("first")),
                ("B", EntryDef::label("second").with_value(0)),
            ],
            0,
        );
        assert_eq!(
            result,
            Err(Error::DuplicateValue {
                key:          "B".to_string(),
                existing_key: "A".to_string(),
                value:        "0".to_string(),
            })
        );
    }

    #[test]
    fn test_string_enum_needs_string_defaults() {
        let numeric = build_string_enum([("A", EntryDef::label("first"))], 0);
        assert!(matches!(numeric, Err(Error::ValueType { expected: "string", .. })));

        let coerced = build_string_enum(
            [("A", EntryDef::label("first"))],
            EnumConfig::default().with_string_number_value(true),
        );
        assert_eq!(coerced.map(|e| e.value_of("A").cloned()), Ok(Some("0".to_string())));

        let keyed = build_string_enum(
            [("AZ_AZ", EntryDef::label("first"))],
            EnumConfig::default().with_key_as_value(CaseStyle::KebabCase),
        );
        assert_eq!(keyed.map(|e| e.value_of("AZ_AZ").cloned()), Ok(Some("az-az".to_string())));
    }

    #[test]
    fn test_number_enum_rejects_string_values() {
        let keyed = build_number_enum(
            [("A", EntryDef::label("first"))],
            EnumConfig::default().with_key_as_value(true),
        );
        assert!(matches!(keyed, Err(Error::ValueType { expected: "number", .. })));

        let coerced = build_number_enum(
            [("A", EntryDef::label("first"))],
            EnumConfig::default().with_string_number_value(true),
        );
        assert!(matches!(coerced, Err(Error::ValueType { .. })));
    }

    #[test]
    fn test_build_json_keeps_member_order() -> Result<()> {
        let status = build_enum_from_json(
            &json!({
                "C": "third",
                "A": ["first", { "color": "red" }],
                "B": ["nth", 1000, {}],
            }),
            0,
        )?;
        assert_eq!(status.keys().collect::<Vec<_>>(), vec!["C", "A", "B"]);
        assert_eq!(status.value_of("A"), Some(&EnumValue::Number(1)));
        assert_eq!(status.value_of("B"), Some(&EnumValue::Number(1000)));
        assert_eq!(
            status.extra_of(&EnumValue::Number(1)).and_then(|m| m.get("color")),
            Some(&json!("red"))
        );
        assert_eq!(status.extra_of(&EnumValue::Number(1000)).map(Metadata::len), Some(0));
        Ok(())
    }

    #[test]
    fn test_build_json_rejects_non_object() {
        assert!(matches!(
            build_enum_from_json(&json!(["A"]), 0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            build_enum_from_json(&json!({ "A": 1 }), 0),
            Err(Error::EntryShape { .. })
        ));
    }
}
