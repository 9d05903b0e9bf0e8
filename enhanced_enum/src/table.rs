//! The lookup tables produced by a build

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

use crate::bind::{Bound, BoundGetter};
use crate::entry::ResolvedEntry;
use crate::error::{Error, Result};
use crate::key::EnumKey;
use crate::value::{EnumValue, ValueKind};

/// Everything known about one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapper<V, E> {
    /// Key the value was declared under
    pub key:   String,
    /// Display label
    pub label: String,
    /// The value itself
    pub value: V,
    /// Metadata, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<E>,
}

/// One row of the ordered option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictOption<V, E> {
    /// The value
    pub value: V,
    /// Display label
    pub label: String,
    /// Metadata, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<E>,
}

/// Lookup tables built from a key-to-label mapping
///
/// All tables are in input order. Values are unique, so every table keyed by
/// value holds exactly one row per key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnhancedEnum<V = EnumValue, E = ()> {
    value:  IndexMap<String, V>,
    label:  IndexMap<V, String>,
    extra:  IndexMap<V, Option<E>>,
    mapper: IndexMap<V, Mapper<V, E>>,
    dict:   Vec<DictOption<V, E>>,
}

impl<V: Hash + Eq, E: PartialEq> PartialEq for EnhancedEnum<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.dict == other.dict
            && self.value == other.value
            && self.label == other.label
            && self.extra == other.extra
            && self.mapper == other.mapper
    }
}

impl<V: Hash + Eq, E: Eq> Eq for EnhancedEnum<V, E> {}

impl<V: ValueKind, E: Clone> EnhancedEnum<V, E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            value:  IndexMap::with_capacity(capacity),
            label:  IndexMap::with_capacity(capacity),
            extra:  IndexMap::with_capacity(capacity),
            mapper: IndexMap::with_capacity(capacity),
            dict:   Vec::with_capacity(capacity),
        }
    }

    /// Record a resolved entry in every table
    pub(crate) fn insert(&mut self, key: &str, entry: ResolvedEntry<V, E>) -> Result<()> {
        let ResolvedEntry { label, value, extra } = entry;

        if let Some(existing) = self.mapper.get(&value) {
            return Err(Error::DuplicateValue {
                key:          key.to_string(),
                existing_key: existing.key.clone(),
                value:        value.to_string(),
            });
        }

        self.value.insert(key.to_string(), value.clone());
        self.label.insert(value.clone(), label.clone());
        self.extra.insert(value.clone(), extra.clone());
        self.mapper.insert(
            value.clone(),
            Mapper {
                key: key.to_string(),
                label: label.clone(),
                value: value.clone(),
                extra: extra.clone(),
            },
        );
        self.dict.push(DictOption { value, label, extra });
        Ok(())
    }

    /// Value by key (`VALUE`)
    pub const fn values(&self) -> &IndexMap<String, V> { &self.value }

    /// Label by value (`LABEL`)
    pub const fn labels(&self) -> &IndexMap<V, String> { &self.label }

    /// Metadata by value (`EXTRA`)
    pub const fn extras(&self) -> &IndexMap<V, Option<E>> { &self.extra }

    /// Full record by value (`MAPPER`)
    pub const fn mappers(&self) -> &IndexMap<V, Mapper<V, E>> { &self.mapper }

    /// Ordered option list (`DICT`)
    pub fn dict(&self) -> &[DictOption<V, E>] { &self.dict }

    /// Keys in input order
    pub fn keys(&self) -> impl Iterator<Item = &str> { self.value.keys().map(String::as_str) }

    /// Number of entries
    pub fn len(&self) -> usize { self.dict.len() }

    /// Whether the mapping was empty
    pub fn is_empty(&self) -> bool { self.dict.is_empty() }

    /// Whether `key` was declared
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool { self.value.contains_key(key.as_ref()) }

    /// Value declared under `key`
    pub fn value_of(&self, key: impl AsRef<str>) -> Option<&V> { self.value.get(key.as_ref()) }

    /// Label of `value`
    pub fn label_of(&self, value: &V) -> Option<&str> { self.label.get(value).map(String::as_str) }

    /// Metadata of `value`; `None` for unknown values and entries without metadata
    pub fn extra_of(&self, value: &V) -> Option<&E> {
        self.extra.get(value).and_then(Option::as_ref)
    }

    /// Full record of `value`
    pub fn mapper_of(&self, value: &V) -> Option<&Mapper<V, E>> { self.mapper.get(value) }

    /// Key `value` was declared under
    pub fn key_of(&self, value: &V) -> Option<&str> {
        self.mapper.get(value).map(|mapper| mapper.key.as_str())
    }

    /// Keys of `K` that this enum does not declare
    pub fn missing_keys<K: EnumKey>(&self) -> Vec<&'static str> {
        K::ALL
            .iter()
            .map(|key| key.key())
            .filter(|key| !self.value.contains_key(*key))
            .collect()
    }

    /// Bind a value for key comparisons and lookups
    pub const fn bind(&self, value: V) -> Bound<'_, V, E> { Bound::new(self, value) }

    /// Bind a getter; every comparison calls it again
    pub const fn bind_getter<F>(&self, getter: F) -> BoundGetter<'_, V, E, F>
    where
        F: Fn() -> Option<V>,
    {
        BoundGetter::new(self, getter)
    }

    /// Whether `value` is the value of any of `keys`
    pub(crate) fn matches_any<I>(&self, value: Option<&V>, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        value.is_some_and(|value| {
            keys.into_iter()
                .any(|key| self.value_of(key).is_some_and(|v| v == value))
        })
    }

    /// Whether `value` differs from the value of every one of `keys`
    pub(crate) fn differs_from_all<I>(&self, value: Option<&V>, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter()
            .all(|key| value.is_none_or(|value| self.value_of(key) != Some(value)))
    }
}
