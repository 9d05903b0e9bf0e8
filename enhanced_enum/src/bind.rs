//! Binder helpers
//!
//! A [`Bound`] holds one value and compares it against keys of the enum it was
//! bound to. A [`BoundGetter`] holds a getter instead and reads it again on every
//! comparison, so it follows a slot the caller keeps mutating.

use crate::table::{EnhancedEnum, Mapper};
use crate::value::ValueKind;

/// A value bound to an enhanced enum
#[derive(Debug, Clone)]
pub struct Bound<'a, V, E> {
    table: &'a EnhancedEnum<V, E>,
    value: V,
}

impl<'a, V: ValueKind, E: Clone> Bound<'a, V, E> {
    pub(crate) const fn new(table: &'a EnhancedEnum<V, E>, value: V) -> Self { Self { table, value } }

    /// True if the value equals the value of any of `keys`
    pub fn is_in<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.table.matches_any(Some(&self.value), keys)
    }

    /// True if the value differs from the value of every one of `keys`
    ///
    /// An empty key set gives `true`.
    pub fn is_not<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.table.differs_from_all(Some(&self.value), keys)
    }

    /// The bound value
    pub const fn value(&self) -> &V { &self.value }

    /// Label of the bound value
    pub fn label(&self) -> Option<&'a str> { self.table.label_of(&self.value) }

    /// Metadata of the bound value
    pub fn extra(&self) -> Option<&'a E> { self.table.extra_of(&self.value) }

    /// Full record of the bound value
    pub fn mapper(&self) -> Option<&'a Mapper<V, E>> { self.table.mapper_of(&self.value) }

    /// Key the bound value was declared under
    pub fn key(&self) -> Option<&'a str> { self.table.key_of(&self.value) }
}

/// A getter bound to an enhanced enum
pub struct BoundGetter<'a, V, E, F> {
    table:  &'a EnhancedEnum<V, E>,
    getter: F,
}

impl<'a, V, E, F> BoundGetter<'a, V, E, F>
where
    V: ValueKind,
    E: Clone,
    F: Fn() -> Option<V>,
{
    pub(crate) const fn new(table: &'a EnhancedEnum<V, E>, getter: F) -> Self {
        Self { table, getter }
    }

    /// True if the current value equals the value of any of `keys`
    ///
    /// A getter returning `None` matches nothing.
    pub fn is_in<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let value = (self.getter)();
        self.table.matches_any(value.as_ref(), keys)
    }

    /// True if the current value differs from the value of every one of `keys`
    pub fn is_not<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let value = (self.getter)();
        self.table.differs_from_all(value.as_ref(), keys)
    }

    /// Read the getter once and bind the result
    pub fn snapshot(&self) -> Option<Bound<'a, V, E>> {
        (self.getter)().map(|value| Bound::new(self.table, value))
    }
}
