//! Default value generation
//!
//! [`DefaultValues`] hands out the value an entry gets when it does not supply
//! one. It must be driven in input order: call [`DefaultValues::next_default`]
//! for an entry, resolve it, then [`DefaultValues::advance`] with what the entry
//! resolved to.
//!
//! Positions and the cursor are tracked wider than a value so that stepping
//! past `i64::MAX` is only an error for an entry that actually needs that
//! default.

use crate::case::derive_from_key;
use crate::config::EnumConfig;
use crate::error::{Error, Result};
use crate::value::EnumValue;

/// Per-build auto-increment state
#[derive(Debug, Clone)]
pub struct DefaultValues {
    config: EnumConfig,
    start:  i128,
    index:  i128,
    cursor: i128,
}

impl DefaultValues {
    /// Start a sequence for one build
    pub fn new(config: EnumConfig) -> Self {
        let start = i128::from(config.start());
        Self {
            config,
            start,
            index: 0,
            cursor: start,
        }
    }

    /// Default value for the entry at the current position
    ///
    /// Key derivation takes precedence, then the cursor (when auto-increment
    /// after aliases is on), then `start + index`. A numeric default past
    /// `i64::MAX` fails with [`Error::ValueOverflow`].
    pub fn next_default(&self, key: &str) -> Result<EnumValue> {
        let key_as_value = self.config.use_key_as_value;
        if key_as_value.is_enabled() {
            return derive_from_key(key, key_as_value.style()).map(EnumValue::Text);
        }

        let next = if self.config.auto_increment_after_alias {
            self.cursor
        } else {
            self.start + self.index
        };
        i64::try_from(next)
            .map(EnumValue::Number)
            .map_err(|_| Error::value_overflow(key))
    }

    /// Move past the current entry, given the number it resolved to
    ///
    /// A numeric value moves the cursor to that value plus one; a string value
    /// moves it forward by one.
    pub fn advance(&mut self, resolved: Option<i64>) {
        self.index += 1;
        self.cursor = resolved.map_or(self.cursor, i128::from) + 1;
    }
}
