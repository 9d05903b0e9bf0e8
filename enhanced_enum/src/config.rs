//! Build configuration
//!
//! A build takes either a bare offset or an [`EnumConfig`]. Configurations can be
//! read from JSON using the option names `offset`, `useKeyAsValue`,
//! `autoIncrementAfterAlias` and `useStringNumberValue`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::case::CaseStyle;
use crate::error::{Error, Result};

/// Whether and how values are derived from keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyAsValue {
    /// `true` uses the key itself, `false` disables key derivation
    Flag(bool),
    /// Derive the value by applying a case style to the key
    Style(CaseStyle),
}

impl Default for KeyAsValue {
    fn default() -> Self { Self::Flag(false) }
}

impl KeyAsValue {
    /// Whether key derivation is on
    pub const fn is_enabled(self) -> bool { !matches!(self, Self::Flag(false)) }

    /// The case style to apply, `None` meaning the key unchanged
    pub const fn style(self) -> Option<CaseStyle> {
        match self {
            Self::Flag(_) => None,
            Self::Style(style) => Some(style),
        }
    }
}

impl From<bool> for KeyAsValue {
    fn from(enabled: bool) -> Self { Self::Flag(enabled) }
}

impl From<CaseStyle> for KeyAsValue {
    fn from(style: CaseStyle) -> Self { Self::Style(style) }
}

/// Options controlling how values are assigned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumConfig {
    /// First auto-derived number
    pub offset:                     i64,
    /// Derive values from keys instead of positions
    pub use_key_as_value:           KeyAsValue,
    /// Continue numbering from an explicit numeric value plus one
    pub auto_increment_after_alias: bool,
    /// Render every resolved value as a string
    pub use_string_number_value:    bool,
}

/// Former name of [`EnumConfig`]
#[deprecated(note = "use EnumConfig")]
pub type EnhancedEnumConfig = EnumConfig;

impl EnumConfig {
    /// Set the first auto-derived number
    #[must_use]
    pub const fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Derive values from keys, with `true`, `false` or a [`CaseStyle`]
    #[must_use]
    pub fn with_key_as_value(mut self, key_as_value: impl Into<KeyAsValue>) -> Self {
        self.use_key_as_value = key_as_value.into();
        self
    }

    /// Continue numbering after explicit numeric values
    #[must_use]
    pub const fn with_auto_increment_after_alias(mut self, enabled: bool) -> Self {
        self.auto_increment_after_alias = enabled;
        self
    }

    /// Render every resolved value as a string
    #[must_use]
    pub const fn with_string_number_value(mut self, enabled: bool) -> Self {
        self.use_string_number_value = enabled;
        self
    }

    /// Read a configuration from JSON; a bare number is an offset
    pub fn from_json(value: &Value) -> Result<Self> {
        if let Some(offset) = value.as_i64() {
            return Ok(Self::from(offset));
        }
        Self::deserialize(value).map_err(|e| Error::InvalidInput(format!("config: {e}")))
    }

    /// First number of the auto-derived sequence
    ///
    /// Key derivation ignores the offset, so the sequence starts at zero then.
    pub const fn start(&self) -> i64 {
        if self.use_key_as_value.is_enabled() {
            0
        } else {
            self.offset
        }
    }
}

impl From<i64> for EnumConfig {
    fn from(offset: i64) -> Self { Self::default().with_offset(offset) }
}

impl From<i32> for EnumConfig {
    fn from(offset: i32) -> Self { Self::from(i64::from(offset)) }
}
