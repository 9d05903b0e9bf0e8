use thiserror::Error;

use crate::key::describe_illegal_key;

/// Result type for the `enhanced_enum` library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building an enhanced enum
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key does not match the key pattern
    #[error("{}", describe_illegal_key(.key))]
    KeyFormat {
        /// The offending key
        key: String,
    },

    /// Two keys resolved to the same value
    #[error("Duplicate value {value} for key {key}, already used by key {existing_key}")]
    DuplicateValue {
        /// The key being inserted
        key:          String,
        /// The key that already owns the value
        existing_key: String,
        /// The colliding value, as text
        value:        String,
    },

    /// A resolved value cannot be represented by the enum's value kind
    #[error("Invalid value for key {key}: expected {expected}, found {found}")]
    ValueType {
        /// The key whose value was rejected
        key:      String,
        /// Name of the value kind the enum holds
        expected: &'static str,
        /// The rejected value, as text
        found:    String,
    },

    /// A generated numeric default does not fit in an `i64`
    #[error("Default value for key {key} is out of range")]
    ValueOverflow {
        /// The key that needed the default
        key: String,
    },

    /// A dynamic entry definition has an unsupported shape
    #[error("Invalid entry for key {key}: {reason}")]
    EntryShape {
        /// The key of the malformed entry
        key:    String,
        /// What is wrong with it
        reason: String,
    },

    /// The mapping or configuration input could not be read
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a key format error for the given key
    pub fn illegal_key(key: impl Into<String>) -> Self { Self::KeyFormat { key: key.into() } }

    /// Create a value overflow error for the given key
    pub fn value_overflow(key: impl Into<String>) -> Self { Self::ValueOverflow { key: key.into() } }

    /// Create an entry shape error
    pub fn entry_shape(key: &str, reason: impl std::fmt::Display) -> Self {
        Self::EntryShape {
            key:    key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a value type error
    pub fn value_type(key: &str, expected: &'static str, found: impl std::fmt::Display) -> Self {
        Self::ValueType {
            key: key.to_string(),
            expected,
            found: found.to_string(),
        }
    }
}
