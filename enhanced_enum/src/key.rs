//! Key validation and typed keys
//!
//! Keys are upper-case identifiers such as `ACTIVE`, `NOT_STARTED` or `LEVEL2`.
//! Every key handed to the builder passes through [`validate_key`] first.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Pattern every key must match
pub const KEY_PATTERN: &str = r"^([A-Z][A-Z_]+)?([A-Z]([0-9]*))$";

static KEY_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(KEY_PATTERN).ok());

/// Message used when `key` fails validation
pub fn describe_illegal_key(key: &str) -> String {
    format!("Illegal key: {key}, key must match `/{KEY_PATTERN}/`")
}

/// Whether `key` matches [`KEY_PATTERN`]
pub fn is_valid_key(key: &str) -> bool {
    KEY_REGEX.as_ref().is_some_and(|regex| regex.is_match(key))
}

/// Validate `key`, failing with [`Error::KeyFormat`] when it does not match [`KEY_PATTERN`]
pub fn validate_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(Error::illegal_key(key))
    }
}

/// A closed set of keys, usually produced by `#[derive(EnumKey)]`
///
/// Implementors can be passed anywhere the builder or the result tables take a key.
pub trait EnumKey: Copy + AsRef<str> + 'static {
    /// Every key, in declaration order
    const ALL: &'static [Self];

    /// The key text
    fn key(self) -> &'static str;

    /// Look up the variant for a key text
    fn from_key(key: &str) -> Option<Self> { Self::ALL.iter().copied().find(|k| k.key() == key) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_keys() {
        for key in ["AA_BB_CC", "AA_BB_CC213", "A", "AB__C", "LEVEL2"] {
            assert!(validate_key(key).is_ok(), "{key} should be legal");
        }
    }

    #[test]
    fn test_illegal_keys_report_key_and_pattern() {
        for key in ["A_", "_AA_BC", "a1", "a1_b", "aa_bb_cc", "", "A1B", "AB-C"] {
            let error = validate_key(key).err();
            assert_eq!(error, Some(Error::illegal_key(key)));
            let message = error.map(|e| e.to_string()).unwrap_or_default();
            assert_eq!(message, describe_illegal_key(key));
            assert!(message.contains(KEY_PATTERN));
        }
    }

    #[test]
    fn test_illegal_message_text() {
        assert_eq!(
            describe_illegal_key("a1"),
            "Illegal key: a1, key must match `/^([A-Z][A-Z_]+)?([A-Z]([0-9]*))$/`"
        );
    }
}
