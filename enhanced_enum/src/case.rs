//! Key-to-value derivation
//!
//! Keys are written in `SCREAMING_SNAKE_CASE`; a [`CaseStyle`] turns one into the
//! string used as its value.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::Result;
use crate::key::validate_key;

/// Case transform applied when a key becomes a value
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum CaseStyle {
    /// `AZ_AZ` becomes `AzAz`
    #[strum(to_string = "UpperCamelCase", serialize = "UPPER_CAMEL_CASE")]
    #[serde(rename = "UPPER_CAMEL_CASE", alias = "UpperCamelCase")]
    UpperCamelCase,
    /// `AZ_AZ` becomes `azAz`
    #[strum(to_string = "lowerCamelCase", serialize = "LOWER_CAMEL_CASE")]
    #[serde(rename = "LOWER_CAMEL_CASE", alias = "lowerCamelCase")]
    LowerCamelCase,
    /// `AZ_AZ` becomes `az_az`
    #[strum(to_string = "snake_case", serialize = "SNAKE_CASE")]
    #[serde(rename = "SNAKE_CASE", alias = "snake_case")]
    SnakeCase,
    /// `AZ_AZ` becomes `az-az`; only the first underscore is replaced
    #[strum(to_string = "kebab-case", serialize = "KEBAB_CASE")]
    #[serde(rename = "KEBAB_CASE", alias = "kebab-case")]
    KebabCase,
}

/// Former name of [`CaseStyle`]
#[deprecated(note = "use CaseStyle")]
pub type KeyValueType = CaseStyle;

impl CaseStyle {
    /// Apply this style to an already validated key
    pub fn apply(self, key: &str) -> String {
        let lower = key.to_ascii_lowercase();
        match self {
            Self::UpperCamelCase => camelize(&lower, true),
            Self::LowerCamelCase => camelize(&lower, false),
            Self::SnakeCase => lower,
            Self::KebabCase => lower.replacen('_', "-", 1),
        }
    }
}

/// Validate `key` and derive its value text; `None` keeps the key unchanged
pub fn derive_from_key(key: &str, style: Option<CaseStyle>) -> Result<String> {
    validate_key(key)?;
    Ok(style.map_or_else(|| key.to_string(), |style| style.apply(key)))
}

// An underscore is dropped and the character after it upper-cased, whatever that
// character is, so `ab__c` becomes `ab_c`.
fn camelize(lower: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars();

    if capitalize_first && let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
    }

    while let Some(c) = chars.next() {
        if c == '_' {
            out.push(chars.next().map_or(c, |next| next.to_ascii_uppercase()));
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_each_style() {
        let cases = [
            (CaseStyle::UpperCamelCase, "AzAz"),
            (CaseStyle::LowerCamelCase, "azAz"),
            (CaseStyle::SnakeCase, "az_az"),
            (CaseStyle::KebabCase, "az-az"),
        ];
        for (style, expected) in cases {
            assert_eq!(derive_from_key("AZ_AZ", Some(style)), Ok(expected.to_string()));
        }
        assert_eq!(derive_from_key("AZ_AZ", None), Ok("AZ_AZ".to_string()));
    }

    #[test]
    fn test_kebab_replaces_first_underscore_only() {
        assert_eq!(CaseStyle::KebabCase.apply("AA_BB_CC"), "aa-bb_cc");
    }

    #[test]
    fn test_camel_with_digits_and_double_underscore() {
        assert_eq!(CaseStyle::UpperCamelCase.apply("AA_BB_CC213"), "AaBbCc213");
        assert_eq!(CaseStyle::LowerCamelCase.apply("AA_BB_CC213"), "aaBbCc213");
        assert_eq!(CaseStyle::LowerCamelCase.apply("AB__C"), "ab_c");
        assert_eq!(CaseStyle::UpperCamelCase.apply("A"), "A");
    }

    #[test]
    fn test_invalid_key_propagates() {
        assert_eq!(
            derive_from_key("aa_bb", Some(CaseStyle::SnakeCase)),
            Err(Error::illegal_key("aa_bb"))
        );
    }

    #[test]
    fn test_parse_both_spellings() {
        for style in CaseStyle::iter() {
            let display = style.to_string();
            assert_eq!(CaseStyle::from_str(&display), Ok(style));
        }
        assert_eq!(CaseStyle::from_str("KEBAB_CASE"), Ok(CaseStyle::KebabCase));
        assert_eq!(CaseStyle::from_str("UPPER_CAMEL_CASE"), Ok(CaseStyle::UpperCamelCase));
    }
}
