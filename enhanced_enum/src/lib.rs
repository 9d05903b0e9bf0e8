//! Enum-like constant lookup tables
//!
//! This crate turns a mapping of upper-case keys to human-readable labels into a
//! bundle of lookup tables: value by key, label by value, metadata by value, a
//! full record by value and an ordered option list.
//!
//! # Usage
//!
//! ```
//! use enhanced_enum::{EntryDef, build_enum};
//!
//! let status = build_enum(
//!     [
//!         ("DRAFT", EntryDef::label("Draft")),
//!         ("PUBLISHED", EntryDef::label("Published")),
//!         ("ARCHIVED", EntryDef::label("Archived").with_value(99)),
//!     ],
//!     1,
//! )?;
//!
//! let published = status.value_of("PUBLISHED").cloned();
//! assert_eq!(published, Some(2.into()));
//! assert_eq!(status.label_of(&99.into()), Some("Archived"));
//! assert!(status.bind(2.into()).is_in(["DRAFT", "PUBLISHED"]));
//! # Ok::<(), enhanced_enum::Error>(())
//! ```
//!
//! # Tables
//!
//! | Accessor | Original name | Content |
//! |---|---|---|
//! | [`EnhancedEnum::values`] | `VALUE` | value by key |
//! | [`EnhancedEnum::labels`] | `LABEL` | label by value |
//! | [`EnhancedEnum::extras`] | `EXTRA` | metadata by value |
//! | [`EnhancedEnum::mappers`] | `MAPPER` | key, label, value and metadata by value |
//! | [`EnhancedEnum::dict`] | `DICT` | value, label and metadata in input order |
//!
//! # Value assignment
//!
//! An entry without an explicit value gets a default:
//! - with `use_key_as_value`, the key itself, optionally passed through a [`CaseStyle`]
//! - with `auto_increment_after_alias`, one more than the previous entry's number
//! - otherwise `offset + position`
//!
//! `use_string_number_value` then renders every value as a string.
//!
//! # Keys
//!
//! Keys must match [`KEY_PATTERN`]. Plain strings work, and so does any enum
//! deriving [`EnumKey`](derive@EnumKey):
//!
//! ```
//! use enhanced_enum::{EntryDef, EnumKey, build_number_enum};
//!
//! #[derive(Clone, Copy, Debug, EnumKey)]
//! enum Status {
//!     NotStarted,
//!     Done,
//! }
//!
//! let status = build_number_enum(
//!     [
//!         (Status::NotStarted, EntryDef::label("Not started")),
//!         (Status::Done, EntryDef::label("Done")),
//!     ],
//!     0,
//! )?;
//! assert_eq!(status.value_of(Status::Done), Some(&1));
//! assert_eq!(status.value_of("NOT_STARTED"), Some(&0));
//! # Ok::<(), enhanced_enum::Error>(())
//! ```

mod bind;
mod builder;
mod case;
mod config;
mod entry;
mod error;
mod key;
mod sequence;
mod table;
mod value;

pub use bind::{Bound, BoundGetter};
pub use builder::{
    Builder, build_enum, build_enum_from_json, build_number_enum, build_string_enum, make_builder,
};
#[allow(deprecated, reason = "former name kept for existing callers")]
pub use case::KeyValueType;
pub use case::{CaseStyle, derive_from_key};
#[allow(deprecated, reason = "former name kept for existing callers")]
pub use config::EnhancedEnumConfig;
pub use config::{EnumConfig, KeyAsValue};
pub use enhanced_enum_macros::EnumKey;
pub use entry::{EntryDef, JsonEntry, Metadata, ResolvedEntry};
pub use error::{Error, Result};
pub use key::{EnumKey, KEY_PATTERN, describe_illegal_key, is_valid_key, validate_key};
pub use sequence::DefaultValues;
pub use table::{DictOption, EnhancedEnum, Mapper};
pub use value::{EnumValue, ValueKind};
