//! Procedural macros for enhanced_enum

mod enum_key;

use proc_macro::TokenStream;

/// Derives `EnumKey` and `AsRef<str>` for an enum whose unit variants name keys.
///
/// Variant names are converted to `SHOUTY_SNAKE_CASE`; `#[enum_key(rename = "...")]`
/// sets a key explicitly. Every key is checked against the key pattern at compile
/// time. The enum must also derive `Clone` and `Copy`.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, EnumKey)]
/// pub enum Status {
///     NotStarted,
///     #[enum_key(rename = "DONE2")]
///     Done,
/// }
/// ```
///
/// This will generate:
///
/// ```ignore
/// impl ::enhanced_enum::EnumKey for Status {
///     const ALL: &'static [Self] = &[Self::NotStarted, Self::Done];
///
///     fn key(self) -> &'static str {
///         match self {
///             Self::NotStarted => "NOT_STARTED",
///             Self::Done => "DONE2",
///         }
///     }
/// }
///
/// impl ::core::convert::AsRef<str> for Status {
///     fn as_ref(&self) -> &str { ::enhanced_enum::EnumKey::key(*self) }
/// }
/// ```
#[proc_macro_derive(EnumKey, attributes(enum_key))]
pub fn derive_enum_key(input: TokenStream) -> TokenStream { enum_key::derive_enum_key_impl(input) }
