//! EnumKey derive macro implementation

use heck::ToShoutySnakeCase;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use regex::Regex;
use syn::{Attribute, Data, DeriveInput, Fields, Variant, parse_macro_input};

/// Same pattern the runtime validator uses
const KEY_PATTERN: &str = r"^([A-Z][A-Z_]+)?([A-Z]([0-9]*))$";

/// Implementation of the EnumKey derive macro
pub fn derive_enum_key_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    // Ensure we're working with an enum
    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "EnumKey can only be derived for enums",
        ));
    };

    let pattern = Regex::new(KEY_PATTERN)
        .map_err(|e| syn::Error::new_spanned(&input.ident, format!("invalid key pattern: {e}")))?;

    let mut variants = Vec::with_capacity(data_enum.variants.len());
    let mut match_arms = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        let key = variant_key(variant)?;
        if !pattern.is_match(&key) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("Illegal key: {key}, key must match `/{KEY_PATTERN}/`"),
            ));
        }

        let variant_name = &variant.ident;
        variants.push(quote! { Self::#variant_name });
        match_arms.push(quote! { Self::#variant_name => #key });
    }

    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::enhanced_enum::EnumKey for #enum_name #ty_generics #where_clause {
            const ALL: &'static [Self] = &[#(#variants,)*];

            fn key(self) -> &'static str {
                match self {
                    #(#match_arms,)*
                }
            }
        }

        impl #impl_generics ::core::convert::AsRef<str> for #enum_name #ty_generics #where_clause {
            fn as_ref(&self) -> &str {
                ::enhanced_enum::EnumKey::key(*self)
            }
        }
    })
}

/// Key text for a unit variant: the `rename` attribute, else the shouty snake case name
fn variant_key(variant: &Variant) -> syn::Result<String> {
    // Ensure the variant has no fields
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            variant,
            "EnumKey can only be derived for enums with unit variants",
        ));
    }

    match extract_rename(&variant.attrs)? {
        Some(key) => Ok(key),
        None => Ok(variant.ident.to_string().to_shouty_snake_case()),
    }
}

/// Extract the rename from enum_key attributes
fn extract_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs {
        if attr.path().is_ident("enum_key") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value = meta.value()?;
                    let s: syn::LitStr = value.parse()?;
                    rename = Some(s.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported enum_key attribute"))
                }
            })?;
        }
    }
    Ok(rename)
}
