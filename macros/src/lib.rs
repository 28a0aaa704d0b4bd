extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Adds JSON helpers to a serde type.
///
/// Every helper reports failures as `anyhow::Error` with the type name attached,
/// so callers can bubble them up with `?` and still tell which payload was bad.
#[proc_macro_derive(Json)]
pub fn json_macro(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_name = name.to_string();

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            pub fn from_json_str(json: &str) -> anyhow::Result<Self>
            where
                Self: Sized,
                for<'de> Self: serde::Deserialize<'de>,
            {
                serde_json::from_str(json)
                    .map_err(|e| anyhow::anyhow!("Cannot parse {} from JSON: {e}", #type_name))
            }

            pub fn from_json_value(value: serde_json::Value) -> anyhow::Result<Self>
            where
                Self: Sized,
                for<'de> Self: serde::Deserialize<'de>,
            {
                serde_json::from_value(value)
                    .map_err(|e| anyhow::anyhow!("Cannot convert JSON value to {}: {e}", #type_name))
            }

            pub fn to_json_string(&self) -> anyhow::Result<String>
            where
                Self: serde::Serialize,
            {
                serde_json::to_string(self)
                    .map_err(|e| anyhow::anyhow!("Cannot serialize {}: {e}", #type_name))
            }

            pub fn to_json_value(&self) -> anyhow::Result<serde_json::Value>
            where
                Self: serde::Serialize,
            {
                serde_json::to_value(self)
                    .map_err(|e| anyhow::anyhow!("Cannot serialize {}: {e}", #type_name))
            }
        }
    };

    TokenStream::from(expanded)
}
