//! Derive macros for the `jsonkit` serialization traits.
//!
//! Structs become JSON objects whose members follow the field declaration
//! order; tuple structs travel under synthetic `Item1..ItemN` names; unit
//! enums travel as their ordinal integer. Supported field attributes:
//! `#[jsonkit(skip)]`, `#[jsonkit(rename = "...")]`, `#[jsonkit(default)]`.

mod attributes;
mod deserialize;
mod serialize;
mod utils;

#[proc_macro_derive(Serialize, attributes(jsonkit))]
pub fn derive_serialize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    serialize::generate_impl_serialize(input)
}

#[proc_macro_derive(Deserialize, attributes(jsonkit))]
pub fn derive_deserialize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    deserialize::generate_impl_deserialize(input)
}
