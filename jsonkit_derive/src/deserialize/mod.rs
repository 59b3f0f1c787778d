mod enums;
mod fields;
mod structs;

use enums::generate_enum_deserialize;
use structs::generate_struct_deserialize;

pub(crate) fn generate_impl_deserialize(input: syn::DeriveInput) -> proc_macro::TokenStream {
    let name = &input.ident;
    let generics = input.generics.clone();

    let impl_deserialize = match &input.data {
        syn::Data::Struct(data) => generate_struct_deserialize(name, generics, data),
        syn::Data::Enum(data) => generate_enum_deserialize(name, generics, data),
        syn::Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "Serialization isn't available for unions",
        )),
    };

    match impl_deserialize {
        Ok(tokens) => proc_macro::TokenStream::from(tokens),
        Err(e) => e.to_compile_error().into(),
    }
}
