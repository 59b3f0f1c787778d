mod enums;
mod fields;
mod structs;

use enums::generate_enum_serialize;
use structs::generate_struct_serialize;

pub(crate) fn generate_impl_serialize(input: syn::DeriveInput) -> proc_macro::TokenStream {
    let name = &input.ident;
    let generics = input.generics.clone();

    let impl_serialize = match &input.data {
        syn::Data::Struct(data) => generate_struct_serialize(name, generics, data),
        syn::Data::Enum(data) => generate_enum_serialize(name, generics, data),
        syn::Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "Serialization isn't available for unions",
        )),
    };

    match impl_serialize {
        Ok(tokens) => proc_macro::TokenStream::from(tokens),
        Err(e) => e.to_compile_error().into(),
    }
}
