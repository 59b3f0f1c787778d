use crate::utils::insert_trait_bounds;

use super::fields::{NamedFieldHandler, UnnamedFieldHandler};

fn generate_named_struct_serialize(
    name: &syn::Ident,
    generics: syn::Generics,
    fields: &syn::FieldsNamed,
) -> syn::Result<proc_macro2::TokenStream> {
    let field_handler = NamedFieldHandler::new(fields)?;
    let fields_serialize = field_handler.generate_fields_serialize();
    let generics = insert_trait_bounds(generics, "Serialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Serialize for #name #type_generics #where_clause {
            fn serialize(&self) -> ::jsonkit::core::Result<::jsonkit::core::Value> {
                #fields_serialize

                Ok(::jsonkit::core::Value::Object(members))
            }
        }
    })
}

fn generate_unnamed_struct_serialize(
    name: &syn::Ident,
    generics: syn::Generics,
    fields: &syn::FieldsUnnamed,
) -> syn::Result<proc_macro2::TokenStream> {
    let field_handler = UnnamedFieldHandler::new(fields)?;
    let fields_serialize = field_handler.generate_fields_serialize();
    let generics = insert_trait_bounds(generics, "Serialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Serialize for #name #type_generics #where_clause {
            fn serialize(&self) -> ::jsonkit::core::Result<::jsonkit::core::Value> {
                #fields_serialize

                Ok(::jsonkit::core::Value::Object(members))
            }
        }
    })
}

fn generate_unit_struct_serialize(
    name: &syn::Ident,
    generics: syn::Generics,
) -> syn::Result<proc_macro2::TokenStream> {
    let generics = insert_trait_bounds(generics, "Serialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Serialize for #name #type_generics #where_clause {
            fn serialize(&self) -> ::jsonkit::core::Result<::jsonkit::core::Value> {
                Ok(::jsonkit::core::Value::Object(Vec::new()))
            }
        }
    })
}

pub(super) fn generate_struct_serialize(
    name: &syn::Ident,
    generics: syn::Generics,
    data: &syn::DataStruct,
) -> syn::Result<proc_macro2::TokenStream> {
    let fields = &data.fields;

    match fields {
        syn::Fields::Named(fields) => generate_named_struct_serialize(name, generics, fields),
        syn::Fields::Unnamed(fields) => generate_unnamed_struct_serialize(name, generics, fields),
        syn::Fields::Unit => generate_unit_struct_serialize(name, generics),
    }
}
