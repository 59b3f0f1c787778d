use crate::utils::insert_trait_bounds;

use super::fields::{NamedFieldHandler, UnnamedFieldHandler};

fn generate_named_struct_deserialize(
    name: &syn::Ident,
    generics: syn::Generics,
    fields: &syn::FieldsNamed,
) -> syn::Result<proc_macro2::TokenStream> {
    let field_handler = NamedFieldHandler::new(fields)?;
    let field_names = field_handler.field_names();
    let construction = quote::quote! {
        Ok(#name {
            #(#field_names),*
        })
    };
    let context_name = format!("struct `{}`", name);
    let deserialization = field_handler.generate_fields_deserialize(construction, &context_name);
    let generics = insert_trait_bounds(generics, "Deserialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Deserialize for #name #type_generics #where_clause {
            fn deserialize(value: ::jsonkit::core::Value) -> ::jsonkit::core::Result<Self> {
                match value {
                    ::jsonkit::core::Value::Object(members) => {
                        #deserialization
                    }
                    other => Err(::jsonkit::core::Error::shape(format!(
                        "Expected object for struct `{}`, found {}",
                        stringify!(#name),
                        other.kind_name()
                    )))
                }
            }
        }
    })
}

fn generate_unnamed_struct_deserialize(
    name: &syn::Ident,
    generics: syn::Generics,
    fields: &syn::FieldsUnnamed,
) -> syn::Result<proc_macro2::TokenStream> {
    let field_handler = UnnamedFieldHandler::new(fields)?;
    let field_idents = field_handler.field_idents();
    let construction = quote::quote! { Ok(#name(#(#field_idents),*)) };
    let context_name = format!("struct `{}`", name);
    let deserialization = field_handler.generate_fields_deserialize(construction, &context_name);
    let generics = insert_trait_bounds(generics, "Deserialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Deserialize for #name #type_generics #where_clause {
            fn deserialize(value: ::jsonkit::core::Value) -> ::jsonkit::core::Result<Self> {
                match value {
                    ::jsonkit::core::Value::Object(members) => {
                        #deserialization
                    }
                    other => Err(::jsonkit::core::Error::shape(format!(
                        "Expected object for struct `{}`, found {}",
                        stringify!(#name),
                        other.kind_name()
                    )))
                }
            }
        }
    })
}

fn generate_unit_struct_deserialize(
    name: &syn::Ident,
    generics: syn::Generics,
) -> syn::Result<proc_macro2::TokenStream> {
    let generics = insert_trait_bounds(generics, "Deserialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Deserialize for #name #type_generics #where_clause {
            fn deserialize(value: ::jsonkit::core::Value) -> ::jsonkit::core::Result<Self> {
                match value {
                    ::jsonkit::core::Value::Object(members) if members.is_empty() => Ok(#name),
                    _ => Err(::jsonkit::core::Error::shape(format!(
                        "Expected empty object for struct `{}`",
                        stringify!(#name),
                    )))
                }
            }
        }
    })
}

pub(super) fn generate_struct_deserialize(
    name: &syn::Ident,
    generics: syn::Generics,
    data: &syn::DataStruct,
) -> syn::Result<proc_macro2::TokenStream> {
    let fields = &data.fields;

    match fields {
        syn::Fields::Named(fields) => generate_named_struct_deserialize(name, generics, fields),
        syn::Fields::Unnamed(fields) => generate_unnamed_struct_deserialize(name, generics, fields),
        syn::Fields::Unit => generate_unit_struct_deserialize(name, generics),
    }
}
