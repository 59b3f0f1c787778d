use crate::utils::{insert_trait_bounds, parse_discriminant};

pub(super) fn generate_enum_serialize(
    name: &syn::Ident,
    generics: syn::Generics,
    data: &syn::DataEnum,
) -> syn::Result<proc_macro2::TokenStream> {
    let generics = insert_trait_bounds(generics, "Serialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    if data.variants.is_empty() {
        return Ok(quote::quote! {
            impl #impl_generics ::jsonkit::Serialize for #name #type_generics #where_clause {
                fn serialize(&self) -> ::jsonkit::core::Result<::jsonkit::core::Value> {
                    // This is unreachable because you cannot construct a value of empty enum
                    match *self {}
                }
            }
        });
    }

    let mut next_ordinal: i64 = 0;
    let mut arms = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Ordinal serialization requires unit variants",
            ));
        }

        let ordinal = match &variant.discriminant {
            Some((_, expr)) => parse_discriminant(expr)?,
            None => next_ordinal,
        };

        next_ordinal = ordinal + 1;

        let variant_name = &variant.ident;

        arms.push(quote::quote! {
            #name::#variant_name => #ordinal,
        });
    }

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Serialize for #name #type_generics #where_clause {
            fn serialize(&self) -> ::jsonkit::core::Result<::jsonkit::core::Value> {
                let ordinal: i64 = match self {
                    #(#arms)*
                };

                Ok(::jsonkit::core::Value::Number(ordinal.to_string()))
            }
        }
    })
}
