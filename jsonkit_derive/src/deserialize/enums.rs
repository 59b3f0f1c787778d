use crate::utils::{insert_trait_bounds, parse_discriminant};

pub(super) fn generate_enum_deserialize(
    name: &syn::Ident,
    generics: syn::Generics,
    data: &syn::DataEnum,
) -> syn::Result<proc_macro2::TokenStream> {
    let generics = insert_trait_bounds(generics, "Deserialize");
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    if data.variants.is_empty() {
        return Ok(quote::quote! {
            impl #impl_generics ::jsonkit::Deserialize for #name #type_generics #where_clause {
                fn deserialize(_value: ::jsonkit::core::Value) -> ::jsonkit::core::Result<Self> {
                    Err(::jsonkit::core::Error::unsupported(format!(
                        "Enum `{}` has no variants",
                        stringify!(#name),
                    )))
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
            #ordinal => Ok(#name::#variant_name),
        });
    }

    Ok(quote::quote! {
        impl #impl_generics ::jsonkit::Deserialize for #name #type_generics #where_clause {
            fn deserialize(value: ::jsonkit::core::Value) -> ::jsonkit::core::Result<Self> {
                let token = match &value {
                    ::jsonkit::core::Value::Number(token)
                    | ::jsonkit::core::Value::Text(token) => token,
                    other => {
                        return Err(::jsonkit::core::Error::shape(format!(
                            "Expected ordinal number for enum `{}`, found {}",
                            stringify!(#name),
                            other.kind_name()
                        )))
                    }
                };

                let ordinal: i64 = token.parse().map_err(|_| {
                    ::jsonkit::core::Error::format(format!(
                        "Cannot parse `{}` as ordinal for enum `{}`",
                        token,
                        stringify!(#name),
                    ))
                })?;

                match ordinal {
                    #(#arms)*
                    other => Err(::jsonkit::core::Error::format(format!(
                        "No variant of `{}` has ordinal {}",
                        stringify!(#name),
                        other,
                    ))),
                }
            }
        }
    })
}
