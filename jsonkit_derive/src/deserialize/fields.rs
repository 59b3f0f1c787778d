use crate::attributes::parse_field_attributes;
use crate::attributes::FieldAttributes;
use crate::utils::wire_field_name;

pub(super) struct NamedField<'a> {
    pub(super) name: &'a syn::Ident,
    pub(super) ty: &'a syn::Type,
    pub(super) attributes: FieldAttributes,
}

pub(super) struct NamedFieldHandler<'a> {
    pub(super) fields: Vec<NamedField<'a>>,
}

impl<'a> NamedFieldHandler<'a> {
    pub(super) fn new(fields: &'a syn::FieldsNamed) -> syn::Result<Self> {
        let fields = fields
            .named
            .iter()
            .filter_map(|field| {
                field.ident.as_ref().map(|name| {
                    parse_field_attributes(&field.attrs).map(|attributes| NamedField {
                        name,
                        ty: &field.ty,
                        attributes,
                    })
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { fields })
    }

    pub(super) fn generate_fields_deserialize(
        &self,
        construction: proc_macro2::TokenStream,
        context_name: &str,
    ) -> proc_macro2::TokenStream {
        let slot_declarations = self.generate_slot_declarations();
        let member_matching = self.generate_member_matching();
        let slot_assignments = self.generate_slot_assignments(context_name);
        let context = context_name.to_string();

        quote::quote! {
            #(#slot_declarations)*

            for (member_name, member_value) in members {
                #(#member_matching)*

                // A member without a matching field never drops silently
                return Err(::jsonkit::core::Error::unsupported(format!(
                    "No field `{}` on {}",
                    member_name,
                    #context,
                )));
            }

            // Check whether all of the fields were settled
            #(#slot_assignments)*

            #construction
        }
    }

    pub(super) fn field_names(&self) -> Vec<&syn::Ident> {
        self.fields.iter().map(|field| field.name).collect()
    }

    fn generate_slot_declarations(&self) -> Vec<proc_macro2::TokenStream> {
        self.fields
            .iter()
            .filter(|field| !field.attributes.skip)
            .map(|field| {
                let field_name = field.name;
                let field_type = field.ty;

                quote::quote! {
                    let mut #field_name: Option<#field_type> = None;
                }
            })
            .collect()
    }

    fn generate_member_matching(&self) -> Vec<proc_macro2::TokenStream> {
        self.fields
            .iter()
            .filter(|field| !field.attributes.skip)
            .map(|field| {
                let field_name = field.name;
                let field_type = field.ty;
                let wire_name = wire_field_name(&field_name.to_string(), &field.attributes);

                quote::quote! {
                    if member_name == #wire_name {
                        #field_name = Some(
                            <#field_type as ::jsonkit::Deserialize>::deserialize(member_value)?
                        );

                        continue;
                    }
                }
            })
            .collect()
    }

    fn generate_slot_assignments(&self, context_name: &str) -> Vec<proc_macro2::TokenStream> {
        let context = context_name.to_string();

        self.fields
            .iter()
            .map(move |field| {
                let field_name = field.name;
                let field_type = field.ty;

                // Excluded fields are never on the wire; they come back
                // as the type's default value.
                if field.attributes.skip {
                    return quote::quote! {
                        let #field_name = <#field_type as Default>::default();
                    };
                }

                if field.attributes.default {
                    return quote::quote! {
                        let #field_name = #field_name
                            .unwrap_or_else(|| <#field_type as Default>::default());
                    };
                }

                let wire_name = wire_field_name(&field_name.to_string(), &field.attributes);

                quote::quote! {
                    let #field_name = #field_name.ok_or_else(|| {
                        ::jsonkit::core::Error::unsupported(format!(
                            "Missing field `{}` in {}",
                            #wire_name,
                            #context,
                        ))
                    })?;
                }
            })
            .collect()
    }
}

pub(super) struct UnnamedField<'a> {
    pub(super) ty: &'a syn::Type,
    pub(super) attributes: FieldAttributes,
}

pub(super) struct UnnamedFieldHandler<'a> {
    pub(super) fields: Vec<UnnamedField<'a>>,
}

impl<'a> UnnamedFieldHandler<'a> {
    pub(super) fn new(fields: &'a syn::FieldsUnnamed) -> syn::Result<Self> {
        let fields = fields
            .unnamed
            .iter()
            .map(|field| {
                parse_field_attributes(&field.attrs).map(|attributes| UnnamedField {
                    ty: &field.ty,
                    attributes,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { fields })
    }

    pub(super) fn generate_fields_deserialize(
        &self,
        construction: proc_macro2::TokenStream,
        context_name: &str,
    ) -> proc_macro2::TokenStream {
        let slot_declarations = self.generate_slot_declarations();
        let member_matching = self.generate_member_matching();
        let slot_assignments = self.generate_slot_assignments(context_name);
        let context = context_name.to_string();

        quote::quote! {
            #(#slot_declarations)*

            for (member_name, member_value) in members {
                #(#member_matching)*

                // A member without a matching field never drops silently
                return Err(::jsonkit::core::Error::unsupported(format!(
                    "No member `{}` on {}",
                    member_name,
                    #context,
                )));
            }

            // Check whether all of the fields were settled
            #(#slot_assignments)*

            #construction
        }
    }

    pub(super) fn field_idents(&self) -> Vec<syn::Ident> {
        (0..self.fields.len())
            .map(|i| syn::Ident::new(&format!("field_{}", i), proc_macro2::Span::call_site()))
            .collect()
    }

    /// Serializable fields are numbered `Item1..ItemN` in order; skipped
    /// fields take no wire name.
    fn wire_names(&self) -> Vec<Option<String>> {
        let mut position = 0usize;

        self.fields
            .iter()
            .map(|field| {
                if field.attributes.skip {
                    return None;
                }

                position += 1;

                Some(format!("Item{}", position))
            })
            .collect()
    }

    fn generate_slot_declarations(&self) -> Vec<proc_macro2::TokenStream> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| !field.attributes.skip)
            .map(|(i, field)| {
                let field_ident =
                    syn::Ident::new(&format!("field_{}", i), proc_macro2::Span::call_site());
                let field_type = field.ty;

                quote::quote! {
                    let mut #field_ident: Option<#field_type> = None;
                }
            })
            .collect()
    }

    fn generate_member_matching(&self) -> Vec<proc_macro2::TokenStream> {
        let wire_names = self.wire_names();

        self.fields
            .iter()
            .enumerate()
            .filter_map(|(i, field)| {
                let wire_name = wire_names[i].clone()?;
                let field_ident =
                    syn::Ident::new(&format!("field_{}", i), proc_macro2::Span::call_site());
                let field_type = field.ty;

                Some(quote::quote! {
                    if member_name == #wire_name {
                        #field_ident = Some(
                            <#field_type as ::jsonkit::Deserialize>::deserialize(member_value)?
                        );

                        continue;
                    }
                })
            })
            .collect()
    }

    fn generate_slot_assignments(&self, context_name: &str) -> Vec<proc_macro2::TokenStream> {
        let context = context_name.to_string();
        let wire_names = self.wire_names();

        self.fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let field_ident =
                    syn::Ident::new(&format!("field_{}", i), proc_macro2::Span::call_site());
                let field_type = field.ty;

                if field.attributes.skip {
                    return quote::quote! {
                        let #field_ident = <#field_type as Default>::default();
                    };
                }

                if field.attributes.default {
                    return quote::quote! {
                        let #field_ident = #field_ident
                            .unwrap_or_else(|| <#field_type as Default>::default());
                    };
                }

                let wire_name = wire_names[i].clone().unwrap_or_default();
                let context = context.clone();

                quote::quote! {
                    let #field_ident = #field_ident.ok_or_else(|| {
                        ::jsonkit::core::Error::unsupported(format!(
                            "Missing member `{}` in {}",
                            #wire_name,
                            #context,
                        ))
                    })?;
                }
            })
            .collect()
    }
}
