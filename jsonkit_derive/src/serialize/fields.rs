use crate::attributes::parse_field_attributes;
use crate::attributes::FieldAttributes;
use crate::utils::wire_field_name;

pub(super) struct NamedField<'a> {
    pub(super) name: &'a syn::Ident,
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
                    parse_field_attributes(&field.attrs)
                        .map(|attributes| NamedField { name, attributes })
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { fields })
    }

    /// Emits the member pushes for every serializable field, in
    /// declaration order.
    pub(super) fn generate_fields_serialize(&self) -> proc_macro2::TokenStream {
        let members: Vec<_> = self
            .serializable_fields()
            .map(|field| {
                let field_name = field.name;
                let wire_name = wire_field_name(&field_name.to_string(), &field.attributes);

                quote::quote! {
                    members.push((
                        #wire_name.to_string(),
                        ::jsonkit::Serialize::serialize(&self.#field_name)?
                    ));
                }
            })
            .collect();
        let member_count = self.field_count();

        if members.is_empty() {
            return quote::quote! {
                let members = Vec::new();
            };
        }

        quote::quote! {
            let mut members = Vec::with_capacity(#member_count);

            #(#members)*
        }
    }

    fn serializable_fields(&self) -> impl Iterator<Item = &NamedField<'a>> {
        self.fields.iter().filter(|field| !field.attributes.skip)
    }

    fn field_count(&self) -> usize {
        self.serializable_fields().count()
    }
}

pub(super) struct UnnamedField {
    pub(super) index: usize,
    pub(super) attributes: FieldAttributes,
}

pub(super) struct UnnamedFieldHandler {
    pub(super) fields: Vec<UnnamedField>,
}

impl UnnamedFieldHandler {
    pub(super) fn new(fields: &syn::FieldsUnnamed) -> syn::Result<Self> {
        let fields = fields
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| {
                parse_field_attributes(&field.attrs)
                    .map(|attributes| UnnamedField { index, attributes })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { fields })
    }

    /// Positional fields travel under synthetic `Item1..ItemN` names,
    /// numbered over the serializable fields in order.
    pub(super) fn generate_fields_serialize(&self) -> proc_macro2::TokenStream {
        let mut members = Vec::new();
        let mut position = 0usize;

        for field in &self.fields {
            if field.attributes.skip {
                continue;
            }

            position += 1;

            let wire_name = format!("Item{}", position);
            let index = syn::Index::from(field.index);

            members.push(quote::quote! {
                members.push((
                    #wire_name.to_string(),
                    ::jsonkit::Serialize::serialize(&self.#index)?
                ));
            });
        }

        if members.is_empty() {
            return quote::quote! {
                let members = Vec::new();
            };
        }

        let member_count = members.len();

        quote::quote! {
            let mut members = Vec::with_capacity(#member_count);

            #(#members)*
        }
    }
}
