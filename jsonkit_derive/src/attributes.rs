#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub(crate) rename: Option<String>,
    pub(crate) default: bool,
    pub(crate) skip: bool,
}

pub(crate) fn parse_field_attributes(
    attributes: &[syn::Attribute],
) -> syn::Result<FieldAttributes> {
    let mut field_attributes = FieldAttributes::default();

    for attribute in attributes {
        if !attribute.path().is_ident("jsonkit") {
            continue;
        }

        attribute.parse_nested_meta(|meta| {
            if let Some(path) = meta.path.get_ident() {
                return match path.to_string().as_str() {
                    "rename" => {
                        let value = meta.value()?;
                        let s: syn::LitStr = value.parse()?;

                        field_attributes.rename = Some(s.value());

                        Ok(())
                    }
                    "default" => {
                        field_attributes.default = true;

                        Ok(())
                    }
                    "skip" => {
                        field_attributes.skip = true;

                        Ok(())
                    }
                    unknown => {
                        Err(meta.error(format!("Unknown `jsonkit` field attribute `{}`", unknown)))
                    }
                };
            }

            Err(meta.error(format!(
                "Unknown `jsonkit` field attribute `{}`",
                quote::ToTokens::to_token_stream(&meta.path)
                    .to_string()
                    .replace(' ', "")
            )))
        })?;
    }

    Ok(field_attributes)
}
