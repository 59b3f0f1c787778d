use crate::attributes::FieldAttributes;

pub(crate) fn insert_trait_bounds(mut generics: syn::Generics, trait_name: &str) -> syn::Generics {
    for param in &mut generics.params {
        if let syn::GenericParam::Type(ref mut type_param) = *param {
            let trait_ident: syn::Ident = syn::parse_str(trait_name).expect("Invalid trait name");

            type_param
                .bounds
                .push(syn::parse_quote!(::jsonkit::#trait_ident));
        }
    }

    generics
}

pub(crate) fn unescape_identifier(identifier: &str) -> String {
    if !identifier.starts_with("r#") {
        return identifier.to_string();
    }

    let unescaped = &identifier[2..];

    match unescaped {
        "abstract" | "as" | "async" | "await" | "become" | "box" | "break" | "const"
        | "continue" | "crate" | "do" | "dyn" | "else" | "enum" | "extern" | "false" | "final"
        | "fn" | "for" | "gen" | "if" | "impl" | "in" | "let" | "loop" | "macro" | "match"
        | "mod" | "move" | "mut" | "override" | "priv" | "pub" | "ref" | "return" | "static"
        | "struct" | "super" | "trait" | "true" | "try" | "type" | "typeof" | "unsafe"
        | "unsized" | "use" | "virtual" | "where" | "while" | "yield" => unescaped.to_string(),
        _ => identifier.to_string(),
    }
}

pub(crate) fn wire_field_name(field_name: &str, attributes: &FieldAttributes) -> String {
    if let Some(ref rename) = attributes.rename {
        return rename.clone();
    }

    unescape_identifier(field_name)
}

/// Resolves an explicit enum discriminant to its ordinal value.
pub(crate) fn parse_discriminant(expr: &syn::Expr) -> syn::Result<i64> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => lit.base10_parse::<i64>(),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => Ok(-parse_discriminant(expr)?),
        _ => Err(syn::Error::new_spanned(
            expr,
            "Enum discriminant must be an integer literal",
        )),
    }
}
