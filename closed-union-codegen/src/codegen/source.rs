//! Formatting of generated units.
//!
//! Token streams are parsed back into a `syn::File` and printed with
//! prettyplease in a single pass, then prefixed with the generated-file
//! header.

use proc_macro2::TokenStream;

use crate::ir::UnionModel;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// <auto-generated/>";

/// One generated file: a stable name and its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub hint_name: String,
    pub source: String,
}

/// File name of the unit generated for `model`.
pub fn hint_name(model: &UnionModel) -> String {
    format!("{}.g.rs", model.name)
}

/// Pretty-print a token stream holding whole items.
pub fn format_tokens(tokens: TokenStream) -> syn::Result<String> {
    let file: syn::File = syn::parse2(tokens)?;
    Ok(prettyplease::unparse(&file))
}

/// Prefix `body` with the generated-file header.
pub fn with_header(body: &str, namespace: Option<&str>) -> String {
    let mut text = String::with_capacity(body.len() + 64);
    text.push_str(GENERATED_HEADER);
    text.push('\n');
    if let Some(namespace) = namespace {
        text.push_str("// namespace: ");
        text.push_str(namespace);
        text.push('\n');
    }
    text.push('\n');
    text.push_str(body);
    text
}

/// Build the generated unit for a union.
pub fn unit(model: &UnionModel, tokens: TokenStream, pretty: bool) -> syn::Result<GeneratedUnit> {
    let body = if pretty {
        format_tokens(tokens)?
    } else {
        let mut raw = tokens.to_string();
        raw.push('\n');
        raw
    };

    Ok(GeneratedUnit {
        hint_name: hint_name(model),
        source: with_header(&body, Some(&model.namespace)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_with_header() {
        let text = with_header("pub struct A;\n", Some("crate::shapes"));
        assert_eq!(
            text,
            "// <auto-generated/>\n// namespace: crate::shapes\n\npub struct A;\n"
        );
    }

    #[test]
    fn test_with_header_without_namespace() {
        let text = with_header("pub struct A;\n", None);
        assert_eq!(text, "// <auto-generated/>\n\npub struct A;\n");
    }

    #[test]
    fn test_format_tokens() {
        let text = format_tokens(quote!(pub struct A { pub value: u8 })).unwrap();
        assert_eq!(text, "pub struct A {\n    pub value: u8,\n}\n");
    }

    #[test]
    fn test_format_tokens_rejects_expressions() {
        assert!(format_tokens(quote!(1 + 2)).is_err());
    }
}
