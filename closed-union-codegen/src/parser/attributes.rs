//! Attribute parsing for `#[union(...)]`.
//!
//! The module-level marker is parsed with darling. Members of the module may
//! carry `#[union(skip)]` to opt out of being a case.

use darling::ast::NestedMeta;
use darling::util::PathList;
use darling::FromMeta;
use proc_macro2::{Span, TokenStream};
use syn::spanned::Spanned;
use syn::{Attribute, Lit, Meta};

use crate::error::UnionError;

/// Arguments of the marker attribute placed on a union module.
#[derive(Debug, Clone, Default, FromMeta)]
#[darling(default)]
pub struct UnionArgs {
    /// Emit the tagged serialization format
    pub serializable: bool,

    /// Union name, defaults to the module name in PascalCase
    pub name: Option<String>,

    /// Derives applied to the generated enum
    pub derive: PathList,
}

impl UnionArgs {
    /// Parse the argument tokens of `#[union(...)]`.
    ///
    /// A leading `true`/`false` literal is accepted as the serializable flag.
    pub fn parse(tokens: TokenStream) -> Result<Self, UnionError> {
        let mut items = NestedMeta::parse_meta_list(tokens)?;

        let mut positional = None;
        items.retain(|item| match item {
            NestedMeta::Lit(Lit::Bool(flag)) if positional.is_none() => {
                positional = Some(flag.value);
                false
            }
            _ => true,
        });

        let mut args = Self::from_list(&items)?;
        if let Some(flag) = positional {
            if let Some(keyed) = items.iter().find(|item| {
                matches!(item, NestedMeta::Meta(meta) if meta.path().is_ident("serializable"))
            }) {
                return Err(darling::Error::custom(
                    "the serializable flag is given both positionally and as `serializable`",
                )
                .with_span(keyed)
                .into());
            }
            args.serializable = flag;
        }
        Ok(args)
    }

    /// Parse the arguments of an already located marker attribute.
    pub fn from_attribute(attr: &Attribute) -> Result<Self, UnionError> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(list) => Self::parse(list.tokens.clone()),
            Meta::NameValue(meta) => Err(darling::Error::unsupported_format("name-value")
                .with_span(meta)
                .into()),
        }
    }
}

/// How a member of the union module is marked.
#[derive(Debug, Clone, Copy)]
pub enum MemberMarker {
    /// No `#[union(...)]` attribute.
    Unmarked,
    /// `#[union(skip)]`
    Skip,
    /// A `#[union]` attribute with anything other than `skip`.
    Unsupported(Span),
}

/// Whether an attribute is the union marker, bare or path-qualified.
pub fn is_union_attr(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "union")
}

/// Locate the union marker among an item's attributes.
pub fn find_union_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| is_union_attr(attr))
}

/// Classify the `#[union(...)]` attributes on a module member.
pub fn member_marker(attrs: &[Attribute]) -> MemberMarker {
    let mut marker = MemberMarker::Unmarked;

    for attr in attrs.iter().filter(|attr| is_union_attr(attr)) {
        let mut skip = false;
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip`"))
            }
        });

        match parsed {
            Ok(()) if skip => marker = MemberMarker::Skip,
            _ => return MemberMarker::Unsupported(attr.span()),
        }
    }

    marker
}

/// Remove member markers before the item is re-emitted.
pub fn strip_member_markers(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !is_union_attr(attr));
}
