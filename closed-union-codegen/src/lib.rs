//! # closed-union-codegen
//!
//! The pipeline behind `#[closed_union::union]`, shared by the attribute
//! macro and the `closed-union` CLI.
//!
//! ```text
//! ItemMod -> DeclarationScanner -> ModelBuilder -> UnionRenderer/SerdeEmitter -> tokens
//! ```
//!
//! Every stage is a pure function of its input, so identical declarations
//! always expand to identical tokens.
//!
//! ## Example
//!
//! ```rust
//! use closed_union_codegen::{expand, RenderOptions};
//! use quote::quote;
//! use syn::parse_quote;
//!
//! let module: syn::ItemMod = parse_quote! {
//!     pub mod token_kind {
//!         pub struct Number { pub value: String }
//!         pub struct Plus;
//!     }
//! };
//!
//! let expansion = expand(quote!(serializable), module, &RenderOptions::default()).unwrap();
//! assert_eq!(expansion.model.closed_type, "TokenKind");
//! assert_eq!(expansion.model.cases.len(), 2);
//! ```

pub mod codegen;
pub mod error;
pub mod ir;
pub mod parser;
pub mod tokens;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{AttrStyle, Attribute, ItemMod};

pub use codegen::marker::MARKER_FILE_NAME;
pub use codegen::source::GeneratedUnit;
pub use codegen::union_block::UnionRenderer;
pub use codegen::RenderOptions;
pub use error::{ModelError, ScanError, UnionError};
pub use ir::{ModelBuilder, ModelSummary, UnionModel};
pub use parser::{DeclarationScanner, UnionArgs};

/// A union module after expansion.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub model: UnionModel,
    /// The rewritten module followed by the re-export of the enum.
    pub tokens: TokenStream,
}

impl Expansion {
    /// Format the expansion as a generated file.
    pub fn into_unit(self, pretty: bool) -> syn::Result<GeneratedUnit> {
        codegen::source::unit(&self.model, self.tokens, pretty)
    }
}

/// Expand a union module from raw marker arguments.
///
/// The namespace recorded in the model is the module name.
pub fn expand(
    args: TokenStream,
    module: ItemMod,
    options: &RenderOptions,
) -> Result<Expansion, UnionError> {
    let args = UnionArgs::parse(args)?;
    let namespace = module.ident.unraw().to_string();
    expand_declaration(&args, module, &namespace, options)
}

/// Expand a union module whose marker has already been parsed.
///
/// `module` must no longer carry the marker attribute itself.
pub fn expand_declaration(
    args: &UnionArgs,
    module: ItemMod,
    namespace: &str,
    options: &RenderOptions,
) -> Result<Expansion, UnionError> {
    tracing::debug!(module = %module.ident, namespace, "expanding union module");

    let scanned = DeclarationScanner::scan(&module)?;
    let model = ModelBuilder::new(&module.ident)
        .name(args.name.as_deref())
        .namespace(namespace)
        .serializable(args.serializable)
        .derives(args.derive.iter().cloned().collect())
        .cases(scanned.cases.clone())
        .build()?;

    let body = UnionRenderer::new(&model, options).render(&scanned.members);

    let (inner, outer): (Vec<&Attribute>, Vec<&Attribute>) = module
        .attrs
        .iter()
        .partition(|attr| matches!(attr.style, AttrStyle::Inner(_)));
    let vis = &module.vis;
    let ident = &module.ident;
    let name = &model.name;

    let tokens = quote! {
        #(#outer)*
        #vis mod #ident {
            #(#inner)*
            #body
        }

        #vis use #ident::#name;
    };

    Ok(Expansion { model, tokens })
}
