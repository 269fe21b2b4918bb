//! # closed-union-macros
//!
//! The `#[union]` attribute. Use it through the `closed-union` crate, which
//! provides the `ClosedUnion` trait and the serde re-exports the generated
//! code refers to.
//!
//! ## Usage
//!
//! ```rust,ignore
//! #[closed_union::union(serializable, derive(Debug, Clone, PartialEq))]
//! pub mod token_kind {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Number { pub value: String }
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Plus;
//! }
//!
//! let token = TokenKind::number("42".to_string());
//! assert_eq!(TokenKind::PLUS.case_name(), "Plus");
//! ```
//!
//! ## Arguments
//!
//! - `serializable`, `serializable = true` or a bare `true`: emit the tagged
//!   JSON codec
//! - `name = "Ident"`: name of the generated enum, defaults to the module
//!   name in PascalCase
//! - `derive(...)`: derives applied to the generated enum
//!
//! ## Members
//!
//! Structs with named fields or no fields are cases. `#[union(skip)]` keeps
//! a struct out of the cases; every other item is carried through unchanged.

use proc_macro::TokenStream;
use syn::Item;

use closed_union_codegen::{expand, RenderOptions};

/// Turn an inline module of case structs into a closed union.
///
/// See the crate documentation for the accepted arguments.
#[proc_macro_attribute]
pub fn union(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = syn::parse_macro_input!(input as Item);

    let module = match item {
        Item::Mod(module) => module,
        other => {
            return syn::Error::new_spanned(
                other,
                "#[union] must be applied to an inline module of case structs",
            )
            .to_compile_error()
            .into();
        }
    };

    match expand(args.into(), module, &RenderOptions::macro_defaults()) {
        Ok(expansion) => expansion.tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
