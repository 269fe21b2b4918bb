//! Code generation for union modules.
//!
//! - [`union_block`]: the enum, conversions, factories and the
//!   `ClosedUnion` impl
//! - [`serde_impl`]: the tagged JSON codec, serializable unions only
//! - [`marker`]: the shared declarations every generated union refers to
//! - [`source`]: formatting token streams into generated files

pub mod marker;
pub mod serde_impl;
pub mod source;
pub mod union_block;

use syn::{parse_quote, Path};

/// Paths the generated code uses to reach its support items.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Where `ClosedUnion`, `DecodeError` and the tag constants live.
    pub runtime: Path,
    /// The `serde` crate.
    pub serde: Path,
    /// The `serde_json` crate.
    pub serde_json: Path,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::macro_defaults()
    }
}

impl RenderOptions {
    /// Paths used by the attribute macro, all routed through the runtime crate.
    pub fn macro_defaults() -> Self {
        Self {
            runtime: parse_quote!(::closed_union),
            serde: parse_quote!(::closed_union::__private::serde),
            serde_json: parse_quote!(::closed_union::__private::serde_json),
        }
    }

    /// Parse the three support paths from their textual form.
    pub fn parse(runtime: &str, serde: &str, serde_json: &str) -> syn::Result<Self> {
        Ok(Self {
            runtime: syn::parse_str(runtime)?,
            serde: syn::parse_str(serde)?,
            serde_json: syn::parse_str(serde_json)?,
        })
    }
}
