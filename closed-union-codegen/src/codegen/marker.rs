//! The marker declaration shared by every generated union.
//!
//! Its shape is fixed: the `ClosedUnion` trait, the tag constants and
//! `DecodeError`. It is emitted once per compilation unit under the stable
//! file name [`MARKER_FILE_NAME`]; the runtime crate includes it from its
//! build script and the CLI writes it next to the generated unions.

use proc_macro2::TokenStream;
use quote::quote;

use super::source;

/// Stable identifier of the generated marker file.
pub const MARKER_FILE_NAME: &str = "closed_union.marker.g.rs";

/// Tokens of the marker declaration.
pub fn emit() -> TokenStream {
    quote! {
        /// Implemented by every enum generated by `#[union]`.
        ///
        /// The set of cases is closed: the enum admits no variants beyond the
        /// case structs declared in its module.
        pub trait ClosedUnion {
            /// Name of the union with placeholder generic arguments, e.g. `Option<_>`.
            const NAME: &'static str;

            /// Bare case names in declaration order.
            const CASES: &'static [&'static str];

            /// Whether the union was declared with `serializable`.
            const SERIALIZABLE: bool = false;

            /// Bare name of the case held by this value.
            fn case_name(&self) -> &'static str;
        }

        /// Key under which the case tag is written.
        pub const TAG_KEY: &str = "Kind";

        /// Keys accepted for the case tag when decoding, in lookup order.
        pub const TAG_KEYS: [&str; 2] = ["kind", "Kind"];

        /// Failure to decode a tagged union value.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum DecodeError {
            /// The input is not an object or carries no tag.
            MissingTag {
                union: &'static str,
            },
            /// The tag names no case of the union.
            UnknownTag {
                union: &'static str,
                tag: ::std::string::String,
            },
            /// A field of the selected case failed to decode.
            Field {
                union: &'static str,
                case: &'static str,
                field: &'static str,
                message: ::std::string::String,
            },
        }

        impl DecodeError {
            /// The union that failed to decode.
            pub fn union(&self) -> &'static str {
                match self {
                    Self::MissingTag { union }
                    | Self::UnknownTag { union, .. }
                    | Self::Field { union, .. } => *union,
                }
            }
        }

        impl ::core::fmt::Display for DecodeError {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    Self::MissingTag { union } => {
                        write!(f, "missing tag `kind` or `Kind` for union `{}`", union)
                    }
                    Self::UnknownTag { union, tag } => {
                        write!(f, "unknown tag `{}` for union `{}`", tag, union)
                    }
                    Self::Field {
                        union,
                        case,
                        field,
                        message,
                    } => write!(
                        f,
                        "invalid field `{}` of case `{}` in union `{}`: {}",
                        field, case, union, message
                    ),
                }
            }
        }

        impl ::std::error::Error for DecodeError {}
    }
}

/// The marker declaration as formatted source.
pub fn source() -> String {
    source::format_tokens(emit())
        .map(|formatted| source::with_header(&formatted, None))
        .unwrap_or_else(|_| emit().to_string())
}
