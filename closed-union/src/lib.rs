//! # closed-union
//!
//! Closed, exhaustively matchable sum types declared as a module of case
//! structs, with an optional tagged JSON wire format.
//!
//! ## Quick Start
//!
//! ```rust
//! use closed_union::ClosedUnion;
//!
//! #[closed_union::union(serializable, derive(Debug, Clone, PartialEq))]
//! pub mod token_kind {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Number {
//!         pub value: String,
//!     }
//!
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Plus;
//!
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Minus;
//! }
//!
//! fn main() {
//!     let token = TokenKind::number("42".to_string());
//!     assert_eq!(token.case_name(), "Number");
//!     assert_eq!(
//!         token.encode().unwrap(),
//!         serde_json::json!({ "Kind": "Number", "value": "42" })
//!     );
//!
//!     let err = TokenKind::decode(serde_json::json!({ "Kind": "Divide" })).unwrap_err();
//!     assert_eq!(err.to_string(), "unknown tag `Divide` for union `TokenKind`");
//! }
//! ```
//!
//! ## What gets generated
//!
//! For a module `token_kind` the attribute emits, inside the module:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `enum TokenKind { Number(Number), Plus(Plus), Minus(Minus) }` | the closed union, variants in declaration order |
//! | `impl From<Number> for TokenKind`, ... | upcast a case into the union |
//! | `TokenKind::number(value)`, `TokenKind::PLUS`, ... | one factory per case; constants for cases without fields |
//! | `impl ClosedUnion for TokenKind` | case listing and `case_name` |
//! | `Number::KIND`, `Serialize`, `Deserialize`, `encode`, `decode` | `serializable` only |
//!
//! and re-exports the enum next to the module.
//!
//! ## Wire format
//!
//! A flat JSON object with one entry per field plus the tag `Kind` holding
//! the bare case name. Decoding accepts the tag under `kind` or `Kind`.
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `derive` | Re-export the `#[union]` attribute | ✅ |

include!(concat!(env!("OUT_DIR"), "/closed_union.marker.g.rs"));

#[cfg(feature = "derive")]
pub use closed_union_macros::union;

/// Commonly used items.
pub mod prelude {
    #[cfg(feature = "derive")]
    pub use crate::union;
    pub use crate::{ClosedUnion, DecodeError, TAG_KEY, TAG_KEYS};
}

/// Support crates referenced by generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
