//! Error types for the union pipeline.
//!
//! Scanning and modeling failures carry the span of the offending tokens so
//! the proc-macro front end can point at them, and an optional suggestion
//! rendered as a secondary diagnostic.

use proc_macro2::{Span, TokenStream};
use thiserror::Error;

/// Errors raised while classifying the members of a union module.
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    /// `#[union]` was placed on `mod name;` instead of an inline module.
    #[error("#[union] requires an inline module body")]
    ExternalModule { span: Span },

    /// A struct meant as a case has positional fields.
    #[error("case `{case}` must use named fields")]
    TupleCase { case: String, span: Span },

    /// A case struct carries a `#[union(...)]` attribute other than `skip`.
    #[error("unsupported member attribute on `{case}`: only `#[union(skip)]` is accepted")]
    MemberAttribute { case: String, span: Span },
}

/// Errors raised while assembling the union model.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// `name = "..."` is not a usable identifier.
    #[error("`{name}` is not a valid union name")]
    InvalidName { name: String, span: Span },

    /// Two cases share a name.
    #[error("duplicate case `{case}`")]
    DuplicateCase { case: String, span: Span },

    /// A case shares its name with the union itself.
    #[error("case `{case}` has the same name as the union")]
    CaseNamedLikeUnion { case: String, span: Span },

    /// Two factories would share an identifier.
    #[error("cases `{first}` and `{second}` both produce the factory `{factory}`")]
    FactoryCollision {
        first: String,
        second: String,
        factory: String,
        span: Span,
    },

    /// A factory would shadow a generated method.
    #[error("case `{case}` produces the factory `{factory}`, which is reserved for the generated codec")]
    ReservedFactory {
        case: String,
        factory: String,
        span: Span,
    },

    /// A field would be confused with the case tag on the wire.
    #[error("field `{field}` of case `{case}` clashes with the case tag of a serializable union")]
    ReservedField {
        case: String,
        field: String,
        span: Span,
    },

    /// A case of a serializable union borrows data, which `decode` cannot produce.
    #[error("case `{case}` of a serializable union declares the lifetime `{lifetime}`")]
    BorrowedCase {
        case: String,
        lifetime: String,
        span: Span,
    },
}

/// Any failure of the union pipeline.
#[derive(Debug, Error)]
pub enum UnionError {
    #[error("invalid #[union] arguments: {0}")]
    Args(#[from] darling::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ScanError {
    pub fn span(&self) -> Span {
        match self {
            Self::ExternalModule { span }
            | Self::TupleCase { span, .. }
            | Self::MemberAttribute { span, .. } => *span,
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ExternalModule { .. } => {
                Some("declare the cases inside `mod name { ... }`".to_string())
            }
            Self::TupleCase { case, .. } => Some(format!(
                "write `pub struct {case} {{ pub value: T }}`, or mark a helper type with `#[union(skip)]`"
            )),
            Self::MemberAttribute { .. } => None,
        }
    }
}

impl ModelError {
    pub fn span(&self) -> Span {
        match self {
            Self::InvalidName { span, .. }
            | Self::DuplicateCase { span, .. }
            | Self::CaseNamedLikeUnion { span, .. }
            | Self::FactoryCollision { span, .. }
            | Self::ReservedFactory { span, .. }
            | Self::ReservedField { span, .. }
            | Self::BorrowedCase { span, .. } => *span,
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidName { .. } => Some("use a plain identifier such as `name = \"TokenKind\"`".to_string()),
            Self::CaseNamedLikeUnion { .. } => {
                Some("rename the case or pass `name = \"...\"` to #[union]".to_string())
            }
            Self::FactoryCollision { .. } | Self::ReservedFactory { .. } => {
                Some("rename one of the cases".to_string())
            }
            Self::ReservedField { .. } => Some("rename the field".to_string()),
            Self::BorrowedCase { .. } => {
                Some("use owned field types such as `String` or drop `serializable`".to_string())
            }
            Self::DuplicateCase { .. } => None,
        }
    }
}

impl UnionError {
    /// Convert to a `syn::Error`, attaching the suggestion at the same span.
    pub fn into_syn_error(self) -> syn::Error {
        let (message, span, suggestion) = match &self {
            Self::Args(err) => (err.to_string(), err.span(), None),
            Self::Scan(err) => (err.to_string(), err.span(), err.suggestion()),
            Self::Model(err) => (err.to_string(), err.span(), err.suggestion()),
        };

        let mut error = syn::Error::new(span, message);
        if let Some(suggestion) = suggestion {
            error.combine(syn::Error::new(span, format!("suggestion: {}", suggestion)));
        }
        error
    }

    /// Render as `compile_error!` invocations.
    ///
    /// Argument errors keep darling's own accumulated diagnostics.
    pub fn into_compile_error(self) -> TokenStream {
        match self {
            Self::Args(err) => err.write_errors(),
            other => other.into_syn_error().to_compile_error(),
        }
    }
}

impl From<syn::Error> for UnionError {
    fn from(err: syn::Error) -> Self {
        Self::Args(darling::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_case_message() {
        let err = ScanError::TupleCase {
            case: "Number".to_string(),
            span: Span::call_site(),
        };
        assert_eq!(err.to_string(), "case `Number` must use named fields");
        assert!(err.suggestion().unwrap().contains("pub struct Number"));
    }

    #[test]
    fn test_into_syn_error_carries_suggestion() {
        let err = UnionError::from(ModelError::CaseNamedLikeUnion {
            case: "Shape".to_string(),
            span: Span::call_site(),
        });
        let rendered = err.into_syn_error().to_compile_error().to_string();
        assert!(rendered.contains("case `Shape` has the same name as the union"));
        assert!(rendered.contains("suggestion: rename the case"));
    }

    #[test]
    fn test_collision_message() {
        let err = ModelError::FactoryCollision {
            first: "HttpError".to_string(),
            second: "HTTPError".to_string(),
            factory: "http_error".to_string(),
            span: Span::call_site(),
        };
        assert_eq!(
            err.to_string(),
            "cases `HttpError` and `HTTPError` both produce the factory `http_error`"
        );
    }

    #[test]
    fn test_reserved_field_message() {
        let err = UnionError::from(ModelError::ReservedField {
            case: "Click".to_string(),
            field: "kind".to_string(),
            span: Span::call_site(),
        });
        let rendered = err.into_syn_error().to_compile_error().to_string();
        assert!(rendered.contains("field `kind` of case `Click` clashes with the case tag"));
        assert!(rendered.contains("suggestion: rename the field"));
    }
}
