//! The union model.
//!
//! A [`UnionModel`] is built once per annotated module from the scanned
//! cases and discarded after rendering. Case order is the source order and
//! drives every ordered construct the renderer emits.

use convert_case::{Case, Casing};
use proc_macro2::Span;
use quote::format_ident;
use serde::Serialize;
use syn::ext::IdentExt;
use syn::{Fields, Generics, Ident, ItemStruct, Path, Type, Visibility};

use super::generics;
use crate::error::ModelError;
use crate::tokens::compact;

/// Inherent methods the codec adds to serializable unions.
const RESERVED_FACTORIES: &[&str] = &["decode", "encode"];

/// Object keys the codec reads the case tag from.
const TAG_FIELDS: &[&str] = &["kind", "Kind"];

/// One constructor parameter of a case.
#[derive(Debug, Clone)]
pub struct CaseArg {
    pub name: Ident,
    pub ty: Type,
}

/// One case of the union, normalized.
#[derive(Debug, Clone)]
pub struct CaseType {
    /// Bare case name.
    pub name: Ident,
    /// Normalized declaration header, e.g. `pub struct Some<TValue>`.
    pub header: String,
    /// Fields in declaration order.
    pub args: Vec<CaseArg>,
    /// The struct as it is re-emitted.
    pub declaration: ItemStruct,
}

impl CaseType {
    /// Normalize a case struct.
    ///
    /// Private visibility becomes `pub`; everything else is kept as written.
    pub fn from_struct(item: &ItemStruct) -> Self {
        let mut declaration = item.clone();
        if matches!(declaration.vis, Visibility::Inherited) {
            declaration.vis = syn::parse_quote!(pub);
        }

        let args = match &declaration.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .filter_map(|field| {
                    field.ident.clone().map(|name| CaseArg {
                        name,
                        ty: field.ty.clone(),
                    })
                })
                .collect(),
            Fields::Unnamed(_) | Fields::Unit => Vec::new(),
        };

        let header = format!(
            "{} struct {}{}",
            compact(&declaration.vis),
            declaration.ident,
            compact(&declaration.generics)
        );

        Self {
            name: declaration.ident.clone(),
            header,
            args,
            declaration,
        }
    }

    pub fn generics(&self) -> &Generics {
        &self.declaration.generics
    }

    /// The case type with its own generic arguments, e.g. `Some<TValue>`.
    pub fn ty(&self) -> Type {
        let name = &self.name;
        let (_, ty_generics, _) = self.generics().split_for_impl();
        syn::parse_quote!(#name #ty_generics)
    }

    /// Zero-argument cases get a constant instead of a function.
    pub fn is_singleton(&self) -> bool {
        self.args.is_empty()
    }

    /// Identifier of the factory: `PLUS` for singletons, `number` otherwise.
    pub fn factory_ident(&self) -> Ident {
        let name = self.name.unraw().to_string();
        let text = if self.is_singleton() {
            name.to_case(Case::UpperSnake)
        } else {
            name.to_case(Case::Snake)
        };
        safe_ident(&text, self.name.span())
    }

    /// Tag written on the wire: the bare case name.
    pub fn tag(&self) -> String {
        self.name.unraw().to_string()
    }
}

/// The assembled union.
#[derive(Debug, Clone)]
pub struct UnionModel {
    pub name: Ident,
    /// `Option<TValue>`
    pub closed_type: String,
    /// `Option<_>`
    pub open_type: String,
    /// `pub enum Option<TValue>`
    pub header: String,
    pub namespace: String,
    pub cases: Vec<CaseType>,
    pub serializable: bool,
    /// Merged generics of all cases.
    pub generics: Generics,
    /// Derives for the enum.
    pub derives: Vec<Path>,
}

impl UnionModel {
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// Serializable view of the model for tooling output.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            name: self.name.to_string(),
            closed_type: self.closed_type.clone(),
            open_type: self.open_type.clone(),
            header: self.header.clone(),
            namespace: self.namespace.clone(),
            serializable: self.serializable,
            cases: self
                .cases
                .iter()
                .map(|case| CaseSummary {
                    name: case.name.to_string(),
                    header: case.header.clone(),
                    factory: case.factory_ident().to_string(),
                    args: case
                        .args
                        .iter()
                        .map(|arg| ArgSummary {
                            name: arg.name.to_string(),
                            ty: compact(&arg.ty),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// JSON shape of a model, as printed by `closed-union inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub closed_type: String,
    pub open_type: String,
    pub header: String,
    pub namespace: String,
    pub serializable: bool,
    pub cases: Vec<CaseSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseSummary {
    pub name: String,
    pub header: String,
    pub factory: String,
    pub args: Vec<ArgSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Builder for [`UnionModel`].
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    module: Ident,
    name: Option<String>,
    namespace: Option<String>,
    serializable: bool,
    derives: Vec<Path>,
    cases: Vec<CaseType>,
}

impl ModelBuilder {
    /// Start a model for the module `module`.
    pub fn new(module: &Ident) -> Self {
        Self {
            module: module.clone(),
            name: None,
            namespace: None,
            serializable: false,
            derives: Vec::new(),
            cases: Vec::new(),
        }
    }

    pub fn name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn serializable(mut self, serializable: bool) -> Self {
        self.serializable = serializable;
        self
    }

    pub fn derives(mut self, derives: Vec<Path>) -> Self {
        self.derives = derives;
        self
    }

    pub fn cases(mut self, cases: Vec<CaseType>) -> Self {
        self.cases = cases;
        self
    }

    /// Validate and assemble the model.
    pub fn build(self) -> Result<UnionModel, ModelError> {
        let span = self.module.span();
        let name = match &self.name {
            Some(name) => syn::parse_str::<Ident>(name)
                .map(|mut ident| {
                    ident.set_span(span);
                    ident
                })
                .map_err(|_| ModelError::InvalidName {
                    name: name.clone(),
                    span,
                })?,
            None => format_ident!(
                "{}",
                self.module.unraw().to_string().to_case(Case::Pascal),
                span = span
            ),
        };

        validate_cases(&name, &self.cases, self.serializable)?;

        let generics = generics::merge(self.cases.iter().map(CaseType::generics));
        let (_, ty_generics, _) = generics.split_for_impl();
        let closed_type = format!("{}{}", name, compact(&ty_generics));
        let open_type = format!("{}{}", name, generics::placeholders(&generics));
        let header = format!("pub enum {}{}", name, compact(&generics));
        let namespace = self
            .namespace
            .unwrap_or_else(|| self.module.unraw().to_string());

        tracing::debug!(
            union = %name,
            cases = self.cases.len(),
            serializable = self.serializable,
            "built union model"
        );

        Ok(UnionModel {
            name,
            closed_type,
            open_type,
            header,
            namespace,
            cases: self.cases,
            serializable: self.serializable,
            generics,
            derives: self.derives,
        })
    }
}

fn validate_cases(name: &Ident, cases: &[CaseType], serializable: bool) -> Result<(), ModelError> {
    let mut factories: Vec<(String, &CaseType)> = Vec::with_capacity(cases.len());

    for (index, case) in cases.iter().enumerate() {
        if case.name == *name {
            return Err(ModelError::CaseNamedLikeUnion {
                case: case.name.to_string(),
                span: case.name.span(),
            });
        }

        if cases[..index].iter().any(|earlier| earlier.name == case.name) {
            return Err(ModelError::DuplicateCase {
                case: case.name.to_string(),
                span: case.name.span(),
            });
        }

        if serializable {
            validate_serializable_case(case)?;
        }

        let factory = case.factory_ident().to_string();
        if serializable && RESERVED_FACTORIES.contains(&factory.as_str()) {
            return Err(ModelError::ReservedFactory {
                case: case.name.to_string(),
                factory,
                span: case.name.span(),
            });
        }

        if let Some((_, earlier)) = factories.iter().find(|(existing, _)| *existing == factory) {
            return Err(ModelError::FactoryCollision {
                first: earlier.name.to_string(),
                second: case.name.to_string(),
                factory,
                span: case.name.span(),
            });
        }
        factories.push((factory, case));
    }

    Ok(())
}

fn validate_serializable_case(case: &CaseType) -> Result<(), ModelError> {
    if let Some(param) = case.generics().lifetimes().next() {
        return Err(ModelError::BorrowedCase {
            case: case.name.to_string(),
            lifetime: param.lifetime.to_string(),
            span: param.lifetime.span(),
        });
    }

    if let Some(arg) = case
        .args
        .iter()
        .find(|arg| TAG_FIELDS.contains(&arg.name.unraw().to_string().as_str()))
    {
        return Err(ModelError::ReservedField {
            case: case.name.to_string(),
            field: arg.name.unraw().to_string(),
            span: arg.name.span(),
        });
    }

    Ok(())
}

/// An identifier for `text`, with a trailing `_` when `text` is a keyword.
fn safe_ident(text: &str, span: Span) -> Ident {
    match syn::parse_str::<Ident>(text) {
        Ok(_) => Ident::new(text, span),
        Err(_) => Ident::new(&format!("{}_", text), span),
    }
}
