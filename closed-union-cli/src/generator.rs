//! Expands union declarations into generated units.
//!
//! Every union becomes `<Name>.g.rs`; the marker declaration is added once
//! per run as `closed_union.marker.g.rs`.

use crate::config::Config;
use crate::error::{CliResult, GenerateError};
use crate::parser::UnionDeclaration;
use closed_union_codegen::codegen::marker;
use closed_union_codegen::{
    expand_declaration, Expansion, GeneratedUnit, ModelSummary, RenderOptions, MARKER_FILE_NAME,
};
use std::collections::HashMap;

/// Everything one run produces, in source order with the marker last.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    pub units: Vec<GeneratedUnit>,

    /// Namespaces of the expanded unions, parallel to the union units.
    pub namespaces: Vec<String>,
}

impl GeneratedOutput {
    /// Number of union units, not counting the marker.
    pub fn union_count(&self) -> usize {
        self.namespaces.len()
    }
}

/// Runs the union pipeline over parsed declarations.
pub struct UnionGenerator {
    options: RenderOptions,
    pretty: bool,
}

impl UnionGenerator {
    pub fn new(options: RenderOptions, pretty: bool) -> Self {
        Self { options, pretty }
    }

    /// Build a generator from the `[paths]` and `[output]` configuration.
    pub fn from_config(config: &Config) -> CliResult<Self> {
        Ok(Self::new(
            config.paths.render_options()?,
            config.output.format,
        ))
    }

    /// Expand one declaration.
    pub fn expand(&self, declaration: &UnionDeclaration) -> CliResult<Expansion> {
        expand_declaration(
            &declaration.args,
            declaration.module.clone(),
            &declaration.namespace,
            &self.options,
        )
        .map_err(|err| {
            let error = err.into_syn_error();
            let start = error.span().start();
            // Spans without a source position fall back to the module.
            let (line, column) = if start.line == 0 {
                (declaration.location.line, declaration.location.column)
            } else {
                (start.line, start.column + 1)
            };
            GenerateError::Expand {
                file: declaration.location.file.clone(),
                line,
                column,
                message: error.to_string(),
            }
            .into()
        })
    }

    /// Expand every declaration and add the marker unit.
    pub fn generate(&self, declarations: &[UnionDeclaration]) -> CliResult<GeneratedOutput> {
        let mut units = Vec::with_capacity(declarations.len() + 1);
        let mut namespaces = Vec::with_capacity(declarations.len());
        let mut seen: HashMap<String, String> = HashMap::new();

        for declaration in declarations {
            let expansion = self.expand(declaration)?;
            let name = expansion.model.name.to_string();
            let unit = expansion
                .into_unit(self.pretty)
                .map_err(|e| GenerateError::Format {
                    name,
                    message: e.to_string(),
                })?;

            if let Some(first) = seen.insert(unit.hint_name.clone(), declaration.namespace.clone()) {
                return Err(GenerateError::DuplicateUnit {
                    hint_name: unit.hint_name,
                    first,
                    second: declaration.namespace.clone(),
                }
                .into());
            }

            tracing::debug!(unit = %unit.hint_name, namespace = %declaration.namespace, "generated union");
            namespaces.push(declaration.namespace.clone());
            units.push(unit);
        }

        units.push(Self::marker_unit());
        Ok(GeneratedOutput { units, namespaces })
    }

    /// The shared marker declaration as a generated unit.
    pub fn marker_unit() -> GeneratedUnit {
        GeneratedUnit {
            hint_name: MARKER_FILE_NAME.to_string(),
            source: marker::source(),
        }
    }

    /// Models of every declaration, for `inspect`.
    pub fn inspect(&self, declarations: &[UnionDeclaration]) -> CliResult<Vec<ModelSummary>> {
        declarations
            .iter()
            .map(|declaration| Ok(self.expand(declaration)?.model.summary()))
            .collect()
    }
}
