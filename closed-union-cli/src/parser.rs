//! Locates `#[union]` modules in Rust source files.
//!
//! Union modules may sit at any depth of inline modules. Each one is
//! recorded with its namespace: the module path derived from the file's
//! location under the source root, followed by the enclosing inline
//! modules and the union module itself.

use crate::error::{CliResult, ParseError};
use crate::scanner::SourceFile;
use closed_union_codegen::parser::{find_union_attr, is_union_attr};
use closed_union_codegen::UnionArgs;
use std::path::{Component, Path, PathBuf};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Item, ItemMod};

/// A union module found in a source file.
#[derive(Debug, Clone)]
pub struct UnionDeclaration {
    /// Parsed marker arguments.
    pub args: UnionArgs,

    /// The module with its marker attribute removed.
    pub module: ItemMod,

    /// Full module path, e.g. `crate::tokens::token_kind`.
    pub namespace: String,

    pub location: SourceLocation,
}

/// Source location for error reporting.
#[derive(Debug, Clone)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

/// Parser for Rust source files.
#[derive(Debug, Default)]
pub struct UnionParser;

impl UnionParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_file(&self, source: &SourceFile) -> CliResult<Vec<UnionDeclaration>> {
        self.parse_source(&source.content, &source.path, &source.relative_path)
    }

    /// Parse source code; `relative_path` places the file in the crate.
    pub fn parse_source(
        &self,
        content: &str,
        file_path: &Path,
        relative_path: &Path,
    ) -> CliResult<Vec<UnionDeclaration>> {
        let syntax = syn::parse_file(content)
            .map_err(|e| ParseError::syntax(file_path.to_path_buf(), &e))?;

        let mut module_path = module_path(relative_path);
        let mut declarations = Vec::new();
        self.collect(syntax.items, file_path, &mut module_path, &mut declarations)?;

        tracing::debug!(
            file = %file_path.display(),
            unions = declarations.len(),
            "parsed source file"
        );
        Ok(declarations)
    }

    /// Parse multiple source files, collecting errors.
    pub fn parse_files(&self, sources: &[SourceFile]) -> (Vec<UnionDeclaration>, Vec<ParseError>) {
        let mut declarations = Vec::new();
        let mut errors = Vec::new();

        for source in sources {
            match self.parse_file(source) {
                Ok(found) => declarations.extend(found),
                Err(crate::error::CliError::Parse(e)) => errors.push(e),
                Err(e) => tracing::warn!(file = %source.path.display(), "{}", e),
            }
        }

        (declarations, errors)
    }

    fn collect(
        &self,
        items: Vec<Item>,
        file_path: &Path,
        module_path: &mut Vec<String>,
        declarations: &mut Vec<UnionDeclaration>,
    ) -> Result<(), ParseError> {
        for item in items {
            let Item::Mod(mut module) = item else {
                continue;
            };

            if let Some(attr) = find_union_attr(&module.attrs) {
                let args = UnionArgs::from_attribute(attr).map_err(|e| {
                    let error = e.into_syn_error();
                    ParseError::attribute(file_path.to_path_buf(), attr.span(), error.to_string())
                })?;
                let (line, column) = crate::error::position(module.ident.span());

                module.attrs.retain(|attr| !is_union_attr(attr));
                let namespace = namespace(module_path, &module.ident.unraw().to_string());
                tracing::trace!(namespace = %namespace, "found union module");

                declarations.push(UnionDeclaration {
                    args,
                    module,
                    namespace,
                    location: SourceLocation {
                        file: file_path.to_path_buf(),
                        line,
                        column,
                    },
                });
                continue;
            }

            if let Some((_, content)) = module.content {
                module_path.push(module.ident.unraw().to_string());
                self.collect(content, file_path, module_path, declarations)?;
                module_path.pop();
            }
        }

        Ok(())
    }
}

/// Module path of a file relative to the source root, without `crate`.
///
/// `lib.rs` and `main.rs` are the crate root and `mod.rs` names its
/// directory.
pub fn module_path(relative_path: &Path) -> Vec<String> {
    let mut segments: Vec<String> = relative_path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let stem = relative_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let is_root = segments.is_empty() && matches!(stem.as_str(), "lib" | "main");
    if !is_root && stem != "mod" && !stem.is_empty() {
        segments.push(stem);
    }
    segments
}

fn namespace(module_path: &[String], module: &str) -> String {
    std::iter::once("crate")
        .chain(module_path.iter().map(String::as_str))
        .chain(std::iter::once(module))
        .collect::<Vec<_>>()
        .join("::")
}
