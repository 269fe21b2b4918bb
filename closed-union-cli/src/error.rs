//! Error types for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to scan directory: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to parse source file: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to generate unions: {0}")]
    Generate(#[from] GenerateError),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Generated files on disk differ from a fresh expansion.
    #[error("Generated output is stale: {}", format_paths(.files))]
    Stale { files: Vec<PathBuf> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during source file scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Invalid filter pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Error while locating union modules in a source file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file is not valid Rust.
    #[error("Syntax error in {file}:{line}:{column}: {message}")]
    Syntax {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The `#[union(...)]` arguments are malformed.
    #[error("Invalid #[union] attribute in {file}:{line}:{column}: {message}")]
    Attribute {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// Error while expanding union modules.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The declaration was rejected by the union pipeline.
    #[error("{file}:{line}:{column}: {message}")]
    Expand {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Two unions would be written to the same file.
    #[error("Unions `{first}` and `{second}` both generate `{hint_name}`")]
    DuplicateUnit {
        hint_name: String,
        first: String,
        second: String,
    },

    /// The expansion could not be formatted.
    #[error("Failed to format `{name}`: {message}")]
    Format { name: String, message: String },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Position of a span, 1-indexed.
pub(crate) fn position(span: proc_macro2::Span) -> (usize, usize) {
    let start = span.start();
    (start.line.max(1), start.column + 1)
}

impl ParseError {
    /// Create a syntax error located at the error's span.
    pub fn syntax(file: PathBuf, error: &syn::Error) -> Self {
        let (line, column) = position(error.span());
        Self::Syntax {
            file,
            line,
            column,
            message: error.to_string(),
        }
    }

    /// Create an attribute error.
    pub fn attribute(file: PathBuf, span: proc_macro2::Span, message: impl Into<String>) -> Self {
        let (line, column) = position(span);
        Self::Attribute {
            file,
            line,
            column,
            message: message.into(),
        }
    }

    /// The file the error points into.
    pub fn file(&self) -> &PathBuf {
        match self {
            Self::Syntax { file, .. } | Self::Attribute { file, .. } => file,
        }
    }
}

impl ScanError {
    pub fn not_found(path: PathBuf) -> Self {
        Self::DirectoryNotFound { path }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }

    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
