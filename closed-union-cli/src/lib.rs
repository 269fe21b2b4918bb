//! # closed-union-cli
//!
//! Library behind the `closed-union` command, which expands `#[union]`
//! modules ahead of time into standalone generated files.
//!
//! ## Architecture
//!
//! - [`config`] - `closed-union.toml` loading and CLI overrides
//! - [`scanner`] - source file discovery and filtering
//! - [`parser`] - locating union modules and their namespaces
//! - [`generator`] - one generated unit per union plus the marker unit
//! - [`writer`] - file output, dry-run and staleness checks
//! - [`error`] - error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod scanner;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::UnionGenerator;
pub use parser::{UnionDeclaration, UnionParser};
pub use scanner::{SourceFile, SourceScanner};
pub use writer::FileWriter;
