//! Configuration management for the CLI.
//!
//! Configuration is read from `closed-union.toml` and then overridden by
//! command-line arguments.

use crate::error::{CliResult, ConfigError};
use closed_union_codegen::RenderOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "closed-union.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub paths: PathsConfig,
}

/// Where union modules are looked for.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Source root; file paths below it become module paths.
    pub dir: PathBuf,

    /// Glob applied to paths relative to `dir`.
    pub filter: Option<String>,
}

/// Where generated units are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,

    /// Pretty-print generated files.
    pub format: bool,
}

/// Paths the generated code uses to reach its support items.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Module that includes the generated marker file.
    pub runtime: String,
    pub serde: String,
    pub serde_json: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src"),
            filter: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
            format: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            runtime: "crate::closed_union".to_string(),
            serde: "::serde".to_string(),
            serde_json: "::serde_json".to_string(),
        }
    }
}

impl PathsConfig {
    /// Parse the configured paths.
    pub fn render_options(&self) -> CliResult<RenderOptions> {
        let runtime = parse_path("paths.runtime", &self.runtime)?;
        let serde = parse_path("paths.serde", &self.serde)?;
        let serde_json = parse_path("paths.serde_json", &self.serde_json)?;
        Ok(RenderOptions {
            runtime,
            serde,
            serde_json,
        })
    }
}

fn parse_path(key: &str, value: &str) -> Result<syn::Path, ConfigError> {
    syn::parse_str(value)
        .map_err(|e| ConfigError::invalid_value(key, format!("`{}` is not a path: {}", value, e)))
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// Without an explicit path the default file is tried, and its absence
    /// yields the default configuration. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
                .into())
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILENAME),
        };

        if !config_path.exists() {
            tracing::debug!("no {} found, using defaults", CONFIG_FILENAME);
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref input) = args.input {
            config.input.dir = input.clone();
        }

        if let Some(ref filter) = args.filter {
            config.input.filter = Some(filter.clone());
        }

        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(format) = args.format {
            config.output.format = format;
        }

        config
    }

    /// Default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# closed-union configuration file

[input]
# Source root; `src/shapes/mod.rs` maps to the module path `crate::shapes`
dir = "src"

# Only scan files whose path relative to `dir` matches this glob
# filter = "**/*.rs"

[output]
# Directory receiving one `<Name>.g.rs` per union plus `closed_union.marker.g.rs`
dir = "generated"

# Pretty-print generated files
format = true

[paths]
# Module that includes the generated marker file, e.g.
#   mod closed_union { include!("../generated/closed_union.marker.g.rs"); }
runtime = "crate::closed_union"

# Paths of the serde crates used by serializable unions
serde = "::serde"
serde_json = "::serde_json"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub filter: Option<String>,
    pub output: Option<PathBuf>,
    pub format: Option<bool>,
}
