//! # closed-union
//!
//! Expands `#[union]` modules into standalone generated files.
//!
//! ## Usage
//!
//! ```bash
//! # Expand every union under ./src into ./generated
//! closed-union expand
//!
//! # Preview without writing
//! closed-union expand --dry-run
//!
//! # Fail with exit code 2 when generated files are out of date
//! closed-union check
//!
//! # Print the union models as JSON
//! closed-union inspect
//!
//! # Write a default closed-union.toml
//! closed-union init
//! ```

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use closed_union_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::{CliError, ParseError},
    generator::UnionGenerator,
    parser::{UnionDeclaration, UnionParser},
    scanner::SourceScanner,
    writer::{self, FileWriter, Staleness, WriteResult},
};

#[derive(Parser)]
#[command(name = "closed-union")]
#[command(author, version, about = "Expand #[union] modules into generated Rust files", long_about = None)]
struct Cli {
    /// Log pipeline progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads sources.
#[derive(Args)]
struct SourceArgs {
    /// Source root containing the union modules
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only scan files matching this glob, relative to the source root
    #[arg(long)]
    filter: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one generated file per union plus the marker file
    Expand {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory for generated files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Write the raw token stream instead of formatted source
        #[arg(long)]
        no_format: bool,
    },

    /// Verify that generated files are up to date
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory holding the generated files
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the union models as JSON
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Initialize a new closed-union configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "closed-union.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Stale { .. } => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Expand {
            source,
            output,
            dry_run,
            no_format,
        } => {
            let config = load_config(
                &source,
                CliArgs {
                    output,
                    format: no_format.then_some(false),
                    ..Default::default()
                },
            )?;
            cmd_expand(&config, dry_run)
        }

        Commands::Check { source, output } => {
            let config = load_config(
                &source,
                CliArgs {
                    output,
                    ..Default::default()
                },
            )?;
            cmd_check(&config)
        }

        Commands::Inspect { source } => {
            let config = load_config(&source, CliArgs::default())?;
            cmd_inspect(&config)
        }

        Commands::Init { output, force } => cmd_init(output, force),
    }
}

/// Load the configuration file and apply command-line overrides.
fn load_config(source: &SourceArgs, mut overrides: CliArgs) -> Result<Config, CliError> {
    let config = ConfigManager::load(source.config.as_deref())?;
    overrides.input = source.input.clone();
    overrides.filter = source.filter.clone();
    Ok(ConfigManager::merge_cli_args(config, &overrides))
}

/// Scan and parse the configured sources.
fn collect_declarations(config: &Config, quiet: bool) -> Result<Vec<UnionDeclaration>, CliError> {
    let mut scanner = SourceScanner::new(&config.input.dir);
    if let Some(ref pattern) = config.input.filter {
        scanner = scanner.with_filter(pattern)?;
    }

    let files = scanner.scan()?;
    if !quiet {
        println!("  Found {} Rust file(s)", files.len().to_string().green());
    }

    let (declarations, errors) = UnionParser::new().parse_files(&files);
    if !errors.is_empty() {
        eprintln!("{} {} parse error(s):", "Warning:".yellow(), errors.len());
        for error in &errors {
            eprintln!("  {}", format_parse_error(error));
        }
    }

    Ok(declarations)
}

/// Expand command implementation.
fn cmd_expand(config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!("{}", "Scanning for #[union] modules...".cyan());
    let declarations = collect_declarations(config, false)?;

    if declarations.is_empty() {
        println!("{}", "No #[union] modules found.".yellow());
        return Ok(());
    }

    let generator = UnionGenerator::from_config(config)?;
    let output = generator.generate(&declarations)?;
    println!(
        "  Generated {} union(s)",
        output.union_count().to_string().green()
    );

    let writer = FileWriter::new(dry_run);
    for result in writer.write_units(&config.output.dir, &output.units)? {
        match result {
            WriteResult::Written { path, bytes } => {
                println!(
                    "{} Written {} bytes to {}",
                    "✓".green(),
                    bytes,
                    path.display()
                );
            }
            WriteResult::DryRun { content, path } => {
                println!(
                    "{} Would write to {}:",
                    "[dry-run]".yellow(),
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    Ok(())
}

/// Check command implementation.
fn cmd_check(config: &Config) -> Result<(), CliError> {
    println!("{}", "Checking generated files...".cyan());
    let declarations = collect_declarations(config, false)?;

    let generator = UnionGenerator::from_config(config)?;
    let output = generator.generate(&declarations)?;
    let stale = writer::stale_files(&config.output.dir, &output.units)?;

    if stale.is_empty() {
        println!("{} Generated files are up to date", "✓".green());
        return Ok(());
    }

    for file in &stale {
        let reason = match file.reason {
            Staleness::Missing => "missing",
            Staleness::Changed => "out of date",
        };
        println!("{} {} ({})", "✗".red(), file.path.display(), reason);
    }
    println!("  Run 'closed-union expand' to update");

    Err(CliError::Stale {
        files: stale.into_iter().map(|file| file.path).collect(),
    })
}

/// Inspect command implementation.
fn cmd_inspect(config: &Config) -> Result<(), CliError> {
    let declarations = collect_declarations(config, true)?;
    let generator = UnionGenerator::from_config(config)?;
    let summaries = generator.inspect(&declarations)?;

    let json = serde_json::to_string_pretty(&summaries)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    println!("{}", json);
    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "configuration file already exists",
        )));
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

fn format_parse_error(error: &ParseError) -> String {
    match error {
        ParseError::Syntax {
            file,
            line,
            column,
            message,
        }
        | ParseError::Attribute {
            file,
            line,
            column,
            message,
        } => format!("{}:{}:{}: {}", file.display(), line, column, message),
    }
}
