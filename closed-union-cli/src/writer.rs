//! Writes generated units to disk.
//!
//! Supports a dry-run mode that returns the content instead, and a
//! comparison mode used by `check` to find stale files.

use crate::error::{CliResult, WriteError};
use closed_union_codegen::GeneratedUnit;
use std::path::{Path, PathBuf};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    Written { path: PathBuf, bytes: usize },
    /// Dry run, nothing was written.
    DryRun { content: String, path: PathBuf },
}

/// Why a generated file on disk does not match a fresh expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    Missing,
    Changed,
}

/// A generated file that needs to be regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleFile {
    pub path: PathBuf,
    pub reason: Staleness,
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write content to a file, creating parent directories.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    /// Write every unit into `dir` under its hint name.
    pub fn write_units(&self, dir: &Path, units: &[GeneratedUnit]) -> CliResult<Vec<WriteResult>> {
        units
            .iter()
            .map(|unit| self.write(&dir.join(&unit.hint_name), &unit.source))
            .collect()
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Compare units with the files already in `dir`.
pub fn stale_files(dir: &Path, units: &[GeneratedUnit]) -> CliResult<Vec<StaleFile>> {
    let mut stale = Vec::new();

    for unit in units {
        let path = dir.join(&unit.hint_name);
        let reason = match std::fs::read_to_string(&path) {
            Ok(existing) if existing == unit.source => continue,
            Ok(_) => Staleness::Changed,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Staleness::Missing,
            Err(e) => return Err(e.into()),
        };
        stale.push(StaleFile { path, reason });
    }

    Ok(stale)
}

impl WriteResult {
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn unit(name: &str, source: &str) -> GeneratedUnit {
        GeneratedUnit {
            hint_name: name.to_string(),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_write_units_creates_directories() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/generated");
        let units = [unit("Sign.g.rs", "pub enum Sign {}\n")];

        let results = FileWriter::new(false).write_units(&out, &units).unwrap();

        assert!(results[0].was_written());
        assert_eq!(
            std::fs::read_to_string(out.join("Sign.g.rs")).unwrap(),
            "pub enum Sign {}\n"
        );
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Sign.g.rs");

        let writer = FileWriter::new(true);
        assert!(writer.is_dry_run());
        let result = writer.write(&path, "pub enum Sign {}\n").unwrap();

        assert!(!path.exists());
        match result {
            WriteResult::DryRun { content, path: target } => {
                assert_eq!(content, "pub enum Sign {}\n");
                assert_eq!(target, path);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_stale_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Fresh.g.rs"), "fresh").unwrap();
        std::fs::write(dir.path().join("Changed.g.rs"), "old").unwrap();

        let units = [
            unit("Fresh.g.rs", "fresh"),
            unit("Changed.g.rs", "new"),
            unit("Missing.g.rs", "missing"),
        ];
        let stale = stale_files(dir.path(), &units).unwrap();

        assert_eq!(
            stale,
            vec![
                StaleFile {
                    path: dir.path().join("Changed.g.rs"),
                    reason: Staleness::Changed,
                },
                StaleFile {
                    path: dir.path().join("Missing.g.rs"),
                    reason: Staleness::Missing,
                },
            ]
        );
    }
}
