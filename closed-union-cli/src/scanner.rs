//! Source file discovery.
//!
//! Walks the input directory for `.rs` files, honoring `.gitignore` and an
//! optional glob filter. Files are visited in name order so every run sees
//! the same sequence.

use crate::error::{CliResult, ScanError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A discovered source file with its content.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,

    /// Path relative to the scan root, used to derive the module path.
    pub relative_path: PathBuf,

    pub content: String,
}

/// Scanner for discovering Rust source files.
#[derive(Debug)]
pub struct SourceScanner {
    root: PathBuf,
    filter: Option<glob::Pattern>,
}

impl SourceScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter: None,
        }
    }

    /// Only include files whose relative path matches `pattern`.
    pub fn with_filter(mut self, pattern: &str) -> Result<Self, ScanError> {
        let glob_pattern = glob::Pattern::new(pattern)
            .map_err(|e| ScanError::invalid_pattern(pattern, e.to_string()))?;
        self.filter = Some(glob_pattern);
        Ok(self)
    }

    /// Scan the directory. An empty result is not an error.
    pub fn scan(&self) -> CliResult<Vec<SourceFile>> {
        if !self.root.exists() {
            return Err(ScanError::not_found(self.root.clone()).into());
        }

        let mut files = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .hidden(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry.map_err(ScanError::Walk)?;
            let path = entry.path();

            if !path.is_file() || path.extension().map_or(true, |ext| ext != "rs") {
                continue;
            }

            let relative_path = self.relative_path(path);
            if let Some(ref pattern) = self.filter {
                if !pattern.matches_path(&relative_path) {
                    tracing::trace!(path = %relative_path.display(), "filtered out");
                    continue;
                }
            }

            let content = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

            files.push(SourceFile {
                path: path.to_path_buf(),
                relative_path,
                content,
            });
        }

        tracing::debug!(root = %self.root.display(), files = files.len(), "scanned sources");
        Ok(files)
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }
}
