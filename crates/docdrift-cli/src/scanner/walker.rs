//! Recursive file walker.
//!
//! Walks each root, skipping ignored directories, and collects files that
//! match the include globs and stay under the size cutoff. The result is
//! sorted so downstream output order never depends on directory iteration
//! order.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use super::ignores::IgnorePatterns;
use crate::errors::ScanError;

/// Walk parameters.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Include globs matched against file names. Defaults to `*.go`.
    pub patterns: Vec<String>,
    /// Files larger than this are skipped.
    pub max_file_size: u64,
    pub extra_ignored_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            patterns: vec!["*.go".to_string()],
            max_file_size: 2_000_000,
            extra_ignored_dirs: Vec::new(),
        }
    }
}

/// File discovery over a set of roots.
pub struct Scanner {
    options: ScanOptions,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &options.patterns {
            let glob = Glob::new(pattern).map_err(|e| ScanError::BadPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        let include_globs = builder.build().map_err(|e| ScanError::BadPattern {
            pattern: options.patterns.join(","),
            message: e.to_string(),
        })?;
        let ignores = IgnorePatterns::new(&options.extra_ignored_dirs);

        Ok(Self {
            options,
            ignores,
            include_globs,
        })
    }

    /// Collects matching files under all roots, sorted lexicographically.
    ///
    /// A root given explicitly must exist; a root that is itself a file is
    /// taken as-is regardless of the include globs.
    pub fn scan(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();
        for root in roots {
            if root.is_file() {
                files.push(root.clone());
            } else if root.is_dir() {
                self.walk_dir(root, &mut files);
            } else {
                return Err(ScanError::MissingRoot(root.clone()));
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();

            if path.is_dir() {
                if !self.ignores.is_ignored_dir(&name) {
                    self.walk_dir(&path, files);
                }
            } else if path.is_file() && self.include_globs.is_match(name.as_ref()) {
                match fs::metadata(&path) {
                    Ok(meta) if meta.len() > self.options.max_file_size => {
                        tracing::debug!(path = %path.display(), size = meta.len(), "skipping oversized file");
                    }
                    _ => files.push(path),
                }
            }
        }
    }
}
