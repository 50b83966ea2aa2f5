mod entry;
mod error;

#[cfg(test)]
mod tests;

pub use entry::{MaterializeReport, Outcome, Record};
pub use error::MaterializeError;

use crate::parser::Entry;
use crate::security::PathSanitizer;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Creates parsed entries as directories and empty files under a base path
pub struct Materializer {
    base: PathBuf,
}

impl Materializer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Create every entry in order, stopping at the first filesystem error
    ///
    /// Directory creation is idempotent and existing files are never
    /// overwritten. Entries created before a failure stay on disk.
    pub fn materialize(&self, entries: &[Entry]) -> Result<MaterializeReport, MaterializeError> {
        let mut report = MaterializeReport::default();

        for entry in entries {
            let full_path = self.resolve(entry)?;

            let outcome = if entry.is_dir {
                Self::create_dir(&full_path)?
            } else {
                Self::create_file(&full_path)?
            };

            match outcome {
                Outcome::FileSkipped => warn!("{}: {}", outcome, full_path.display()),
                _ => debug!("{}: {}", outcome, full_path.display()),
            }
            report.push(full_path, outcome);
        }

        info!(
            "Materialized {} entries under {} ({} created)",
            report.len(),
            self.base.display(),
            report.created()
        );
        Ok(report)
    }

    /// Report what `materialize` would do without touching the filesystem
    ///
    /// Fails where `materialize` would: a file planned over a directory, or
    /// a directory planned over a file, whether on disk or earlier in the plan.
    pub fn plan(&self, entries: &[Entry]) -> Result<MaterializeReport, MaterializeError> {
        let mut report = MaterializeReport::default();
        // Full path -> whether it is planned as a directory
        let mut planned: HashMap<PathBuf, bool> = HashMap::new();

        for entry in entries {
            let full_path = self.resolve(entry)?;

            let existing = match planned.get(&full_path) {
                Some(is_dir) => Some(*is_dir),
                None if full_path.is_dir() => Some(true),
                None if full_path.exists() => Some(false),
                None => None,
            };

            let outcome = match (entry.is_dir, existing) {
                (true, Some(true)) => Outcome::DirectoryExisted,
                (true, None) => Outcome::DirectoryCreated,
                (false, Some(false)) => Outcome::FileSkipped,
                (false, None) => Outcome::FileCreated,
                (true, Some(false)) => {
                    return Err(occupied(full_path, "a file already occupies this directory path"));
                }
                (false, Some(true)) => {
                    return Err(occupied(full_path, "a directory already occupies this file path"));
                }
            };

            planned.insert(full_path.clone(), entry.is_dir);
            report.push(full_path, outcome);
        }

        Ok(report)
    }

    /// Validate the entry's relative path and join it onto the base
    fn resolve(&self, entry: &Entry) -> Result<PathBuf, MaterializeError> {
        let relative = PathSanitizer::sanitize(&entry.path)?;
        Ok(relative
            .split('/')
            .fold(self.base.clone(), |path, segment| path.join(segment)))
    }

    fn create_dir(path: &Path) -> Result<Outcome, MaterializeError> {
        if path.is_dir() {
            return Ok(Outcome::DirectoryExisted);
        }

        fs::create_dir_all(path).map_err(|source| MaterializeError::FilesystemFailure {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Outcome::DirectoryCreated)
    }

    fn create_file(path: &Path) -> Result<Outcome, MaterializeError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| MaterializeError::FilesystemFailure {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if path.is_dir() {
            return Err(occupied(
                path.to_path_buf(),
                "a directory already occupies this file path",
            ));
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(Outcome::FileCreated),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(Outcome::FileSkipped),
            Err(source) => Err(MaterializeError::FilesystemFailure {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// The entry's path is taken by something of the other kind
fn occupied(path: PathBuf, reason: &str) -> MaterializeError {
    MaterializeError::FilesystemFailure {
        path,
        source: std::io::Error::new(ErrorKind::AlreadyExists, reason.to_string()),
    }
}
