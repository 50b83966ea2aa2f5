use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// What happened to one entry during materialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    DirectoryCreated,
    DirectoryExisted,
    FileCreated,
    /// A file was already there and was left untouched
    FileSkipped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::DirectoryCreated => "Created directory",
            Outcome::DirectoryExisted => "Directory exists",
            Outcome::FileCreated => "Created file",
            Outcome::FileSkipped => "Skipped existing file",
        };
        f.write_str(label)
    }
}

/// Outcome for a single entry, keyed by its full path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Ordered per-entry results of one materialization run
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaterializeReport {
    pub records: Vec<Record>,
}

impl MaterializeReport {
    pub(crate) fn push(&mut self, path: PathBuf, outcome: Outcome) {
        self.records.push(Record { path, outcome });
    }

    /// Number of records with the given outcome
    pub fn count(&self, outcome: Outcome) -> usize {
        self.records.iter().filter(|r| r.outcome == outcome).count()
    }

    pub fn created(&self) -> usize {
        self.count(Outcome::DirectoryCreated) + self.count(Outcome::FileCreated)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
