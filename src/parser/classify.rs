use super::sanitize::SanitizedName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Suffixes that always mark a file, including common dot-files
const DEFAULT_FILE_EXTENSIONS: &[&str] = &[
    // documents
    ".txt", ".md", ".rst", ".pdf", ".doc", ".docx", ".rtf", ".odt", ".csv", ".xls", ".xlsx",
    // code
    ".py", ".rs", ".js", ".jsx", ".ts", ".tsx", ".go", ".c", ".h", ".cpp", ".hpp", ".cc",
    ".java", ".kt", ".swift", ".rb", ".php", ".cs", ".scala", ".lua", ".sh", ".bash", ".ps1",
    ".bat", ".sql", ".r", ".dart", ".vue", ".svelte",
    // data and config
    ".json", ".yaml", ".yml", ".toml", ".ini", ".cfg", ".conf", ".env", ".lock", ".xml",
    ".proto", ".graphql",
    // markup and styles
    ".html", ".htm", ".css", ".scss", ".sass", ".less",
    // images
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".webp", ".bmp",
    // archives
    ".zip", ".tar", ".gz", ".tgz", ".bz2", ".xz", ".7z", ".rar",
    // dot-files
    ".gitignore", ".gitattributes", ".dockerignore", ".editorconfig", ".npmrc", ".nvmrc",
    ".prettierrc", ".eslintrc", ".babelrc",
];

/// Extension-less names conventionally used for files
const DEFAULT_WELL_KNOWN_FILES: &[&str] = &[
    "readme",
    "license",
    "changelog",
    "makefile",
    "dockerfile",
    "gemfile",
    "rakefile",
    "gulpfile",
    "gruntfile",
    "package-lock",
    "yarn",
];

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read rules file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rules file {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Lookup tables driving file/directory classification
///
/// Both tables are plain data so callers can extend them, either in code or
/// from a JSON rules file, without touching the detectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Lowercase suffixes with a leading dot (e.g. ".py", ".gitignore")
    pub file_extensions: BTreeSet<String>,
    /// Lowercase extension-less names that are files (e.g. "readme")
    pub well_known_files: BTreeSet<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            file_extensions: DEFAULT_FILE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            well_known_files: DEFAULT_WELL_KNOWN_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ClassifierRules {
    /// Tables with no entries at all; only the structural rules apply
    pub fn empty() -> Self {
        Self {
            file_extensions: BTreeSet::new(),
            well_known_files: BTreeSet::new(),
        }
    }

    /// Add a file extension, with or without its leading dot
    pub fn add_extension(&mut self, ext: &str) {
        let ext = ext.trim().to_lowercase();
        if ext.is_empty() {
            return;
        }
        if ext.starts_with('.') {
            self.file_extensions.insert(ext);
        } else {
            self.file_extensions.insert(format!(".{}", ext));
        }
    }

    pub fn add_well_known(&mut self, name: &str) {
        let name = name.trim().to_lowercase();
        if !name.is_empty() {
            self.well_known_files.insert(name);
        }
    }

    /// Merge another table set into this one
    pub fn extend(&mut self, other: &ClassifierRules) {
        for ext in &other.file_extensions {
            self.add_extension(ext);
        }
        for name in &other.well_known_files {
            self.add_well_known(name);
        }
    }

    /// Built-in tables plus the additions found in a JSON rules file
    pub fn from_json_file(path: &Path) -> Result<Self, RulesError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| RulesError::Invalid {
            path: display,
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        // Additions extend the built-in tables instead of replacing them
        #[derive(Deserialize)]
        struct Additions {
            #[serde(default)]
            file_extensions: Vec<String>,
            #[serde(default)]
            well_known_files: Vec<String>,
        }

        let additions: Additions = serde_json::from_str(text)?;
        let mut rules = Self::default();
        for ext in &additions.file_extensions {
            rules.add_extension(ext);
        }
        for name in &additions.well_known_files {
            rules.add_well_known(name);
        }
        Ok(rules)
    }

    /// Decide whether a sanitized name is a directory
    pub fn is_directory(&self, name: &SanitizedName) -> bool {
        if name.trailing_separator {
            return true;
        }
        !self.is_file_name(&name.name)
    }

    /// Extension and well-known-name checks, ignoring trailing separators
    pub fn is_file_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();

        if self
            .file_extensions
            .iter()
            .any(|ext| lower.ends_with(ext.as_str()))
        {
            return true;
        }

        if let Some(dot) = name.rfind('.') {
            if dot > 0 && dot + 1 < name.len() {
                return true;
            }
        }

        let stem = lower.split('.').next().unwrap_or(&lower);
        self.well_known_files.contains(&lower) || self.well_known_files.contains(stem)
    }
}
