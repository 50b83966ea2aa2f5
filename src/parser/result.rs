use serde::Serialize;
use std::fmt;

/// A single parsed path and whether it names a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Relative path, segments joined with `/` on every platform
    pub path: String,
    /// True for directories, false for empty placeholder files
    pub is_dir: bool,
}

impl Entry {
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    /// Iterate over the path segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Nesting depth, starting at 0 for top-level entries
    pub fn depth(&self) -> usize {
        self.segments().count().saturating_sub(1)
    }
}

/// Notation recognized in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectedFormat {
    /// JSON (or YAML flow syntax) nested mapping/sequence
    StructuredDocument,
    /// Bulleted Markdown list
    MarkdownList,
    /// `tree`-style drawing with box glyphs
    TreeGlyph,
    /// Plain whitespace indentation
    Indented,
    /// Recursive directory listing with `dir:` headers
    FilesystemListing,
}

impl DetectedFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedFormat::StructuredDocument => "structured-document",
            DetectedFormat::MarkdownList => "markdown-list",
            DetectedFormat::TreeGlyph => "tree-glyph",
            DetectedFormat::Indented => "indented",
            DetectedFormat::FilesystemListing => "filesystem-listing",
        }
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing one structure description
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    /// Notation the dispatcher settled on
    pub format: DetectedFormat,
    /// Entries in source order, ancestors before descendants
    pub entries: Vec<Entry>,
}

impl ParseOutcome {
    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir).count()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_dir).count()
    }

    /// Borrow the entries as `(path, is_dir)` pairs
    pub fn pairs(&self) -> Vec<(&str, bool)> {
        self.entries
            .iter()
            .map(|e| (e.path.as_str(), e.is_dir))
            .collect()
    }
}

/// Non-blank input lines plus their joined text
#[derive(Debug, Clone)]
pub struct SourceText {
    lines: Vec<String>,
    joined: String,
}

impl SourceText {
    /// Drop blank lines and stray carriage returns
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines: Vec<String> = lines
            .iter()
            .map(|l| l.as_ref().trim_end_matches(['\r', '\n']).to_string())
            .filter(|l| !l.trim().is_empty())
            .collect();
        let joined = lines.join("\n");

        Self { lines, joined }
    }

    /// Split a whole text blob into lines first
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn joined(&self) -> &str {
        &self.joined
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
