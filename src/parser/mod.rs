mod classify;
mod error;
mod fallback;
mod listing;
mod markdown;
mod registry;
mod result;
mod sanitize;
mod stack;
mod structured;


pub use classify::{ClassifierRules, RulesError};
pub use error::ParseError;
pub use fallback::FallbackDetector;
pub use listing::ListingDetector;
pub use markdown::MarkdownDetector;
pub use registry::DetectorRegistry;
pub use result::{DetectedFormat, Entry, ParseOutcome, SourceText};
pub use sanitize::{NameSanitizer, SanitizedName};
pub use stack::{IndentUnit, PathStack};
pub use structured::StructuredDetector;

use crate::security::PathSanitizer;

/// Core trait that all format detectors implement
pub trait Detector: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Cheap predicate deciding whether this detector should run
    fn matches(&self, source: &SourceText) -> bool;

    /// Convert the source into ordered entries
    ///
    /// # Arguments
    /// * `source` - Non-blank input lines
    /// * `rules` - File/directory classification tables
    fn detect(
        &self,
        source: &SourceText,
        rules: &ClassifierRules,
    ) -> Result<ParseOutcome, ParseError>;

    /// Optimistic detectors hand over to the next candidate on error
    fn is_optimistic(&self) -> bool {
        false
    }
}

/// Registry plus classification tables, ready to parse any notation
#[derive(Default)]
pub struct StructureParser {
    registry: DetectorRegistry,
    rules: ClassifierRules,
}

impl StructureParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ClassifierRules) -> Self {
        Self {
            registry: DetectorRegistry::new(),
            rules,
        }
    }

    pub fn with_registry(registry: DetectorRegistry, rules: ClassifierRules) -> Self {
        Self { registry, rules }
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// Parse raw lines (without trailing newlines) into ordered entries
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<ParseOutcome, ParseError> {
        let source = SourceText::from_lines(lines);
        self.registry.dispatch(&source, &self.rules)
    }

    /// Parse a whole text blob
    pub fn parse_text(&self, text: &str) -> Result<ParseOutcome, ParseError> {
        self.registry.dispatch(&SourceText::from_text(text), &self.rules)
    }

    /// Pre-flight check without touching the filesystem
    pub fn validate<S: AsRef<str>>(&self, lines: &[S]) -> Validation {
        let outcome = match self.parse(lines) {
            Ok(outcome) => outcome,
            Err(err) => return Validation::invalid(err.to_string()),
        };

        for entry in &outcome.entries {
            if let Err(err) = PathSanitizer::sanitize(&entry.path) {
                return Validation::invalid(format!("Unsafe entry '{}': {}", entry.path, err));
            }
        }

        Validation {
            valid: true,
            diagnostic: format!(
                "Valid {} structure: {} directories, {} files",
                outcome.format,
                outcome.directory_count(),
                outcome.file_count()
            ),
        }
    }
}

/// Outcome of a pre-flight check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// Human-readable summary or the reason the input was rejected
    pub diagnostic: String,
}

impl Validation {
    fn invalid(diagnostic: String) -> Self {
        Self {
            valid: false,
            diagnostic,
        }
    }

    pub fn into_pair(self) -> (bool, String) {
        (self.valid, self.diagnostic)
    }
}

/// Parse lines with the default detectors and tables
pub fn parse_structure<S: AsRef<str>>(lines: &[S]) -> Result<ParseOutcome, ParseError> {
    StructureParser::new().parse(lines)
}

/// Validate lines with the default detectors and tables
pub fn validate_structure<S: AsRef<str>>(lines: &[S]) -> Validation {
    StructureParser::new().validate(lines)
}
