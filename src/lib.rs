// Public API exports
pub mod materialize;
pub mod parser;
pub mod security;

use std::path::Path;
use thiserror::Error;

// Re-export main types for convenience
pub use materialize::{MaterializeError, MaterializeReport, Materializer, Outcome, Record};
pub use security::PathSanitizer;

pub use parser::{
    parse_structure, validate_structure, ClassifierRules, DetectedFormat, Detector,
    DetectorRegistry, Entry, NameSanitizer, ParseError, ParseOutcome, PathStack, RulesError,
    SourceText, StructureParser, Validation,
};

/// Any failure while turning a structure description into files
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),
}

/// Parse `lines` and create the described tree under `base_path`
pub fn create_structure<S: AsRef<str>>(
    base_path: impl AsRef<Path>,
    lines: &[S],
) -> Result<MaterializeReport, Error> {
    let outcome = parse_structure(lines)?;
    let report = Materializer::new(base_path.as_ref()).materialize(&outcome.entries)?;
    Ok(report)
}
