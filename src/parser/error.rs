use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input is empty: no non-blank lines to parse")]
    InputEmpty,

    #[error("Could not recognize the structure format: {0}")]
    FormatUnrecognized(String),

    #[error("Malformed structured document: {0}")]
    StructuredDocumentMalformed(String),

    /// Raised by the optimistic listing detector; the dispatcher swallows it
    #[error("Not a filesystem listing: {0}")]
    ListingRejected(String),
}
