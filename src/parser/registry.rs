use super::{
    ClassifierRules, Detector, FallbackDetector, ListingDetector, MarkdownDetector, ParseError,
    ParseOutcome, SourceText, StructuredDetector,
};
use tracing::debug;

/// Ordered chain of format detectors
///
/// Detectors are tried in registration order; the first whose predicate
/// matches runs. Optimistic detectors and detectors that find nothing hand
/// over to the next candidate. The fallback always runs last.
pub struct DetectorRegistry {
    /// Candidates, tried front to back
    chain: Vec<Box<dyn Detector>>,
    /// Tree/indentation parser used when nothing else claims the input
    fallback: Box<dyn Detector>,
}

impl DetectorRegistry {
    /// Registry with the built-in detectors in their standard order
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(StructuredDetector);
        registry.register(MarkdownDetector);
        registry.register(ListingDetector);
        registry
    }

    /// Registry holding only the fallback detector
    pub fn empty() -> Self {
        Self {
            chain: Vec::new(),
            fallback: Box::new(FallbackDetector),
        }
    }

    /// Append a detector after the existing ones, ahead of the fallback
    ///
    /// # Example
    /// ```ignore
    /// registry.register(MyOutlineDetector);
    /// ```
    pub fn register(&mut self, detector: impl Detector + 'static) {
        self.chain.push(Box::new(detector));
    }

    /// Run the first applicable detector over the source
    pub fn dispatch(
        &self,
        source: &SourceText,
        rules: &ClassifierRules,
    ) -> Result<ParseOutcome, ParseError> {
        if source.is_empty() {
            return Err(ParseError::InputEmpty);
        }

        for detector in self.chain.iter().chain(std::iter::once(&self.fallback)) {
            if !detector.matches(source) {
                continue;
            }
            debug!("trying detector {}", detector.name());

            match detector.detect(source, rules) {
                Ok(outcome) if !outcome.entries.is_empty() => {
                    debug!(
                        "detector {} produced {} entries as {}",
                        detector.name(),
                        outcome.entries.len(),
                        outcome.format
                    );
                    return Ok(outcome);
                }
                Ok(_) => {
                    debug!("detector {} found no entries, falling through", detector.name());
                }
                Err(err) if detector.is_optimistic() => {
                    debug!("detector {} declined: {}", detector.name(), err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(ParseError::FormatUnrecognized(
            "no detector produced any entries".to_string(),
        ))
    }

    /// Number of detectors ahead of the fallback
    pub fn detector_count(&self) -> usize {
        self.chain.len()
    }

    /// Detector names in dispatch order, fallback included
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.chain
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|d| d.name())
            .collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
