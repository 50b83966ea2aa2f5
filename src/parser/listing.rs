use super::{
    ClassifierRules, DetectedFormat, Detector, Entry, NameSanitizer, ParseError, ParseOutcome,
    SourceText,
};

/// Output in the style of `ls -R`: `dir:` headers followed by one name per line
///
/// ```text
/// .:
/// src
/// Cargo.toml
///
/// ./src:
/// main.rs
/// ```
pub struct ListingDetector;

impl Detector for ListingDetector {
    fn name(&self) -> &'static str {
        "filesystem-listing"
    }

    fn matches(&self, source: &SourceText) -> bool {
        source.lines().iter().any(|line| is_header(line))
    }

    fn is_optimistic(&self) -> bool {
        true
    }

    fn detect(
        &self,
        source: &SourceText,
        rules: &ClassifierRules,
    ) -> Result<ParseOutcome, ParseError> {
        let mut current: Option<String> = None;
        let mut entries = Vec::new();

        for line in source.lines() {
            if is_header(line) {
                let header = line.trim().trim_end_matches(':');
                let dir = header_path(header)?;
                if !dir.is_empty() {
                    entries.push(Entry::dir(dir.clone()));
                }
                current = Some(dir);
                continue;
            }

            let Some(context) = current.as_deref() else {
                return Err(ParseError::ListingRejected(format!(
                    "'{}' appears before any directory header",
                    line.trim()
                )));
            };

            // `ls -l` style summaries
            if line.trim_start().starts_with("total ") {
                continue;
            }

            let Some(name) = NameSanitizer::sanitize(line) else {
                continue;
            };
            if name.is_dot_segment() {
                continue;
            }

            let is_dir = rules.is_directory(&name);
            let path = if context.is_empty() {
                name.name
            } else {
                format!("{}/{}", context, name.name)
            };
            entries.push(Entry { path, is_dir });
        }

        Ok(ParseOutcome {
            format: DetectedFormat::FilesystemListing,
            entries,
        })
    }
}

fn is_header(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.len() > 1 && trimmed.ends_with(':')
}

/// Normalize a header to a relative path, `""` meaning the listing root
fn header_path(header: &str) -> Result<String, ParseError> {
    if header.starts_with('/') || header.starts_with('\\') || header.contains(":\\") {
        return Err(ParseError::ListingRejected(format!(
            "absolute header '{}'",
            header
        )));
    }

    let mut segments = Vec::new();
    for segment in header.split(['/', '\\']) {
        match segment.trim() {
            "" | "." => continue,
            ".." => {
                return Err(ParseError::ListingRejected(format!(
                    "header '{}' leaves the listing root",
                    header
                )));
            }
            other => segments.push(other),
        }
    }

    Ok(segments.join("/"))
}
