use super::{
    ClassifierRules, DetectedFormat, Detector, Entry, NameSanitizer, ParseError, ParseOutcome,
    SourceText,
};
use serde_json::Value;
use tracing::debug;

/// Nested JSON mapping/sequence, with YAML flow syntax as a second chance
pub struct StructuredDetector;

impl Detector for StructuredDetector {
    fn name(&self) -> &'static str {
        "structured-document"
    }

    fn matches(&self, source: &SourceText) -> bool {
        let text = source.joined().trim_start();
        text.starts_with('{') || text.starts_with('[')
    }

    fn detect(
        &self,
        source: &SourceText,
        _rules: &ClassifierRules,
    ) -> Result<ParseOutcome, ParseError> {
        let document = Self::load(source.joined())?;
        let mut entries = Vec::new();
        walk(&document, "", &mut entries);

        // A parsed document is final: no other detector reads it as text
        if entries.is_empty() {
            return Err(ParseError::FormatUnrecognized(
                "structured document describes no entries".to_string(),
            ));
        }

        Ok(ParseOutcome {
            format: DetectedFormat::StructuredDocument,
            entries,
        })
    }
}

impl StructuredDetector {
    /// Parse as JSON, then as YAML; report the JSON error if both fail
    fn load(text: &str) -> Result<Value, ParseError> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Ok(value),
            Err(json_err) => {
                debug!("JSON parse failed ({}), retrying as YAML", json_err);
                serde_yaml::from_str::<Value>(text).map_err(|yaml_err| {
                    debug!("YAML parse failed: {}", yaml_err);
                    ParseError::StructuredDocumentMalformed(json_err.to_string())
                })
            }
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn walk(value: &Value, prefix: &str, entries: &mut Vec<Entry>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let Some(name) = NameSanitizer::clean(key) else {
                    continue;
                };
                let path = join(prefix, &name);

                if is_populated(child) {
                    entries.push(Entry::dir(path.clone()));
                    walk(child, &path, entries);
                    continue;
                }

                match child {
                    Value::Array(_) => entries.push(Entry::dir(path)),
                    // A string value names a single file inside `key`
                    Value::String(inner) if !inner.is_empty() && inner != key => {
                        match NameSanitizer::clean(inner) {
                            Some(file) => entries.push(Entry::file(join(&path, &file))),
                            None => entries.push(Entry::file(path)),
                        }
                    }
                    _ => entries.push(Entry::file(path)),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(raw) => {
                        let Some(name) = NameSanitizer::clean(raw) else {
                            continue;
                        };
                        let path = join(prefix, &name);
                        if name.contains('.') {
                            entries.push(Entry::file(path));
                        } else {
                            entries.push(Entry::dir(path));
                        }
                    }
                    other => walk(other, prefix, entries),
                }
            }
        }
        _ => {}
    }
}
