use super::{
    ClassifierRules, DetectedFormat, Detector, Entry, NameSanitizer, ParseError, ParseOutcome,
    PathStack, SourceText,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// `- item`, `* item` or `+ item`, capturing the indentation and the content
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)[-*+][ \t]+(\S.*)$").expect("valid bullet regex"));

static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]*)`").expect("valid code regex"));
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid strong regex"));
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("valid emphasis regex"));

/// Columns per nesting level in a bulleted list
const SPACES_PER_LEVEL: usize = 2;

/// Bulleted Markdown lists, two spaces per nesting level
pub struct MarkdownDetector;

impl Detector for MarkdownDetector {
    fn name(&self) -> &'static str {
        "markdown-list"
    }

    fn matches(&self, source: &SourceText) -> bool {
        source.lines().iter().any(|line| BULLET.is_match(line))
    }

    fn detect(
        &self,
        source: &SourceText,
        rules: &ClassifierRules,
    ) -> Result<ParseOutcome, ParseError> {
        let mut stack = PathStack::new();
        let mut entries = Vec::new();

        for line in source.lines() {
            // Headings and prose around the list are ignored
            let Some(caps) = BULLET.captures(line) else {
                continue;
            };

            let indent: usize = caps[1]
                .chars()
                .map(|c| if c == '\t' { SPACES_PER_LEVEL } else { 1 })
                .sum();
            let depth = indent / SPACES_PER_LEVEL;

            let content = strip_inline_markup(&caps[2]);
            let Some(name) = NameSanitizer::sanitize(&content) else {
                continue;
            };
            if name.is_dot_segment() {
                continue;
            }

            let is_dir = rules.is_directory(&name);
            let path = stack.enter(depth, &name.name, is_dir);
            entries.push(Entry { path, is_dir });
        }

        Ok(ParseOutcome {
            format: DetectedFormat::MarkdownList,
            entries,
        })
    }
}

/// Remove paired backticks, `**` and `*`, keeping the enclosed text
pub(crate) fn strip_inline_markup(text: &str) -> String {
    let text = CODE.replace_all(text, "$1");
    let text = STRONG.replace_all(&text, "$1");
    EMPHASIS.replace_all(&text, "$1").into_owned()
}
