use super::{
    ClassifierRules, DetectedFormat, Detector, Entry, IndentUnit, NameSanitizer, ParseError,
    ParseOutcome, PathStack, SourceText,
};
use tracing::trace;

/// Branch markers that precede a name in `tree` output
const BRANCH_MARKERS: [&str; 4] = ["├──", "└──", "|--", "`--"];

/// Vertical connectors; a line made only of these carries no name
const BARS: [char; 2] = ['│', '|'];

/// Columns per level in tree drawings
const COLUMNS_PER_LEVEL: usize = 4;

/// Fallback for `tree` drawings and plain whitespace indentation
///
/// Always matches, so it sits at the end of every registry.
pub struct FallbackDetector;

impl Detector for FallbackDetector {
    fn name(&self) -> &'static str {
        "tree-or-indented"
    }

    fn matches(&self, _source: &SourceText) -> bool {
        true
    }

    fn detect(
        &self,
        source: &SourceText,
        rules: &ClassifierRules,
    ) -> Result<ParseOutcome, ParseError> {
        let unit = IndentUnit::detect(source.lines());
        let mut stack = PathStack::new();
        let mut entries = Vec::new();
        let mut saw_glyphs = false;

        for line in source.lines() {
            let (depth, raw_name) = if is_glyph_line(line) {
                saw_glyphs = true;
                match split_branch(line) {
                    Some(parts) => parts,
                    None => {
                        trace!("skipping connector-only line {:?}", line);
                        continue;
                    }
                }
            } else {
                (unit.depth_of(line), line.trim())
            };

            let Some(name) = NameSanitizer::sanitize(raw_name) else {
                continue;
            };
            // `tree` prints the root as a lone dot
            if name.is_dot_segment() {
                continue;
            }

            let is_dir = rules.is_directory(&name);
            let path = stack.enter(depth, &name.name, is_dir);
            entries.push(Entry { path, is_dir });
        }

        if entries.is_empty() {
            return Err(ParseError::FormatUnrecognized(
                "no directory or file names found in the input".to_string(),
            ));
        }

        let format = if saw_glyphs {
            DetectedFormat::TreeGlyph
        } else {
            DetectedFormat::Indented
        };

        Ok(ParseOutcome { format, entries })
    }
}

pub(crate) fn is_glyph_line(line: &str) -> bool {
    line.contains('│')
        || BRANCH_MARKERS.iter().any(|m| line.contains(m))
        || line.trim_start().starts_with('|')
}

/// Locate the branch marker and return `(depth, name)` for a glyph line
///
/// Depth is one more than the drawing levels before the marker: every bar
/// counts as a level, and so does every four columns of blank padding (the
/// space left where a finished branch no longer draws its bar).
fn split_branch(line: &str) -> Option<(usize, &str)> {
    let (pos, marker) = BRANCH_MARKERS
        .iter()
        .filter_map(|m| line.find(m).map(|pos| (pos, *m)))
        .min_by_key(|(pos, _)| *pos)?;

    let prefix = &line[..pos];
    // Extra dashes belong to the marker only up to the first space
    let name = line[pos + marker.len()..]
        .trim_start_matches(['─', '-'])
        .trim_start_matches([' ', '\u{a0}']);

    Some((1 + prefix_levels(prefix), name.trim()))
}

fn prefix_levels(prefix: &str) -> usize {
    let mut levels = 0;
    let mut gap = 0;

    for c in prefix.chars() {
        if BARS.contains(&c) {
            levels += 1 + gap / COLUMNS_PER_LEVEL;
            gap = 0;
        } else if c == '\t' {
            gap += COLUMNS_PER_LEVEL;
        } else if c.is_whitespace() {
            gap += 1;
        }
    }

    levels + gap / COLUMNS_PER_LEVEL
}
