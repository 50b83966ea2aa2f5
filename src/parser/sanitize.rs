/// Markers that start a trailing comment on a name
const COMMENT_MARKERS: [&str; 3] = ["–", " #", " //"];

/// A cleaned name plus whether the raw token marked it as a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedName {
    pub name: String,
    /// Token ended with `/` or `\` once comments and quotes were removed
    pub trailing_separator: bool,
}

impl SanitizedName {
    /// `.` or `..`, which name the current or parent directory, never an entry
    pub fn is_dot_segment(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

pub struct NameSanitizer;

impl NameSanitizer {
    /// Clean a raw token, returning `None` when nothing usable remains
    pub fn sanitize(raw: &str) -> Option<SanitizedName> {
        let without_comment = Self::strip_comment(raw);
        let unquoted = Self::strip_quotes(without_comment.trim());
        let trailing_separator = unquoted.trim_end().ends_with(['/', '\\']);
        let name = unquoted
            .trim_end()
            .trim_end_matches(['/', '\\'])
            .trim()
            .to_string();

        if name.is_empty() {
            return None;
        }

        Some(SanitizedName {
            name,
            trailing_separator,
        })
    }

    /// Convenience for callers that only need the cleaned string
    pub fn clean(raw: &str) -> Option<String> {
        Self::sanitize(raw).map(|s| s.name)
    }

    fn strip_comment(raw: &str) -> &str {
        let cut = COMMENT_MARKERS
            .iter()
            .filter_map(|marker| raw.find(marker))
            .min();

        match cut {
            Some(idx) => raw[..idx].trim_end(),
            None => raw,
        }
    }

    fn strip_quotes(token: &str) -> &str {
        for quote in ['"', '\''] {
            if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
                return &token[1..token.len() - 1];
            }
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_untouched() {
        let s = NameSanitizer::sanitize("main.rs").unwrap();
        assert_eq!(s.name, "main.rs");
        assert!(!s.trailing_separator);
    }

    #[test]
    fn test_strips_hash_comment() {
        assert_eq!(
            NameSanitizer::clean("main.py   # entry point").as_deref(),
            Some("main.py")
        );
    }

    #[test]
    fn test_strips_slash_comment_and_en_dash() {
        assert_eq!(
            NameSanitizer::clean("index.ts // bootstrap").as_deref(),
            Some("index.ts")
        );
        assert_eq!(
            NameSanitizer::clean("utils/ – helpers").as_deref(),
            Some("utils")
        );
    }

    #[test]
    fn test_earliest_marker_wins() {
        assert_eq!(
            NameSanitizer::clean("a.txt // one # two").as_deref(),
            Some("a.txt")
        );
    }

    #[test]
    fn test_hash_without_space_is_kept() {
        assert_eq!(NameSanitizer::clean("c#").as_deref(), Some("c#"));
    }

    #[test]
    fn test_strips_one_layer_of_quotes() {
        assert_eq!(NameSanitizer::clean("\"my file.txt\"").as_deref(), Some("my file.txt"));
        assert_eq!(NameSanitizer::clean("'src'").as_deref(), Some("src"));
        assert_eq!(NameSanitizer::clean("\"'x'\"").as_deref(), Some("'x'"));
    }

    #[test]
    fn test_trailing_separator_detected() {
        let s = NameSanitizer::sanitize("node_modules/").unwrap();
        assert_eq!(s.name, "node_modules");
        assert!(s.trailing_separator);

        let s = NameSanitizer::sanitize("build\\").unwrap();
        assert_eq!(s.name, "build");
        assert!(s.trailing_separator);
    }

    #[test]
    fn test_trailing_separator_survives_comment_and_quotes() {
        let s = NameSanitizer::sanitize("\"src/\"  # sources").unwrap();
        assert_eq!(s.name, "src");
        assert!(s.trailing_separator);
    }

    #[test]
    fn test_dot_segments() {
        assert!(NameSanitizer::sanitize(".").unwrap().is_dot_segment());
        assert!(NameSanitizer::sanitize("../").unwrap().is_dot_segment());
        assert!(!NameSanitizer::sanitize(".env").unwrap().is_dot_segment());
        assert!(!NameSanitizer::sanitize("...").unwrap().is_dot_segment());
    }

    #[test]
    fn test_empty_results_are_discarded() {
        assert!(NameSanitizer::sanitize("").is_none());
        assert!(NameSanitizer::sanitize("   ").is_none());
        assert!(NameSanitizer::sanitize("/").is_none());
        assert!(NameSanitizer::sanitize("\"\"").is_none());
        assert!(NameSanitizer::sanitize(" # only a comment").is_none());
    }
}
