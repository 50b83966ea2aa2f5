/// Ancestor chain for flat, line-oriented notations
///
/// Index `n` holds the open directory at depth `n`. Each detector call owns
/// its own stack; nothing is shared between parses.
#[derive(Debug, Default, Clone)]
pub struct PathStack {
    names: Vec<String>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name at `depth` and return its full relative path
    ///
    /// Pops back until at most `depth` ancestors remain, then pushes the name
    /// when it is a directory so later, deeper lines nest under it.
    pub fn enter(&mut self, depth: usize, name: &str, is_dir: bool) -> String {
        self.names.truncate(depth);

        let path = if self.names.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.names.join("/"), name)
        };

        if is_dir {
            self.names.push(name.to_string());
        }

        path
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Whitespace unit used by the indented notation, fixed per document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentUnit {
    /// One tab per level, stray spaces counted in groups of four
    Tabs,
    /// Groups of four spaces per level
    Spaces,
}

/// Spaces per depth level in the indented notation
pub const SPACES_PER_LEVEL: usize = 4;

impl IndentUnit {
    /// Tabs win if any line's leading whitespace contains one
    pub fn detect<S: AsRef<str>>(lines: &[S]) -> Self {
        let uses_tabs = lines
            .iter()
            .any(|line| leading_whitespace(line.as_ref()).contains('\t'));

        if uses_tabs {
            IndentUnit::Tabs
        } else {
            IndentUnit::Spaces
        }
    }

    pub fn depth_of(&self, line: &str) -> usize {
        let prefix = leading_whitespace(line);
        let spaces = prefix.chars().filter(|c| *c != '\t').count();

        match self {
            IndentUnit::Tabs => {
                let tabs = prefix.chars().filter(|c| *c == '\t').count();
                tabs + spaces / SPACES_PER_LEVEL
            }
            IndentUnit::Spaces => spaces / SPACES_PER_LEVEL,
        }
    }
}

pub(crate) fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}
