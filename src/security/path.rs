use crate::materialize::MaterializeError;
use std::path::{Component, Path};

pub struct PathSanitizer;

impl PathSanitizer {
    /// Check a parsed relative path before it is joined onto the base path
    ///
    /// Rejects:
    /// - Directory traversal (../)
    /// - Absolute paths (/etc/passwd, C:\Windows)
    /// - Paths with no usable components
    ///
    /// Returns the normalized path with forward slashes.
    pub fn sanitize(raw_path: &str) -> Result<String, MaterializeError> {
        if raw_path.is_empty() {
            return Err(MaterializeError::UnsafePath("Empty path".to_string()));
        }

        let path = Path::new(raw_path);
        let mut components = Vec::new();

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(MaterializeError::UnsafePath(format!(
                        "Absolute path not allowed: {}",
                        raw_path
                    )));
                }
                Component::ParentDir => {
                    return Err(MaterializeError::UnsafePath(format!(
                        "Parent directory traversal not allowed: {}",
                        raw_path
                    )));
                }
                Component::CurDir => continue,
                Component::Normal(part) => {
                    let part_str = part.to_str().ok_or_else(|| {
                        MaterializeError::UnsafePath(format!("Invalid UTF-8 in path: {:?}", part))
                    })?;
                    components.push(part_str);
                }
            }
        }

        // Backslash separators only split on Windows; treat them the same
        // everywhere so a `..\` segment cannot slip through on Unix.
        if components
            .iter()
            .flat_map(|c| c.split('\\'))
            .any(|segment| segment == "..")
        {
            return Err(MaterializeError::UnsafePath(format!(
                "Parent directory traversal not allowed: {}",
                raw_path
            )));
        }

        if components.is_empty() {
            return Err(MaterializeError::UnsafePath(format!(
                "No valid components: {}",
                raw_path
            )));
        }

        Ok(components.join("/"))
    }
}
