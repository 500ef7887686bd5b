//! Glob-based exclusion of files from conversion
//!
//! Excluded files are still mirrored into the output, copied unchanged.

use std::path::Path;

use glob::Pattern;

/// A set of exclusion patterns
///
/// Patterns are matched against the path relative to the tree root (with
/// `/` separators) and against the bare file name. A pattern ending in `/`
/// excludes everything under a directory of that name.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<(String, Option<Pattern>)>,
}

impl ExcludeSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(Into::into)
            .map(|raw: String| {
                let compiled = match Pattern::new(&raw) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        tracing::warn!(pattern = %raw, error = %e, "invalid exclude glob");
                        None
                    }
                };
                (raw, compiled)
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check a path relative to the tree root
    pub fn matches(&self, relative: &Path) -> bool {
        let path_str = relative.to_string_lossy().replace('\\', "/");
        let file_name = relative.file_name().map(|n| n.to_string_lossy());

        for (raw, compiled) in &self.patterns {
            if let Some(pattern) = compiled {
                if pattern.matches(&path_str) {
                    return true;
                }
                if let Some(name) = &file_name {
                    if pattern.matches(name) {
                        return true;
                    }
                }
            }

            if raw.ends_with('/') {
                let dir = raw.trim_end_matches('/');
                if path_str.starts_with(&format!("{}/", dir))
                    || path_str.contains(&format!("/{}/", dir))
                {
                    return true;
                }
            }
        }

        false
    }
}
