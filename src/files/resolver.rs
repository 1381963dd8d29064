//! Request target to file path resolution.

use std::path::PathBuf;

use crate::error::ServeError;

/// A request target that passed the root check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Normalised path relative to the base directory, e.g. `doc/index.html`
    pub name: String,
    /// Path used for filesystem calls
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Resolver {
    base_dir: PathBuf,
    root: String,
    default_document: String,
}

impl Resolver {
    /// Creates a resolver. `root` gets a trailing `/` if it lacks one.
    pub fn new(base_dir: impl Into<PathBuf>, root: &str, default_document: &str) -> Self {
        let mut root = root.to_string();
        if !root.ends_with('/') {
            root.push('/');
        }

        Self {
            base_dir: base_dir.into(),
            root,
            default_document: default_document.to_string(),
        }
    }

    /// Maps a request target onto a resource beneath the root.
    ///
    /// The leading `/` is stripped and the empty path becomes the default
    /// document. The result must start with the root prefix before `.`/`..`
    /// segments are folded and stay at or beneath the root afterwards,
    /// otherwise the target is rejected without touching the filesystem.
    pub fn resolve(&self, target: &str) -> Result<Resource, ServeError> {
        let relative = target.strip_prefix('/').unwrap_or(target);
        let relative = if relative.is_empty() {
            self.default_document.as_str()
        } else {
            relative
        };

        if !relative.starts_with(&self.root) {
            return Err(ServeError::PathNotAllowed(target.to_string()));
        }

        let name = normalize(relative)
            .filter(|name| self.contains(name))
            .ok_or_else(|| ServeError::PathNotAllowed(target.to_string()))?;

        Ok(Resource {
            path: self.base_dir.join(&name),
            name,
        })
    }

    /// Whether a normalised name is the root directory or lies beneath it.
    fn contains(&self, name: &str) -> bool {
        name == self.root.trim_end_matches('/') || name.starts_with(&self.root)
    }
}

/// Folds `.`, `..` and empty segments. `None` if `..` climbs past the start.
fn normalize(path: &str) -> Option<String> {
    let mut segments = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            segment => segments.push(segment),
        }
    }

    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalize_folds_segments() {
        assert_eq!(normalize("doc/./a//b.html").as_deref(), Some("doc/a/b.html"));
        assert_eq!(normalize("doc/a/../b.html").as_deref(), Some("doc/b.html"));
        assert_eq!(normalize("doc/../../etc/passwd"), None);
    }
}
