//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Config files and CLI flags name paths relative to the project root in
/// forward-slash form; conversion to a platform-native path happens only at
/// I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage. This
    /// happens on every platform, so on Unix a file name containing a literal
    /// `\` cannot be addressed through a `NormalizedPath`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        if self.inner.is_empty() {
            return Self {
                inner: segment_normalized,
            };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Resolve `path` against this path as a base directory.
    ///
    /// Absolute inputs (including Windows drive paths) are returned as-is.
    /// `path` goes through [`NormalizedPath::new`], so `\` is read as a
    /// separator: `gen\schema.rs` resolves to `<base>/gen/schema.rs`.
    pub fn resolve(&self, path: &str) -> Self {
        let candidate = Self::new(path);
        if candidate.is_absolute() {
            candidate
        } else {
            self.join(candidate.as_str())
        }
    }

    /// Whether the path is absolute, in either Unix or Windows form.
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        self.inner.starts_with('/')
            || (bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && &bytes[1..3] == b":/")
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_are_normalized() {
        let path = NormalizedPath::new("src\\autogen\\schema.rs");
        assert_eq!(path.as_str(), "src/autogen/schema.rs");
    }

    #[test]
    fn test_resolve_relative_against_root() {
        let root = NormalizedPath::new("/project");
        assert_eq!(
            root.resolve("scripts/schema.rs.pre").as_str(),
            "/project/scripts/schema.rs.pre"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute() {
        let root = NormalizedPath::new("/project");
        assert_eq!(root.resolve("/elsewhere/x.rs").as_str(), "/elsewhere/x.rs");
        assert_eq!(root.resolve("C:\\gen\\x.rs").as_str(), "C:/gen/x.rs");
    }

    #[test]
    fn test_extension() {
        assert_eq!(NormalizedPath::new("a/postprocess.toml").extension(), Some("toml"));
        assert_eq!(NormalizedPath::new("a/.hidden").extension(), None);
        assert_eq!(NormalizedPath::new("a/schema.rs.replace").extension(), Some("replace"));
    }

    #[test]
    fn test_resolve_reads_backslash_as_separator() {
        let root = NormalizedPath::new("/project");
        assert_eq!(root.resolve("gen\\schema.rs").as_str(), "/project/gen/schema.rs");
    }
}
