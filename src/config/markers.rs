//! Marker filenames that identify a project root.

use std::{collections::HashSet, ffi::OsStr};

/// Manifests recognised when no override is configured.
pub const DEFAULT_MARKERS: &[&str] = &[
    "package.json",
    "go.mod",
    "pyproject.toml",
    "Cargo.toml",
    "BUILD.bazel",
    "pom.xml",
    "setup.cfg",
];

/// Unordered set of marker filenames, matched against the final path component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSet(HashSet<String>);

impl Default for MarkerSet {
    fn default() -> Self {
        DEFAULT_MARKERS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl MarkerSet {
    /// Parse a whitespace-separated list such as `"Cargo.toml  go.mod"`.
    ///
    /// A blank list yields an empty set, which matches nothing.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        list.split_whitespace().collect()
    }

    /// Whether `file_name` is one of the markers.
    ///
    /// Names that are not valid UTF-8 never match.
    #[must_use]
    pub fn contains(&self, file_name: &OsStr) -> bool {
        file_name.to_str().is_some_and(|name| self.0.contains(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let markers = MarkerSet::default();

        assert_eq!(markers.len(), DEFAULT_MARKERS.len());
        assert!(markers.contains(OsStr::new("Cargo.toml")));
        assert!(markers.contains(OsStr::new("BUILD.bazel")));
        assert!(!markers.contains(OsStr::new("Makefile")));
    }

    #[test]
    fn test_parse_splits_on_any_whitespace() {
        let markers = MarkerSet::parse(" deno.json\tmix.exs\n  Gemfile ");

        assert_eq!(markers.len(), 3);
        assert!(markers.contains(OsStr::new("mix.exs")));
        assert!(!markers.contains(OsStr::new("package.json")));
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let markers = MarkerSet::parse("go.mod go.mod");
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn test_parse_blank_is_empty() {
        let markers = MarkerSet::parse("   \n");

        assert!(markers.is_empty());
        assert!(!markers.contains(OsStr::new("Cargo.toml")));
        assert!(MarkerSet::parse("").is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let markers = MarkerSet::default();
        assert!(!markers.contains(OsStr::new("cargo.toml")));
    }
}
