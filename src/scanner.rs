//! Marker-based project detection.
//!
//! This module reduces the enumerated file list to the set of directories
//! that directly contain a marker file. Matching is by filename only; marker
//! contents are never read.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    config::MarkerSet, error::PickError, project::Projects, utils::canonicalize_or_join,
};

/// Detects project directories from a list of root-relative file paths.
pub struct Scanner {
    /// Filenames that mark a directory as a project root
    markers: MarkerSet,
}

impl Scanner {
    #[must_use]
    pub const fn new(markers: MarkerSet) -> Self {
        Self { markers }
    }

    /// Canonical directories under `root` that contain a marker.
    ///
    /// Several markers in one directory collapse to a single entry. A marker
    /// directly in the root yields the root itself.
    #[must_use]
    pub fn project_dirs(&self, files: &[PathBuf], root: &Path) -> HashSet<PathBuf> {
        files
            .iter()
            .filter(|file| self.is_marker(file))
            .map(|file| {
                let dir = file.parent().unwrap_or_else(|| Path::new(""));
                canonicalize_or_join(root, dir)
            })
            .collect()
    }

    /// Scan `files` and return the sorted candidates.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::NoProjectsFound`] if no file is a marker.
    pub fn scan(&self, files: &[PathBuf], root: &Path) -> Result<Projects, PickError> {
        let dirs = self.project_dirs(files, root);

        if dirs.is_empty() {
            return Err(PickError::NoProjectsFound(root.display().to_string()));
        }

        Ok(Projects::from_dirs(dirs, root))
    }

    fn is_marker(&self, file: &Path) -> bool {
        file.file_name()
            .is_some_and(|name| self.markers.contains(name))
    }
}
