//! Collection management for project candidates.
//!
//! This module provides the `Projects` struct, which holds the deduplicated
//! candidates in their presentation order and renders them for the chooser,
//! for `--list` and for `--json`.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::Serialize;

use super::Project;

/// Candidates sorted lexicographically by canonical path.
///
/// Ordering compares the raw path strings rather than path components, so
/// `a-b` sorts before `a/c`, and does not depend on discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projects(Vec<Project>);

impl Projects {
    /// Build the sorted collection from a set of canonical directories.
    #[must_use]
    pub fn from_dirs(dirs: HashSet<PathBuf>, root: &Path) -> Self {
        let mut dirs: Vec<PathBuf> = dirs.into_iter().collect();
        dirs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        Self(dirs.into_iter().map(|dir| Project::new(dir, root)).collect())
    }

    /// One `relative<TAB>absolute` record per line, in presentation order.
    #[must_use]
    pub fn records(&self) -> String {
        self.0
            .iter()
            .map(Project::record)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.0
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

/// Document printed by `--json`.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub root: &'a Path,
    pub projects: &'a [Project],
}

impl<'a> JsonOutput<'a> {
    #[must_use]
    pub fn new(root: &'a Path, projects: &'a Projects) -> Self {
        Self {
            root,
            projects: projects.as_slice(),
        }
    }
}
