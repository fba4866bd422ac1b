//! A single project candidate.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::utils::relative_label;

/// Separator between the label and the payload in a chooser record.
pub const FIELD_SEPARATOR: char = '\t';

/// Representation of a directory identified as a project root.
///
/// Identity is the canonical path; the label is derived from it and the
/// search root and is only used for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Path relative to the search root, `"."` for the root itself
    pub relative: String,

    /// Canonical absolute path of the directory
    pub path: PathBuf,
}

impl Project {
    /// Create a candidate for `path`, labelled relative to `root`.
    #[must_use]
    pub fn new(path: PathBuf, root: &Path) -> Self {
        Self {
            relative: relative_label(&path, root),
            path,
        }
    }

    /// The `relative<TAB>absolute` line fed to the chooser.
    #[must_use]
    pub fn record(&self) -> String {
        format!("{}{FIELD_SEPARATOR}{}", self.relative, self.path.display())
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.relative)
    }
}
