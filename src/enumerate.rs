//! File enumeration under the search root.
//!
//! Two strategies exist and exactly one runs per invocation: the
//! version-control listing, which honours ignore rules, and a plain directory
//! walk used only when the listing is unavailable. The decision is made
//! explicitly through [`Enumeration`] rather than by error propagation.

use std::{
    fmt::{Display, Formatter},
    io,
    path::{Path, PathBuf},
};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use crate::vcs::Vcs;

/// Directory never descended into by the fallback walk.
const VCS_METADATA_DIR: &str = ".git";

/// Outcome of asking version control for the file list.
#[derive(Debug)]
pub enum Enumeration {
    /// The listing succeeded; paths are relative to the root
    Listed(Vec<PathBuf>),

    /// The listing is unavailable and the walk has to be used
    FallbackNeeded(io::Error),
}

/// Which strategy produced a [`FileList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSource {
    Vcs,
    Walk,
}

impl Display for FileSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vcs => write!(f, "git ls-files"),
            Self::Walk => write!(f, "directory walk"),
        }
    }
}

/// Paths relative to the search root, gathered once per run.
#[derive(Debug)]
pub struct FileList {
    pub files: Vec<PathBuf>,
    pub source: FileSource,
}

/// Ask version control for tracked and untracked-but-not-ignored files.
pub fn try_vcs_listing(vcs: &impl Vcs, root: &Path) -> Enumeration {
    match vcs.list_files(root) {
        Ok(files) => Enumeration::Listed(files),
        Err(e) => Enumeration::FallbackNeeded(e),
    }
}

impl FileList {
    /// Enumerate files under `root`, falling back to a walk if needed.
    ///
    /// When `verbose` is set, the fallback reason and any unreadable
    /// directories are reported on stderr.
    pub fn collect(vcs: &impl Vcs, root: &Path, verbose: bool) -> Self {
        match try_vcs_listing(vcs, root) {
            Enumeration::Listed(files) => Self {
                files,
                source: FileSource::Vcs,
            },
            Enumeration::FallbackNeeded(reason) => {
                if verbose {
                    eprintln!(
                        "{} {reason}",
                        "Falling back to a directory walk:".yellow()
                    );
                }

                Self {
                    files: walk_files(root, verbose),
                    source: FileSource::Walk,
                }
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Recursively list every file under `root`, relative to it.
///
/// The `.git` directory is pruned before descent. Unreadable subtrees are
/// skipped. Ignore rules are not consulted.
#[must_use]
pub fn walk_files(root: &Path, verbose: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_vcs_metadata_dir(entry));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if is_file_like(&entry)
                    && let Ok(relative) = entry.path().strip_prefix(root)
                {
                    files.push(relative.to_path_buf());
                }
            }
            Err(e) => {
                if verbose {
                    eprintln!("{}", format!("Warning: {e}").red());
                }
            }
        }
    }

    files
}

fn is_vcs_metadata_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VCS_METADATA_DIR
}

/// Regular files, plus symlinks that do not point at a directory.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}
