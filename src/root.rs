//! Search root resolution.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::PickError, vcs::Vcs};

/// Determine the canonical directory to search.
///
/// An explicit override always wins and skips the version-control probe.
/// Otherwise the working tree containing `cwd` is asked for its top level.
/// Whichever value is chosen is canonicalized, following symlinks.
///
/// # Errors
///
/// - [`PickError::NoRootFound`] if there is no override and `cwd` is not
///   inside a working tree
/// - [`PickError::RootUnresolvable`] if the chosen path cannot be canonicalized
pub fn resolve_root(
    root_override: Option<&Path>,
    cwd: &Path,
    vcs: &impl Vcs,
) -> Result<PathBuf, PickError> {
    let chosen = match root_override {
        Some(path) => path.to_path_buf(),
        None => vcs.toplevel(cwd).ok_or(PickError::NoRootFound)?,
    };

    fs::canonicalize(&chosen).map_err(|source| PickError::RootUnresolvable {
        path: chosen,
        source,
    })
}
