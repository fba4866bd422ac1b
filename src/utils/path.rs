//! Path helpers.

use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Component, Path, PathBuf},
};

/// Locate an executable the way a shell would.
///
/// A name containing a path separator is checked as-is; a bare name is
/// searched for in every directory of `search_path` (usually `$PATH`).
/// Returns `None` if nothing executable is found.
#[must_use]
pub fn find_on_path(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    env::split_paths(search_path?)
        .map(|dir| dir.join(name))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    if fs::metadata(path).is_ok_and(|m| m.is_file()) {
        return true;
    }
    path.extension().is_none()
        && fs::metadata(path.with_extension("exe")).is_ok_and(|m| m.is_file())
}

/// Resolve `root/relative` to its canonical form.
///
/// When the directory itself is gone (for instance a tracked file whose
/// directory was removed from disk), the longest existing ancestor is
/// resolved and the missing components are appended to it, as `realpath -m`
/// does.
#[must_use]
pub fn canonicalize_or_join(root: &Path, relative: &Path) -> PathBuf {
    let joined = root.join(relative);

    let mut existing = joined.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(resolved) = fs::canonicalize(existing) {
            return missing
                .iter()
                .rev()
                .fold(resolved, |path, name| path.join(name));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    joined
}

/// Label for `path` relative to `root`, `"."` when they are the same directory.
///
/// Paths outside `root` get leading `..` components so that
/// `root.join(label)` still names the same directory.
#[must_use]
pub fn relative_label(path: &Path, root: &Path) -> String {
    let path: Vec<Component<'_>> = path.components().collect();
    let root: Vec<Component<'_>> = root.components().collect();

    let shared = path
        .iter()
        .zip(&root)
        .take_while(|(a, b)| a == b)
        .count();

    let mut label = PathBuf::new();
    for _ in shared..root.len() {
        label.push("..");
    }
    for component in &path[shared..] {
        label.push(component.as_os_str());
    }

    if label.as_os_str().is_empty() {
        ".".to_string()
    } else {
        label.to_string_lossy().into_owned()
    }
}
