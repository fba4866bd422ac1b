//! Version-control queries.
//!
//! The pipeline only needs two answers from version control: the top-level
//! directory of the working tree containing a directory, and the list of files
//! under a root that are tracked or untracked-but-not-ignored. [`Vcs`] is the
//! seam; [`GitCli`] answers by shelling out to `git`.

use std::{
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

/// Read-only version-control queries used by root resolution and enumeration.
pub trait Vcs {
    /// Top-level directory of the working tree containing `cwd`, if any.
    fn toplevel(&self, cwd: &Path) -> Option<PathBuf>;

    /// Files under `root`, relative to it, honouring ignore rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be run or `root` is not inside a
    /// working tree.
    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;
}

/// [`Vcs`] backed by the `git` command-line tool.
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run<S: AsRef<OsStr>>(&self, cwd: Option<&Path>, args: &[S]) -> io::Result<Output> {
        let mut command = Command::new(&self.program);
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }

        let output = command
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        if output.status.success() {
            Ok(output)
        } else {
            let args: Vec<_> = args.iter().map(|a| a.as_ref().to_string_lossy()).collect();
            Err(io::Error::other(format!(
                "`{} {}` exited with {}",
                self.program,
                args.join(" "),
                output.status
            )))
        }
    }
}

impl Vcs for GitCli {
    fn toplevel(&self, cwd: &Path) -> Option<PathBuf> {
        let inside = self
            .run(Some(cwd), &["rev-parse", "--is-inside-work-tree"])
            .ok()?;
        if String::from_utf8_lossy(&inside.stdout).trim() != "true" {
            return None;
        }

        let top = self
            .run(Some(cwd), &["rev-parse", "--show-toplevel"])
            .ok()?;
        let top = String::from_utf8_lossy(&top.stdout).trim().to_string();

        (!top.is_empty()).then(|| PathBuf::from(top))
    }

    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let args = [
            OsStr::new("-C"),
            root.as_os_str(),
            OsStr::new("ls-files"),
            OsStr::new("-co"),
            OsStr::new("--exclude-standard"),
            OsStr::new("-z"),
        ];
        let output = self.run(None, &args)?;

        Ok(split_nul(&output.stdout))
    }
}

/// Split `-z` output into paths, dropping empty records.
fn split_nul(bytes: &[u8]) -> Vec<PathBuf> {
    bytes
        .split(|b| *b == 0)
        .filter(|record| !record.is_empty())
        .map(bytes_to_path)
        .collect()
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_nul_handles_awkward_names() {
        let files = split_nul(b"a/package.json\0dir with space/go.mod\0new\nline/Cargo.toml\0");

        assert_eq!(
            files,
            vec![
                PathBuf::from("a/package.json"),
                PathBuf::from("dir with space/go.mod"),
                PathBuf::from("new\nline/Cargo.toml"),
            ]
        );
    }

    #[test]
    fn test_split_nul_empty_output() {
        assert!(split_nul(b"").is_empty());
        assert!(split_nul(b"\0\0").is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_root_is_passed_through() {
        use std::os::unix::ffi::OsStrExt;

        let raw = b"/tmp/caf\xe9";
        let root = Path::new(OsStr::from_bytes(raw));

        // `echo` stands in for git and prints the arguments it was given.
        let files = GitCli::new("echo").list_files(root).unwrap();

        assert_eq!(files.len(), 1);
        let echoed = files[0].as_os_str().as_bytes();
        assert!(echoed.starts_with(b"-C "));
        assert!(echoed.windows(raw.len()).any(|w| w == raw));
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let git = GitCli::new("definitely-not-a-real-vcs-binary");

        assert!(git.list_files(tmp.path()).is_err());
        assert!(git.toplevel(tmp.path()).is_none());
    }
}
