//! Delivery of the selected path.
//!
//! The path is the only thing ever written to stdout on success; the wrapping
//! shell function captures it verbatim as a `cd` target. Opening an editor is
//! a fire-and-forget extra that can never change that outcome.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::selector::Selection;

/// Starts a side process for a directory without waiting on it.
pub trait Launcher {
    /// Start `program` with `path` as its only argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn launch(&self, program: &Path, path: &Path) -> io::Result<()>;
}

/// [`Launcher`] that spawns a detached child with all streams discarded.
pub struct DetachedLauncher;

impl Launcher for DetachedLauncher {
    fn launch(&self, program: &Path, path: &Path) -> io::Result<()> {
        // The child is never waited on.
        Command::new(program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
    }
}

/// Writes the selection and triggers the optional editor launch.
pub struct Emitter<'a, L: Launcher> {
    /// Editor resolved on `PATH`; `None` disables the side action
    editor: Option<PathBuf>,
    launcher: &'a L,
}

impl<'a, L: Launcher> Emitter<'a, L> {
    #[must_use]
    pub const fn new(editor: Option<PathBuf>, launcher: &'a L) -> Self {
        Self { editor, launcher }
    }

    /// Print the selected path, then open it in the editor for the
    /// augmented-action key.
    ///
    /// Returns whether an editor launch was attempted. Launch failures are
    /// swallowed.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    pub fn emit(&self, out: &mut impl Write, selection: &Selection) -> io::Result<bool> {
        write_path(out, &selection.path)?;
        out.flush()?;

        if !selection.is_augmented() {
            return Ok(false);
        }

        let Some(editor) = &self.editor else {
            return Ok(false);
        };

        let _ = self.launcher.launch(editor, &selection.path);
        Ok(true)
    }
}

/// Write `path` followed by a newline, preserving non-UTF-8 bytes.
pub fn write_path(out: &mut impl Write, path: &Path) -> io::Result<()> {
    out.write_all(path.as_os_str().as_encoded_bytes())?;
    out.write_all(b"\n")
}
