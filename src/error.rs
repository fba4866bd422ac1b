//! Error taxonomy for a single picker run.
//!
//! Most of these terminate the run quietly: the wrapping shell function only
//! cares whether a path was printed. [`PickError::is_quiet`] tells the binary
//! which ones deserve a message on stderr.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can stop the pipeline before a path is emitted.
#[derive(Debug, Error)]
pub enum PickError {
    /// Neither an override nor version control produced a search root.
    #[error("Not in a git repository and MONOREPO_ROOT not set.")]
    NoRootFound,

    /// The chosen root does not exist or cannot be canonicalized.
    #[error("cannot resolve search root {}: {source}", .path.display())]
    RootUnresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The marker scan produced no candidates.
    #[error("no project markers found under {0}")]
    NoProjectsFound(String),

    /// The chooser was dismissed, exited non-zero, printed nothing or timed out.
    #[error("selection cancelled")]
    ChooserCancelled,

    /// The chooser could not be started at all.
    #[error("failed to start chooser `{bin}`: {source}")]
    ChooserSpawn {
        bin: String,
        #[source]
        source: io::Error,
    },

    /// The chooser output did not have the `key\nrelative\tabsolute` shape.
    #[error("malformed chooser output: {0}")]
    MalformedSelection(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PickError {
    /// Whether the run should end without printing anything to stderr.
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        !matches!(
            self,
            Self::NoRootFound
                | Self::RootUnresolvable { .. }
                | Self::ChooserSpawn { .. }
                | Self::Io(_)
        )
    }
}
