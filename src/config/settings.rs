//! Fully resolved settings for one run.
//!
//! Ambient state (environment variables, the working directory) is read once
//! by the binary and folded into a [`Settings`] value here; nothing below this
//! layer touches the process environment.

use std::{ffi::OsString, path::PathBuf, time::Duration};

use super::MarkerSet;

pub const DEFAULT_CHOOSER: &str = "fzf";
pub const DEFAULT_EDITOR: &str = "code";
pub const DEFAULT_PROMPT: &str = "project> ";
pub const DEFAULT_HEIGHT: &str = "40%";
pub const DEFAULT_PREVIEW_LIMIT: usize = 100;

/// How the candidate list is delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Hand the candidates to the chooser and print the selection
    #[default]
    Interactive,

    /// Print the tab-separated candidate records
    List,

    /// Print the candidates as a JSON document
    Json,
}

/// Options for the external chooser process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChooserOptions {
    /// Binary name or path, resolved against `PATH` before spawning
    pub bin: String,

    pub prompt: String,

    pub height: String,

    /// Entries listed by the preview command
    pub preview_limit: usize,

    /// `None` waits for the chooser indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ChooserOptions {
    fn default() -> Self {
        Self {
            bin: DEFAULT_CHOOSER.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            timeout: None,
        }
    }
}

/// Everything the pipeline needs, with every layer already applied.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Explicit search root; bypasses version-control detection when set
    pub root_override: Option<PathBuf>,

    /// Directory the version-control probe runs in
    pub cwd: PathBuf,

    pub markers: MarkerSet,

    pub chooser: ChooserOptions,

    /// Editor launched for the augmented-action key
    pub editor: String,

    /// Value of `PATH` used to resolve the chooser and the editor
    pub search_path: Option<OsString>,

    pub output: OutputMode,

    /// Print diagnostics to stderr
    pub verbose: bool,
}

impl Settings {
    /// Settings with every default applied, probing from `cwd`.
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            root_override: None,
            cwd,
            markers: MarkerSet::default(),
            chooser: ChooserOptions::default(),
            editor: DEFAULT_EDITOR.to_string(),
            search_path: None,
            output: OutputMode::default(),
            verbose: false,
        }
    }
}
