//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/proj/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by environment variables and CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > environment > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! root = "~/src/monorepo"
//! markers = ["Cargo.toml", "package.json", "go.mod"]
//! editor = "code"
//!
//! [chooser]
//! bin = "fzf"
//! prompt = "project> "
//! height = "40%"
//! preview_limit = 100
//! timeout_secs = 60
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Search root used when `MONOREPO_ROOT` is not set
    pub root: Option<PathBuf>,

    /// Marker filenames replacing the built-in list
    pub markers: Option<Vec<String>>,

    /// Editor launched on the augmented-action key
    pub editor: Option<String>,

    /// Chooser invocation options
    #[serde(default)]
    pub chooser: FileChooserConfig,
}

/// Chooser options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileChooserConfig {
    /// Chooser binary name or path
    pub bin: Option<String>,

    /// Prompt text shown in front of the query
    pub prompt: Option<String>,

    /// Height passed to `--height` (e.g. `"40%"`)
    pub height: Option<String>,

    /// Number of directory entries shown in the preview pane
    pub preview_limit: Option<usize>,

    /// Kill the chooser after this many seconds
    pub timeout_secs: Option<u64>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/proj/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("proj").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, returning defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
