//! # proj
//!
//! Pick a project directory inside a monorepo and print its absolute path.
//!
//! The tool finds the git top-level (or `MONOREPO_ROOT`), lists its files,
//! treats every directory holding a marker file (`Cargo.toml`,
//! `package.json`, `go.mod`, ...) as a project and hands the list to `fzf`.
//! The picked path is printed on stdout, so a shell function can `cd` to it.
//!
//! ## Usage
//!
//! ```bash
//! # Shell integration
//! p() { local dir; dir="$(proj)" && cd "$dir"; }
//!
//! # Search a specific tree with custom markers
//! MONOREPO_ROOT=~/src/mono PROJECT_MARKERS="Cargo.toml mix.exs" proj
//!
//! # Non-interactive listing
//! proj --list
//! ```
//!
//! Pressing Tab instead of Enter in the chooser also opens the project in
//! the editor (`code` by default).

mod cli;

use std::{env, io, process::exit};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use proj::{
    PickError, Picker, config::FileConfig, emitter::DetachedLauncher, selector::FzfChooser,
    vcs::GitCli,
};

/// Entry point for the proj application.
///
/// Every failure exits with status 1, including a bad command line. Only
/// misconfiguration is reported on stderr; an empty scan, a cancelled chooser
/// or a malformed selection exit silently so the calling shell function
/// simply stays put.
fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // `--help` and `--version` come through here too, on stdout.
            let _ = err.print();
            exit(i32::from(err.use_stderr()));
        }
    };

    if let Err(err) = inner_main(args) {
        let quiet = err
            .downcast_ref::<PickError>()
            .is_some_and(PickError::is_quiet);

        if !quiet {
            eprintln!("{} {err}", "Error:".red());
        }

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Loads the persistent configuration file (if present)
/// 2. Captures the working directory and `PATH` into the run settings
/// 3. Runs the picker pipeline against git, fzf and the editor
///
/// # Errors
///
/// Returns the pipeline's [`PickError`], or an error if the working
/// directory cannot be determined.
fn inner_main(args: Cli) -> Result<()> {
    let file_config = match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    };

    let cwd = env::current_dir()?;
    let settings = args.settings(&file_config, cwd, env::var_os("PATH"));

    let chooser = FzfChooser::new(settings.chooser.clone(), settings.search_path.as_deref());
    let picker = Picker {
        settings: &settings,
        vcs: &GitCli::default(),
        chooser: &chooser,
        launcher: &DetachedLauncher,
    };

    let stdout = io::stdout();
    picker.run(&mut stdout.lock())?;

    Ok(())
}
