//! The end-to-end pipeline.
//!
//! Root resolution, enumeration, marker scan, chooser session and emission
//! run strictly in that order. Every external effect goes through a trait
//! object supplied by the caller, so the whole run can be driven in tests
//! without `git`, `fzf` or an editor.

use std::io::Write;

use colored::Colorize;

use crate::{
    config::{OutputMode, Settings},
    emitter::{Emitter, Launcher},
    enumerate::FileList,
    error::PickError,
    project::JsonOutput,
    root::resolve_root,
    scanner::Scanner,
    selector::{Chooser, Selection},
    utils::find_on_path,
    vcs::Vcs,
};

/// Collaborators for one run.
pub struct Picker<'a, V: Vcs, C: Chooser, L: Launcher> {
    pub settings: &'a Settings,
    pub vcs: &'a V,
    pub chooser: &'a C,
    pub launcher: &'a L,
}

impl<V: Vcs, C: Chooser, L: Launcher> Picker<'_, V, C, L> {
    /// Run the pipeline, writing the result to `out`.
    ///
    /// In interactive mode `out` receives the chosen path and nothing else.
    ///
    /// # Errors
    ///
    /// Any [`PickError`]; nothing has been written to `out` when one is returned.
    pub fn run(&self, out: &mut impl Write) -> Result<(), PickError> {
        let settings = self.settings;

        let root = resolve_root(settings.root_override.as_deref(), &settings.cwd, self.vcs)?;
        self.note(format_args!("search root: {}", root.display()));

        let files = FileList::collect(self.vcs, &root, settings.verbose);
        self.note(format_args!("{} files from {}", files.len(), files.source));

        let projects = Scanner::new(settings.markers.clone()).scan(&files.files, &root)?;
        self.note(format_args!("{} projects", projects.len()));

        match settings.output {
            OutputMode::List => {
                writeln!(out, "{}", projects.records())?;
            }
            OutputMode::Json => {
                let output = JsonOutput::new(&root, &projects);
                serde_json::to_writer_pretty(&mut *out, &output).map_err(std::io::Error::from)?;
                writeln!(out)?;
            }
            OutputMode::Interactive => {
                let reply = self.chooser.choose(&projects.records())?;
                let selection = Selection::parse(&reply)?;

                let editor = find_on_path(&settings.editor, settings.search_path.as_deref());
                let launched = Emitter::new(editor, self.launcher).emit(out, &selection)?;
                if launched {
                    self.note(format_args!(
                        "opening {} with {}",
                        selection.path.display(),
                        settings.editor
                    ));
                }
            }
        }

        Ok(())
    }

    fn note(&self, message: std::fmt::Arguments<'_>) {
        if self.settings.verbose {
            eprintln!("{}", message.to_string().dimmed());
        }
    }
}
