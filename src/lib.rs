//! # proj
//!
//! Find project directories inside a monorepo and pick one interactively.
//!
//! This library provides the pipeline behind the `proj` CLI: resolving the
//! search root, enumerating files, detecting marker files, running the
//! external chooser and emitting the selected path.

pub mod config;
pub mod emitter;
pub mod enumerate;
pub mod error;
pub mod picker;
pub mod project;
pub mod root;
pub mod scanner;
pub mod selector;
pub mod utils;
pub mod vcs;

pub use error::PickError;
pub use picker::Picker;
