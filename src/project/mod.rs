//! Project candidates and their presentation.
//!
//! This module contains the data structures produced by the marker scan:
//! individual candidates and the sorted, deduplicated collection handed to the
//! chooser.
//!
//! ## Main Parts
//!
//! - [`Project`] - A directory containing at least one marker file
//! - [`Projects`] - The sorted candidate collection with its chooser records

#[allow(clippy::module_inception)]
pub mod project;
pub mod projects;

pub use project::Project;
pub use projects::{JsonOutput, Projects};
