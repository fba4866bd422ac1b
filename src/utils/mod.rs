//! Utility functions and helpers.
//!
//! This module contains path helpers shared by the pipeline stages, such as
//! `PATH` lookup and root-relative labels.

pub mod path;

pub use path::{canonicalize_or_join, find_on_path, relative_label};
