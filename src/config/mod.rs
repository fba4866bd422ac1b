//! Configuration types and options for the application.
//!
//! This module contains the persistent config file, the marker set and the
//! fully resolved [`Settings`] a run is driven by.

pub mod file;
pub mod markers;
pub mod settings;

pub use file::FileConfig;
pub use markers::MarkerSet;
pub use settings::{ChooserOptions, OutputMode, Settings};
