//! File I/O for project documents.
//!
//! A project lives in a directory as `whatunga.json`. This module loads it from
//! disk and saves it back with atomic write operations and optional backups.

pub mod loader;
pub mod saver;

pub use loader::load_project;
pub use saver::save_project;
