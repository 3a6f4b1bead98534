//! Whatunga - an interactive shell for application server domain projects.
//!
//! A project is a tree of objects, collections and scalars. The shell walks it
//! with dot-separated path expressions like `hosts[master].servers[0]`, keeps a
//! current position that `cd` moves around, and completes paths on tab.
//!
//! The engine is split into:
//!
//! - [`model`] - the project schema and the borrowed node view over it
//! - [`path`] - parsing path expressions and resolving them against a project
//! - [`session`] - the navigation cursor over a shared project
//! - [`completion`] - tab completion candidates for partial paths
//! - [`file`], [`config`] and [`shell`] - persistence, settings and the REPL

pub mod completion;
pub mod config;
pub mod file;
pub mod model;
pub mod path;
pub mod session;
pub mod shell;
