//! Shell sessions over a shared project document.
//!
//! A `Session` owns one navigation cursor and a handle to the project it
//! navigates. Several sessions may share one project; each keeps its own
//! cursor. The project sits behind a single read/write lock: navigation takes
//! the write side so it is serialised with any command that changes the
//! document, while resolving and completing only read.
//!
//! # Example
//!
//! ```
//! use whatunga::model::project::Project;
//! use whatunga::session::{cursor::NavTarget, share, Session};
//!
//! let project = share(Project::new("demo", "1.0"));
//! let mut first = Session::new(project.clone());
//! let second = Session::new(project);
//!
//! first.navigate(&NavTarget::from_arg("config").unwrap()).unwrap();
//! assert_eq!(first.current().to_string(), "config");
//! assert!(second.current().is_empty());
//! ```

pub mod cursor;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::completion::{self, Completion};
use crate::model::project::Project;
use crate::model::schema::NodeRef;
use crate::path::{resolve, Path, PathError};
use cursor::{NavTarget, Navigator};

/// A project shared between sessions.
pub type SharedProject = Arc<RwLock<Project>>;

/// Wraps a project for sharing.
pub fn share(project: Project) -> SharedProject {
    Arc::new(RwLock::new(project))
}

#[derive(Debug, Clone)]
pub struct Session {
    project: SharedProject,
    navigator: Navigator,
}

impl Session {
    /// Starts a session at the root of `project`.
    pub fn new(project: SharedProject) -> Self {
        Self {
            project,
            navigator: Navigator::new(),
        }
    }

    pub fn project(&self) -> &SharedProject {
        &self.project
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The current cursor path.
    pub fn current(&self) -> &Path {
        self.navigator.current()
    }

    /// Moves the cursor. On error the cursor is unchanged.
    pub fn navigate(&mut self, target: &NavTarget) -> Result<(), PathError> {
        let project = self.project.write();
        self.navigator.apply(&*project, target)
    }

    /// Resolves an absolute path and hands the node to `f` while the project is locked.
    pub fn with_node<R>(
        &self,
        path: &Path,
        f: impl FnOnce(NodeRef<'_>) -> R,
    ) -> Result<R, PathError> {
        let project = self.project.read();
        let node = resolve(&*project, path)?;
        Ok(f(node))
    }

    /// Completes the path argument of `line` relative to the cursor.
    pub fn complete(&self, query: &str, line: &str) -> Completion {
        let project = self.project.read();
        completion::complete(&*project, self.navigator.current(), query, line)
    }
}
