//! Navigation cursor over the project model.
//!
//! The `Navigator` tracks the current path (where the user is) and the last
//! path (where the user was before the most recent move). The cursor only
//! changes after a move fully succeeds; a failed move leaves both paths as
//! they were.
//!
//! # Example
//!
//! ```
//! use whatunga::model::project::{Host, Project};
//! use whatunga::path::parse;
//! use whatunga::session::cursor::Navigator;
//!
//! let mut project = Project::new("demo", "1.0");
//! project.hosts.push(Host::named("master"));
//!
//! let mut navigator = Navigator::new();
//! navigator.enter(&project, &parse("hosts[master]").unwrap()).unwrap();
//! navigator.enter(&project, &parse("jvm").unwrap()).unwrap();
//! assert_eq!(navigator.current().to_string(), "hosts[master].jvm");
//!
//! navigator.up().unwrap();
//! assert_eq!(navigator.current().to_string(), "hosts[master]");
//!
//! navigator.swap().unwrap();
//! assert_eq!(navigator.current().to_string(), "hosts[master].jvm");
//! ```

use log::debug;

use crate::model::schema::ModelObject;
use crate::path::{parse, resolve, Path, PathError};

/// A navigation request as typed after `cd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// `..`
    Up,
    /// `/`
    Reset,
    /// `-`
    Swap,
    /// Any other argument, relative to the current path
    Enter(Path),
}

impl NavTarget {
    /// Maps the reserved spellings `..`, `/` and `-`; everything else is parsed as a path.
    pub fn from_arg(arg: &str) -> Result<Self, PathError> {
        Ok(match arg {
            ".." => NavTarget::Up,
            "/" => NavTarget::Reset,
            "-" => NavTarget::Swap,
            _ => NavTarget::Enter(parse(arg)?),
        })
    }
}

/// Current and previous position in the project model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Path,
    last: Option<Path>,
}

impl Navigator {
    /// Creates a navigator at the root with no history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// The path before the last successful move, if any move happened yet.
    pub fn last(&self) -> Option<&Path> {
        self.last.as_ref()
    }

    /// Moves to `current + relative` if that path resolves against `root`.
    pub fn enter(&mut self, root: &dyn ModelObject, relative: &Path) -> Result<(), PathError> {
        let candidate = self.current.append(relative);
        resolve(root, &candidate)?;
        self.commit(candidate);
        Ok(())
    }

    /// Moves one level up.
    pub fn up(&mut self) -> Result<(), PathError> {
        let parent = self.current.parent().ok_or(PathError::NavigationAtRoot)?;
        self.commit(parent);
        Ok(())
    }

    /// Moves back to the root.
    pub fn reset(&mut self) -> Result<(), PathError> {
        if self.current.is_empty() {
            return Err(PathError::NavigationAtRoot);
        }
        self.commit(Path::root());
        Ok(())
    }

    /// Exchanges the current and the last path.
    pub fn swap(&mut self) -> Result<(), PathError> {
        let last = self.last.take().ok_or(PathError::NoPreviousPath)?;
        self.commit(last);
        Ok(())
    }

    /// Dispatches a parsed `cd` argument.
    pub fn apply(&mut self, root: &dyn ModelObject, target: &NavTarget) -> Result<(), PathError> {
        match target {
            NavTarget::Up => self.up(),
            NavTarget::Reset => self.reset(),
            NavTarget::Swap => self.swap(),
            NavTarget::Enter(relative) => self.enter(root, relative),
        }
    }

    fn commit(&mut self, next: Path) {
        debug!("Navigating from \"{}\" to \"{}\"", self.current, next);
        self.last = Some(std::mem::replace(&mut self.current, next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert_eq!(NavTarget::from_arg("..").unwrap(), NavTarget::Up);
        assert_eq!(NavTarget::from_arg("/").unwrap(), NavTarget::Reset);
        assert_eq!(NavTarget::from_arg("-").unwrap(), NavTarget::Swap);
        assert_eq!(
            NavTarget::from_arg("config.templates").unwrap(),
            NavTarget::Enter(parse("config.templates").unwrap())
        );
        assert!(NavTarget::from_arg("...").is_err());
    }

    #[test]
    fn test_new_navigator_is_at_root_without_history() {
        let navigator = Navigator::new();
        assert!(navigator.current().is_empty());
        assert_eq!(navigator.last(), None);
    }

    #[test]
    fn test_up_at_root_fails() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.up(), Err(PathError::NavigationAtRoot));
        assert!(navigator.current().is_empty());
        assert_eq!(navigator.last(), None);
    }

    #[test]
    fn test_reset_at_root_fails() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.reset(), Err(PathError::NavigationAtRoot));
    }

    #[test]
    fn test_swap_without_history_fails() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.swap(), Err(PathError::NoPreviousPath));
        assert!(navigator.current().is_empty());
    }
}
