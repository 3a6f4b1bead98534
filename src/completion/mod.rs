//! Tab completion for path arguments.
//!
//! Completion runs the parser and resolver over whatever has been typed so
//! far. The path argument is split at its last dot into a *prefix*, which must
//! already be a complete path, and a *reminder*, the segment being typed. The
//! prefix is resolved relative to the cursor to find the working context; the
//! reminder is then matched against the context's children, or, if it is an
//! open index expression like `hosts[ma`, against the positions and names of
//! the collection's elements.
//!
//! Completion never fails: anything that does not parse or resolve simply has
//! no candidates.
//!
//! # Example
//!
//! ```
//! use whatunga::completion::complete;
//! use whatunga::model::project::{Host, Project};
//! use whatunga::path::Path;
//!
//! let mut project = Project::new("demo", "1.0");
//! project.hosts.push(Host::named("master"));
//!
//! let completion = complete(&project, &Path::root(), "hos", "cd hos");
//! assert_eq!(completion.candidates, vec!["hosts"]);
//! assert_eq!(completion.terminator, Some('['));
//!
//! let completion = complete(&project, &Path::root(), "hosts[m", "cd hosts[m");
//! assert_eq!(completion.candidates, vec!["master"]);
//! assert_eq!(completion.terminator, Some(']'));
//! ```

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::model::schema::{children, elements, ModelObject, NodeKind, NodeRef};
use crate::path::{parse, resolve, Path};

lazy_static! {
    static ref OPEN_INDEX: Regex = Regex::new(r"^([A-Za-z0-9_-]+)\[([A-Za-z0-9_-]*)$").unwrap();
}

/// Completion candidates and the character to insert after a unique candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub candidates: Vec<String>,
    pub terminator: Option<char>,
}

impl Completion {
    pub fn new(candidates: Vec<String>, terminator: Option<char>) -> Self {
        Self {
            candidates,
            terminator,
        }
    }

    /// No candidates.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The single candidate, if exactly one remains.
    pub fn unique(&self) -> Option<&str> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

/// Completes the path argument of `line` relative to `cursor`.
///
/// `query` is the word under the cursor and `line` the command line up to the
/// cursor. With only the command typed, all children of the cursor node are
/// offered; otherwise the second token of `line` is completed.
pub fn complete(root: &dyn ModelObject, cursor: &Path, query: &str, line: &str) -> Completion {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [_] if query.is_empty() => match resolve(root, cursor) {
            Ok(node) => Completion::new(sorted_tags(node), None),
            Err(err) => {
                trace!("Cursor does not resolve: {}", err);
                Completion::none()
            }
        },
        [_, argument, ..] => complete_argument(root, cursor, argument),
        _ => Completion::none(),
    }
}

/// Where in `query` the text replaced by a candidate starts: after the last
/// dot, or after the bracket of an open index expression.
pub fn replace_start(query: &str) -> usize {
    let (_, reminder) = split_last_segment(query);
    let start = query.len() - reminder.len();
    match open_index(reminder) {
        Some((name, _)) => start + name.len() + 1,
        None => start,
    }
}

fn complete_argument(root: &dyn ModelObject, cursor: &Path, argument: &str) -> Completion {
    let (prefix, reminder) = split_last_segment(argument);

    let context = if prefix.is_empty() {
        cursor.clone()
    } else {
        match parse(prefix) {
            Ok(relative) => cursor.append(&relative),
            Err(err) => {
                trace!("No completion for unparsable prefix: {}", err);
                return Completion::none();
            }
        }
    };

    let node = match resolve(root, &context) {
        Ok(node) => node,
        Err(err) => {
            trace!("No completion for unresolvable prefix: {}", err);
            return Completion::none();
        }
    };

    match open_index(reminder) {
        Some((name, partial)) => complete_index(node, name, partial),
        None => complete_segment(node, reminder),
    }
}

/// Completes the text after `name[` with element positions and names.
fn complete_index(node: NodeRef<'_>, name: &str, partial: &str) -> Completion {
    let Some(NodeRef::Collection(collection)) = node.child(name) else {
        return Completion::none();
    };

    let digits_only = partial.bytes().all(|b| b.is_ascii_digit());
    let mut candidates: Vec<String> = Vec::new();

    if digits_only {
        candidates.extend(
            (0..collection.len())
                .map(|position| position.to_string())
                .filter(|position| position.starts_with(partial)),
        );
    }
    if partial.is_empty() || !digits_only {
        for element_name in elements(collection).filter_map(|element| element.name()) {
            if element_name.starts_with(partial) && !candidates.iter().any(|c| c == element_name) {
                candidates.push(element_name.to_string());
            }
        }
    }

    let terminator = (candidates.len() == 1).then_some(']');
    Completion::new(candidates, terminator)
}

/// Completes a plain segment against the children of `node`.
fn complete_segment(node: NodeRef<'_>, reminder: &str) -> Completion {
    let tags = children(node);

    if let Some((tag, kind)) = tags.get_key_value(reminder) {
        return Completion::new(vec![tag.to_string()], terminator(node, tag, *kind));
    }

    let mut matches: Vec<&str> = tags
        .keys()
        .copied()
        .filter(|tag| tag.starts_with(reminder))
        .collect();
    matches.sort_unstable();

    let terminator = match matches.as_slice() {
        [only] => tags.get(*only).and_then(|kind| terminator(node, only, *kind)),
        _ => None,
    };
    Completion::new(matches.into_iter().map(String::from).collect(), terminator)
}

/// The character that naturally follows a completed tag.
fn terminator(node: NodeRef<'_>, tag: &str, kind: NodeKind) -> Option<char> {
    match kind {
        NodeKind::Collection => Some('['),
        NodeKind::Scalar => Some(' '),
        NodeKind::Object => {
            let has_children = node
                .child(tag)
                .is_some_and(|child| !children(child).is_empty());
            Some(if has_children { '.' } else { ' ' })
        }
    }
}

fn sorted_tags(node: NodeRef<'_>) -> Vec<String> {
    let mut tags: Vec<String> = children(node).into_keys().map(String::from).collect();
    tags.sort_unstable();
    tags
}

/// Splits at the last dot not escaped by a backslash.
fn split_last_segment(token: &str) -> (&str, &str) {
    let dot = token
        .match_indices('.')
        .map(|(i, _)| i)
        .rev()
        .find(|&i| !token[..i].ends_with('\\'));
    match dot {
        Some(i) => (&token[..i], &token[i + 1..]),
        None => ("", token),
    }
}

/// Recognizes `name[partial` with the bracket still open.
fn open_index(reminder: &str) -> Option<(&str, &str)> {
    let groups = OPEN_INDEX.captures(reminder)?;
    Some((groups.get(1)?.as_str(), groups.get(2)?.as_str()))
}
