//! Line editor integration.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::command;
use crate::session::Session;

/// Owns the session so tab completion always sees the current cursor.
pub struct ShellHelper {
    session: Session,
}

impl ShellHelper {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let suggestions = command::complete(&self.session, &line[..pos]);
        let completion = suggestions.completion;

        let pairs = match (completion.unique(), completion.terminator) {
            (Some(only), Some(terminator)) => vec![Pair {
                display: only.to_string(),
                replacement: format!("{}{}", only, terminator),
            }],
            _ => completion
                .candidates
                .into_iter()
                .map(|candidate| Pair {
                    display: candidate.clone(),
                    replacement: candidate,
                })
                .collect(),
        };
        Ok((suggestions.start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
