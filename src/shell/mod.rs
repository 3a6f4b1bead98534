//! The interactive whatunga shell.
//!
//! Reads command lines with `rustyline`, runs them through the command table
//! and prints errors without leaving the loop. Tab completion is wired to the
//! completion engine through [`helper::ShellHelper`].

pub mod command;
pub mod helper;

use std::io;

use anyhow::{anyhow, Result};
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Editor};

use crate::config::Config;
use crate::session::Session;
use command::{Context, Flow};
use helper::ShellHelper;

/// The prompt for `session`: `[<name>:<version> @ <path>]> `, showing `/` at the root.
pub fn prompt(session: &Session) -> String {
    let project = session.project().read();
    let current = session.current();
    let location = if current.is_empty() {
        "/".to_string()
    } else {
        current.to_string()
    };
    format!("[{}:{} @ {}]> ", project.name, project.version, location)
}

/// Runs the shell until `exit` or end of input.
pub fn run(session: Session, config: &Config) -> Result<()> {
    let completion_type = if config.completion_list {
        CompletionType::List
    } else {
        CompletionType::Circular
    };
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.history_size)
        .map_err(|e| anyhow!("Invalid history size: {e}"))?
        .completion_type(completion_type)
        .auto_add_history(false)
        .build();

    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::with_config(editor_config)
        .map_err(|e| anyhow!("Failed to init line editor: {e}"))?;
    rl.set_helper(Some(ShellHelper::new(session)));

    let history = config.history_path();
    if let Some(path) = &history {
        if let Err(err) = rl.load_history(path) {
            debug!("No history loaded from {}: {}", path.display(), err);
        }
    }

    loop {
        let text = match rl.helper() {
            Some(helper) => prompt(helper.session()),
            None => break,
        };

        let line = match rl.readline(&text) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(anyhow!("Failed to read line: {e}")),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(err) = rl.add_history_entry(line) {
            warn!("Failed to record history: {}", err);
        }

        let Some(helper) = rl.helper_mut() else {
            break;
        };
        let mut stdout = io::stdout();
        let mut context = Context {
            session: helper.session_mut(),
            out: &mut stdout,
            indent_size: config.indent_size,
        };
        match command::execute(&mut context, line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => eprintln!("{}", err),
        }
    }

    if let Some(path) = &history {
        if let Err(err) = rl.save_history(path) {
            warn!("Failed to save history to {}: {}", path.display(), err);
        }
    }
    Ok(())
}
