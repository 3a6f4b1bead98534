//! Shell commands.
//!
//! Every command is a row in [`COMMANDS`]: its name, a one-line description
//! for the `help` overview, a usage line, a longer help text and the action to
//! run. Actions write their output to the writer in [`Context`] so they can be
//! driven from tests as well as from the interactive shell.

use std::io::{self, Write};

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::completion::{self, Completion};
use crate::file::saver::write_pretty_json;
use crate::path::{parse, Path, PathError};
use crate::session::cursor::NavTarget;
use crate::session::Session;

/// Errors reported by shell commands. The shell prints them and carries on.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Path(#[from] PathError),

    #[error("Missing argument. Usage: {0}")]
    MissingArgument(&'static str),

    #[error("Too many arguments. Usage: {0}")]
    TooManyArguments(&'static str),

    #[error("Unknown command: \"{0}\"")]
    UnknownCommand(String),

    #[error("Unsupported argument \"{0}\". Usage: {1}")]
    UnsupportedArgument(String, &'static str),

    #[error("Unable to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Unable to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the shell does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything an action may touch.
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub out: &'a mut dyn Write,
    pub indent_size: usize,
}

type Action = fn(&mut Context<'_>, &[&str]) -> Result<Flow, CommandError>;

pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    action: Action,
}

impl Command {
    pub fn run(&self, context: &mut Context<'_>, args: &[&str]) -> Result<Flow, CommandError> {
        (self.action)(context, args)
    }
}

/// All commands, sorted by name.
pub static COMMANDS: &[Command] = &[
    Command {
        name: "cd",
        description: "Changes the current context to the specified path.",
        usage: "cd <path> | cd .. | cd / | cd -",
        help: r#"Changes the current context to the specified path. The path specifies
the name of an object in the project model like "config.templates.domain".

If the object is part of a collection you must use an index on the
collection. Both numeric and name based indices are supported:

    cd hosts[master].servers[4]

changes the current context to the fifth server of host "master".

    cd ..   goes up one level
    cd /    goes back to the root
    cd -    goes back to the previous context"#,
        action: cd,
    },
    Command {
        name: "exit",
        description: "Get out of here.",
        usage: "exit",
        help: "Get out of here.",
        action: exit,
    },
    Command {
        name: "help",
        description: "Displays this help message or prints detailed help on requested commands.",
        usage: "help [command]",
        help: "Displays this help message or prints detailed help on requested commands.",
        action: help,
    },
    Command {
        name: "ls",
        description: "Lists the model of the current context or specified path.",
        usage: "ls [path]",
        help: r#"Lists the model of the current context or specified path as JSON.
The path is relative to the current context; ".." and "/" are accepted.
"ls /" lists the whole project, also at the root."#,
        action: ls,
    },
    Command {
        name: "show",
        description: "Shows status information.",
        usage: "show config|source",
        help: r#"Shows status information:
    - config: Shows the project configuration.
    - source: Prints the complete project model."#,
        action: show,
    },
];

const SHOW_TOPICS: &[&str] = &["config", "source"];

/// Looks up a command by name.
pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Runs one command line.
pub fn execute(context: &mut Context<'_>, line: &str) -> Result<Flow, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((name, args)) = tokens.split_first() else {
        return Ok(Flow::Continue);
    };
    let command = find(name).ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
    debug!("Running {} with {:?}", command.name, args);
    command.run(context, args)
}

/// At most one argument.
fn optional_argument<'a>(args: &[&'a str], usage: &'static str) -> Result<Option<&'a str>, CommandError> {
    match args {
        [] => Ok(None),
        [arg] => Ok(Some(arg)),
        _ => Err(CommandError::TooManyArguments(usage)),
    }
}

/// Exactly one argument.
fn single_argument<'a>(args: &[&'a str], usage: &'static str) -> Result<&'a str, CommandError> {
    optional_argument(args, usage)?.ok_or(CommandError::MissingArgument(usage))
}

fn print_json(context: &mut Context<'_>, value: &Value) -> Result<(), CommandError> {
    write_pretty_json(&mut *context.out, value, context.indent_size)?;
    writeln!(context.out)?;
    Ok(())
}

fn cd(context: &mut Context<'_>, args: &[&str]) -> Result<Flow, CommandError> {
    let arg = single_argument(args, "cd <path> | cd .. | cd / | cd -")?;
    context.session.navigate(&NavTarget::from_arg(arg)?)?;
    Ok(Flow::Continue)
}

fn ls(context: &mut Context<'_>, args: &[&str]) -> Result<Flow, CommandError> {
    let current = context.session.current();
    let path: Path = match optional_argument(args, "ls [path]")? {
        None => current.clone(),
        Some("..") => current.parent().ok_or(PathError::NavigationAtRoot)?,
        Some("/") => Path::root(),
        Some(arg) => current.append(&parse(arg)?),
    };
    let value = context.session.with_node(&path, |node| node.to_json())?;
    print_json(context, &value)?;
    Ok(Flow::Continue)
}

fn show(context: &mut Context<'_>, args: &[&str]) -> Result<Flow, CommandError> {
    let usage = "show config|source";
    let topic = single_argument(args, usage)?;
    let value = {
        let project = context.session.project().read();
        match topic {
            "config" => serde_json::to_value(&project.config)?,
            "source" => serde_json::to_value(&*project)?,
            _ => return Err(CommandError::UnsupportedArgument(topic.to_string(), usage)),
        }
    };
    print_json(context, &value)?;
    Ok(Flow::Continue)
}

fn help(context: &mut Context<'_>, args: &[&str]) -> Result<Flow, CommandError> {
    match optional_argument(args, "help [command]")? {
        None => {
            writeln!(context.out, "Commands:\n")?;
            for command in COMMANDS {
                writeln!(context.out, "    {:<20}{}", command.name, command.description)?;
            }
            writeln!(context.out, "\nMore command help available using \"help <command>\"")?;
        }
        Some(name) => {
            let command = find(name).ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
            writeln!(context.out, "Usage: {}\n\n{}", command.usage, command.help)?;
        }
    }
    Ok(Flow::Continue)
}

fn exit(context: &mut Context<'_>, _args: &[&str]) -> Result<Flow, CommandError> {
    writeln!(context.out, "Haere rā")?;
    Ok(Flow::Exit)
}

/// Candidates for the word ending at the end of `line`.
///
/// `start` is the byte offset in `line` where the text replaced by a
/// candidate begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    pub start: usize,
    pub completion: Completion,
}

/// Completes the command line up to the cursor.
///
/// The first word completes command names. The argument of `cd` and `ls` is
/// completed as a path, `help` offers command names and `show` its topics.
pub fn complete(session: &Session, line: &str) -> Suggestions {
    let word_start = line
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let word = &line[word_start..];
    let preceding: Vec<&str> = line[..word_start].split_whitespace().collect();

    match preceding.as_slice() {
        [] => Suggestions {
            start: word_start,
            completion: matching(COMMANDS.iter().map(|command| command.name), word),
        },
        ["cd" | "ls"] => Suggestions {
            start: word_start + completion::replace_start(word),
            completion: session.complete(word, line),
        },
        ["help"] => Suggestions {
            start: word_start,
            completion: matching(COMMANDS.iter().map(|command| command.name), word),
        },
        ["show"] => Suggestions {
            start: word_start,
            completion: matching(SHOW_TOPICS.iter().copied(), word),
        },
        _ => Suggestions {
            start: word_start,
            completion: Completion::none(),
        },
    }
}

/// Words starting with `prefix`; a unique match is followed by a space.
fn matching<'a>(words: impl Iterator<Item = &'a str>, prefix: &str) -> Completion {
    let candidates: Vec<String> = words
        .filter(|word| word.starts_with(prefix))
        .map(String::from)
        .collect();
    let terminator = (candidates.len() == 1).then_some(' ');
    Completion::new(candidates, terminator)
}
