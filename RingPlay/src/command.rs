//! Line commands typed by the user.
//!
//! Row numbers are the 1-based numbers printed by the renderer; they are
//! converted to 0-based playlist indices here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Dump,
    /// `play` resumes the current entry, `play N` selects row N.
    Play(Option<usize>),
    Pause,
    Stop,
    Next,
    Prev,
    Ended,
    Delete(usize),
    MoveUp(usize),
    MoveDown(usize),
    Add(Vec<PathBuf>),
    Title(String),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a row number (1, 2, ...)")]
    InvalidRow(String),
    #[error("unclosed quote")]
    UnclosedQuote,
}

pub const HELP: &str = "\
commands:
  list              show the queue
  dump              print the queue as JSON
  play [N]          play the current entry, or select row N
  pause | stop      transport controls
  next | prev       move to the next / previous entry (wraps around)
  ended             signal that the current media finished
  del N             remove row N
  up N | down N     swap row N with its neighbour
  add PATH...       add files or directories (quote names with spaces)
  title NAME        rename the playlist
  help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "list" | "ls" => Ok(Command::List),
            "dump" => Ok(Command::Dump),
            "play" | "select" if rest.is_empty() => Ok(Command::Play(None)),
            "play" | "select" => parse_row(rest).map(|i| Command::Play(Some(i))),
            "pause" => Ok(Command::Pause),
            "stop" => Ok(Command::Stop),
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "p" => Ok(Command::Prev),
            "ended" => Ok(Command::Ended),
            "del" | "delete" | "rm" => required(rest, "del").and_then(parse_row).map(Command::Delete),
            "up" => required(rest, "up").and_then(parse_row).map(Command::MoveUp),
            "down" => required(rest, "down").and_then(parse_row).map(Command::MoveDown),
            "add" => required(rest, "add")
                .and_then(split_paths)
                .map(|paths| Command::Add(paths.into_iter().map(PathBuf::from).collect())),
            "title" | "rename" => Ok(Command::Title(rest.to_string())),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

/// Splits on whitespace, keeping `"..."` and `'...'` groups together.
fn split_paths(arg: &str) -> Result<Vec<String>, ParseError> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut pending = false;

    for c in arg.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                pending = true;
            }
            None if c.is_whitespace() => {
                if pending {
                    paths.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            None => {
                current.push(c);
                pending = true;
            }
        }
    }

    if quote.is_some() {
        return Err(ParseError::UnclosedQuote);
    }
    if pending {
        paths.push(current);
    }
    Ok(paths)
}

fn parse_row(arg: &str) -> Result<usize, ParseError> {
    match arg.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(ParseError::InvalidRow(arg.to_string())),
    }
}
