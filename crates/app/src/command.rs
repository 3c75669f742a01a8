//! Shell command parsing

use std::path::PathBuf;

use thiserror::Error;

use crate::state::Mode;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Mode(Mode),
    /// Names to add; empty means read a pasted block
    Add(String),
    Load(PathBuf),
    List,
    Remove(String),
    Clear,
    Start,
    Stop,
    Repeats(bool),
    History,
    Reset,
    Size(i64),
    Group(Option<i64>),
    Groups,
    Copy,
    Export,
    Quit,
    /// Blank line
    Empty,
}

pub const HELP: &str = "\
Commands:
  mode data|draw|group   switch screen (draw/group need participants)
  add [names]            add names (commas or one per line); no args reads
                         a pasted block ending with an empty line
  load <file>            add names from a text/CSV file
  list                   show the roster
  remove <n|id>          remove by list position or id prefix
  clear                  remove everyone (asks first)
  start                  start a draw (draw screen)
  stop                   pick the winner; an empty line also stops
  repeats on|off         allow a participant to win more than once
  history                show winners, most recent first
  reset                  clear the winner history (asks first)
  size <n>               set group size (group screen)
  group [n]              shuffle into groups (group screen)
  groups                 show the last grouping
  copy                   copy the grouping to the clipboard
  export                 print roster, history and groups as JSON
  status                 show current screen and settings
  quit                   exit";

/// Group size input: reads the leading integer ("3 people" is 3, "2.5" is 2);
/// text without one falls back to 1. Out-of-range digits saturate.
pub fn parse_group_size(arg: &str) -> i64 {
    let arg = arg.trim_start();
    let (negative, rest) = match arg.as_bytes().first() {
        Some(b'-') => (true, &arg[1..]),
        Some(b'+') => (false, &arg[1..]),
        _ => (false, arg),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 1;
    }

    let value = rest[..digits]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    if negative {
        -value
    } else {
        value
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "help" | "?" => Command::Help,
            "status" => Command::Status,
            "mode" => Command::Mode(
                Mode::parse(rest).ok_or(CommandError::Usage("mode data|draw|group"))?,
            ),
            "add" => Command::Add(rest.to_string()),
            "load" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("load <file>"));
                }
                Command::Load(PathBuf::from(rest))
            }
            "list" | "ls" => Command::List,
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("remove <n|id>"));
                }
                Command::Remove(rest.to_string())
            }
            "clear" => Command::Clear,
            "start" => Command::Start,
            "stop" => Command::Stop,
            "repeats" => match rest {
                "on" | "yes" | "true" => Command::Repeats(true),
                "off" | "no" | "false" => Command::Repeats(false),
                _ => return Err(CommandError::Usage("repeats on|off")),
            },
            "history" => Command::History,
            "reset" => Command::Reset,
            "size" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("size <n>"));
                }
                Command::Size(parse_group_size(rest))
            }
            "group" => Command::Group((!rest.is_empty()).then(|| parse_group_size(rest))),
            "groups" => Command::Groups,
            "copy" => Command::Copy,
            "export" => Command::Export,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }

    /// Screen a command is restricted to, if any
    pub fn screen(&self) -> Option<Mode> {
        match self {
            Command::Start
            | Command::Stop
            | Command::Repeats(_)
            | Command::History
            | Command::Reset => Some(Mode::Draw),
            Command::Size(_) | Command::Group(_) | Command::Groups | Command::Copy => {
                Some(Mode::Group)
            }
            _ => None,
        }
    }

    /// Destructive commands ask before running
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Command::Clear | Command::Reset)
    }
}

/// Whether a confirmation answer means yes
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
