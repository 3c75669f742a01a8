//! View models: turn shell commands into state changes and printed views

mod draw;
mod groups;
mod roster;

use std::io::Write;

use rollcall_core::{Error, Result};

use crate::command::{Command, HELP};
use crate::state::{AppState, Mode};

/// Whether the shell keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command against the state, printing its view to `out`
pub fn dispatch(state: &mut AppState, command: Command, out: &mut impl Write) -> Result<Flow> {
    if !on_screen(state, &command, out)? {
        return Ok(Flow::Continue);
    }

    match command {
        Command::Empty => {
            if state.draw_state().is_running() {
                draw::stop(state, out)?;
            }
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Status => status(state, out)?,
        Command::Quit => return Ok(Flow::Quit),
        Command::Mode(mode) => {
            state.set_mode(mode)?;
            writeln!(out, "Screen: {}", mode.as_str())?;
            match mode {
                Mode::Data => roster::list(state, out)?,
                Mode::Draw => draw::show(state, out)?,
                Mode::Group => groups::show_settings(state, out)?,
            }
        }
        Command::Export => writeln!(out, "{}", state.snapshot().to_json()?)?,

        Command::Add(text) => roster::add(state, &text, out)?,
        Command::Load(path) => roster::load(state, &path, out)?,
        Command::List => roster::list(state, out)?,
        Command::Remove(key) => roster::remove(state, &key, out)?,
        Command::Clear => roster::clear(state, out)?,

        Command::Start => draw::start(state, out)?,
        Command::Stop => draw::stop(state, out)?,
        Command::Repeats(allow) => draw::set_repeats(state, allow, out)?,
        Command::History => draw::history(state, out)?,
        Command::Reset => draw::reset(state, out)?,

        Command::Size(size) => groups::set_size(state, size, out)?,
        Command::Group(size) => groups::generate(state, size, out)?,
        Command::Groups => groups::show(state, out)?,
        Command::Copy => groups::copy(state, out)?,
    }
    Ok(Flow::Continue)
}

/// User-facing text for an error
pub fn notice(error: &Error) -> String {
    match error {
        Error::EmptyPool => {
            "No eligible participants! With repeats off, reset the history or add people."
                .to_string()
        }
        Error::EmptyRoster => {
            "No participants yet. Add some on the data screen first (`mode data`).".to_string()
        }
        Error::AlreadyRunning => "A draw is already running; `stop` it first.".to_string(),
        Error::NotRunning => "No draw is running; `start` one first.".to_string(),
        other => other.to_string(),
    }
}

/// Whether `command` may run on the current screen; prints a hint if not
pub fn on_screen(state: &AppState, command: &Command, out: &mut impl Write) -> Result<bool> {
    let Some(mode) = command.screen() else {
        return Ok(true);
    };
    if state.mode() == mode {
        return Ok(true);
    }
    writeln!(
        out,
        "That command belongs to the {0} screen: `mode {0}`",
        mode.as_str()
    )?;
    Ok(false)
}

fn status(state: &AppState, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Screen:        {}", state.mode().as_str())?;
    writeln!(out, "Participants:  {}", state.roster().len())?;
    writeln!(out, "Draw:          {}", state.draw_state().as_str())?;
    writeln!(out, "Repeats:       {}", on_off(state.allow_repeats()))?;
    writeln!(out, "Winners:       {}", state.history().len())?;
    writeln!(out, "Group size:    {}", state.group_size())?;
    writeln!(out, "Groups:        {}", state.groups().len())?;
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
