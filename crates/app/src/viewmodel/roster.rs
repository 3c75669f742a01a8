//! Roster view model (data screen)

use std::io::Write;
use std::path::Path;

use rollcall_core::{Participant, Result};

use crate::state::AppState;

pub fn add(state: &mut AppState, text: &str, out: &mut impl Write) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let added = state.ingest(text);
    report_added(state, &added, out)
}

pub fn load(state: &mut AppState, path: &Path, out: &mut impl Write) -> Result<()> {
    let added = state.ingest_file(path)?;
    report_added(state, &added, out)
}

fn report_added(state: &AppState, added: &[Participant], out: &mut impl Write) -> Result<()> {
    if added.is_empty() {
        writeln!(out, "No new names; everyone is already on the list.")?;
        return Ok(());
    }

    let names: Vec<&str> = added.iter().map(|p| p.name.as_str()).collect();
    writeln!(
        out,
        "Added {}: {} ({} total)",
        added.len(),
        names.join(", "),
        state.roster().len()
    )?;
    Ok(())
}

pub fn list(state: &AppState, out: &mut impl Write) -> Result<()> {
    let roster = state.roster();
    writeln!(out, "Current list: {} people", roster.len())?;
    if roster.is_empty() {
        writeln!(out, "  (nobody yet; `add` names or `load` a file)")?;
        return Ok(());
    }

    let width = roster.len().to_string().len();
    for (index, p) in roster.participants().iter().enumerate() {
        writeln!(out, "  {:>width$}. {}  [{}]", index + 1, p.name, p.id.short())?;
    }
    Ok(())
}

pub fn remove(state: &mut AppState, key: &str, out: &mut impl Write) -> Result<()> {
    let removed = state.resolve(key).and_then(|id| state.remove(id));
    match removed {
        Some(p) => writeln!(out, "Removed {} ({} left)", p.name, state.roster().len())?,
        None => writeln!(out, "Nobody matches {key:?}")?,
    }
    Ok(())
}

pub fn clear(state: &mut AppState, out: &mut impl Write) -> Result<()> {
    let count = state.roster().len();
    state.clear_roster();
    writeln!(out, "Cleared {count} participants, winner history and groups.")?;
    Ok(())
}
