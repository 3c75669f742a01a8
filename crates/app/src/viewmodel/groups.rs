//! Grouping view model (auto-group screen)

use std::io::Write;

use rollcall_core::{format_groups, Result};

use crate::clipboard::{copy_text, CopyOutcome};
use crate::state::AppState;

pub fn show_settings(state: &AppState, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Total: {} people  |  group size {}",
        state.roster().len(),
        state.group_size()
    )?;
    writeln!(out, "`group [n]` to shuffle into groups.")?;
    Ok(())
}

pub fn set_size(state: &mut AppState, size: i64, out: &mut impl Write) -> Result<()> {
    state.set_group_size(size);
    writeln!(out, "Group size: {size}")?;
    Ok(())
}

pub fn generate(state: &mut AppState, size: Option<i64>, out: &mut impl Write) -> Result<()> {
    if let Some(size) = size {
        state.set_group_size(size);
    }
    state.generate_groups()?;
    show(state, out)
}

pub fn show(state: &AppState, out: &mut impl Write) -> Result<()> {
    let groups = state.groups();
    if groups.is_empty() {
        writeln!(out, "No groups yet; run `group`.")?;
        return Ok(());
    }

    writeln!(out, "Result: {} groups", groups.len())?;
    for group in groups {
        writeln!(out, "\n{} ({} people)", group.name, group.len())?;
        for member in &group.members {
            writeln!(out, "  - {}", member.name)?;
        }
    }
    Ok(())
}

pub fn copy(state: &AppState, out: &mut impl Write) -> Result<()> {
    if state.groups().is_empty() {
        writeln!(out, "Nothing to copy; run `group` first.")?;
        return Ok(());
    }

    let text = format_groups(state.groups());
    match copy_text(&text) {
        CopyOutcome::Clipboard => writeln!(out, "Groups copied to the clipboard.")?,
        CopyOutcome::Unavailable => {
            writeln!(out, "No clipboard available; here is the text:\n")?;
            writeln!(out, "{text}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::{Error, Settings};

    fn state() -> AppState {
        let mut state = AppState::new(Settings::default(), Some(12));
        state.ingest("A\nB\nC\nD\nE\nF\nG");
        state
    }

    #[test]
    fn test_generate_prints_all_groups() {
        let mut state = state();
        let mut out = Vec::new();
        generate(&mut state, Some(3), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Result: 3 groups"));
        assert!(text.contains("Group 1 (3 people)"));
        assert!(text.contains("Group 3 (1 people)"));
        assert_eq!(text.matches("  - ").count(), 7);
    }

    #[test]
    fn test_generate_uses_default_size() {
        let mut state = state();
        let mut out = Vec::new();
        generate(&mut state, None, &mut out).unwrap();
        assert_eq!(state.groups().len(), 3);
    }

    #[test]
    fn test_invalid_size_keeps_prior_output() {
        let mut state = state();
        let mut out = Vec::new();
        generate(&mut state, Some(2), &mut out).unwrap();

        let result = generate(&mut state, Some(-1), &mut out);
        assert!(matches!(result, Err(Error::InvalidGroupSize(-1))));
        assert_eq!(state.groups().len(), 4);
    }
}
