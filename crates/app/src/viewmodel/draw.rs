//! Draw view model (lucky draw screen)

use std::io::Write;

use chrono::Local;
use rollcall_core::Result;

use crate::celebrate::celebrate;
use crate::state::AppState;

pub fn show(state: &AppState, out: &mut impl Write) -> Result<()> {
    writeln!(out, "LUCKY WINNER: {}", state.display())?;
    writeln!(
        out,
        "Eligible: {} of {}  |  repeats {}",
        state.eligible_count(),
        state.roster().len(),
        if state.allow_repeats() { "allowed" } else { "off" }
    )?;
    writeln!(out, "`start` to spin, `stop` or Enter to pick.")?;
    Ok(())
}

pub fn start(state: &mut AppState, out: &mut impl Write) -> Result<()> {
    let pool = state.start_draw()?;
    writeln!(out, "Spinning through {pool} names... press Enter to stop!")?;
    Ok(())
}

pub fn stop(state: &mut AppState, out: &mut impl Write) -> Result<()> {
    let record = state.stop_draw()?;
    writeln!(out)?;
    writeln!(out, "LUCKY WINNER: {}", record.participant.name)?;
    celebrate(out, &record.participant);
    Ok(())
}

pub fn set_repeats(state: &mut AppState, allow: bool, out: &mut impl Write) -> Result<()> {
    state.set_allow_repeats(allow);
    writeln!(
        out,
        "Repeat winners {} ({} eligible)",
        if allow { "allowed" } else { "off" },
        state.eligible_count()
    )?;
    Ok(())
}

pub fn history(state: &AppState, out: &mut impl Write) -> Result<()> {
    let history = state.history();
    writeln!(out, "Winners: {}", history.len())?;
    if history.is_empty() {
        writeln!(out, "  (no winners yet)")?;
        return Ok(());
    }

    for (index, record) in history.iter().enumerate() {
        writeln!(
            out,
            "  #{:<3} {}  {}",
            history.len() - index,
            record.participant.name,
            record.timestamp.with_timezone(&Local).format("%H:%M:%S")
        )?;
    }
    Ok(())
}

pub fn reset(state: &mut AppState, out: &mut impl Write) -> Result<()> {
    state.reset_history();
    writeln!(out, "Winner history cleared; everyone is eligible again.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::Settings;

    #[test]
    fn test_history_numbering_counts_down() {
        let mut state = AppState::new(Settings::default(), Some(5));
        state.ingest("A\nB\nC");
        for _ in 0..3 {
            state.start_draw().unwrap();
            state.stop_draw().unwrap();
        }

        let mut out = Vec::new();
        history(&state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Winners: 3");
        assert!(lines[1].trim_start().starts_with("#3"));
        assert!(lines[1].contains(&state.history()[0].participant.name));
        assert!(lines[3].trim_start().starts_with("#1"));
    }

    #[test]
    fn test_show_ready_placeholder() {
        let mut state = AppState::new(Settings::default(), Some(5));
        state.ingest("A");
        let mut out = Vec::new();
        show(&state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("LUCKY WINNER: Ready"));
        assert!(text.contains("Eligible: 1 of 1"));
    }
}
