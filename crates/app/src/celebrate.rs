//! Winner celebration
//!
//! Fired once per settled draw. Fire-and-forget: prints a banner and logs
//! the event, nothing flows back into the draw engine.

use std::io::Write;

use rand::seq::SliceRandom;
use rollcall_core::Participant;

/// Pick a celebration line for the winner
pub fn celebration_message(name: &str) -> String {
    let mut rng = rand::thread_rng();

    let templates = [
        format!("Congratulations, {}!", name),
        format!("And the winner is... {}!", name),
        format!("{} takes it!", name),
        format!("Lucky day for {}!", name),
    ];
    templates
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| format!("Winner: {}", name))
}

/// Announce a winner on `out`
pub fn celebrate(out: &mut impl Write, winner: &Participant) {
    let message = celebration_message(&winner.name);
    let rule = "*".repeat(message.chars().count() + 8);

    tracing::info!(participant_id = %winner.id, name = %winner.name, "Celebrating winner");
    let _ = writeln!(out, "\n{rule}\n*** {message} ***\n{rule}");
}
