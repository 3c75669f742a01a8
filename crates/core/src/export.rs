//! Export formatting for grouping results and session snapshots

use serde::Serialize;

use crate::error::Result;
use crate::models::{DrawRecord, Group, Participant};

/// Plain-text group listing used for the clipboard:
/// `"<name>:\n<member, member>"` per group, groups separated by a blank line.
pub fn format_groups(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|g| format!("{}:\n{}", g.name, g.member_names()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Read-only view of the session state
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub participants: &'a [Participant],
    pub history: &'a [DrawRecord],
    pub groups: &'a [Group],
}

impl Snapshot<'_> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
