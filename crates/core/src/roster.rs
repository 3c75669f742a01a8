//! Roster store
//!
//! Holds the canonical, deduplicated, ordered participant list. Names are
//! ingested from free text (one per line, commas also separate names) and
//! deduplicated by exact match at ingestion time only.

use std::collections::HashSet;

use crate::invariants::assert_roster_invariants;
use crate::models::{Participant, ParticipantId};

/// Split raw text into candidate names.
///
/// Lines are split on `\n` (a trailing `\r` is trimmed with the rest of the
/// whitespace), then on commas. Empty fragments are dropped.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ordered participant list
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw` and append every name not already present.
    ///
    /// Returns only the newly added participants. An empty result means the
    /// roster is unchanged.
    pub fn ingest(&mut self, raw: &str) -> Vec<Participant> {
        let mut known: HashSet<String> =
            self.participants.iter().map(|p| p.name.clone()).collect();
        let mut added = Vec::new();

        for name in parse_names(raw) {
            if known.contains(&name) {
                tracing::trace!(name = %name, "Skipping duplicate name");
                continue;
            }
            known.insert(name.clone());
            added.push(Participant::new(name));
        }

        self.participants.extend(added.iter().cloned());
        assert_roster_invariants(self);
        tracing::debug!(
            added = added.len(),
            total = self.participants.len(),
            "Ingested participants"
        );
        added
    }

    /// Remove a participant by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: ParticipantId) -> Option<Participant> {
        let index = self.participants.iter().position(|p| p.id == id)?;
        let removed = self.participants.remove(index);
        tracing::debug!(participant_id = %id, name = %removed.name, "Removed participant");
        Some(removed)
    }

    /// Drop every participant
    pub fn clear(&mut self) {
        tracing::debug!(count = self.participants.len(), "Cleared roster");
        self.participants.clear();
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }

    pub fn ids(&self) -> HashSet<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
