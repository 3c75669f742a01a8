//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::draw::WinnerSet;
use crate::models::Group;
use crate::roster::Roster;

/// Validate that every winner id still belongs to the roster
pub fn assert_winners_within_roster(winners: &WinnerSet, roster: &Roster) {
    if cfg!(debug_assertions) {
        let ids = roster.ids();
        debug_assert!(
            winners.iter().all(|id| ids.contains(id)),
            "Winner set holds {} ids not present in the roster",
            winners.iter().filter(|id| !ids.contains(id)).count()
        );
    }
}

/// Validate that a grouping result partitions the roster exactly
pub fn assert_partition_invariants(groups: &[Group], roster: &Roster, group_size: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    let total: usize = groups.iter().map(Group::len).sum();
    debug_assert_eq!(
        total,
        roster.len(),
        "Groups hold {} members but roster has {}",
        total,
        roster.len()
    );

    if let Some((last, full)) = groups.split_last() {
        debug_assert!(
            full.iter().all(|g| g.len() == group_size),
            "A non-final group does not have exactly {} members",
            group_size
        );
        debug_assert!(
            (1..=group_size).contains(&last.len()),
            "Last group has {} members, expected 1..={}",
            last.len(),
            group_size
        );
    }

    let mut seen = HashSet::new();
    for member in groups.iter().flat_map(|g| &g.members) {
        debug_assert!(
            seen.insert(member.id),
            "Participant {} appears in more than one group",
            member.id
        );
    }
}

/// Validate that no two roster entries share an id or a name
pub fn assert_roster_invariants(roster: &Roster) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for p in roster.participants() {
        debug_assert!(ids.insert(p.id), "Duplicate participant id {}", p.id);
        debug_assert!(
            names.insert(p.name.as_str()),
            "Duplicate participant name {:?}",
            p.name
        );
        debug_assert!(!p.name.trim().is_empty(), "Participant {} has empty name", p.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;

    fn make_roster() -> Roster {
        let mut roster = Roster::new();
        roster.ingest("A\nB\nC");
        roster
    }

    #[test]
    fn test_valid_roster() {
        assert_roster_invariants(&make_roster());
    }

    #[test]
    fn test_valid_partition() {
        let roster = make_roster();
        let p = roster.participants();
        let groups = vec![
            Group::new("Group 1".into(), vec![p[0].clone(), p[1].clone()]),
            Group::new("Group 2".into(), vec![p[2].clone()]),
        ];
        assert_partition_invariants(&groups, &roster, 2);
    }

    #[test]
    fn test_winners_within_roster() {
        let roster = make_roster();
        let winners: WinnerSet = [roster.participants()[0].id].into_iter().collect();
        assert_winners_within_roster(&winners, &roster);
    }

    #[test]
    #[should_panic(expected = "more than one group")]
    fn test_duplicate_member_detected() {
        let mut roster = Roster::new();
        roster.ingest("A\nB");
        let a = roster.participants()[0].clone();
        let groups = vec![
            Group::new("Group 1".into(), vec![a.clone()]),
            Group::new("Group 2".into(), vec![a]),
        ];
        assert_partition_invariants(&groups, &roster, 1);
    }

    #[test]
    #[should_panic(expected = "not present in the roster")]
    fn test_stale_winner_detected() {
        let roster = make_roster();
        let winners: WinnerSet = [Participant::new("Gone").id].into_iter().collect();
        assert_winners_within_roster(&winners, &roster);
    }
}
