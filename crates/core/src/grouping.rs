//! Grouping engine - shuffle the roster and cut it into fixed-size groups

use crate::error::{Error, Result};
use crate::invariants::assert_partition_invariants;
use crate::models::{Group, Participant};
use crate::random::RandomSource;
use crate::roster::Roster;

/// Default group label template; `{n}` is the 1-based ordinal
pub const DEFAULT_GROUP_LABEL: &str = "Group {n}";

/// Fisher-Yates shuffle of a copy of `items`
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.pick_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Render a group label from a template
pub fn group_label(template: &str, ordinal: usize) -> String {
    template.replace("{n}", &ordinal.to_string())
}

/// Cut `shuffled` into consecutive groups of `group_size`; the last group
/// takes the remainder.
pub fn partition(shuffled: Vec<Participant>, group_size: i64, label: &str) -> Result<Vec<Group>> {
    let size = usize::try_from(group_size)
        .ok()
        .filter(|size| *size >= 1)
        .ok_or(Error::InvalidGroupSize(group_size))?;

    let groups = shuffled
        .chunks(size)
        .enumerate()
        .map(|(index, members)| Group::new(group_label(label, index + 1), members.to_vec()))
        .collect();

    Ok(groups)
}

/// Holds the most recent grouping result
#[derive(Debug)]
pub struct GroupingEngine {
    label: String,
    groups: Vec<Group>,
}

impl Default for GroupingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_LABEL)
    }
}

impl GroupingEngine {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            groups: Vec::new(),
        }
    }

    /// Shuffle and partition the roster, replacing any previous result.
    ///
    /// On an invalid size the previous result is left untouched.
    pub fn generate<R>(&mut self, roster: &Roster, group_size: i64, rng: &mut R) -> Result<&[Group]>
    where
        R: RandomSource + ?Sized,
    {
        let shuffled = shuffle(roster.participants(), rng);
        let groups = partition(shuffled, group_size, &self.label)?;
        assert_partition_invariants(&groups, roster, group_size as usize);

        tracing::info!(
            participants = roster.len(),
            group_size,
            groups = groups.len(),
            "Generated groups"
        );
        self.groups = groups;
        Ok(&self.groups)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
