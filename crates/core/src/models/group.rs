//! Group model - one chunk of a grouping result

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Participant;

/// A generated group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    /// Generated label, e.g. "Group 2"
    pub name: String,
    pub members: Vec<Participant>,
}

impl Group {
    pub fn new(name: String, members: Vec<Participant>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            members,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names joined with ", "
    pub fn member_names(&self) -> String {
        self.members
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
