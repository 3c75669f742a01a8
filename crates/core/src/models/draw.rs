//! Draw record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Participant;

/// One completed draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
    pub id: Uuid,
    pub participant: Participant,
    pub timestamp: DateTime<Utc>,
}

impl DrawRecord {
    pub fn new(participant: Participant) -> Self {
        Self {
            id: Uuid::new_v4(),
            participant,
            timestamp: Utc::now(),
        }
    }
}
