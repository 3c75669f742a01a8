//! Rollcall Core Library
//!
//! Participant roster, lucky draw and group generation for the Rollcall
//! HR utility. Engines read the roster and return derived results; they
//! never mutate it.

pub mod draw;
pub mod error;
pub mod export;
pub mod grouping;
pub mod invariants;
pub mod models;
pub mod random;
pub mod roster;
pub mod settings;

pub use draw::{compute_eligible, DrawEngine, DrawState, WinnerSet};
pub use error::{Error, Result};
pub use export::{format_groups, Snapshot};
pub use grouping::{group_label, partition, shuffle, GroupingEngine, DEFAULT_GROUP_LABEL};
pub use models::*;
pub use random::{session_rng, RandomSource};
pub use roster::{parse_names, Roster};
pub use settings::{DrawSettings, GroupingSettings, Settings};
