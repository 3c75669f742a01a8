//! Application state management
//!
//! `AppState` is the single owner of the roster and both engines. Every
//! command mutates it synchronously; the display ticker only ever sees the
//! eligible pool through a watch channel.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rand::rngs::StdRng;
use rollcall_core::{
    session_rng, DrawEngine, DrawRecord, DrawState, Error, Group, GroupingEngine, Participant,
    ParticipantId, Result, Roster, Settings, Snapshot,
};
use tokio::sync::watch;

/// Placeholder shown on the draw display before the first winner
pub const READY_TEXT: &str = "Ready";

/// Which screen the shell is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Data,
    Draw,
    Group,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "data" => Some(Self::Data),
            "draw" => Some(Self::Draw),
            "group" => Some(Self::Group),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Draw => "draw",
            Self::Group => "group",
        }
    }
}

/// Main application state
pub struct AppState {
    settings: Settings,
    mode: Mode,
    roster: Roster,
    draw: DrawEngine,
    grouping: GroupingEngine,
    group_size: i64,
    /// Last name shown on the draw display
    display: String,
    rng: StdRng,
    /// Live eligible names for the display ticker
    pool: watch::Sender<Vec<String>>,
}

impl AppState {
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        let (pool, _) = watch::channel(Vec::new());
        Self {
            draw: DrawEngine::new(settings.draw.allow_repeats),
            grouping: GroupingEngine::new(settings.grouping.label.clone()),
            group_size: settings.grouping.default_size,
            settings,
            mode: Mode::default(),
            roster: Roster::new(),
            display: READY_TEXT.to_string(),
            rng: session_rng(seed),
            pool,
        }
    }

    /// Resolve the settings file location
    pub fn settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var("ROLLCALL_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("dev", "rollcall", "rollcall").ok_or_else(|| {
            Error::Config("Could not determine config directory".to_string())
        })?;
        Ok(dirs.config_dir().join("rollcall.toml"))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch screens. Draw and group need a non-empty roster; leaving the
    /// draw screen abandons a running draw.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        if mode != Mode::Data && self.roster.is_empty() {
            return Err(Error::EmptyRoster);
        }
        if mode != Mode::Draw {
            self.draw.cancel();
        }
        tracing::debug!(from = self.mode.as_str(), to = mode.as_str(), "Mode changed");
        self.mode = mode;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Roster
    // ------------------------------------------------------------------

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Add names from pasted text
    pub fn ingest(&mut self, raw: &str) -> Vec<Participant> {
        let added = self.roster.ingest(raw);
        if !added.is_empty() {
            self.publish_pool();
        }
        added
    }

    /// Add names from a text or CSV file
    pub fn ingest_file(&mut self, path: &Path) -> Result<Vec<Participant>> {
        let text = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), bytes = text.len(), "Read roster file");
        Ok(self.ingest(&text))
    }

    pub fn remove(&mut self, id: ParticipantId) -> Option<Participant> {
        let removed = self.roster.remove(id)?;
        self.draw.retain_roster(&self.roster);
        self.publish_pool();
        Some(removed)
    }

    /// Resolve a 1-based list position or an id prefix (at least
    /// `MIN_ID_PREFIX` characters) to a participant id. A number within the
    /// list is always a position.
    pub fn resolve(&self, key: &str) -> Option<ParticipantId> {
        const MIN_ID_PREFIX: usize = 4;

        let participants = self.roster.participants();
        if let Ok(position) = key.parse::<usize>() {
            if let Some(p) = position.checked_sub(1).and_then(|i| participants.get(i)) {
                return Some(p.id);
            }
        }
        if key.len() < MIN_ID_PREFIX {
            return None;
        }

        let mut matches = participants
            .iter()
            .filter(|p| p.id.to_string().starts_with(key));
        match (matches.next(), matches.next()) {
            (Some(p), None) => Some(p.id),
            _ => None,
        }
    }

    /// Empty the roster along with everything derived from it
    pub fn clear_roster(&mut self) {
        self.roster.clear();
        self.draw.cancel();
        self.draw.reset_history();
        self.grouping.clear();
        self.display = READY_TEXT.to_string();
        self.mode = Mode::Data;
        self.publish_pool();
        tracing::info!("Roster cleared");
    }

    // ------------------------------------------------------------------
    // Draw
    // ------------------------------------------------------------------

    pub fn draw_state(&self) -> DrawState {
        self.draw.state()
    }

    pub fn history(&self) -> &[DrawRecord] {
        self.draw.history()
    }

    pub fn allow_repeats(&self) -> bool {
        self.draw.allow_repeats()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn eligible_count(&self) -> usize {
        self.draw.eligible(&self.roster).len()
    }

    pub fn set_allow_repeats(&mut self, allow: bool) {
        self.draw.set_allow_repeats(allow);
        self.publish_pool();
    }

    pub fn start_draw(&mut self) -> Result<usize> {
        let pool = self.draw.start(&self.roster)?;
        self.publish_pool();
        Ok(pool)
    }

    pub fn stop_draw(&mut self) -> Result<DrawRecord> {
        let record = self.draw.stop(&self.roster, &mut self.rng)?.clone();
        self.display = record.participant.name.clone();
        self.publish_pool();
        Ok(record)
    }

    pub fn reset_history(&mut self) {
        self.draw.reset_history();
        self.display = READY_TEXT.to_string();
        self.publish_pool();
    }

    /// Receiver for the live eligible pool
    pub fn subscribe_pool(&self) -> watch::Receiver<Vec<String>> {
        self.pool.subscribe()
    }

    fn publish_pool(&self) {
        let names = self
            .draw
            .eligible(&self.roster)
            .into_iter()
            .map(|p| p.name)
            .collect();
        self.pool.send_replace(names);
    }

    // ------------------------------------------------------------------
    // Grouping
    // ------------------------------------------------------------------

    pub fn group_size(&self) -> i64 {
        self.group_size
    }

    pub fn set_group_size(&mut self, size: i64) {
        self.group_size = size;
    }

    pub fn generate_groups(&mut self) -> Result<&[Group]> {
        self.grouping
            .generate(&self.roster, self.group_size, &mut self.rng)
    }

    pub fn groups(&self) -> &[Group] {
        self.grouping.groups()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            participants: self.roster.participants(),
            history: self.draw.history(),
            groups: self.grouping.groups(),
        }
    }
}
