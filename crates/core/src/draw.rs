//! Draw engine - single-winner lucky draw
//!
//! A draw moves through `Idle -> Running -> Settled`. The winner is chosen at
//! `stop` time from the eligible pool; whatever the display ticker showed in
//! between has no bearing on the outcome.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::invariants::assert_winners_within_roster;
use crate::models::{DrawRecord, Participant, ParticipantId};
use crate::random::RandomSource;
use crate::roster::Roster;

/// Ids already drawn in the current no-repeats session
pub type WinnerSet = HashSet<ParticipantId>;

/// Draw state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawState {
    #[default]
    Idle,
    Running,
    Settled,
}

impl DrawState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Settled => "Settled",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Participants a draw may currently select from, in roster order
pub fn compute_eligible(
    roster: &[Participant],
    winners: &WinnerSet,
    allow_repeats: bool,
) -> Vec<Participant> {
    if allow_repeats {
        return roster.to_vec();
    }
    roster
        .iter()
        .filter(|p| !winners.contains(&p.id))
        .cloned()
        .collect()
}

/// Draw engine state: history, winners and the repeat setting
#[derive(Debug, Default)]
pub struct DrawEngine {
    state: DrawState,
    allow_repeats: bool,
    /// Most recent first
    history: Vec<DrawRecord>,
    winners: WinnerSet,
}

impl DrawEngine {
    pub fn new(allow_repeats: bool) -> Self {
        Self {
            allow_repeats,
            ..Self::default()
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn allow_repeats(&self) -> bool {
        self.allow_repeats
    }

    /// Takes effect immediately, including for a running draw
    pub fn set_allow_repeats(&mut self, allow: bool) {
        tracing::debug!(allow_repeats = allow, "Repeat setting changed");
        self.allow_repeats = allow;
    }

    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    pub fn winners(&self) -> &WinnerSet {
        &self.winners
    }

    /// Ids of removed participants are ignored
    pub fn eligible(&self, roster: &Roster) -> Vec<Participant> {
        compute_eligible(roster.participants(), &self.winners, self.allow_repeats)
    }

    /// Begin a draw. Returns the size of the eligible pool.
    pub fn start(&mut self, roster: &Roster) -> Result<usize> {
        if self.state.is_running() {
            return Err(Error::AlreadyRunning);
        }

        self.retain_roster(roster);
        let pool = self.eligible(roster).len();
        if pool == 0 {
            tracing::info!(roster = roster.len(), "Draw refused, pool is empty");
            return Err(Error::EmptyPool);
        }

        self.state = DrawState::Running;
        tracing::info!(pool, allow_repeats = self.allow_repeats, "Draw started");
        Ok(pool)
    }

    /// Settle the running draw and record the winner
    pub fn stop<R>(&mut self, roster: &Roster, rng: &mut R) -> Result<&DrawRecord>
    where
        R: RandomSource + ?Sized,
    {
        if !self.state.is_running() {
            return Err(Error::NotRunning);
        }

        self.retain_roster(roster);
        let eligible = self.eligible(roster);
        if eligible.is_empty() {
            tracing::warn!("Pool emptied during draw, aborting");
            self.state = DrawState::Idle;
            return Err(Error::EmptyPool);
        }

        let index = rng.pick_index(eligible.len());
        let winner = eligible[index].clone();

        if !self.allow_repeats {
            self.winners.insert(winner.id);
        }
        self.state = DrawState::Settled;

        tracing::info!(
            participant_id = %winner.id,
            name = %winner.name,
            pool = eligible.len(),
            "Draw settled"
        );
        self.history.insert(0, DrawRecord::new(winner));
        Ok(&self.history[0])
    }

    /// Clear history and winners. Independent of the roster.
    pub fn reset_history(&mut self) {
        tracing::info!(records = self.history.len(), "Draw history reset");
        self.history.clear();
        self.winners.clear();
        if self.state == DrawState::Settled {
            self.state = DrawState::Idle;
        }
    }

    /// Drop winner ids that are no longer in the roster
    pub fn retain_roster(&mut self, roster: &Roster) {
        let ids = roster.ids();
        self.winners.retain(|id| ids.contains(id));
        assert_winners_within_roster(&self.winners, roster);
    }

    /// Abandon a running draw without a result
    pub fn cancel(&mut self) {
        if self.state.is_running() {
            tracing::debug!("Draw cancelled");
            self.state = DrawState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(raw: &str) -> Roster {
        let mut roster = Roster::new();
        roster.ingest(raw);
        roster
    }

    fn draw(engine: &mut DrawEngine, roster: &Roster, rng: &mut StdRng) -> Result<Participant> {
        engine.start(roster)?;
        engine.stop(roster, rng).map(|r| r.participant.clone())
    }

    #[test]
    fn test_compute_eligible() {
        let roster = roster("A\nB\nC");
        let b = roster.participants()[1].id;
        let winners: WinnerSet = [b].into_iter().collect();

        let names = |v: Vec<Participant>| v.into_iter().map(|p| p.name).collect::<Vec<_>>();
        assert_eq!(
            names(compute_eligible(roster.participants(), &winners, false)),
            vec!["A", "C"]
        );
        assert_eq!(
            names(compute_eligible(roster.participants(), &winners, true)),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_start_on_empty_roster_fails() {
        let mut engine = DrawEngine::new(false);
        let result = engine.start(&Roster::new());
        assert!(matches!(result, Err(Error::EmptyPool)));
        assert_eq!(engine.state(), DrawState::Idle);
    }

    #[test]
    fn test_no_repeats_exhausts_after_n_draws() {
        let roster = roster("A\nB\nC\nD");
        let mut engine = DrawEngine::new(false);
        let mut rng = StdRng::seed_from_u64(7);

        let mut drawn = HashSet::new();
        for _ in 0..roster.len() {
            let winner = draw(&mut engine, &roster, &mut rng).unwrap();
            assert!(drawn.insert(winner.id), "winner drawn twice");
        }

        assert_eq!(engine.winners().len(), 4);
        assert!(matches!(engine.start(&roster), Err(Error::EmptyPool)));
        assert_eq!(engine.state(), DrawState::Settled);
    }

    #[test]
    fn test_repeats_allowed_never_exhausts() {
        let roster = roster("A\nB");
        let mut engine = DrawEngine::new(true);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            draw(&mut engine, &roster, &mut rng).unwrap();
        }
        assert_eq!(engine.history().len(), 20);
        assert!(engine.winners().is_empty());

        let a = engine
            .history()
            .iter()
            .filter(|r| r.participant.name == "A")
            .count();
        assert!(a > 0 && a < 20, "expected both names to win at least once");
    }

    #[test]
    fn test_reset_history_restores_pool() {
        let roster = roster("A");
        let mut engine = DrawEngine::new(false);
        let mut rng = StdRng::seed_from_u64(1);

        draw(&mut engine, &roster, &mut rng).unwrap();
        assert!(matches!(engine.start(&roster), Err(Error::EmptyPool)));

        engine.reset_history();
        assert!(engine.history().is_empty());
        assert!(engine.winners().is_empty());
        assert_eq!(draw(&mut engine, &roster, &mut rng).unwrap().name, "A");
    }

    #[test]
    fn test_history_most_recent_first() {
        let roster = roster("A\nB\nC");
        let mut engine = DrawEngine::new(false);
        let mut rng = StdRng::seed_from_u64(11);

        let first = draw(&mut engine, &roster, &mut rng).unwrap();
        let second = draw(&mut engine, &roster, &mut rng).unwrap();

        assert_eq!(engine.history()[0].participant.id, second.id);
        assert_eq!(engine.history()[1].participant.id, first.id);
        assert!(engine.history()[0].timestamp >= engine.history()[1].timestamp);
    }

    #[test]
    fn test_stop_twice_is_rejected() {
        let roster = roster("A\nB");
        let mut engine = DrawEngine::new(false);
        let mut rng = StdRng::seed_from_u64(5);

        draw(&mut engine, &roster, &mut rng).unwrap();
        assert!(matches!(engine.stop(&roster, &mut rng), Err(Error::NotRunning)));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let roster = roster("A");
        let mut engine = DrawEngine::new(false);
        engine.start(&roster).unwrap();
        assert!(matches!(engine.start(&roster), Err(Error::AlreadyRunning)));
        assert_eq!(engine.state(), DrawState::Running);
    }

    #[test]
    fn test_stop_with_emptied_pool_aborts_to_idle() {
        let mut roster = roster("A");
        let mut engine = DrawEngine::new(false);
        let mut rng = StdRng::seed_from_u64(5);

        engine.start(&roster).unwrap();
        roster.clear();

        assert!(matches!(engine.stop(&roster, &mut rng), Err(Error::EmptyPool)));
        assert_eq!(engine.state(), DrawState::Idle);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_toggling_repeats_mid_run_applies_at_stop() {
        let roster = roster("A");
        let mut engine = DrawEngine::new(true);
        let mut rng = StdRng::seed_from_u64(9);

        draw(&mut engine, &roster, &mut rng).unwrap();
        engine.start(&roster).unwrap();
        engine.set_allow_repeats(false);

        let record = engine.stop(&roster, &mut rng).unwrap();
        assert_eq!(record.participant.name, "A");
        assert!(engine.winners().contains(&roster.participants()[0].id));
    }

    #[test]
    fn test_retain_roster_prunes_removed_winners() {
        let mut roster = roster("A");
        let mut engine = DrawEngine::new(false);
        let mut rng = StdRng::seed_from_u64(2);

        let winner = draw(&mut engine, &roster, &mut rng).unwrap();
        roster.remove(winner.id);
        engine.retain_roster(&roster);

        assert!(engine.winners().is_empty());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_removed_winner_does_not_block_next_draw() {
        let mut roster = roster("A\nB");
        let mut engine = DrawEngine::new(false);
        let mut rng = StdRng::seed_from_u64(6);

        let winner = draw(&mut engine, &roster, &mut rng).unwrap();
        roster.remove(winner.id);

        assert_eq!(engine.eligible(&roster).len(), 1);
        assert_eq!(engine.start(&roster).unwrap(), 1);
        assert!(engine.winners().is_empty());

        let next = engine.stop(&roster, &mut rng).unwrap();
        assert_ne!(next.participant.id, winner.id);
        assert_eq!(engine.history().len(), 2);
    }
}
