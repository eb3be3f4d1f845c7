use crate::battle::rng::RollSource;
use crate::battle::state::{BattleEvent, EventBus, TurnOutcome};
use crate::errors::BattleEngineError;
use crate::store::BattleStore;
use schema::BattleStatus;
use thiserror::Error;
use tracing::info;

/// Result of executing one turn through the runner
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub turn_number: u32,
    pub outcome: TurnOutcome,
    pub events: Vec<BattleEvent>,
    pub status: BattleStatus,
}

impl ExecutionResult {
    pub fn battle_ended(&self) -> bool {
        self.status.is_finished
    }
}

/// Errors that can occur when using the battle runner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    #[error("battle did not finish within {0} turns")]
    TurnLimitReached(u32),
    #[error(transparent)]
    Engine(#[from] BattleEngineError),
}

/// Drives one stored battle turn by turn, with each side repeating a fixed
/// move, and keeps the event history for display.
#[derive(Debug)]
pub struct BattleRunner<'a> {
    store: &'a BattleStore,
    battle_id: String,
    move_ids: [String; 2],
    turn_number: u32,
    turn_limit: u32,
    accumulated_events: Vec<BattleEvent>,
}

impl<'a> BattleRunner<'a> {
    pub fn new(
        store: &'a BattleStore,
        battle_id: impl Into<String>,
        move1_id: impl Into<String>,
        move2_id: impl Into<String>,
        turn_limit: u32,
    ) -> Self {
        Self {
            store,
            battle_id: battle_id.into(),
            move_ids: [move1_id.into(), move2_id.into()],
            turn_number: 0,
            turn_limit,
            accumulated_events: Vec::new(),
        }
    }

    /// Number of turns executed so far.
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn battle_id(&self) -> &str {
        &self.battle_id
    }

    pub fn status(&self) -> Result<BattleStatus, RunnerError> {
        Ok(self
            .store
            .battle_status(&self.battle_id)
            .map_err(BattleEngineError::from)?)
    }

    /// Execute the next turn.
    pub fn step(&mut self, rng: &mut dyn RollSource) -> Result<ExecutionResult, RunnerError> {
        if self.turn_number >= self.turn_limit {
            return Err(RunnerError::TurnLimitReached(self.turn_limit));
        }

        let outcome = self
            .store
            .execute_turn(&self.battle_id, &self.move_ids[0], &self.move_ids[1], rng)?;
        self.turn_number += 1;

        let mut bus = EventBus::new();
        bus.push(BattleEvent::TurnStarted {
            turn_number: self.turn_number,
        });
        bus.extend(outcome.actions.iter().flat_map(|action| action.events()));

        let status = self.status()?;
        if status.is_finished {
            let winner = status.winner_name().map(str::to_string);
            info!(battle_id = %self.battle_id, turns = self.turn_number, ?winner, "battle over");
            bus.push(BattleEvent::BattleEnded { winner });
        }

        let events = bus.into_events();
        self.accumulated_events.extend(events.iter().cloned());

        Ok(ExecutionResult {
            turn_number: self.turn_number,
            outcome,
            events,
            status,
        })
    }

    /// Keep stepping until the battle finishes or the turn limit is hit.
    pub fn run_to_completion(&mut self, rng: &mut dyn RollSource) -> Result<BattleStatus, RunnerError> {
        loop {
            let result = self.step(rng)?;
            if result.battle_ended() {
                return Ok(result.status);
            }
        }
    }

    /// Get all events that have occurred in the battle so far
    pub fn all_events(&self) -> &[BattleEvent] {
        &self.accumulated_events
    }

    /// Get events since a certain index (for incremental updates)
    pub fn events_since(&self, index: usize) -> &[BattleEvent] {
        self.accumulated_events.get(index..).unwrap_or(&[])
    }
}
