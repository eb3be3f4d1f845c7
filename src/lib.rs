// In: src/lib.rs

//! Pokemon Battle Engine
//!
//! Resolves a turn-based fight between two combatants: speed decides who
//! acts first, each move rolls for accuracy and damage, and the battle ends
//! as soon as one side faints. Randomness is injected through
//! [`battle::rng::RollSource`] so every outcome can be pinned down in tests.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod config;
pub mod errors;
pub mod moves;
pub mod prefab_teams;
pub mod store;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BattlePhase, BattleStatus, CombatantStatus};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::resolve_action;
pub use battle::rng::{RollSource, SeededRng, TurnRng};
pub use battle::runner::{BattleRunner, ExecutionResult, RunnerError};
pub use battle::state::{ActionOutcome, Battle, BattleEvent, EventBus, Side, TurnOutcome};

// Entities.
pub use combatant::{Combatant, MAX_MOVES};
pub use moves::Move;

// Configuration and registry.
pub use config::{AccuracyMode, BattleConfig, BattleRules, DamageRoll, RunnerSettings};
pub use store::BattleStore;

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, ConfigError, StoreError, ValidationError,
    ValidationResult,
};
