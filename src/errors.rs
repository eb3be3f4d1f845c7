use thiserror::Error;

/// Main error type for the battle engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleEngineError {
    /// An entity was rejected at construction time
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// An action could not be performed in the current battle state
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
    /// A registry lookup or insertion failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised while constructing combatants and moves
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Combatants and moves must be named
    #[error("name must not be empty")]
    EmptyName,
    /// Hit points, attack, defense and speed must all be positive
    #[error("{stat} must be greater than zero")]
    ZeroStat { stat: &'static str },
    /// Accuracy is a hit percentage in 1..=100
    #[error("accuracy must be between 1 and 100, got {0}")]
    AccuracyOutOfRange(u8),
    /// Restored hit points cannot exceed the maximum
    #[error("current hp {current_hp} exceeds max hp {max_hp}")]
    HpAboveMax { current_hp: u16, max_hp: u16 },
}

/// Errors related to performing actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The combatant already knows four moves
    #[error("{combatant} already knows the maximum number of moves")]
    MoveLimitExceeded { combatant: String },
    /// A fainted combatant tried to act
    #[error("{combatant} has fainted and cannot act")]
    ActionOnFaintedCombatant { combatant: String },
    /// The battle has reached its terminal state
    #[error("battle {battle_id} is already finished")]
    BattleAlreadyFinished { battle_id: String },
}

/// Errors surfaced by the battle registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("battle not found: {0}")]
    BattleNotFound(String),
    #[error("combatant not found: {0}")]
    CombatantNotFound(String),
    #[error("move not found: {0}")]
    MoveNotFound(String),
    /// The combatant exists but does not take part in the given battle
    #[error("combatant {combatant_id} is not part of battle {battle_id}")]
    CombatantNotInBattle {
        battle_id: String,
        combatant_id: String,
    },
    #[error("id already registered: {0}")]
    DuplicateId(String),
    /// Both sides of a battle name the same combatant
    #[error("combatant {combatant_id} cannot fight itself in battle {battle_id}")]
    SameCombatantOnBothSides {
        battle_id: String,
        combatant_id: String,
    },
    /// Another caller panicked while holding the battle lock
    #[error("battle {0} is unavailable after a panic")]
    LockPoisoned(String),
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
