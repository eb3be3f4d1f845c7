use crate::errors::{ActionError, BattleEngineError, ValidationError, ValidationResult};
use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// Number of moves a combatant can know at once.
pub const MAX_MOVES: usize = 4;

/// A battling creature: fixed base stats, mutable hit points, and up to four
/// moves kept in the order they were learned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "CombatantRecord")]
pub struct Combatant {
    name: String,
    max_hp: u16,
    current_hp: u16,
    attack: u16,
    defense: u16,
    speed: u16,
    moves: Vec<Move>,
}

/// Serialized form of a combatant, checked by `Combatant::try_from` before use.
#[derive(Deserialize)]
struct CombatantRecord {
    name: String,
    max_hp: u16,
    current_hp: u16,
    attack: u16,
    defense: u16,
    speed: u16,
    #[serde(default)]
    moves: Vec<Move>,
}

impl TryFrom<CombatantRecord> for Combatant {
    type Error = BattleEngineError;

    fn try_from(record: CombatantRecord) -> Result<Self, Self::Error> {
        let mut combatant = Combatant::new(
            record.name,
            record.max_hp,
            record.attack,
            record.defense,
            record.speed,
        )?;
        if record.current_hp > record.max_hp {
            return Err(ValidationError::HpAboveMax {
                current_hp: record.current_hp,
                max_hp: record.max_hp,
            }
            .into());
        }
        for move_ in record.moves {
            combatant.learn_move(move_)?;
        }
        combatant.current_hp = record.current_hp;
        Ok(combatant)
    }
}

impl Combatant {
    /// Create a combatant at full health.
    ///
    /// Fails if the name is empty or any stat is zero; nothing is built on failure.
    pub fn new(
        name: impl Into<String>,
        max_hp: u16,
        attack: u16,
        defense: u16,
        speed: u16,
    ) -> ValidationResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        for (stat, value) in [
            ("max_hp", max_hp),
            ("attack", attack),
            ("defense", defense),
            ("speed", speed),
        ] {
            if value == 0 {
                return Err(ValidationError::ZeroStat { stat });
            }
        }

        Ok(Self {
            name,
            max_hp,
            current_hp: max_hp,
            attack,
            defense,
            speed,
            moves: Vec::with_capacity(MAX_MOVES),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn attack(&self) -> u16 {
        self.attack
    }

    pub fn defense(&self) -> u16 {
        self.defense
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Moves in learning order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Append a move. A fifth move is refused and the known moves are left as they were.
    pub fn learn_move(&mut self, move_: Move) -> Result<(), ActionError> {
        if self.moves.len() >= MAX_MOVES {
            return Err(ActionError::MoveLimitExceeded {
                combatant: self.name.clone(),
            });
        }
        self.moves.push(move_);
        Ok(())
    }

    /// Reduce HP, stopping at zero. Returns true if the combatant is now fainted.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        let remaining = u32::from(self.current_hp).saturating_sub(amount);
        // remaining <= current_hp, which already fits in u16
        self.current_hp = remaining as u16;
        self.is_fainted()
    }

    /// Restore HP, capped at max HP.
    pub fn heal(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }
}
