//! Registry of combatants, moves and battles keyed by string id.
//!
//! The store is an explicit object owned by the caller. Each battle sits
//! behind its own mutex, so resolution on one battle never blocks another.

use crate::battle::rng::RollSource;
use crate::battle::state::{ActionOutcome, Battle, TurnOutcome};
use crate::combatant::Combatant;
use crate::config::BattleRules;
use crate::errors::{BattleResult, StoreError};
use crate::moves::Move;
use schema::BattleStatus;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

pub type SharedBattle = Arc<Mutex<Battle>>;

#[derive(Debug, Default)]
pub struct BattleStore {
    combatants: HashMap<String, Combatant>,
    moves: HashMap<String, Move>,
    battles: HashMap<String, SharedBattle>,
}

impl BattleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a combatant template under `id`.
    pub fn create_combatant(
        &mut self,
        id: &str,
        name: &str,
        max_hp: u16,
        attack: u16,
        defense: u16,
        speed: u16,
    ) -> BattleResult<()> {
        if self.combatants.contains_key(id) {
            return Err(StoreError::DuplicateId(id.to_string()).into());
        }
        let combatant = Combatant::new(name, max_hp, attack, defense, speed)?;
        debug!(id, name, "combatant registered");
        self.combatants.insert(id.to_string(), combatant);
        Ok(())
    }

    pub fn create_move(&mut self, id: &str, name: &str, power: u16, accuracy: u8) -> BattleResult<()> {
        if self.moves.contains_key(id) {
            return Err(StoreError::DuplicateId(id.to_string()).into());
        }
        let move_ = Move::new(name, power, accuracy)?;
        debug!(id, name, "move registered");
        self.moves.insert(id.to_string(), move_);
        Ok(())
    }

    /// Teach a registered move to a registered combatant.
    pub fn learn_move(&mut self, combatant_id: &str, move_id: &str) -> BattleResult<()> {
        let move_ = self.move_by_id(move_id)?.clone();
        let combatant = self
            .combatants
            .get_mut(combatant_id)
            .ok_or_else(|| StoreError::CombatantNotFound(combatant_id.to_string()))?;
        combatant.learn_move(move_)?;
        Ok(())
    }

    pub fn combatant(&self, id: &str) -> Result<&Combatant, StoreError> {
        self.combatants
            .get(id)
            .ok_or_else(|| StoreError::CombatantNotFound(id.to_string()))
    }

    pub fn move_by_id(&self, id: &str) -> Result<&Move, StoreError> {
        self.moves
            .get(id)
            .ok_or_else(|| StoreError::MoveNotFound(id.to_string()))
    }

    /// Start a battle between two registered combatants.
    ///
    /// The battle gets its own copies, so the registered combatants stay at
    /// full health and can be entered into further battles.
    pub fn create_battle(
        &mut self,
        battle_id: &str,
        pokemon1_id: &str,
        pokemon2_id: &str,
        rules: BattleRules,
    ) -> BattleResult<SharedBattle> {
        if self.battles.contains_key(battle_id) {
            return Err(StoreError::DuplicateId(battle_id.to_string()).into());
        }
        if pokemon1_id == pokemon2_id {
            return Err(StoreError::SameCombatantOnBothSides {
                battle_id: battle_id.to_string(),
                combatant_id: pokemon1_id.to_string(),
            }
            .into());
        }
        let pokemon1 = self.combatant(pokemon1_id)?.clone();
        let pokemon2 = self.combatant(pokemon2_id)?.clone();

        let battle = Battle::with_ids(
            battle_id,
            (pokemon1_id.to_string(), pokemon1),
            (pokemon2_id.to_string(), pokemon2),
            rules,
        );
        let shared = Arc::new(Mutex::new(battle));
        debug!(battle_id, pokemon1_id, pokemon2_id, "battle created");
        self.battles.insert(battle_id.to_string(), Arc::clone(&shared));
        Ok(shared)
    }

    pub fn battle(&self, battle_id: &str) -> Result<SharedBattle, StoreError> {
        self.battles
            .get(battle_id)
            .cloned()
            .ok_or_else(|| StoreError::BattleNotFound(battle_id.to_string()))
    }

    /// Discard a battle. Returns the battle so callers can inspect its final state.
    pub fn remove_battle(&mut self, battle_id: &str) -> Result<SharedBattle, StoreError> {
        self.battles
            .remove(battle_id)
            .ok_or_else(|| StoreError::BattleNotFound(battle_id.to_string()))
    }

    fn lock<'a>(battle_id: &str, battle: &'a SharedBattle) -> Result<MutexGuard<'a, Battle>, StoreError> {
        battle
            .lock()
            .map_err(|_| StoreError::LockPoisoned(battle_id.to_string()))
    }

    /// One attack by `attacker_id` against its opponent in the battle.
    pub fn execute_move(
        &self,
        battle_id: &str,
        attacker_id: &str,
        move_id: &str,
        rng: &mut dyn RollSource,
    ) -> BattleResult<ActionOutcome> {
        let shared = self.battle(battle_id)?;
        let move_ = self.move_by_id(move_id)?;
        let mut battle = Self::lock(battle_id, &shared)?;

        let attacker = battle
            .side_of(attacker_id)
            .ok_or_else(|| StoreError::CombatantNotInBattle {
                battle_id: battle_id.to_string(),
                combatant_id: attacker_id.to_string(),
            })?;
        battle.resolve_action(attacker, move_, rng)
    }

    /// One full turn; `move1_id` is used by the first registered combatant.
    pub fn execute_turn(
        &self,
        battle_id: &str,
        move1_id: &str,
        move2_id: &str,
        rng: &mut dyn RollSource,
    ) -> BattleResult<TurnOutcome> {
        let shared = self.battle(battle_id)?;
        let move1 = self.move_by_id(move1_id)?;
        let move2 = self.move_by_id(move2_id)?;
        let mut battle = Self::lock(battle_id, &shared)?;
        battle.resolve_turn(move1, move2, rng)
    }

    pub fn battle_status(&self, battle_id: &str) -> Result<BattleStatus, StoreError> {
        let shared = self.battle(battle_id)?;
        let battle = Self::lock(battle_id, &shared)?;
        Ok(battle.status())
    }
}
