use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Coarse lifecycle of a battle. `Finished` is terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum BattlePhase {
    #[strum(serialize = "ONGOING")]
    Ongoing,
    #[strum(serialize = "FINISHED")]
    Finished,
}

/// Point-in-time view of one combatant inside a battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CombatantStatus {
    pub combatant_id: String,
    pub name: String,
    pub current_hp: u16,
    pub max_hp: u16,
}

impl CombatantStatus {
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }
}

/// Point-in-time view of a whole battle, as returned by status queries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BattleStatus {
    pub battle_id: String,
    pub combatant1: CombatantStatus,
    pub combatant2: CombatantStatus,
    pub phase: BattlePhase,
    pub is_finished: bool,
    /// Set once the battle is finished; the id of the combatant left standing.
    pub winner_id: Option<String>,
}

impl BattleStatus {
    /// Looks up a participant's status by id.
    pub fn combatant(&self, combatant_id: &str) -> Option<&CombatantStatus> {
        [&self.combatant1, &self.combatant2]
            .into_iter()
            .find(|status| status.combatant_id == combatant_id)
    }

    /// Name of the winning combatant, if the battle has one.
    pub fn winner_name(&self) -> Option<&str> {
        let winner_id = self.winner_id.as_deref()?;
        self.combatant(winner_id).map(|status| status.name.as_str())
    }
}
