use crate::combatant::Combatant;
use crate::config::BattleRules;
use schema::{BattlePhase, BattleStatus, CombatantStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed slots in a battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// What happened when one combatant used one move.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub attacker: String,
    pub defender: String,
    pub move_name: String,
    pub hit: bool,
    /// Zero on a miss.
    pub damage: u32,
    pub defender_remaining_hp: u16,
    pub defender_fainted: bool,
}

impl ActionOutcome {
    /// Expand the outcome into the events a viewer would see, in order.
    pub fn events(&self) -> Vec<BattleEvent> {
        let mut events = vec![BattleEvent::MoveUsed {
            attacker: self.attacker.clone(),
            move_name: self.move_name.clone(),
        }];

        if !self.hit {
            events.push(BattleEvent::MoveMissed {
                attacker: self.attacker.clone(),
            });
            return events;
        }

        events.push(BattleEvent::DamageDealt {
            target: self.defender.clone(),
            damage: self.damage,
            remaining_hp: self.defender_remaining_hp,
        });
        if self.defender_fainted {
            events.push(BattleEvent::CombatantFainted {
                name: self.defender.clone(),
            });
        }
        events
    }
}

/// Result of a full turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Who was scheduled to act first and second.
    pub order: [Side; 2],
    /// Actions in execution order. Holds a single entry when the first action
    /// knocked out the second actor.
    pub actions: Vec<ActionOutcome>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    TurnStarted {
        turn_number: u32,
    },
    MoveUsed {
        attacker: String,
        move_name: String,
    },
    MoveMissed {
        attacker: String,
    },
    DamageDealt {
        target: String,
        damage: u32,
        remaining_hp: u16,
    },
    CombatantFainted {
        name: String,
    },
    BattleEnded {
        winner: Option<String>,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable line.
    /// Returns None for events that produce no visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number } => Some(format!("=== Turn {} ===", turn_number)),
            BattleEvent::MoveUsed {
                attacker,
                move_name,
            } => Some(format!("{} used {}!", attacker, move_name)),
            BattleEvent::MoveMissed { attacker } => Some(format!("{}'s attack missed!", attacker)),
            BattleEvent::DamageDealt {
                target,
                damage,
                remaining_hp,
            } => Some(format!(
                "{} took {} damage! ({} HP left)",
                target, damage, remaining_hp
            )),
            BattleEvent::CombatantFainted { name } => Some(format!("{} fainted!", name)),
            BattleEvent::BattleEnded { winner: Some(winner) } => Some(format!("{} wins the battle!", winner)),
            BattleEvent::BattleEnded { winner: None } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = BattleEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Human-readable lines for every visible event.
    pub fn formatted_lines(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{:?}", event)?;
        }
        Ok(())
    }
}

/// A two-combatant battle. The battle owns both combatants for its lifetime;
/// there is no switching.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Battle {
    pub(crate) battle_id: String,
    pub(crate) combatant_ids: [String; 2],
    pub(crate) combatants: [Combatant; 2],
    pub(crate) rules: BattleRules,
}

impl Battle {
    /// Create a battle. Ids are the lowercased name plus the slot number
    /// (`pikachu-1`, `bulbasaur-2`), so they differ even when the names match.
    pub fn new(
        battle_id: impl Into<String>,
        pokemon1: Combatant,
        pokemon2: Combatant,
        rules: BattleRules,
    ) -> Self {
        let slot_id = |pokemon: &Combatant, slot: u8| format!("{}-{}", pokemon.name().to_lowercase(), slot);
        let combatant_ids = [slot_id(&pokemon1, 1), slot_id(&pokemon2, 2)];
        Self {
            battle_id: battle_id.into(),
            combatant_ids,
            combatants: [pokemon1, pokemon2],
            rules,
        }
    }

    /// Create a battle with explicit combatant ids. The registry checks that
    /// the two ids differ before calling this.
    pub(crate) fn with_ids(
        battle_id: impl Into<String>,
        (id1, pokemon1): (String, Combatant),
        (id2, pokemon2): (String, Combatant),
        rules: BattleRules,
    ) -> Self {
        Self {
            battle_id: battle_id.into(),
            combatant_ids: [id1, id2],
            combatants: [pokemon1, pokemon2],
            rules,
        }
    }

    pub fn battle_id(&self) -> &str {
        &self.battle_id
    }

    pub fn rules(&self) -> &BattleRules {
        &self.rules
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_id(&self, side: Side) -> &str {
        &self.combatant_ids[side.index()]
    }

    /// Which slot a combatant id occupies, if any.
    pub fn side_of(&self, combatant_id: &str) -> Option<Side> {
        [Side::One, Side::Two]
            .into_iter()
            .find(|side| self.combatant_id(*side) == combatant_id)
    }

    pub fn phase(&self) -> BattlePhase {
        if self.combatants.iter().any(Combatant::is_fainted) {
            BattlePhase::Finished
        } else {
            BattlePhase::Ongoing
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == BattlePhase::Finished
    }

    /// The side still standing once the battle is finished.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_finished() {
            return None;
        }
        [Side::One, Side::Two]
            .into_iter()
            .find(|side| !self.combatant(*side).is_fainted())
    }

    /// Snapshot for status queries.
    pub fn status(&self) -> BattleStatus {
        let combatant_status = |side: Side| {
            let pokemon = self.combatant(side);
            CombatantStatus {
                combatant_id: self.combatant_id(side).to_string(),
                name: pokemon.name().to_string(),
                current_hp: pokemon.current_hp(),
                max_hp: pokemon.max_hp(),
            }
        };
        let phase = self.phase();

        BattleStatus {
            battle_id: self.battle_id.clone(),
            combatant1: combatant_status(Side::One),
            combatant2: combatant_status(Side::Two),
            phase,
            is_finished: phase == BattlePhase::Finished,
            winner_id: self.winner().map(|side| self.combatant_id(side).to_string()),
        }
    }
}
