use crate::battle::calculators::{calculate_damage, move_hits};
use crate::battle::rng::RollSource;
use crate::battle::state::{ActionOutcome, Battle, Side, TurnOutcome};
use crate::battle::stats::action_order;
use crate::combatant::Combatant;
use crate::config::BattleRules;
use crate::errors::{ActionError, BattleResult};
use crate::moves::Move;
use tracing::{debug, info, warn};

/// Resolve a single attack between two bare combatants.
///
/// A fainted attacker is rejected before any roll is drawn and the defender is
/// left untouched. A miss changes nothing.
pub fn resolve_action(
    attacker: &Combatant,
    defender: &mut Combatant,
    move_: &Move,
    rules: &BattleRules,
    rng: &mut dyn RollSource,
) -> Result<ActionOutcome, ActionError> {
    if attacker.is_fainted() {
        warn!(attacker = attacker.name(), "fainted combatant tried to act");
        return Err(ActionError::ActionOnFaintedCombatant {
            combatant: attacker.name().to_string(),
        });
    }

    let hit = move_hits(move_, rules, rng);
    let damage = if hit {
        let damage = calculate_damage(attacker, defender, move_, rules, rng);
        defender.apply_damage(damage);
        damage
    } else {
        0
    };

    debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        move_name = move_.name(),
        hit,
        damage,
        remaining_hp = defender.current_hp(),
        "action resolved"
    );
    if defender.is_fainted() {
        info!(defender = defender.name(), "combatant fainted");
    }

    Ok(ActionOutcome {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        move_name: move_.name().to_string(),
        hit,
        damage,
        defender_remaining_hp: defender.current_hp(),
        defender_fainted: defender.is_fainted(),
    })
}

impl Battle {
    fn ensure_ongoing(&self) -> Result<(), ActionError> {
        if self.is_finished() {
            warn!(battle_id = %self.battle_id, "action on finished battle");
            return Err(ActionError::BattleAlreadyFinished {
                battle_id: self.battle_id.clone(),
            });
        }
        Ok(())
    }

    /// Attacker and defender borrowed out of the same array.
    fn split_for(&mut self, attacker: Side) -> (&Combatant, &mut Combatant) {
        let [first, second] = &mut self.combatants;
        match attacker {
            Side::One => (&*first, second),
            Side::Two => (&*second, first),
        }
    }

    /// Have the combatant on `attacker` use `move_` against the other side.
    pub fn resolve_action(
        &mut self,
        attacker: Side,
        move_: &Move,
        rng: &mut dyn RollSource,
    ) -> BattleResult<ActionOutcome> {
        self.ensure_ongoing()?;
        let rules = *self.rules();
        let (attacker, defender) = self.split_for(attacker);
        let outcome = resolve_action(attacker, defender, move_, &rules, rng)?;
        self.log_if_finished();
        Ok(outcome)
    }

    /// Run one turn. `move1` belongs to slot one and `move2` to slot two,
    /// whichever of them ends up acting first.
    pub fn resolve_turn(
        &mut self,
        move1: &Move,
        move2: &Move,
        rng: &mut dyn RollSource,
    ) -> BattleResult<TurnOutcome> {
        self.ensure_ongoing()?;

        let order = action_order(&self.combatants[0], &self.combatants[1]);
        let move_for = |side: Side| match side {
            Side::One => move1,
            Side::Two => move2,
        };

        let mut actions = Vec::with_capacity(2);
        for side in order {
            // The first hit may have knocked out the second actor.
            if self.combatant(side).is_fainted() {
                debug!(skipped = self.combatant(side).name(), "second action skipped");
                break;
            }
            let rules = *self.rules();
            let (attacker, defender) = self.split_for(side);
            actions.push(resolve_action(attacker, defender, move_for(side), &rules, rng)?);
        }

        self.log_if_finished();
        Ok(TurnOutcome { order, actions })
    }

    fn log_if_finished(&self) {
        if let Some(winner) = self.winner() {
            info!(
                battle_id = %self.battle_id,
                winner = self.combatant(winner).name(),
                "battle finished"
            );
        }
    }
}
