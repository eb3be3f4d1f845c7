use crate::battle::state::Side;
use crate::combatant::Combatant;

/// Speed used for turn ordering. Combatants have no speed modifiers, so this
/// is the base stat, but ordering always goes through here so it is read
/// fresh every turn.
pub fn effective_speed(pokemon: &Combatant) -> u16 {
    pokemon.speed()
}

/// Decide who acts first this turn.
///
/// The strictly faster combatant goes first; on a tie the combatant in slot
/// one does.
pub fn action_order(pokemon1: &Combatant, pokemon2: &Combatant) -> [Side; 2] {
    if effective_speed(pokemon2) > effective_speed(pokemon1) {
        [Side::Two, Side::One]
    } else {
        [Side::One, Side::Two]
    }
}
