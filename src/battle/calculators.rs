use crate::battle::rng::RollSource;
use crate::combatant::Combatant;
use crate::config::{AccuracyMode, BattleRules, DamageRoll};
use crate::moves::Move;

/// Notional level baked into the damage formula. Combatants carry no level.
pub const BATTLE_LEVEL: u64 = 50;

/// Bounds of the damage roll, in percent.
pub const DAMAGE_ROLL_MIN: u32 = 85;
pub const DAMAGE_ROLL_MAX: u32 = 100;

/// Decide whether `move_` connects.
///
/// Probabilistic mode draws `r` in 0..=99 and hits when `r < accuracy`, so an
/// accuracy of 100 always hits but still consumes a roll.
pub fn move_hits(move_: &Move, rules: &BattleRules, rng: &mut dyn RollSource) -> bool {
    match rules.accuracy {
        AccuracyMode::AlwaysHit => true,
        AccuracyMode::Probabilistic => {
            let roll = rng.roll("accuracy", 0, 99);
            roll < u32::from(move_.accuracy())
        }
    }
}

/// Damage before the random multiplier.
///
/// `((2 * L / 5 + 2) * power * attack / defense) / 50 + 2`, truncating after
/// every division.
pub fn base_damage(power: u16, attack: u16, defense: u16) -> u32 {
    let level_factor = 2 * BATTLE_LEVEL / 5 + 2;
    let scaled = level_factor * u64::from(power) * u64::from(attack) / u64::from(defense);
    let damage = scaled / 50 + 2;
    // power and attack are u16, so this stays far below u32::MAX
    damage as u32
}

/// Scale `base` by a percentage roll, flooring the result.
pub fn apply_damage_roll(base: u32, roll_percent: u32) -> u32 {
    (u64::from(base) * u64::from(roll_percent) / 100) as u32
}

/// Full damage for a hit, including the roll when the rules ask for one.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_: &Move,
    rules: &BattleRules,
    rng: &mut dyn RollSource,
) -> u32 {
    let base = base_damage(move_.power(), attacker.attack(), defender.defense());
    let roll = match rules.damage_roll {
        DamageRoll::Fixed => DAMAGE_ROLL_MAX,
        DamageRoll::Random => rng.roll("damage roll", DAMAGE_ROLL_MIN, DAMAGE_ROLL_MAX),
    };
    apply_damage_roll(base, roll)
}
