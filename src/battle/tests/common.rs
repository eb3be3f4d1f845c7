use crate::battle::rng::TurnRng;
use crate::battle::state::Battle;
use crate::combatant::Combatant;
use crate::config::BattleRules;
use crate::errors::BattleResult;
use crate::moves::Move;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestCombatantBuilder::new("Pikachu")
///     .with_speed(90)
///     .with_hp(20)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    max_hp: u16,
    attack: u16,
    defense: u16,
    speed: u16,
    current_hp: Option<u16>,
}

impl TestCombatantBuilder {
    /// Creates a new builder with 100 HP and 50 in every other stat.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            max_hp: 100,
            attack: 50,
            defense: 50,
            speed: 50,
            current_hp: None,
        }
    }

    pub fn with_stats(mut self, max_hp: u16, attack: u16, defense: u16, speed: u16) -> Self {
        self.max_hp = max_hp;
        self.attack = attack;
        self.defense = defense;
        self.speed = speed;
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the current HP for the test combatant. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Combatant {
        let mut pokemon = match Combatant::new(
            self.name.as_str(),
            self.max_hp,
            self.attack,
            self.defense,
            self.speed,
        ) {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to build test combatant {}: {}", self.name, err),
        };

        if let Some(hp) = self.current_hp {
            pokemon.apply_damage(u32::from(self.max_hp.saturating_sub(hp)));
        }
        pokemon
    }
}

/// Pikachu from the reference scenario: 100 HP, 55 attack, 49 defense, 90 speed.
pub fn reference_pikachu() -> Combatant {
    TestCombatantBuilder::new("Pikachu")
        .with_stats(100, 55, 49, 90)
        .build()
}

/// Bulbasaur from the reference scenario: 100 HP, 49 attack, 49 defense, 45 speed.
pub fn reference_bulbasaur() -> Combatant {
    TestCombatantBuilder::new("Bulbasaur")
        .with_stats(100, 49, 49, 45)
        .build()
}

pub fn thunder() -> Move {
    Move::new("Thunder", 90, 100).unwrap()
}

pub fn tackle() -> Move {
    Move::new("Tackle", 40, 100).unwrap()
}

/// Creates a standard 1v1 battle for testing.
pub fn create_test_battle(pokemon1: Combatant, pokemon2: Combatant, rules: BattleRules) -> Battle {
    Battle::new("test_battle", pokemon1, pokemon2, rules)
}

/// A `TurnRng` with no values at all. Any roll panics, which proves a code
/// path is free of randomness.
pub fn empty_rng() -> TurnRng {
    TurnRng::new_for_test(Vec::new())
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
