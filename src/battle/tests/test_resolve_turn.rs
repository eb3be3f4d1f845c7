#[cfg(test)]
mod tests {
    use crate::battle::rng::TurnRng;
    use crate::battle::state::Side;
    use crate::battle::tests::common::{
        create_test_battle, empty_rng, reference_bulbasaur, reference_pikachu, tackle, thunder,
        TestCombatantBuilder,
    };
    use crate::config::{AccuracyMode, BattleRules, DamageRoll};
    use crate::moves::Move;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(90, 45, [Side::One, Side::Two])]
    #[case(45, 90, [Side::Two, Side::One])]
    #[case(70, 70, [Side::One, Side::Two])]
    #[case(1, 2, [Side::Two, Side::One])]
    fn test_faster_combatant_acts_first(
        #[case] speed1: u16,
        #[case] speed2: u16,
        #[case] expected_order: [Side; 2],
    ) {
        let pokemon1 = TestCombatantBuilder::new("Pikachu").with_speed(speed1).build();
        let pokemon2 = TestCombatantBuilder::new("Bulbasaur").with_speed(speed2).build();
        let mut battle = create_test_battle(pokemon1, pokemon2, BattleRules::deterministic());

        let outcome = battle.resolve_turn(&tackle(), &tackle(), &mut empty_rng()).unwrap();

        assert_eq!(outcome.order, expected_order);
        let first_attacker = battle.combatant(expected_order[0]).name();
        assert_eq!(outcome.actions[0].attacker, first_attacker);
    }

    #[test]
    fn test_both_combatants_act_when_neither_faints() {
        let mut battle = create_test_battle(
            reference_pikachu(),
            reference_bulbasaur(),
            BattleRules::deterministic(),
        );

        let outcome = battle.resolve_turn(&thunder(), &tackle(), &mut empty_rng()).unwrap();

        assert_eq!(outcome.actions.len(), 2);
        assert_eq!(outcome.actions[0].move_name, "Thunder");
        assert_eq!(outcome.actions[0].damage, 46);
        assert_eq!(outcome.actions[1].move_name, "Tackle");
        assert_eq!(outcome.actions[1].damage, 19);
        assert_eq!(battle.combatant(Side::One).current_hp(), 81);
        assert_eq!(battle.combatant(Side::Two).current_hp(), 54);
        assert!(!battle.is_finished());
    }

    #[test]
    fn test_moves_follow_their_slot_when_slower_side_is_first() {
        // Slot two is faster, so Tackle (slot two's move) is used first.
        let pokemon1 = TestCombatantBuilder::new("Slowpoke").with_speed(15).build();
        let pokemon2 = TestCombatantBuilder::new("Jolteon").with_speed(130).build();
        let mut battle = create_test_battle(pokemon1, pokemon2, BattleRules::deterministic());

        let outcome = battle.resolve_turn(&thunder(), &tackle(), &mut empty_rng()).unwrap();

        assert_eq!(outcome.actions[0].attacker, "Jolteon");
        assert_eq!(outcome.actions[0].move_name, "Tackle");
        assert_eq!(outcome.actions[1].attacker, "Slowpoke");
        assert_eq!(outcome.actions[1].move_name, "Thunder");
    }

    #[test]
    fn test_miss_by_first_actor_still_lets_second_act() {
        let rules = BattleRules {
            accuracy: AccuracyMode::Probabilistic,
            damage_roll: DamageRoll::Fixed,
        };
        let mut battle = create_test_battle(reference_pikachu(), reference_bulbasaur(), rules);
        let inaccurate = Move::new("Zap Cannon", 120, 50).unwrap();
        // Pikachu's accuracy roll misses, Bulbasaur's hits
        let mut rng = TurnRng::new_for_test(vec![50, 0]);

        let outcome = battle.resolve_turn(&inaccurate, &tackle(), &mut rng).unwrap();

        assert_eq!(outcome.actions.len(), 2);
        assert!(!outcome.actions[0].hit);
        assert_eq!(outcome.actions[0].damage, 0);
        assert!(outcome.actions[1].hit);
        assert_eq!(battle.combatant(Side::Two).current_hp(), 100);
        assert_eq!(battle.combatant(Side::One).current_hp(), 81);
        assert!(rng.remaining().is_empty());
    }

    #[test]
    fn test_random_damage_roll_is_drawn_per_hit() {
        let rules = BattleRules {
            accuracy: AccuracyMode::AlwaysHit,
            damage_roll: DamageRoll::Random,
        };
        let mut battle = create_test_battle(reference_pikachu(), reference_bulbasaur(), rules);
        let mut rng = TurnRng::new_for_test(vec![85, 93]);

        let outcome = battle.resolve_turn(&thunder(), &tackle(), &mut rng).unwrap();

        // 46 * 85% and 19 * 93%, floored
        assert_eq!(outcome.actions[0].damage, 39);
        assert_eq!(outcome.actions[1].damage, 17);
        assert_eq!(battle.combatant(Side::Two).current_hp(), 61);
        assert_eq!(battle.combatant(Side::One).current_hp(), 83);
    }

    #[test]
    fn test_single_action_on_battle() {
        let mut battle = create_test_battle(
            reference_pikachu(),
            reference_bulbasaur(),
            BattleRules::deterministic(),
        );

        let outcome = battle
            .resolve_action(Side::Two, &tackle(), &mut empty_rng())
            .unwrap();

        assert_eq!(outcome.attacker, "Bulbasaur");
        assert_eq!(outcome.defender, "Pikachu");
        assert_eq!(outcome.defender_remaining_hp, 81);
        assert_eq!(battle.combatant(Side::Two).current_hp(), 100);
    }
}
