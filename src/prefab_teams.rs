// Ready-made combatants and moves for demos and tests.

use crate::errors::BattleResult;
use crate::store::BattleStore;

/// Which pair of combatants the demo registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Roster {
    /// Low-HP matchup: Pikachu knocks Bulbasaur out quickly.
    #[default]
    Classic,
    /// Both sides at 100 HP for a longer exchange.
    Showcase,
}

/// Ids the demo battle is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoMatchup {
    pub pokemon1_id: &'static str,
    pub pokemon2_id: &'static str,
    pub move1_id: &'static str,
    pub move2_id: &'static str,
}

pub const THUNDERBOLT: &str = "thunderbolt";
pub const TACKLE: &str = "tackle";

/// Registers the moves and the roster's two combatants, each knowing its move.
pub fn register_demo_roster(store: &mut BattleStore, roster: Roster) -> BattleResult<DemoMatchup> {
    store.create_move(THUNDERBOLT, "Thunderbolt", 90, 100)?;
    store.create_move(TACKLE, "Tackle", 40, 100)?;

    let matchup = match roster {
        Roster::Classic => {
            store.create_combatant("pikachu", "Pikachu", 35, 55, 40, 90)?;
            store.create_combatant("bulbasaur", "Bulbasaur", 45, 49, 49, 45)?;
            DemoMatchup {
                pokemon1_id: "pikachu",
                pokemon2_id: "bulbasaur",
                move1_id: THUNDERBOLT,
                move2_id: TACKLE,
            }
        }
        Roster::Showcase => {
            store.create_combatant("pikachu-1", "Pikachu", 100, 55, 49, 90)?;
            store.create_combatant("bulbasaur-1", "Bulbasaur", 100, 49, 49, 45)?;
            DemoMatchup {
                pokemon1_id: "pikachu-1",
                pokemon2_id: "bulbasaur-1",
                move1_id: THUNDERBOLT,
                move2_id: TACKLE,
            }
        }
    };

    store.learn_move(matchup.pokemon1_id, matchup.move1_id)?;
    store.learn_move(matchup.pokemon2_id, matchup.move2_id)?;
    Ok(matchup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Roster::Classic, 35, 45)]
    #[case(Roster::Showcase, 100, 100)]
    fn test_register_demo_roster(#[case] roster: Roster, #[case] hp1: u16, #[case] hp2: u16) {
        let mut store = BattleStore::new();
        let matchup = register_demo_roster(&mut store, roster).unwrap();

        let pikachu = store.combatant(matchup.pokemon1_id).unwrap();
        let bulbasaur = store.combatant(matchup.pokemon2_id).unwrap();
        assert_eq!(pikachu.max_hp(), hp1);
        assert_eq!(bulbasaur.max_hp(), hp2);
        assert_eq!(pikachu.moves()[0].name(), "Thunderbolt");
        assert_eq!(bulbasaur.moves()[0].name(), "Tackle");
    }

    #[test]
    fn test_register_twice_fails() {
        let mut store = BattleStore::new();
        register_demo_roster(&mut store, Roster::Classic).unwrap();
        assert!(register_demo_roster(&mut store, Roster::Classic).is_err());
    }
}
