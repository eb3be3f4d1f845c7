use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pokemon_battle::battle::state::BattleEvent;
use pokemon_battle::prefab_teams::{register_demo_roster, Roster};
use pokemon_battle::{BattleConfig, BattleRules, BattleRunner, BattleStore, SeededRng};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

const BATTLE_ID: &str = "battle-1";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RosterArg {
    Classic,
    Showcase,
}

impl From<RosterArg> for Roster {
    fn from(arg: RosterArg) -> Self {
        match arg {
            RosterArg::Classic => Roster::Classic,
            RosterArg::Showcase => Roster::Showcase,
        }
    }
}

/// Run a demo battle between two prefab Pokemon.
#[derive(Parser, Debug)]
#[command(name = "pokemon-battle")]
struct Args {
    /// RON config file; built-in defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Every move hits and damage is never rolled
    #[arg(long)]
    deterministic: bool,

    /// Pause between actions, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long, value_enum, default_value = "classic")]
    roster: RosterArg,

    /// Print the final battle status as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BattleConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => BattleConfig::default(),
    };
    if args.deterministic {
        config.rules = BattleRules::deterministic();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.runner.action_delay_ms = delay_ms;
    }
    let delay = Duration::from_millis(config.runner.action_delay_ms);

    let mut store = BattleStore::new();
    let matchup = register_demo_roster(&mut store, args.roster.into())
        .context("failed to register demo roster")?;
    store
        .create_battle(BATTLE_ID, matchup.pokemon1_id, matchup.pokemon2_id, config.rules)
        .context("failed to create battle")?;

    let mut rng = match args.seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, rules = ?config.rules, "starting battle");

    let mut runner = BattleRunner::new(
        &store,
        BATTLE_ID,
        matchup.move1_id,
        matchup.move2_id,
        config.runner.turn_limit,
    );

    let status = runner.status()?;
    println!("=== Pokemon Battle ===");
    println!(
        "{} ({} HP) vs {} ({} HP)",
        status.combatant1.name, status.combatant1.max_hp, status.combatant2.name, status.combatant2.max_hp
    );
    for pokemon_id in [matchup.pokemon1_id, matchup.pokemon2_id] {
        let pokemon = store.combatant(pokemon_id)?;
        for move_ in pokemon.moves() {
            println!("  {} knows {}", pokemon.name(), move_);
        }
    }

    loop {
        let result = runner.step(&mut rng).context("turn failed")?;

        for event in &result.events {
            if let Some(line) = event.format() {
                println!("{}", line);
            }
            // Pause after each action lands
            if matches!(
                event,
                BattleEvent::DamageDealt { .. } | BattleEvent::MoveMissed { .. }
            ) {
                thread::sleep(delay);
            }
        }

        let status = &result.status;
        println!(
            "{}: {}/{} HP | {}: {}/{} HP",
            status.combatant1.name,
            status.combatant1.current_hp,
            status.combatant1.max_hp,
            status.combatant2.name,
            status.combatant2.current_hp,
            status.combatant2.max_hp
        );
        println!();

        if result.battle_ended() {
            break;
        }
    }

    let status = runner.status()?;
    match status.winner_name() {
        Some(winner) => println!("Winner: {}", winner),
        None => println!("No winner"),
    }

    if args.json {
        let json = serde_json::to_string_pretty(&status).context("failed to serialize battle status")?;
        println!("{}", json);
    }

    Ok(())
}
