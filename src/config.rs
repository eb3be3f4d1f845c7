//! Battle configuration.
//!
//! Rules decide how the engine resolves randomness; runner settings decide how
//! the command-line loop paces and bounds a battle. Both load from RON with
//! every field optional.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the accuracy check is performed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccuracyMode {
    /// Roll 0..=99 and hit when the roll is below the move's accuracy.
    #[default]
    Probabilistic,
    /// Every move connects and no roll is drawn.
    AlwaysHit,
}

/// How the final damage multiplier is chosen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DamageRoll {
    /// Multiply by a uniform 85..=100 percent.
    #[default]
    Random,
    /// Always 100 percent; no roll is drawn.
    Fixed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BattleRules {
    pub accuracy: AccuracyMode,
    pub damage_roll: DamageRoll,
}

impl BattleRules {
    /// Rules with no randomness at all.
    pub fn deterministic() -> Self {
        Self {
            accuracy: AccuracyMode::AlwaysHit,
            damage_roll: DamageRoll::Fixed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerSettings {
    /// Upper bound on turns before the runner gives up.
    pub turn_limit: u32,
    /// Pause between displayed actions, in milliseconds.
    pub action_delay_ms: u64,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            turn_limit: 100,
            action_delay_ms: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BattleConfig {
    pub rules: BattleRules,
    pub runner: RunnerSettings,
}

impl BattleConfig {
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.rules.accuracy, AccuracyMode::Probabilistic);
        assert_eq!(config.rules.damage_roll, DamageRoll::Random);
        assert_eq!(config.runner.turn_limit, 100);
        assert_eq!(config.runner.action_delay_ms, 1000);
    }

    #[test]
    fn test_parse_full_config() {
        let config = BattleConfig::from_ron_str(
            r#"(
                rules: (accuracy: AlwaysHit, damage_roll: Fixed),
                runner: (turn_limit: 20, action_delay_ms: 0),
            )"#,
        )
        .unwrap();

        assert_eq!(config.rules, BattleRules::deterministic());
        assert_eq!(config.runner.turn_limit, 20);
        assert_eq!(config.runner.action_delay_ms, 0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = BattleConfig::from_ron_str("(rules: (damage_roll: Fixed))").unwrap();
        assert_eq!(config.rules.accuracy, AccuracyMode::Probabilistic);
        assert_eq!(config.rules.damage_roll, DamageRoll::Fixed);
        assert_eq!(config.runner, RunnerSettings::default());
    }

    #[test]
    fn test_parse_error() {
        let err = BattleConfig::from_ron_str("(rules: (accuracy: Sometimes))").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = BattleConfig::load(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bundled_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/battle.ron");
        let config = BattleConfig::load(&path).unwrap();
        assert_eq!(config, BattleConfig::default());
    }
}
