use crate::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable attack. Immutable once built; clone it freely to share
/// between combatants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "MoveRecord")]
pub struct Move {
    name: String,
    power: u16,
    accuracy: u8,
}

#[derive(Deserialize)]
struct MoveRecord {
    name: String,
    power: u16,
    accuracy: u8,
}

impl TryFrom<MoveRecord> for Move {
    type Error = ValidationError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        Move::new(record.name, record.power, record.accuracy)
    }
}

impl Move {
    /// Build a move, rejecting an empty name or an accuracy outside 1..=100.
    pub fn new(name: impl Into<String>, power: u16, accuracy: u8) -> ValidationResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(1..=100).contains(&accuracy) {
            return Err(ValidationError::AccuracyOutOfRange(accuracy));
        }

        Ok(Self {
            name,
            power,
            accuracy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> u16 {
        self.power
    }

    /// Percentage chance to hit.
    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (power {}, accuracy {}%)", self.name, self.power, self.accuracy)
    }
}
