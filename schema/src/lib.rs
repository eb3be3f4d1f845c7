// Pokemon Battle Schema - Shared type definitions
// This crate contains the snapshot types that are handed from the battle
// engine to whatever sits in front of it (CLI, tests, a future service layer),
// kept separate so those consumers do not depend on engine internals.

// Re-export the main types
pub use battle_data::*;

pub mod battle_data;
