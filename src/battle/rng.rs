use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random number the engine consumes.
///
/// Bounds are inclusive. `reason` names the roll so scripted sources can
/// report which draw ran them dry.
pub trait RollSource {
    fn roll(&mut self, reason: &str, low: u32, high: u32) -> u32;
}

/// Pseudorandom rolls backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    /// Reproducible sequence for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RollSource for SeededRng {
    fn roll(&mut self, reason: &str, low: u32, high: u32) -> u32 {
        let value = self.rng.random_range(low..=high);
        tracing::trace!(reason, value, "roll");
        value
    }
}

/// A fixed script of roll results, consumed in order. Used to pin down
/// outcomes in tests.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u32>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u32>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> &[u32] {
        &self.outcomes[self.index..]
    }
}

impl RollSource for TurnRng {
    fn roll(&mut self, reason: &str, low: u32, high: u32) -> u32 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];
        assert!(
            (low..=high).contains(&outcome),
            "Scripted value {} for '{}' is outside {}..={}",
            outcome,
            reason,
            low,
            high
        );

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}
