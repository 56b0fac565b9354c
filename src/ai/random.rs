use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::{Agent, Percept};

/// An agent that selects uniformly at random from the playable columns.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor, for reproducible matches.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, percept: &Percept) -> Option<usize> {
        if percept.is_over() {
            return None;
        }
        let valid = percept.valid_actions();
        assert!(!valid.is_empty(), "no playable column in a live position");
        Some(valid[self.rng.random_range(0..valid.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
