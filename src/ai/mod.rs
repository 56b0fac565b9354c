//! Agents and the decision logic behind them: mover-relative grid snapshots,
//! win and threat detection, chain scoring, and the rule cascade that turns
//! them into a column choice.

mod agent;
mod grid;
pub mod observe;
mod random;
pub mod score;
mod tactical;
pub mod threat;

pub use agent::{Agent, Percept};
pub use grid::{Channel, Grid, CHANNELS};
pub use observe::observe;
pub use random::RandomAgent;
pub use score::score_move;
pub use tactical::TacticalAgent;
pub use threat::{creates_double_threat, find_winning_move, non_suicidal_moves};

use crate::error::ArenaError;

/// Build an agent by name. Seeded so matches are reproducible.
pub fn build_agent(kind: &str, seed: u64) -> Result<Box<dyn Agent>, ArenaError> {
    match kind {
        "tactical" => Ok(Box::new(TacticalAgent::from_seed(seed))),
        "random" => Ok(Box::new(RandomAgent::from_seed(seed))),
        other => Err(ArenaError::UnknownAgent(other.to_string())),
    }
}
