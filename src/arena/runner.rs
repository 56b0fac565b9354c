use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::ai::Agent;
use crate::config::ArenaConfig;
use crate::error::ArenaError;

use super::episode::play_game;
use super::stats::{MatchReport, MatchStats};

/// Plays a configured number of games between two agents, alternating who
/// moves first, and aggregates the results.
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Arena { config }
    }

    pub fn run(
        &self,
        agent_a: &mut dyn Agent,
        agent_b: &mut dyn Agent,
    ) -> Result<MatchReport, ArenaError> {
        // Progress bar is purely UI; the runner works without it.
        let bar = if self.config.progress {
            let bar = ProgressBar::new(self.config.games as u64);
            bar.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>6}/{len:<6} {percent:>3}% {elapsed_precise} {msg}",
                )
                .expect("valid progress template")
                .progress_chars("=>-"),
            );
            Some(bar)
        } else {
            None
        };

        let mut stats = MatchStats::new();
        let start = Instant::now();

        for game_idx in 0..self.config.games {
            let a_is_red = game_idx % 2 == 0;
            let record = if a_is_red {
                play_game(agent_a, agent_b, self.config.max_moves)?
            } else {
                play_game(agent_b, agent_a, self.config.max_moves)?
            };
            stats.record(&record, a_is_red);

            if let Some(ref bar) = bar {
                bar.inc(1);
                bar.set_message(format!(
                    "{} win rate {:.0}%",
                    agent_a.name(),
                    stats.win_rate_a() * 100.0
                ));
            }
        }

        if let Some(bar) = bar {
            bar.finish_with_message("done");
        }

        let report = stats.report(agent_a.name(), agent_b.name(), start.elapsed().as_secs_f64());
        info!("{report}");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{RandomAgent, TacticalAgent};

    fn quiet_config(games: usize) -> ArenaConfig {
        ArenaConfig {
            games,
            base_seed: 7,
            max_moves: 42,
            progress: false,
        }
    }

    #[test]
    fn plays_the_configured_number_of_games() {
        let arena = Arena::new(quiet_config(4));
        let mut a = RandomAgent::from_seed(1);
        let mut b = RandomAgent::from_seed(2);
        let report = arena.run(&mut a, &mut b).unwrap();
        assert_eq!(report.games, 4);
        assert_eq!(report.wins + report.losses + report.draws, 4);
    }

    #[test]
    fn tactical_dominates_random_in_a_short_match() {
        let arena = Arena::new(quiet_config(10));
        let mut a = TacticalAgent::from_seed(1);
        let mut b = RandomAgent::from_seed(2);
        let report = arena.run(&mut a, &mut b).unwrap();
        assert_eq!(report.agent, "Tactical");
        assert!(report.wins > report.losses);
    }
}
