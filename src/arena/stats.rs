use std::fmt;

use serde::Serialize;

use crate::game::Player;

use super::episode::GameRecord;

/// Aggregated results of a match, attributed to the two agents rather than
/// to colors (the runner alternates who moves first).
#[derive(Debug, Default)]
pub struct MatchStats {
    games: usize,
    wins_a: usize,
    wins_b: usize,
    draws: usize,
    truncated: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game. `a_is_red` says which seat agent A held.
    pub fn record(&mut self, record: &GameRecord, a_is_red: bool) {
        self.games += 1;
        self.total_moves += record.moves;
        if record.truncated {
            self.truncated += 1;
        }
        match record.winner {
            Some(winner) => {
                if (winner == Player::Red) == a_is_red {
                    self.wins_a += 1;
                } else {
                    self.wins_b += 1;
                }
            }
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.games
    }

    /// Agent A's win rate over all recorded games.
    pub fn win_rate_a(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins_a as f64 / self.games as f64
    }

    /// Average game length in moves.
    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }

    /// Final report with agent names attached.
    pub fn report(&self, agent: &str, opponent: &str, elapsed_secs: f64) -> MatchReport {
        MatchReport {
            agent: agent.to_string(),
            opponent: opponent.to_string(),
            games: self.games,
            wins: self.wins_a,
            losses: self.wins_b,
            draws: self.draws,
            truncated: self.truncated,
            win_rate: self.win_rate_a(),
            avg_game_length: self.average_moves(),
            elapsed_secs,
        }
    }
}

/// Final match summary, printable and JSON-serializable.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub agent: String,
    pub opponent: String,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub truncated: usize,
    pub win_rate: f64,
    pub avg_game_length: f64,
    pub elapsed_secs: f64,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: games={} wins={} losses={} draws={} truncated={} \
             win_rate={:.1}% avg_len={:.1} elapsed={:.2}s",
            self.agent,
            self.opponent,
            self.games,
            self.wins,
            self.losses,
            self.draws,
            self.truncated,
            self.win_rate * 100.0,
            self.avg_game_length,
            self.elapsed_secs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_by(winner: Player, moves: usize) -> GameRecord {
        GameRecord {
            winner: Some(winner),
            moves,
            truncated: false,
        }
    }

    #[test]
    fn test_attribution_follows_the_seat() {
        let mut stats = MatchStats::new();
        // A as Red wins, then A as Yellow wins
        stats.record(&won_by(Player::Red, 10), true);
        stats.record(&won_by(Player::Yellow, 12), false);
        // B as Yellow wins once
        stats.record(&won_by(Player::Yellow, 14), true);

        let report = stats.report("Tactical", "Random", 0.5);
        assert_eq!(report.wins, 2);
        assert_eq!(report.losses, 1);
        assert_eq!(report.draws, 0);
        assert!((report.win_rate - 2.0 / 3.0).abs() < 1e-9);
        assert!((report.avg_game_length - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_draws_and_truncations_are_counted() {
        let mut stats = MatchStats::new();
        stats.record(
            &GameRecord {
                winner: None,
                moves: 42,
                truncated: false,
            },
            true,
        );
        stats.record(
            &GameRecord {
                winner: None,
                moves: 6,
                truncated: true,
            },
            false,
        );
        let report = stats.report("a", "b", 0.0);
        assert_eq!(report.draws, 2);
        assert_eq!(report.truncated, 1);
        assert_eq!(report.wins, 0);
    }

    #[test]
    fn test_empty_stats_have_zero_rates() {
        let stats = MatchStats::new();
        assert_eq!(stats.win_rate_a(), 0.0);
        assert_eq!(stats.average_moves(), 0.0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut stats = MatchStats::new();
        stats.record(&won_by(Player::Red, 9), true);
        let report = stats.report("Tactical", "Random", 1.25);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"wins\":1"));
        assert!(json.contains("\"agent\":\"Tactical\""));
    }

    #[test]
    fn test_report_display_is_one_line() {
        let stats = MatchStats::new();
        let report = stats.report("a", "b", 0.0);
        assert_eq!(report.to_string().lines().count(), 1);
    }
}
