use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::{Agent, Percept};
use super::grid::Channel;
use super::{score, threat};

/// Column preference when no tactical rule applies: center first.
const CENTER_ORDER: [usize; 7] = [3, 2, 4, 1, 5, 0, 6];

/// Rule-ordered agent: take a win, block a loss, avoid handing one over,
/// then extend chains toward the center.
///
/// The rules run in a fixed order once per turn and the first one that
/// yields a column short-circuits the rest. Everything is evaluated on
/// grid copies, so the percept handed in is never modified.
#[derive(Debug)]
pub struct TacticalAgent {
    rng: StdRng,
}

impl TacticalAgent {
    pub fn new() -> Self {
        TacticalAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor, for reproducible matches.
    pub fn from_seed(seed: u64) -> Self {
        TacticalAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for TacticalAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for TacticalAgent {
    fn choose_action(&mut self, percept: &Percept) -> Option<usize> {
        if percept.is_over() {
            return None;
        }

        let grid = percept.grid;
        let valid = percept.valid_actions();
        assert!(!valid.is_empty(), "no playable column in a live position");

        // Rule 1: win immediately.
        if let Some(col) = threat::find_winning_move(&grid, &valid, Channel::Mover) {
            debug!("winning move -> column {col}");
            return Some(col);
        }

        // Rule 2: block the opponent's win.
        if let Some(col) = threat::find_winning_move(&grid, &valid, Channel::Opponent) {
            debug!("blocking -> column {col}");
            return Some(col);
        }

        // Rule 3: drop columns that hand the opponent an immediate win.
        // When every move loses, keep the full set and play the best of a
        // bad lot rather than refuse to move.
        let safe = threat::non_suicidal_moves(&grid, &valid, Channel::Mover);
        let candidates = if safe.is_empty() {
            debug!("no safe column, keeping all {} playable", valid.len());
            valid.clone()
        } else {
            safe
        };

        // Rule 4: extend the strongest chain. Strict improvement only, so
        // the earliest candidate wins ties.
        let mut best_col = None;
        let mut best_score = 0;
        for &col in &candidates {
            let Some(row) = grid.next_open_row(col) else {
                continue;
            };
            let after_move = grid.place(row, col, Channel::Mover);
            let col_score = score::score_move(&after_move, row, col, Channel::Mover);
            if col_score > best_score {
                best_score = col_score;
                best_col = Some(col);
            }
        }
        if let Some(col) = best_col {
            debug!("chain extension -> column {col} (score {best_score})");
            return Some(col);
        }

        // Rule 5: set up two winning columns at once.
        for &col in &candidates {
            if threat::creates_double_threat(&grid, col, Channel::Mover) {
                debug!("double threat -> column {col}");
                return Some(col);
            }
        }

        // Rule 6: prefer the center among all playable columns, not just
        // the safe ones.
        for col in CENTER_ORDER {
            if valid.contains(&col) {
                debug!("center preference -> column {col}");
                return Some(col);
            }
        }

        // Rule 7: nothing else applied, pick any playable column.
        let col = valid[self.rng.random_range(0..valid.len())];
        debug!("random fallback -> column {col}");
        Some(col)
    }

    fn name(&self) -> &str {
        "Tactical"
    }
}
