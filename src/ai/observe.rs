use crate::game::{GameOutcome, GameState, COLS, ROWS};

use super::agent::Percept;
use super::grid::{Channel, Grid};

/// Build the mover-relative percept for the player about to act.
///
/// Plane 0 holds the current player's pieces and plane 1 the opponent's,
/// whichever color either side plays. The action mask marks columns with at
/// least one empty cell. The reward is the terminal ±1/0 from the mover's
/// perspective and zero mid-game.
pub fn observe(state: &GameState) -> Percept {
    let board = state.board();
    let mover_cell = state.current_player().to_cell();
    let opponent_cell = state.current_player().other().to_cell();

    let mut grid = Grid::empty();
    for row in 0..ROWS {
        for col in 0..COLS {
            let cell = board.get(row, col);
            if cell == mover_cell {
                grid.set(row, col, Channel::Mover);
            } else if cell == opponent_cell {
                grid.set(row, col, Channel::Opponent);
            }
        }
    }

    let mut action_mask = [false; COLS];
    for (col, open) in action_mask.iter_mut().enumerate() {
        *open = !board.is_column_full(col);
    }

    let reward = match state.outcome() {
        Some(GameOutcome::Winner(winner)) => {
            if winner == state.current_player() {
                1.0
            } else {
                -1.0
            }
        }
        Some(GameOutcome::Draw) | None => 0.0,
    };

    Percept {
        grid,
        action_mask,
        reward,
        terminated: state.is_terminal(),
        truncated: false,
    }
}
