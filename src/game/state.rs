use super::{Board, MoveError, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    move_count: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
            move_count: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of moves played so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut new_board = self.board;
        let row = new_board.drop_piece(column, self.current_player.to_cell())?;

        let outcome = if new_board.check_win(row, column) {
            Some(GameOutcome::Winner(self.current_player))
        } else if new_board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
            outcome,
            move_count: self.move_count + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        assert_eq!(new_state.move_count(), 1);
    }

    #[test]
    fn test_apply_move_does_not_touch_original() {
        let state = GameState::initial();
        let _ = state.apply_move(3).unwrap();
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red builds a horizontal line on the bottom row
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow above
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap();
            if col < 3 {
                state = state.apply_move(col).unwrap();
            }
        }
        assert_eq!(state.apply_move(6), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_is_rejected() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state = state.apply_move(0).unwrap();
        }
        // Column 0 alternates Red/Yellow, so nobody has won yet
        assert!(!state.is_terminal());
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
        assert!(!state.legal_actions().contains(&0));
    }
}
