use log::debug;

use crate::ai::{observe, Agent};
use crate::error::ArenaError;
use crate::game::{GameOutcome, GameState, Player};

/// Outcome of a single arena game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub moves: usize,
    pub truncated: bool,
}

/// Play one game with `red` moving first.
///
/// Both agents see mover-relative percepts, so either seat can hold any
/// agent. `max_moves` caps the game length; a capped game counts as
/// truncated with no winner.
pub fn play_game<'a>(
    red: &'a mut dyn Agent,
    yellow: &'a mut dyn Agent,
    max_moves: usize,
) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::initial();

    while !state.is_terminal() && state.move_count() < max_moves {
        let percept = observe(&state);
        let agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let action = agent.choose_action(&percept).ok_or(ArenaError::NoAction)?;
        state = state.apply_move(action).map_err(|_| ArenaError::IllegalAction {
            action,
            legal: state.legal_actions(),
        })?;
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(player)) => Some(player),
        Some(GameOutcome::Draw) | None => None,
    };
    let record = GameRecord {
        winner,
        moves: state.move_count(),
        truncated: !state.is_terminal(),
    };

    match record.winner {
        Some(player) => debug!("{player} wins after {} moves", record.moves),
        None if record.truncated => debug!("game truncated after {} moves", record.moves),
        None => debug!("draw after {} moves", record.moves),
    }
    debug!("final board:\n{}", state.board());

    Ok(record)
}
