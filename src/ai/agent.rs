use crate::game::COLS;

use super::grid::Grid;

/// One turn's view of the environment, oriented to the player about to move.
///
/// `reward` and the episode flags mirror what the environment reports
/// alongside each observation; agents only consult the flags.
#[derive(Debug, Clone, Copy)]
pub struct Percept {
    pub grid: Grid,
    pub action_mask: [bool; COLS],
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
}

impl Percept {
    /// Columns the action mask marks as playable, in ascending order.
    pub fn valid_actions(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.action_mask[col]).collect()
    }

    /// Whether the episode has ended, by outcome or by move cap.
    pub fn is_over(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Universal interface for all agents.
pub trait Agent: std::fmt::Debug {
    /// Select a column for the current turn, or `None` when the episode is
    /// already over.
    fn choose_action(&mut self, percept: &Percept) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
