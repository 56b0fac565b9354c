use crate::game::COLS;

use super::grid::{Channel, Grid};

/// First column in `candidates` where dropping on `channel` completes four
/// in a row. Candidates are probed in the order given, so earlier columns
/// win ties. Full columns are skipped.
pub fn find_winning_move(grid: &Grid, candidates: &[usize], channel: Channel) -> Option<usize> {
    for &col in candidates {
        let Some(row) = grid.next_open_row(col) else {
            continue;
        };
        if grid.place(row, col, channel).creates_win(row, col, channel) {
            return Some(col);
        }
    }
    None
}

/// Columns in `candidates` whose move does not hand the opponent an
/// immediate winning reply. Order is preserved.
///
/// Opponent replies are probed against the same candidate list, not a
/// recomputed one: a column the mover's own piece just filled yields no
/// landing row and is skipped rather than counted as a threat.
pub fn non_suicidal_moves(grid: &Grid, candidates: &[usize], channel: Channel) -> Vec<usize> {
    let opponent = channel.other();
    let mut safe = Vec::with_capacity(candidates.len());

    for &col in candidates {
        let Some(row) = grid.next_open_row(col) else {
            continue;
        };
        let after_move = grid.place(row, col, channel);

        let suicidal = candidates.iter().any(|&reply| {
            match after_move.next_open_row(reply) {
                Some(reply_row) => after_move
                    .place(reply_row, reply, opponent)
                    .creates_win(reply_row, reply, opponent),
                None => false,
            }
        });

        if !suicidal {
            safe.push(col);
        }
    }

    safe
}

/// Whether dropping on `channel` at `col` leaves at least two distinct
/// columns that would each complete four in a row on the following move.
/// All seven columns are probed for the follow-up; full ones are skipped.
pub fn creates_double_threat(grid: &Grid, col: usize, channel: Channel) -> bool {
    let Some(row) = grid.next_open_row(col) else {
        return false;
    };
    let after_move = grid.place(row, col, channel);

    let mut threats = 0;
    for followup in 0..COLS {
        let Some(followup_row) = after_move.next_open_row(followup) else {
            continue;
        };
        if after_move
            .place(followup_row, followup, channel)
            .creates_win(followup_row, followup, channel)
        {
            threats += 1;
            if threats >= 2 {
                return true;
            }
        }
    }
    false
}
