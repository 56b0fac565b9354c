use crate::game::{COLS, ROWS};

use super::grid::{Channel, Grid};

/// Axis directions a run can lie along: horizontal, vertical, the two
/// diagonals.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Structural and positional score for a piece already placed at (row, col).
///
/// Per axis, the contiguous run through the placed cell scores 100 for
/// exactly three and 10 for exactly two. Completed runs of four score
/// nothing here; those are claimed as immediate wins before scoring is ever
/// consulted. A flat column bonus favors central play and is added once.
pub fn score_move(grid: &Grid, row: usize, col: usize, channel: Channel) -> i32 {
    let mut score = 0;

    for (dr, dc) in AXES {
        let mut run = 1; // the placed piece

        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while in_bounds(r, c) && grid.is_set(r as usize, c as usize, channel) {
            run += 1;
            r += dr;
            c += dc;
        }

        let mut r = row as i32 - dr;
        let mut c = col as i32 - dc;
        while in_bounds(r, c) && grid.is_set(r as usize, c as usize, channel) {
            run += 1;
            r -= dr;
            c -= dc;
        }

        score += match run {
            3 => 100,
            2 => 10,
            _ => 0,
        };
    }

    score + column_bonus(col)
}

fn in_bounds(r: i32, c: i32) -> bool {
    (0..ROWS as i32).contains(&r) && (0..COLS as i32).contains(&c)
}

fn column_bonus(col: usize) -> i32 {
    match col {
        3 => 20,
        2 | 4 => 10,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(grid: &Grid, col: usize, channel: Channel) -> (Grid, usize) {
        let row = grid.next_open_row(col).expect("column full");
        (grid.place(row, col, channel), row)
    }

    #[test]
    fn lone_piece_scores_only_the_column_bonus() {
        let (grid, row) = drop(&Grid::empty(), 0, Channel::Mover);
        assert_eq!(score_move(&grid, row, 0, Channel::Mover), 5);
        let (grid, row) = drop(&Grid::empty(), 3, Channel::Mover);
        assert_eq!(score_move(&grid, row, 3, Channel::Mover), 20);
    }

    #[test]
    fn two_run_in_center_scores_thirty() {
        let (grid, _) = drop(&Grid::empty(), 2, Channel::Mover);
        let (grid, row) = drop(&grid, 3, Channel::Mover);
        // 10 for the pair, 20 for the center column
        assert_eq!(score_move(&grid, row, 3, Channel::Mover), 30);
    }

    #[test]
    fn three_run_scores_hundred() {
        let mut grid = Grid::empty();
        for col in 0..2 {
            grid = drop(&grid, col, Channel::Mover).0;
        }
        let (grid, row) = drop(&grid, 2, Channel::Mover);
        assert_eq!(score_move(&grid, row, 2, Channel::Mover), 110);
    }

    #[test]
    fn bonuses_from_multiple_axes_are_additive() {
        // Horizontal pair plus a diagonal three-run through the placed cell
        let grid = Grid::empty()
            .place(5, 1, Channel::Mover)
            .place(4, 3, Channel::Mover)
            .place(3, 4, Channel::Mover);
        let placed = grid.place(5, 2, Channel::Mover);
        // 10 for the pair, 100 for the three-run, 10 for column 2
        assert_eq!(score_move(&placed, 5, 2, Channel::Mover), 120);
    }

    #[test]
    fn completed_four_scores_no_structural_points() {
        let mut grid = Grid::empty();
        for col in 0..3 {
            grid = drop(&grid, col, Channel::Mover).0;
        }
        let (grid, row) = drop(&grid, 3, Channel::Mover);
        // Run of four: 0 structural, only the center bonus remains
        assert_eq!(score_move(&grid, row, 3, Channel::Mover), 20);
    }

    #[test]
    fn opponent_pieces_do_not_extend_runs() {
        let mut grid = Grid::empty();
        grid = drop(&grid, 2, Channel::Opponent).0;
        let (grid, row) = drop(&grid, 3, Channel::Mover);
        assert_eq!(score_move(&grid, row, 3, Channel::Mover), 20);
    }
}
