use crate::record::{GameRecord, Move};

use super::types::Disc;

pub type Grid = Vec<Vec<Option<Disc>>>;

/// Replays the first `prefix` moves of the record onto an empty grid.
///
/// Pure with respect to the record: calling it for any prefix yields the
/// same grid as stepping through every smaller prefix first. Each move's
/// cell is already gravity-resolved at recording time, so discs are placed
/// exactly where the log says. `prefix` must be in `[0, record.total_moves()]`;
/// callers clamp, this function does not.
pub fn reconstruct(record: &GameRecord, prefix: usize) -> (Grid, Option<Move>) {
    let mut grid = vec![vec![None; record.board_cols]; record.board_rows];
    for mv in &record.moves[..prefix] {
        grid[mv.row][mv.col] = Some(record.disc_for(mv.player));
    }
    let last_move = prefix.checked_sub(1).map(|i| record.moves[i]);
    (grid, last_move)
}
