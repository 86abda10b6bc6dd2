use super::types::{Disc, Position, WIN_LENGTH, WinningLine};

/// Searches for a four-in-a-row passing through `anchor`.
///
/// The anchor is the cell of the last recorded move, which is part of the
/// winning line whenever one exists. Directions are tried in the order
/// horizontal, vertical, diagonal down-right, diagonal down-left; within a
/// direction the left-most/top-most window wins.
pub fn find_winning_line(board: &[Vec<Option<Disc>>], anchor: Position) -> Option<WinningLine> {
    let disc = (*board.get(anchor.row)?.get(anchor.col)?)?;

    check_direction(board, anchor, disc, 0, 1)
        .or_else(|| check_direction(board, anchor, disc, 1, 0))
        .or_else(|| check_direction(board, anchor, disc, 1, 1))
        .or_else(|| check_direction(board, anchor, disc, 1, -1))
}

fn check_direction(
    board: &[Vec<Option<Disc>>],
    anchor: Position,
    disc: Disc,
    row_step: i64,
    col_step: i64,
) -> Option<WinningLine> {
    let rows = board.len() as i64;
    let cols = board.first().map(|row| row.len()).unwrap_or(0) as i64;
    let span = WIN_LENGTH as i64 - 1;

    // Windows through the anchor, earliest start first.
    for back in (0..WIN_LENGTH as i64).rev() {
        let start_row = anchor.row as i64 - row_step * back;
        let start_col = anchor.col as i64 - col_step * back;
        let end_row = start_row + row_step * span;
        let end_col = start_col + col_step * span;

        if start_row < 0 || start_col < 0 || start_row >= rows || start_col >= cols {
            continue;
        }
        if end_row < 0 || end_col < 0 || end_row >= rows || end_col >= cols {
            continue;
        }

        let mut cells = [Position::new(0, 0); WIN_LENGTH];
        let mut matched = true;
        for i in 0..WIN_LENGTH as i64 {
            let row = (start_row + row_step * i) as usize;
            let col = (start_col + col_step * i) as usize;
            if board[row][col] != Some(disc) {
                matched = false;
                break;
            }
            cells[i as usize] = Position::new(row, col);
        }

        if matched {
            return Some(WinningLine::new(cells));
        }
    }

    None
}
