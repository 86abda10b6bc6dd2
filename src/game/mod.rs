mod board;
mod types;
mod win_detector;

pub use board::{Grid, reconstruct};
pub use types::{
    DEFAULT_BOARD_COLS, DEFAULT_BOARD_ROWS, Difficulty, Disc, GameStatus, Player, Position,
    WIN_LENGTH, Winner, WinningLine,
};
pub use win_detector::find_winning_line;
