use std::time::Instant;

use crate::game::{DEFAULT_BOARD_COLS, DEFAULT_BOARD_ROWS, Difficulty, Disc, GameStatus, Player, Winner};
use crate::id_generator::generate_record_id;

use super::game_record::{GameRecord, Move};

/// Producer-side assembly of a `GameRecord`.
///
/// The live game engine owns move legality; the recorder only accumulates
/// already-resolved placements and stamps their timing. Elapsed offsets are
/// measured monotonically from recorder creation.
pub struct GameRecorder {
    id: String,
    board_rows: usize,
    board_cols: usize,
    player_disc: Disc,
    ai_disc: Disc,
    difficulty: Difficulty,
    created_at_ms: i64,
    started: Instant,
    moves: Vec<Move>,
}

impl GameRecorder {
    pub fn new(player_disc: Disc, ai_disc: Disc, difficulty: Difficulty) -> Self {
        Self::with_board(DEFAULT_BOARD_ROWS, DEFAULT_BOARD_COLS, player_disc, ai_disc, difficulty)
    }

    pub fn with_board(
        board_rows: usize,
        board_cols: usize,
        player_disc: Disc,
        ai_disc: Disc,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: generate_record_id(),
            board_rows,
            board_cols,
            player_disc,
            ai_disc,
            difficulty,
            created_at_ms: chrono::Utc::now().timestamp_millis(),
            started: Instant::now(),
            moves: Vec::new(),
        }
    }

    pub fn record_move(&mut self, player: Player, row: usize, col: usize) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.moves.push(Move { player, row, col, elapsed_ms });
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Closes the record for a game played to its conclusion.
    pub fn finalize(self, winner: Winner) -> GameRecord {
        self.close(GameStatus::Completed, Some(winner))
    }

    /// Closes the record for a game the player walked away from.
    pub fn abandon(self) -> GameRecord {
        self.close(GameStatus::Abandoned, None)
    }

    fn close(self, status: GameStatus, winner: Option<Winner>) -> GameRecord {
        let total_duration_ms = self.started.elapsed().as_millis() as u64;
        GameRecord {
            id: self.id,
            moves: self.moves,
            board_rows: self.board_rows,
            board_cols: self.board_cols,
            player_disc: self.player_disc,
            ai_disc: self.ai_disc,
            difficulty: self.difficulty,
            winner,
            status,
            created_at_ms: self.created_at_ms,
            completed_at_ms: Some(self.created_at_ms + total_duration_ms as i64),
            total_duration_ms,
        }
    }
}
