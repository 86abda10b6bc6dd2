use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, Disc, GameStatus, Player, Winner};

/// One recorded disc placement. The cell is resolved at recording time;
/// `elapsed_ms` is the offset from the start of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub row: usize,
    pub col: usize,
    pub elapsed_ms: u64,
}

/// Immutable record of a finished or abandoned game, as produced by the
/// game-history store. `moves.len()` is the single source of truth for the
/// replay length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub moves: Vec<Move>,
    pub board_rows: usize,
    pub board_cols: usize,
    pub player_disc: Disc,
    pub ai_disc: Disc,
    pub difficulty: Difficulty,
    pub winner: Option<Winner>,
    pub status: GameStatus,
    pub created_at_ms: i64,
    pub completed_at_ms: Option<i64>,
    pub total_duration_ms: u64,
}

impl GameRecord {
    pub fn total_moves(&self) -> usize {
        self.moves.len()
    }

    pub fn disc_for(&self, player: Player) -> Disc {
        match player {
            Player::Human => self.player_disc,
            Player::Ai => self.ai_disc,
        }
    }

    /// The disc colour of the winning side, if the game was won outright.
    pub fn winner_disc(&self) -> Option<Disc> {
        match self.winner {
            Some(Winner::Human) => Some(self.player_disc),
            Some(Winner::Ai) => Some(self.ai_disc),
            Some(Winner::Draw) | None => None,
        }
    }

    pub fn has_decisive_winner(&self) -> bool {
        matches!(self.winner, Some(Winner::Human) | Some(Winner::Ai))
    }
}
