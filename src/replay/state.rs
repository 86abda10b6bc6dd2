use crate::game::{Grid, WinningLine};
use crate::record::Move;

use super::speed::PlaybackSpeed;

/// Snapshot of one replay position. The board is always derived from the
/// move-log prefix `[0, current_move)`, never patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayState {
    pub current_move: usize,
    pub is_playing: bool,
    pub is_complete: bool,
    pub speed: PlaybackSpeed,
    pub board: Grid,
    pub last_move: Option<Move>,
    pub winning_line: Option<WinningLine>,
}

/// Presentation-facing view of the state machine's position, derived from
/// the snapshot flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Stopped,
    Paused,
    Playing,
    Complete,
}

impl ReplayState {
    pub fn phase(&self) -> PlaybackPhase {
        if self.is_complete {
            PlaybackPhase::Complete
        } else if self.is_playing {
            PlaybackPhase::Playing
        } else if self.current_move == 0 {
            PlaybackPhase::Stopped
        } else {
            PlaybackPhase::Paused
        }
    }
}
