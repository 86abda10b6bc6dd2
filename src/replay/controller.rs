use std::sync::Arc;
use std::time::Duration;

use crate::game::{Grid, Position, WinningLine, find_winning_line, reconstruct};
use crate::record::{GameRecord, Move};

use super::clock::PlaybackClock;
use super::options::PlaybackOptions;
use super::speed::PlaybackSpeed;
use super::state::ReplayState;

/// The replay state machine. One controller exclusively owns one
/// `ReplayState` and the clock that drives it; control operations and tick
/// handling mutate that state through the same methods, so there is no
/// separate controls object cycling back into the state.
///
/// Every operation that moves the position rebuilds the board from the
/// move-log prefix and reports whether the completion transition
/// (`is_complete` going false to true) fired. The session layer turns that
/// into the one-shot completion event.
pub struct PlaybackController {
    record: Arc<GameRecord>,
    options: PlaybackOptions,
    state: ReplayState,
    clock: PlaybackClock,
}

impl PlaybackController {
    pub fn new(record: Arc<GameRecord>, options: PlaybackOptions) -> Self {
        let (board, last_move) = reconstruct(&record, 0);
        let is_complete = record.total_moves() == 0;
        let winning_line = winning_line_at(&record, &options, is_complete, &board, last_move);
        let state = ReplayState {
            current_move: 0,
            is_playing: false,
            is_complete,
            speed: PlaybackSpeed::default(),
            board,
            last_move,
            winning_line,
        };
        Self {
            record,
            options,
            state,
            clock: PlaybackClock::new(),
        }
    }

    pub fn state(&self) -> &ReplayState {
        &self.state
    }

    /// Defensive copy for consumers; the live state never leaves the
    /// controller.
    pub fn snapshot(&self) -> ReplayState {
        self.state.clone()
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Awaits the next armed tick; pends while paused or stopped.
    pub async fn tick(&mut self) {
        self.clock.tick().await;
    }

    pub fn play(&mut self) {
        if self.state.is_complete {
            return;
        }
        self.state.is_playing = true;
        self.clock.arm(self.tick_delay());
    }

    pub fn pause(&mut self) {
        self.state.is_playing = false;
        self.clock.cancel();
    }

    pub fn stop(&mut self) {
        self.clock.cancel();
        self.state.is_playing = false;
        let _ = self.apply_position(0);
    }

    /// Moves to `target`, clamped to `[0, N]`. Playback keeps running
    /// across a seek: the pending tick is superseded and a fresh delay is
    /// armed, unless the seek landed on the end.
    pub fn seek(&mut self, target: i64) -> bool {
        let clamped = target.clamp(0, self.record.total_moves() as i64) as usize;
        self.clock.cancel();
        let completed = self.apply_position(clamped);
        if self.state.is_playing {
            self.clock.arm(self.tick_delay());
        }
        completed
    }

    pub fn step_forward(&mut self) -> bool {
        self.step(1)
    }

    pub fn step_back(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> bool {
        if self.options.step_pauses_playback {
            self.state.is_playing = false;
            self.clock.cancel();
        }
        self.seek(self.state.current_move as i64 + delta)
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.state.speed = speed;
        if self.state.is_playing {
            // Progress is untouched; only the delay of the next tick changes.
            self.clock.arm(self.tick_delay());
        }
    }

    /// Handles a clock fire. A fire observed while not playing is stale
    /// and ignored.
    pub fn advance_tick(&mut self) -> bool {
        if !self.state.is_playing {
            return false;
        }
        self.seek(self.state.current_move as i64 + 1)
    }

    fn tick_delay(&self) -> Duration {
        self.state
            .speed
            .delay(Duration::from_millis(self.options.base_delay_ms))
    }

    fn apply_position(&mut self, target: usize) -> bool {
        let was_complete = self.state.is_complete;
        let (board, last_move) = reconstruct(&self.record, target);
        let is_complete = target == self.record.total_moves();

        self.state.winning_line =
            winning_line_at(&self.record, &self.options, is_complete, &board, last_move);
        self.state.board = board;
        self.state.last_move = last_move;
        self.state.current_move = target;
        self.state.is_complete = is_complete;
        if is_complete {
            self.state.is_playing = false;
            self.clock.cancel();
        }

        is_complete && !was_complete
    }
}

fn winning_line_at(
    record: &GameRecord,
    options: &PlaybackOptions,
    at_end: bool,
    board: &Grid,
    last_move: Option<Move>,
) -> Option<WinningLine> {
    let last = last_move?;
    if options.line_only_at_end && !(at_end && record.has_decisive_winner()) {
        return None;
    }
    find_winning_line(board, Position::new(last.row, last.col))
}
