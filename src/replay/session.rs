use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::log;
use crate::record::GameRecord;

use super::controller::PlaybackController;
use super::options::PlaybackOptions;
use super::speed::PlaybackSpeed;
use super::state::ReplayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Play,
    Pause,
    Stop,
    Seek(i64),
    StepForward,
    StepBack,
    SetSpeed(PlaybackSpeed),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayEvent {
    Completed,
}

/// Binds one immutable `GameRecord` to one playback controller driven on
/// its own task. Control operations are fire-and-forget commands; they are
/// applied in arrival order, each to completion, on the same task that
/// handles clock ticks, so a command landing between two ticks always
/// supersedes the pending tick.
///
/// Consumers observe the replay through snapshots only. Dropping the
/// session aborts the driver task, which takes the clock and the mutable
/// state with it.
pub struct ReplaySession {
    record: Arc<GameRecord>,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    state_rx: watch::Receiver<ReplayState>,
    events_rx: Option<mpsc::UnboundedReceiver<ReplayEvent>>,
    task: JoinHandle<()>,
}

impl ReplaySession {
    /// Spawns the driver task. Must be called from within a tokio runtime.
    pub fn start(record: GameRecord, options: PlaybackOptions) -> Self {
        let record = Arc::new(record);
        let controller = PlaybackController::new(Arc::clone(&record), options);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(controller.snapshot());

        log!(
            "[replay] session {} started ({} moves)",
            record.id,
            record.total_moves()
        );
        let task = tokio::spawn(run_playback(controller, command_rx, state_tx, event_tx));

        Self {
            record,
            command_tx,
            state_rx,
            events_rx: Some(event_rx),
            task,
        }
    }

    pub fn play(&self) {
        self.send(SessionCommand::Play);
    }

    pub fn pause(&self) {
        self.send(SessionCommand::Pause);
    }

    pub fn stop(&self) {
        self.send(SessionCommand::Stop);
    }

    pub fn seek(&self, target: i64) {
        self.send(SessionCommand::Seek(target));
    }

    pub fn step_forward(&self) {
        self.send(SessionCommand::StepForward);
    }

    pub fn step_back(&self) {
        self.send(SessionCommand::StepBack);
    }

    pub fn jump_to_start(&self) {
        self.seek(0);
    }

    pub fn jump_to_end(&self) {
        self.seek(self.record.total_moves() as i64);
    }

    pub fn set_speed(&self, speed: PlaybackSpeed) {
        self.send(SessionCommand::SetSpeed(speed));
    }

    /// Latest snapshot, as a defensive copy. Polling this is read-only and
    /// never drives playback progress.
    pub fn state(&self) -> ReplayState {
        self.state_rx.borrow().clone()
    }

    /// Push-style snapshot stream for a rendering collaborator.
    pub fn subscribe(&self) -> watch::Receiver<ReplayState> {
        self.state_rx.clone()
    }

    /// The completion-event receiver; yields `ReplayEvent::Completed` once
    /// per completion transition. Can be taken once.
    pub fn take_events(&mut self) -> Option<mpsc::UnboundedReceiver<ReplayEvent>> {
        self.events_rx.take()
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn shutdown(self) {
        log!("[replay] session {} shut down", self.record.id);
        // Drop aborts the driver task.
    }

    fn send(&self, command: SessionCommand) {
        let _ = self.command_tx.send(command);
    }
}

impl Drop for ReplaySession {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_playback(
    mut controller: PlaybackController,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    state_tx: watch::Sender<ReplayState>,
    event_tx: mpsc::UnboundedSender<ReplayEvent>,
) {
    loop {
        tokio::select! {
            _ = controller.tick() => {
                let completed = controller.advance_tick();
                publish(&state_tx, &event_tx, &controller, completed);
            }
            cmd = command_rx.recv() => {
                let Some(cmd) = cmd else {
                    break;
                };
                let completed = apply_command(&mut controller, cmd);
                publish(&state_tx, &event_tx, &controller, completed);
            }
        }
    }
}

fn apply_command(controller: &mut PlaybackController, command: SessionCommand) -> bool {
    match command {
        SessionCommand::Play => {
            controller.play();
            false
        }
        SessionCommand::Pause => {
            controller.pause();
            false
        }
        SessionCommand::Stop => {
            controller.stop();
            false
        }
        SessionCommand::Seek(target) => controller.seek(target),
        SessionCommand::StepForward => controller.step_forward(),
        SessionCommand::StepBack => controller.step_back(),
        SessionCommand::SetSpeed(speed) => {
            controller.set_speed(speed);
            false
        }
    }
}

fn publish(
    state_tx: &watch::Sender<ReplayState>,
    event_tx: &mpsc::UnboundedSender<ReplayEvent>,
    controller: &PlaybackController,
    completed: bool,
) {
    let _ = state_tx.send(controller.snapshot());
    if completed {
        log!("[replay] session {} reached the end", controller.record().id);
        let _ = event_tx.send(ReplayEvent::Completed);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game::{Difficulty, Disc, GameStatus, Player, Winner};
    use crate::record::Move;
    use crate::replay::state::PlaybackPhase;

    fn create_test_record(move_count: usize) -> GameRecord {
        // Alternating drops in separate columns; no line forms.
        let moves = (0..move_count)
            .map(|i| Move {
                player: if i % 2 == 0 { Player::Human } else { Player::Ai },
                row: 5 - i / 7,
                col: i % 7,
                elapsed_ms: (i as u64 + 1) * 800,
            })
            .collect();
        GameRecord {
            id: format!("session-test-{}", move_count),
            moves,
            board_rows: 6,
            board_cols: 7,
            player_disc: Disc::Red,
            ai_disc: Disc::Yellow,
            difficulty: Difficulty::Medium,
            winner: Some(Winner::Draw),
            status: GameStatus::Completed,
            created_at_ms: 1700000000000,
            completed_at_ms: Some(1700000008000),
            total_duration_ms: 8000,
        }
    }

    async fn settle() {
        // Let the driver task drain pending commands.
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_snapshot_available_immediately() {
        let session = ReplaySession::start(create_test_record(4), PlaybackOptions::default());
        let state = session.state();

        assert_eq!(state.current_move, 0);
        assert_eq!(state.phase(), PlaybackPhase::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_advances_on_the_base_delay() {
        let session = ReplaySession::start(create_test_record(4), PlaybackOptions::default());
        session.play();

        tokio::time::sleep(Duration::from_millis(1050)).await;
        assert_eq!(session.state().current_move, 1);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(session.state().current_move, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_speed_halves_the_delay() {
        let session = ReplaySession::start(create_test_record(4), PlaybackOptions::default());
        session.set_speed(PlaybackSpeed::Double);
        session.play();

        tokio::time::sleep(Duration::from_millis(550)).await;
        assert_eq!(session.state().current_move, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_freezes_progress() {
        let session = ReplaySession::start(create_test_record(4), PlaybackOptions::default());
        session.play();
        tokio::time::sleep(Duration::from_millis(1050)).await;

        session.pause();
        settle().await;
        assert_eq!(session.state().phase(), PlaybackPhase::Paused);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(session.state().current_move, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_supersedes_pending_tick() {
        let session = ReplaySession::start(create_test_record(6), PlaybackOptions::default());
        session.play();

        // Land a seek just before the first tick would have fired.
        tokio::time::sleep(Duration::from_millis(900)).await;
        session.seek(4);
        settle().await;
        assert_eq!(session.state().current_move, 4);

        // The old tick was cancelled; the next advance is a full delay
        // after the seek.
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(session.state().current_move, 4);
        tokio::time::sleep(Duration::from_millis(800)).await;
        assert_eq!(session.state().current_move, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_completion_emits_event_once() {
        let mut session = ReplaySession::start(create_test_record(2), PlaybackOptions::default());
        let mut events = session.take_events().unwrap();
        session.play();

        tokio::time::sleep(Duration::from_millis(2100)).await;
        let state = session.state();
        assert!(state.is_complete);
        assert!(!state.is_playing);
        assert!(matches!(events.try_recv(), Ok(ReplayEvent::Completed)));
        assert!(events.try_recv().is_err());

        // Nothing further fires while already complete.
        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_to_end_emits_event() {
        let mut session = ReplaySession::start(create_test_record(5), PlaybackOptions::default());
        let mut events = session.take_events().unwrap();

        session.jump_to_end();
        settle().await;

        assert!(session.state().is_complete);
        assert!(matches!(events.try_recv(), Ok(ReplayEvent::Completed)));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_jump_to_start_rewinds() {
        let session = ReplaySession::start(create_test_record(5), PlaybackOptions::default());
        session.jump_to_end();
        session.jump_to_start();
        settle().await;

        let state = session.state();
        assert_eq!(state.current_move, 0);
        assert!(!state.is_complete);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_apply_in_arrival_order() {
        let session = ReplaySession::start(create_test_record(6), PlaybackOptions::default());
        session.seek(3);
        session.step_forward();
        session.step_back();
        session.step_back();
        settle().await;

        assert_eq!(session.state().current_move, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_sees_updates() {
        let session = ReplaySession::start(create_test_record(4), PlaybackOptions::default());
        let mut state_rx = session.subscribe();

        session.seek(2);
        state_rx.changed().await.unwrap();
        assert_eq!(state_rx.borrow().current_move, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sessions_over_one_record_are_independent() {
        let record = create_test_record(6);
        let first = ReplaySession::start(record.clone(), PlaybackOptions::default());
        let second = ReplaySession::start(record, PlaybackOptions::default());

        first.seek(5);
        settle().await;

        assert_eq!(first.state().current_move, 5);
        assert_eq!(second.state().current_move, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_the_driver() {
        let session = ReplaySession::start(create_test_record(4), PlaybackOptions::default());
        session.play();
        let state_rx = session.subscribe();

        drop(session);
        settle().await;

        // No further ticks mutate the last published snapshot.
        let frozen = state_rx.borrow().clone();
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(state_rx.borrow().current_move, frozen.current_move);
    }
}
