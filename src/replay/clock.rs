use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Single-deadline timer for auto-advance ticks.
///
/// At most one deadline is pending: `arm` replaces whatever was scheduled,
/// `cancel` clears it and is a no-op when nothing is pending. `tick()` is
/// meant to sit in the session loop's `select!`: it resolves once the
/// deadline passes and pends forever while unarmed. The deadline is
/// absolute, so a `tick()` future dropped by `select!` and recreated on the
/// next iteration keeps waiting for the same instant.
///
/// The clock lives on the same task as the state it drives; cancelling is
/// a plain field write, so no tick can fire after `cancel` returns.
#[derive(Debug, Default)]
pub struct PlaybackClock {
    deadline: Option<Instant>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn arm(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub async fn tick(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
