mod clock;
mod controller;
mod options;
mod session;
mod speed;
mod state;

pub use clock::PlaybackClock;
pub use controller::PlaybackController;
pub use options::{BASE_DELAY_MS, PlaybackOptions};
pub use session::{ReplayEvent, ReplaySession, SessionCommand};
pub use speed::PlaybackSpeed;
pub use state::{PlaybackPhase, ReplayState};
