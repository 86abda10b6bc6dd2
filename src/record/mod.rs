mod game_record;
mod recorder;

pub use game_record::{GameRecord, Move};
pub use recorder::GameRecorder;
