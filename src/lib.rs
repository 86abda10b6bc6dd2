pub mod game;
pub mod id_generator;
pub mod logger;
pub mod record;
pub mod replay;

pub use game::*;
pub use record::*;
pub use replay::*;
