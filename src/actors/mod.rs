pub mod game_state;

// Re-export actor types for easier import
pub use game_state::{GameStateActor, GetScore, GetSession, NewRound, SubmitWord};
