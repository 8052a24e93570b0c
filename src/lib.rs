pub mod actors;
pub mod config;
pub mod error;
pub mod game;
pub mod scoring;
pub mod terminal;
pub mod validation;

// Re-export error types for convenience
pub use error::{
    DictionaryError, Error, RejectionReason, Result, ValidationError, WordListError,
};

// The game's public surface
pub use game::{start_game_from_path, Game, Session, WordList};
pub use scoring::score;
pub use validation::{Language, SpellChecker, ValidationOutcome};
