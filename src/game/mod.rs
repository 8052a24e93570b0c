pub mod session;
pub mod word_list;

pub use session::Session;
pub use word_list::WordList;

use rand::Rng;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::validation::{Language, SpellChecker, SubmissionValidator, ValidationOutcome};

/// Everything a round needs apart from the session itself: where root words
/// come from and how submissions are judged.
pub struct Game<C> {
    word_list: WordList,
    validator: SubmissionValidator<C>,
}

impl<C: SpellChecker> Game<C> {
    pub fn new(word_list: WordList, spell_checker: C, language: Language) -> Self {
        Self {
            word_list,
            validator: SubmissionValidator::new(spell_checker, language),
        }
    }

    /// Draw a new root word and start an empty round
    pub fn start_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Session {
        let session = Session::from_normalized(self.word_list.choose(rng).to_string());
        info!("New round with root word '{}'", session.root_word());
        session
    }

    pub fn submit(&self, candidate: &str, session: &mut Session) -> ValidationOutcome {
        self.validator.submit(candidate, session)
    }

    pub fn score(&self, session: &Session) -> usize {
        crate::scoring::score(session)
    }
}

/// Load the start words and open a round in one go
pub fn start_game_from_path<P, R>(path: P, rng: &mut R) -> Result<Session>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let word_list = WordList::load(path)?;
    Ok(Session::from_normalized(word_list.choose(rng).to_string()))
}
