use tracing::debug;

use crate::error::ValidationError;
use crate::game::Session;
use crate::validation::rules::RulesValidator;
use crate::validation::spellcheck::{Language, SpellChecker};

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The normalized word was added to the front of the used words
    Accepted(String),
    /// The first rule the word broke
    Rejected(ValidationError),
    /// Blank input, nothing to check
    Ignored,
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Lowercase and trim a raw submission
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

/// Runs a submission through the game rules in a fixed order and records it
/// in the session when every rule passes.
pub struct SubmissionValidator<C> {
    spell_checker: C,
    language: Language,
    rules: RulesValidator,
}

impl<C: SpellChecker> SubmissionValidator<C> {
    pub fn new(spell_checker: C, language: Language) -> Self {
        Self {
            spell_checker,
            language,
            rules: RulesValidator,
        }
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Check a normalized word against the session without changing it.
    ///
    /// Order matters, the first failure is the one the player sees:
    /// 1. not used before
    /// 2. a real word
    /// 3. spelled from the root word's letters
    /// 4. at least three letters
    /// 5. not the root word itself
    pub fn validate(&self, word: &str, session: &Session) -> Result<(), ValidationError> {
        self.rules.check_original(session.used_words(), word)?;

        if !self.spell_checker.is_recognized(word, &self.language) {
            return Err(ValidationError::NotRecognizedWord(word.to_string()));
        }

        self.rules.check_letters(session.root_word(), word)?;
        self.rules.check_length(word)?;
        self.rules.check_not_root(session.root_word(), word)?;

        Ok(())
    }

    /// Normalize, validate and, if valid, record a submission
    pub fn submit(&self, candidate: &str, session: &mut Session) -> ValidationOutcome {
        let word = normalize(candidate);

        if word.is_empty() {
            debug!("Ignoring blank submission");
            return ValidationOutcome::Ignored;
        }

        match self.validate(&word, session) {
            Ok(()) => {
                debug!("Accepted '{}' for root word '{}'", word, session.root_word());
                session.accept(word.clone());
                ValidationOutcome::Accepted(word)
            }
            Err(e) => {
                debug!("Rejected '{}': {}", word, e);
                ValidationOutcome::Rejected(e)
            }
        }
    }
}
