pub mod dictionary;
pub mod rules;
pub mod spellcheck;
pub mod submission;

// Re-export common types
pub use dictionary::DictionaryValidator;
pub use rules::RulesValidator;
pub use spellcheck::{Language, SpellChecker};
pub use submission::{normalize, SubmissionValidator, ValidationOutcome};
