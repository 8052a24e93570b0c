use miette::{Diagnostic, SourceSpan};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for the Word Scramble game
#[derive(Error, Debug, Diagnostic)]
pub enum ScrambleError {
    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(wordscramble::config_error))]
    Config(String),

    #[error("Word list error: {0}")]
    #[diagnostic(code(wordscramble::word_list_error))]
    WordList(#[from] WordListError),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(wordscramble::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Actor system error: {0}")]
    #[diagnostic(code(wordscramble::actor_error))]
    Actor(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(wordscramble::io_error))]
    Io(#[from] io::Error),
}

/// Start word list errors. Both are fatal: a round cannot begin without a root word.
#[derive(Error, Debug, Diagnostic)]
pub enum WordListError {
    #[error("Could not load start words from {}", path.display())]
    #[diagnostic(
        code(wordscramble::word_list::load_error),
        help("set WORD_LIST_PATH to a text file with one word per line")
    )]
    LoadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Start word list {} has no words", path.display())]
    #[diagnostic(code(wordscramble::word_list::empty))]
    EmptyWordList { path: PathBuf },
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(
        code(wordscramble::dictionary::load_error),
        help("set DICTIONARY_FILE_PATH to a text file with one word per line")
    )]
    LoadError(#[from] io::Error),

    #[error("Dictionary is empty")]
    #[diagnostic(code(wordscramble::dictionary::empty))]
    EmptyDictionary,
}

/// Why a submission was turned down, without the word attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    AlreadyUsed,
    NotRecognizedWord,
    LettersNotAvailable,
    TooShort,
    EqualsRootWord,
}

/// Recoverable rejections of a submitted word. The session is never touched
/// when one of these is returned.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Word has been used before: {0}")]
    #[diagnostic(code(wordscramble::validation::already_used))]
    AlreadyUsed(String),

    #[error("Word not found in dictionary: {0}")]
    #[diagnostic(code(wordscramble::validation::not_recognized))]
    NotRecognizedWord(String),

    #[error("Word cannot be spelled from the letters of '{root_word}'")]
    #[diagnostic(code(wordscramble::validation::letters_not_available))]
    LettersNotAvailable {
        #[source_code]
        word: String,

        #[label("not available in the root word")]
        span: SourceSpan,

        letter: char,
        root_word: String,
    },

    #[error("Word is too short: {0}")]
    #[diagnostic(code(wordscramble::validation::too_short))]
    TooShort(String),

    #[error("Word is the root word: {0}")]
    #[diagnostic(code(wordscramble::validation::equals_root_word))]
    EqualsRootWord(String),
}

impl ValidationError {
    pub fn reason(&self) -> RejectionReason {
        match self {
            Self::AlreadyUsed(_) => RejectionReason::AlreadyUsed,
            Self::NotRecognizedWord(_) => RejectionReason::NotRecognizedWord,
            Self::LettersNotAvailable { .. } => RejectionReason::LettersNotAvailable,
            Self::TooShort(_) => RejectionReason::TooShort,
            Self::EqualsRootWord(_) => RejectionReason::EqualsRootWord,
        }
    }

    /// The rejected word, as normalized by the validator
    pub fn word(&self) -> &str {
        match self {
            Self::AlreadyUsed(word)
            | Self::NotRecognizedWord(word)
            | Self::TooShort(word)
            | Self::EqualsRootWord(word) => word,
            Self::LettersNotAvailable { word, .. } => word,
        }
    }

    /// Short heading shown to the player
    pub fn title(&self) -> &'static str {
        match self.reason() {
            RejectionReason::AlreadyUsed => "Word used already",
            RejectionReason::NotRecognizedWord => "Word not recognized",
            RejectionReason::LettersNotAvailable => "Word not possible",
            RejectionReason::TooShort => "Word too short",
            RejectionReason::EqualsRootWord => "Word is root word",
        }
    }

    /// Longer explanation shown under the title
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed(_) => "Be more original.".to_string(),
            Self::NotRecognizedWord(_) => "You can't just make up words, you know.".to_string(),
            Self::LettersNotAvailable { root_word, .. } => {
                format!("You have to use the letters of '{}'.", root_word)
            }
            Self::TooShort(_) => "Words need at least three letters.".to_string(),
            Self::EqualsRootWord(_) => "Make up your own word.".to_string(),
        }
    }
}

// Re-export error types for convenience
pub use ScrambleError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
