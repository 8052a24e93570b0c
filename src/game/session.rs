/// One round of the game: the root word and the words accepted so far.
///
/// Only [`SubmissionValidator`](crate::validation::SubmissionValidator) adds
/// words, so every entry is distinct, lowercase, at least three letters long,
/// spelled from the root word's letters and different from the root word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    /// Most recent first
    used_words: Vec<String>,
}

impl Session {
    /// Open a round for `root_word`. Returns None when the word is blank.
    pub fn new(root_word: &str) -> Option<Self> {
        let root_word = root_word.trim().to_lowercase();
        if root_word.is_empty() {
            return None;
        }
        Some(Self::from_normalized(root_word))
    }

    /// Entries of a [`WordList`](crate::game::WordList) are already trimmed,
    /// lowercase and non-empty.
    pub(crate) fn from_normalized(root_word: String) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> usize {
        crate::scoring::score(self)
    }

    pub(crate) fn accept(&mut self, word: String) {
        self.used_words.insert(0, word);
    }
}
