use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;

use crate::error::{DictionaryError, Result};
use crate::validation::spellcheck::{Language, SpellChecker};

/// Word-per-line dictionary for a single language
pub struct DictionaryValidator {
    words: HashSet<String>,
    language: Language,
}

impl DictionaryValidator {
    pub fn new<P: AsRef<Path>>(dictionary_path: P, language: Language) -> Result<Self> {
        let dictionary_path = dictionary_path.as_ref();

        info!(
            "Loading {} dictionary from {}",
            language,
            dictionary_path.display()
        );

        let file = File::open(dictionary_path).map_err(DictionaryError::LoadError)?;

        let reader = io::BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.map_err(DictionaryError::LoadError)?);
        }

        let validator = Self::from_words(lines, language)?;
        info!("Loaded {} words from dictionary", validator.len());

        Ok(validator)
    }

    pub fn from_words<I, S>(words: I, language: Language) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::EmptyDictionary.into());
        }

        Ok(Self { words, language })
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.contains(&word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for DictionaryValidator {
    fn is_recognized(&self, word: &str, language: &Language) -> bool {
        language == &self.language && self.is_valid_word(word)
    }
}
