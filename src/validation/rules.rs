use miette::SourceSpan;
use std::collections::HashMap;

use crate::error::ValidationError;

/// Shortest word the game accepts, in letters
pub const MIN_WORD_LENGTH: usize = 3;

/// The game rules that do not need a dictionary.
///
/// Every check expects an already normalized word (trimmed, lowercase) and
/// returns the rejection it stands for when the word breaks the rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesValidator;

impl RulesValidator {
    /// The word must not have been accepted before in this round
    pub fn check_original(&self, used_words: &[String], word: &str) -> Result<(), ValidationError> {
        if used_words.iter().any(|used| used == word) {
            return Err(ValidationError::AlreadyUsed(word.to_string()));
        }
        Ok(())
    }

    /// Every letter of the word must be taken from a distinct letter of the root word
    pub fn check_letters(&self, root_word: &str, word: &str) -> Result<(), ValidationError> {
        if let Some((offset, letter)) = find_unavailable_letter(root_word, word) {
            return Err(ValidationError::LettersNotAvailable {
                word: word.to_string(),
                span: SourceSpan::from((offset, letter.len_utf8())),
                letter,
                root_word: root_word.to_string(),
            });
        }
        Ok(())
    }

    pub fn check_length(&self, word: &str) -> Result<(), ValidationError> {
        if word.chars().count() < MIN_WORD_LENGTH {
            return Err(ValidationError::TooShort(word.to_string()));
        }
        Ok(())
    }

    pub fn check_not_root(&self, root_word: &str, word: &str) -> Result<(), ValidationError> {
        if word == root_word {
            return Err(ValidationError::EqualsRootWord(word.to_string()));
        }
        Ok(())
    }
}

/// Count how many of each letter the root word offers, then spend them on the
/// candidate from left to right. Returns the byte offset and letter of the
/// first letter that has run out, or None if the whole word can be spelled.
fn find_unavailable_letter(root_word: &str, word: &str) -> Option<(usize, char)> {
    let mut available: HashMap<char, usize> = HashMap::new();
    for letter in root_word.chars() {
        *available.entry(letter).or_insert(0) += 1;
    }

    for (offset, letter) in word.char_indices() {
        match available.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return Some((offset, letter)),
        }
    }

    None
}
