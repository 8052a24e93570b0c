use std::fmt;

/// Language tag handed to the spell checker, e.g. `en`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers whether a word is a real word in a given language.
///
/// The game does not ship its own spelling engine; anything that can answer
/// this question can back the dictionary check.
pub trait SpellChecker {
    fn is_recognized(&self, word: &str, language: &Language) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &Language) -> bool,
{
    fn is_recognized(&self, word: &str, language: &Language) -> bool {
        self(word, language)
    }
}
