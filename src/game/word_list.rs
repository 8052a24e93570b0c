//! Start words a round's root word is drawn from.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::WordListError;

#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load start words from a file, one per line.
    ///
    /// Lines are trimmed and lowercased and blank lines are skipped, so a
    /// trailing newline never turns into an empty root word.
    ///
    /// # Errors
    ///
    /// `LoadError` if the file cannot be read, `EmptyWordList` if it holds no words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        info!("Loading start words from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| WordListError::LoadError {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_words(content.lines()).ok_or_else(|| {
            WordListError::EmptyWordList {
                path: path.to_path_buf(),
            }
        })?;

        info!("Loaded {} start words", list.len());
        Ok(list)
    }

    /// Build a list from in-memory words. Returns None when nothing usable remains.
    pub fn from_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Pick one word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // The list is never empty, see `from_words`
        self.words
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_skips_blank_lines() -> std::io::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "Silkworm\n\n  balloon \nteacher\n")?;

        let list = WordList::load(file.path()).unwrap();

        assert_eq!(list.words(), ["silkworm", "balloon", "teacher"]);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordList::load("./does/not/exist.txt");

        match result {
            Err(WordListError::LoadError { path, .. }) => {
                assert_eq!(path, PathBuf::from("./does/not/exist.txt"));
            }
            _ => panic!("Expected LoadError"),
        }
    }

    #[test]
    fn test_load_empty_file() -> std::io::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "   ")?;

        let result = WordList::load(file.path());
        assert!(matches!(result, Err(WordListError::EmptyWordList { .. })));
        Ok(())
    }

    #[test]
    fn test_choose_covers_every_word() {
        let list = WordList::from_words(["silkworm", "balloon", "teacher"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let picked: HashSet<&str> = (0..200).map(|_| list.choose(&mut rng)).collect();

        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_choose_is_reproducible_with_seed() {
        let list = WordList::from_words(["silkworm", "balloon", "teacher", "kitchen"]).unwrap();

        let first: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| list.choose(&mut rng)).collect()
        };
        let second: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| list.choose(&mut rng)).collect()
        };

        assert_eq!(first, second);
    }
}
