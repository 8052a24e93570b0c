use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::error::{Error, Result};
use crate::validation::Language;

#[derive(Debug)]
pub struct Config {
    pub word_list_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub language: Language,
    pub seed: Option<u64>,
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    Ok(config_from_lookup(|key| env::var(key).ok())?)
}

/// Build the config from any key lookup; unset keys fall back to defaults
pub fn config_from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let word_list_path = lookup("WORD_LIST_PATH").unwrap_or_else(|| "./data/start.txt".to_string());

    let dictionary_path = lookup("DICTIONARY_FILE_PATH")
        .unwrap_or_else(|| "./data/english_words.txt".to_string());

    let language = lookup("GAME_LANGUAGE").unwrap_or_else(|| "en".to_string());

    let seed = match lookup("GAME_SEED") {
        Some(value) => Some(
            value
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("Invalid GAME_SEED '{}': {}", value, e)))?,
        ),
        None => None,
    };

    Ok(Config {
        word_list_path: PathBuf::from(word_list_path),
        dictionary_path: PathBuf::from(dictionary_path),
        language: Language::new(&language),
        seed,
    })
}
