use actix::Actor;
use tokio::io::{self, AsyncWriteExt};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordscramble::actors::{GameStateActor, GetScore};
use wordscramble::game::{Game, WordList};
use wordscramble::validation::DictionaryValidator;
use wordscramble::{config, terminal, Error};

#[actix_rt::main]
async fn main() -> miette::Result<()> {
    // Set up logging on stderr so the game itself owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordscramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Word Scramble");

    // Load configuration
    let config = config::load_config()?;

    // Both resources are required before the first round can start
    let word_list = WordList::load(&config.word_list_path).map_err(Error::from)?;
    let dictionary = DictionaryValidator::new(&config.dictionary_path, config.language.clone())?;

    let game = Game::new(word_list, dictionary, config.language.clone());
    let game_state = GameStateActor::new(game, config.seed).start();

    // stdin is read on a plain thread so Ctrl-C never waits on a blocked read
    let input = terminal::spawn_stdin_reader();
    let output = io::stdout();

    tokio::select! {
        result = terminal::run(game_state.clone(), input, output) => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal, stopping game");
        }
    }

    let score = game_state
        .send(GetScore)
        .await
        .map_err(|e| Error::Actor(e.to_string()))?;

    let mut stdout = io::stdout();
    stdout
        .write_all(format!("Final score: {}\n", score).as_bytes())
        .await
        .map_err(Error::from)?;
    stdout.flush().await.map_err(Error::from)?;

    Ok(())
}
