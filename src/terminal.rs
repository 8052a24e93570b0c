//! Line-oriented terminal front-end.
//!
//! Every line is either a command (`:new`, `:words`, `:score`, `:quit`) or a
//! word to submit. All game state lives in the [`GameStateActor`]; this module
//! only reads input and prints what happened.

use actix::Addr;
use std::io::{self, BufRead};
use std::thread;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::actors::{GameStateActor, GetScore, GetSession, NewRound, SubmitWord};
use crate::error::{Error, Result};
use crate::game::Session;
use crate::validation::ValidationOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    NewRound,
    Words,
    Score,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.strip_prefix(':') {
            Some(command) => match command.trim().to_lowercase().as_str() {
                "new" => Self::NewRound,
                "words" => Self::Words,
                "score" => Self::Score,
                "quit" | "q" => Self::Quit,
                other => Self::Unknown(other.to_string()),
            },
            None => Self::Submit(line.to_string()),
        }
    }
}

const HELP: &str = "Commands: :new (new word)  :words (your words)  :score  :quit";

/// Text shown after a submission, None when there is nothing to say
pub fn render_outcome(outcome: &ValidationOutcome, score: usize) -> Option<String> {
    match outcome {
        ValidationOutcome::Accepted(word) => Some(format!(
            "  + {} ({} letters)  Your score is {}",
            word,
            word.chars().count(),
            score
        )),
        ValidationOutcome::Rejected(e) => Some(format!("  {}: {}", e.title(), e.message())),
        ValidationOutcome::Ignored => None,
    }
}

pub fn render_words(session: &Session) -> String {
    if session.used_words().is_empty() {
        return "  No words yet".to_string();
    }

    session
        .used_words()
        .iter()
        .map(|word| format!("  {:>2}  {}", word.chars().count(), word))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_root_word(root_word: &str) -> String {
    format!("Your word is: {}", root_word.to_uppercase())
}

/// Read stdin on a detached thread and hand the lines over a channel.
/// The channel closes at end of input.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    let _reader_thread = thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            };

            if tx.blocking_send(line).is_err() {
                debug!("Input channel closed, stopping stdin reader");
                break;
            }
        }
    });

    rx
}

/// Play until `:quit` or the input channel closes. Returns the score of the last round.
pub async fn run<W>(
    game_state: Addr<GameStateActor>,
    mut input: mpsc::Receiver<String>,
    mut output: W,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let session = game_state
        .send(GetSession)
        .await
        .map_err(|e| Error::Actor(e.to_string()))?;

    write_line(&mut output, HELP).await?;
    write_line(&mut output, &render_root_word(session.root_word())).await?;

    while let Some(line) = input.recv().await {
        match Command::parse(&line) {
            Command::Submit(candidate) => {
                let outcome = game_state
                    .send(SubmitWord { candidate })
                    .await
                    .map_err(|e| Error::Actor(e.to_string()))?;

                if let ValidationOutcome::Rejected(e) = &outcome {
                    warn!("Rejected submission: {}", e);
                }

                let score = current_score(&game_state).await?;
                if let Some(text) = render_outcome(&outcome, score) {
                    write_line(&mut output, &text).await?;
                }
            }
            Command::NewRound => {
                let root_word = game_state
                    .send(NewRound)
                    .await
                    .map_err(|e| Error::Actor(e.to_string()))?;
                write_line(&mut output, &render_root_word(&root_word)).await?;
            }
            Command::Words => {
                let session = game_state
                    .send(GetSession)
                    .await
                    .map_err(|e| Error::Actor(e.to_string()))?;
                write_line(&mut output, &render_words(&session)).await?;
            }
            Command::Score => {
                let score = current_score(&game_state).await?;
                write_line(&mut output, &format!("  Your score is {}", score)).await?;
            }
            Command::Quit => break,
            Command::Unknown(command) => {
                write_line(&mut output, &format!("  Unknown command ':{}'", command)).await?;
                write_line(&mut output, HELP).await?;
            }
        }
    }

    let score = current_score(&game_state).await?;
    info!("Game over with score {}", score);
    Ok(score)
}

async fn current_score(game_state: &Addr<GameStateActor>) -> Result<usize> {
    game_state
        .send(GetScore)
        .await
        .map_err(|e| Error::Actor(e.to_string()))
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix::Actor;

    use crate::game::{Game, WordList};
    use crate::validation::{DictionaryValidator, Language};

    fn game_state() -> Addr<GameStateActor> {
        let word_list = WordList::from_words(["silkworm"]).unwrap();
        let dictionary = DictionaryValidator::from_words(
            ["silk", "worm", "milk", "owl", "silkworm"],
            Language::default(),
        )
        .unwrap();
        GameStateActor::new(Game::new(word_list, dictionary, Language::default()), Some(1)).start()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::parse(":new"), Command::NewRound);
        assert_eq!(Command::parse("  :Words "), Command::Words);
        assert_eq!(Command::parse(":score"), Command::Score);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":help"), Command::Unknown("help".to_string()));
        assert_eq!(Command::parse(" silk "), Command::Submit("silk".to_string()));
        assert_eq!(Command::parse(""), Command::Submit(String::new()));
    }

    #[test]
    fn test_render_words() {
        let session = Session::new("silkworm").unwrap();
        assert_eq!(render_words(&session), "  No words yet");
    }

    /// A closed channel preloaded with `lines`, like stdin at end of input
    fn input(lines: &[&str]) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(lines.len().max(1));
        for line in lines {
            tx.try_send(line.to_string()).unwrap();
        }
        rx
    }

    #[actix_rt::test]
    async fn test_run_plays_a_round() {
        let input = input(&["silk", "silk", "", "owl", "xz", ":words", ":quit", "milk"]);
        let mut output = Vec::new();

        let score = run(game_state(), input, &mut output).await.unwrap();
        let transcript = String::from_utf8(output).unwrap();

        // "milk" comes after :quit and is never submitted
        assert_eq!(score, 7);
        assert!(transcript.contains("Your word is: SILKWORM"));
        assert!(transcript.contains("+ silk (4 letters)  Your score is 4"));
        assert!(transcript.contains("Word used already: Be more original."));
        assert!(transcript.contains("Word not recognized"));
        assert!(transcript.contains("   3  owl\n   4  silk"));
        assert!(!transcript.contains("milk"));
    }

    #[actix_rt::test]
    async fn test_run_new_round() {
        let input = input(&["worm", ":new", ":score"]);
        let mut output = Vec::new();

        let score = run(game_state(), input, &mut output).await.unwrap();
        let transcript = String::from_utf8(output).unwrap();

        assert_eq!(score, 0);
        assert_eq!(transcript.matches("Your word is: SILKWORM").count(), 2);
        assert!(transcript.contains("  Your score is 0"));
    }

    #[actix_rt::test]
    async fn test_run_stops_when_input_closes() {
        let (tx, rx) = mpsc::channel(4);
        let handle = actix_rt::spawn(run(game_state(), rx, Vec::new()));

        tx.send("silk".to_string()).await.unwrap();
        drop(tx);

        let score = handle.await.unwrap().unwrap();
        assert_eq!(score, 4);
    }
}
