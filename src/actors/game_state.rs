use actix::{Actor, Context, Handler, Message, MessageResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::game::{Game, Session};
use crate::validation::{DictionaryValidator, ValidationOutcome};

/// Message to submit a word for the current round
#[derive(Message)]
#[rtype(result = "ValidationOutcome")]
pub struct SubmitWord {
    pub candidate: String,
}

/// Message to start a new round; returns the new root word
#[derive(Message)]
#[rtype(result = "String")]
pub struct NewRound;

/// Message to get the current score
#[derive(Message)]
#[rtype(result = "usize")]
pub struct GetScore;

/// Message to get a snapshot of the current session
#[derive(Message)]
#[rtype(result = "Session")]
pub struct GetSession;

/// Actor that owns the session. Messages are handled one at a time, so a
/// submission always sees the result of the one before it.
pub struct GameStateActor {
    game: Game<DictionaryValidator>,
    session: Session,
    rng: StdRng,
}

impl GameStateActor {
    /// Starts the first round immediately. A fixed seed makes the sequence of
    /// root words reproducible.
    pub fn new(game: Game<DictionaryValidator>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = game.start_game(&mut rng);

        Self { game, session, rng }
    }
}

impl Actor for GameStateActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        info!("GameStateActor started");
    }
}

impl Handler<SubmitWord> for GameStateActor {
    type Result = MessageResult<SubmitWord>;

    fn handle(&mut self, msg: SubmitWord, _ctx: &mut Context<Self>) -> Self::Result {
        let outcome = self.game.submit(&msg.candidate, &mut self.session);

        if let ValidationOutcome::Accepted(word) = &outcome {
            info!(
                "Accepted '{}', score is now {}",
                word,
                self.game.score(&self.session)
            );
        }

        MessageResult(outcome)
    }
}

impl Handler<NewRound> for GameStateActor {
    type Result = String;

    fn handle(&mut self, _msg: NewRound, _ctx: &mut Context<Self>) -> Self::Result {
        self.session = self.game.start_game(&mut self.rng);
        self.session.root_word().to_string()
    }
}

impl Handler<GetScore> for GameStateActor {
    type Result = usize;

    fn handle(&mut self, _msg: GetScore, _ctx: &mut Context<Self>) -> Self::Result {
        self.game.score(&self.session)
    }
}

impl Handler<GetSession> for GameStateActor {
    type Result = MessageResult<GetSession>;

    fn handle(&mut self, _msg: GetSession, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectionReason;
    use crate::game::WordList;
    use crate::validation::Language;

    fn actor() -> GameStateActor {
        let word_list = WordList::from_words(["silkworm"]).unwrap();
        let dictionary = DictionaryValidator::from_words(
            ["silk", "worm", "milk", "silkworm"],
            Language::default(),
        )
        .unwrap();
        GameStateActor::new(Game::new(word_list, dictionary, Language::default()), Some(9))
    }

    #[actix_rt::test]
    async fn test_submissions_update_session() {
        let addr = actor().start();

        let outcome = addr
            .send(SubmitWord {
                candidate: "Silk".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::Accepted("silk".to_string()));

        let outcome = addr
            .send(SubmitWord {
                candidate: "silk".to_string(),
            })
            .await
            .unwrap();
        match outcome {
            ValidationOutcome::Rejected(e) => assert_eq!(e.reason(), RejectionReason::AlreadyUsed),
            _ => panic!("Expected AlreadyUsed rejection"),
        }

        addr.send(SubmitWord {
            candidate: "worm".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(addr.send(GetScore).await.unwrap(), 8);

        let session = addr.send(GetSession).await.unwrap();
        assert_eq!(session.root_word(), "silkworm");
        assert_eq!(session.used_words(), ["worm", "silk"]);
    }

    #[actix_rt::test]
    async fn test_new_round_resets_used_words() {
        let addr = actor().start();

        addr.send(SubmitWord {
            candidate: "milk".to_string(),
        })
        .await
        .unwrap();
        assert_eq!(addr.send(GetScore).await.unwrap(), 4);

        let root_word = addr.send(NewRound).await.unwrap();
        assert_eq!(root_word, "silkworm");
        assert_eq!(addr.send(GetScore).await.unwrap(), 0);
        assert!(addr.send(GetSession).await.unwrap().used_words().is_empty());
    }
}
