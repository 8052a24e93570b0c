use crate::game::Session;

/// Score of a round: one point per letter of every accepted word.
///
/// Recomputed from the used words each time; nothing is cached.
pub fn score(session: &Session) -> usize {
    session
        .used_words()
        .iter()
        .map(|word| word.chars().count())
        .sum()
}
