//! Key phrase stretching.
//!
//! A key phrase shorter than the message is repeated cyclically until it
//! covers every message position, pairing each message letter with the key
//! letter that drives its shift.

use thiserror::Error;

/// Errors that can occur while preparing the cipher key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key phrase contains no letters, so there is nothing to cycle.
    #[error("key phrase contains no letters")]
    EmptyKeyPhrase,
}

/// Stretches a key phrase to the length of the message.
///
/// Cycles through the key phrase's letters in order, wrapping to the start
/// whenever the phrase is exhausted, so that
/// `stretched[i] == key_phrase[i % key_phrase.len()]`.
///
/// Both arguments are expected to be normalized already. An empty message
/// yields an empty stretched key; an empty key phrase is rejected before the
/// zero-length cycle is attempted.
pub fn stretch(message: &str, key_phrase: &str) -> Result<String, KeyError> {
    if key_phrase.is_empty() {
        return Err(KeyError::EmptyKeyPhrase);
    }

    Ok(key_phrase
        .bytes()
        .cycle()
        .take(message.len())
        .map(char::from)
        .collect())
}
