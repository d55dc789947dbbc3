//! Message encoding.
//!
//! This module orchestrates the encoding process:
//! 1. Normalize the message and key phrase to uppercase letters
//! 2. Stretch the key phrase to the message length
//! 3. Shift each message letter forward by its key letter's alphabet index,
//!    wrapping past `Z` back into the alphabet

use crate::text::alphabet::{offset_of, rotate};
use crate::text::key::{stretch, KeyError};
use crate::text::normalize::normalize;

/// Result of encoding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    /// The normalized message that was ciphered.
    pub message: String,
    /// The normalized key phrase.
    pub key_phrase: String,
    /// The encoded text.
    pub translation: String,
}

/// Configuration for the encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// Encodes a message with a key phrase.
///
/// Both inputs are normalized first, so raw user text with spacing and
/// punctuation is accepted directly. A message that normalizes to nothing
/// produces an empty translation.
///
/// # Arguments
/// * `message` - The message to encode (arbitrary text)
/// * `key_phrase` - The phrase keying the cipher (must contain letters)
///
/// # Returns
/// An [`EncodedMessage`] carrying the normalized inputs and the translation.
pub fn encode(message: &str, key_phrase: &str) -> Result<EncodedMessage, KeyError> {
    encode_with_config(message, key_phrase, &EncoderConfig::default())
}

/// Encodes a message with custom configuration.
pub fn encode_with_config(
    message: &str,
    key_phrase: &str,
    config: &EncoderConfig,
) -> Result<EncodedMessage, KeyError> {
    let message = normalize(message);
    let key_phrase = normalize(key_phrase);

    if config.verbose {
        eprintln!(
            "Normalized message to {} letters, key phrase to {}",
            message.len(),
            key_phrase.len()
        );
    }

    let key = stretch(&message, &key_phrase)?;

    let translation = message
        .bytes()
        .zip(key.bytes())
        .map(|(m, k)| char::from(rotate(m, offset_of(k) as i8)))
        .collect();

    Ok(EncodedMessage {
        message,
        key_phrase,
        translation,
    })
}
