//! Message decoding.
//!
//! This module orchestrates the decoding process:
//! 1. Normalize the encoded text and key phrase to uppercase letters
//! 2. Stretch the key phrase to the text length
//! 3. Shift each letter back by its key letter's alphabet index, wrapping
//!    past `A` back into the alphabet
//!
//! Decoding is the exact inverse of encoding under the same key phrase.
//! Spacing and punctuation stripped by normalization at encode time are gone
//! for good, so the decoded message comes back as one unbroken run of
//! letters.

use crate::text::alphabet::{offset_of, rotate};
use crate::text::key::{stretch, KeyError};
use crate::text::normalize::normalize;

/// Result of decoding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// The normalized encoded text that was deciphered.
    pub message: String,
    /// The normalized key phrase.
    pub key_phrase: String,
    /// The decoded text.
    pub translation: String,
}

/// Configuration for the decoder.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// Decodes an encoded message with the key phrase it was encoded with.
///
/// Both inputs are normalized first. Decoding an empty (or letterless)
/// message is a no-op producing an empty translation.
///
/// # Arguments
/// * `message` - The encoded text
/// * `key_phrase` - The phrase the text was encoded with (must contain letters)
///
/// # Returns
/// A [`DecodedMessage`] carrying the normalized inputs and the translation.
pub fn decode(message: &str, key_phrase: &str) -> Result<DecodedMessage, KeyError> {
    decode_with_config(message, key_phrase, &DecoderConfig::default())
}

/// Decodes a message with custom configuration.
pub fn decode_with_config(
    message: &str,
    key_phrase: &str,
    config: &DecoderConfig,
) -> Result<DecodedMessage, KeyError> {
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
        .map(|(c, k)| char::from(rotate(c, -(offset_of(k) as i8))))
        .collect();

    Ok(DecodedMessage {
        message,
        key_phrase,
        translation,
    })
}
