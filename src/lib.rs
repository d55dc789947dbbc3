//! # Ciphrase - phrase-keyed Vigenère cipher
//!
//! Ciphrase encodes and decodes short text messages using a polyalphabetic
//! substitution cipher keyed by a user-supplied phrase.
//!
//! ## Overview
//!
//! - Message and key phrase are **normalized** to the 26 uppercase ASCII
//!   letters (everything else is dropped)
//! - The key phrase is **stretched** by cyclic repetition until it covers
//!   every message position
//! - Each message letter is **shifted** by its key letter's alphabet index,
//!   modulo 26; decoding shifts back by the same amount
//!
//! Decoding is the exact inverse of encoding under the same key phrase.
//! Normalization is lossy: spacing, digits, and punctuation of the original
//! message are not recoverable from the encoded text.
//!
//! ## Example Usage
//!
//! ```rust
//! use ciphrase::{decode, encode};
//!
//! let encoded = encode("Attack at dawn!", "lemon").unwrap();
//! assert_eq!(encoded.translation, "LXFOPVEFRNHR");
//!
//! let decoded = decode(&encoded.translation, "lemon").unwrap();
//! assert_eq!(decoded.translation, "ATTACKATDAWN");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Normalization, alphabet arithmetic, and key stretching
//! - [`encoder`]: Message encoding
//! - [`decoder`]: Message decoding (exact inverse of encoding)

pub mod decoder;
pub mod encoder;
pub mod text;

// Re-export commonly used types at the crate root
pub use decoder::{decode, decode_with_config, DecodedMessage, DecoderConfig};
pub use encoder::{encode, encode_with_config, EncodedMessage, EncoderConfig};
pub use text::key::{stretch, KeyError};
pub use text::normalize::normalize;
