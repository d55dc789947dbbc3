//! Text processing for the cipher.
//!
//! This module provides:
//! - Normalization to the 26-letter uppercase alphabet
//! - Alphabet index arithmetic shared by encoding and decoding
//! - Key stretching (cyclic repetition to message length)

pub mod alphabet;
pub mod key;
pub mod normalize;

pub use alphabet::{letter_at, offset_of, rotate, ALPHABET_LEN};
pub use key::{stretch, KeyError};
pub use normalize::normalize;
