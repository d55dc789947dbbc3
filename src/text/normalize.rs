//! Input normalization.
//!
//! Every message and key phrase passes through [`normalize`] before
//! ciphering: characters outside the ASCII letter ranges are dropped and the
//! remainder is upper-cased, leaving only the 26-letter alphabet the cipher
//! operates on.

/// Normalizes raw input to uppercase ASCII letters.
///
/// Removes every character outside `a`-`z` / `A`-`Z` and upper-cases what is
/// left. Arbitrary Unicode is accepted; this never fails, and the result may
/// be empty.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
